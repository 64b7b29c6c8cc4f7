use std::sync::Arc;

use skillswap_db::store::Store;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The store is
/// constructed once at startup and injected here; handlers never reach for
/// a global.
#[derive(Clone)]
pub struct AppState {
    /// Persistence backend selected by `STORE_BACKEND`.
    pub store: Arc<dyn Store>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

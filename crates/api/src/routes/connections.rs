//! Route definitions for connections.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::connections;
use crate::state::AppState;

/// Connection routes mounted at `/connections`.
///
/// ```text
/// POST   /          -> create_connection
/// GET    /status    -> get_connection_status
/// PATCH  /{id}      -> update_connection_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(connections::create_connection))
        .route("/status", get(connections::get_connection_status))
        .route("/{id}", patch(connections::update_connection_status))
}

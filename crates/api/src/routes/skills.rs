//! Route definitions for skills.

use axum::routing::get;
use axum::Router;

use crate::handlers::{connections, skills};
use crate::state::AppState;

/// Skill routes mounted at `/skills`.
///
/// ```text
/// GET    /                    -> list_skills
/// POST   /                    -> create_skill
/// GET    /{id}/connections    -> list_outgoing_connections
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(skills::list_skills).post(skills::create_skill))
        .route(
            "/{id}/connections",
            get(connections::list_outgoing_connections),
        )
}

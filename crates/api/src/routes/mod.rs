pub mod connections;
pub mod health;
pub mod skills;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /skills                                          list, create
/// /skills/{id}/connections                         outgoing connections of a skill
///
/// /connections                                     create
/// /connections/status?fromSkillId=&toSkillId=      connection for an ordered pair
/// /connections/{id}                                decide (PATCH)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/skills", skills::router())
        .nest("/connections", connections::router())
}

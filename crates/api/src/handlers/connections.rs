//! Handlers for connection requests between skills.
//!
//! A connection is created `pending` and decided once through
//! `PATCH /api/connections/{id}`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use skillswap_core::connection::{Decision, NewConnection};
use skillswap_core::types::DbId;
use skillswap_db::models::connection::Connection;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath, AppQuery};
use crate::state::AppState;

/// Query parameters for `GET /api/connections/status`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionPairParams {
    pub from_skill_id: Option<DbId>,
    pub to_skill_id: Option<DbId>,
}

/// Response body for `GET /api/connections/status`.
#[derive(Debug, Serialize)]
pub struct ConnectionStatusResponse {
    pub connection: Option<Connection>,
}

/// POST /api/connections
pub async fn create_connection(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> AppResult<impl IntoResponse> {
    let input = NewConnection::from_json(&body)?;
    let connection = state.store.create_connection(&input).await?;

    tracing::info!(
        connection_id = connection.id,
        from_skill_id = connection.from_skill_id,
        to_skill_id = connection.to_skill_id,
        "Connection requested",
    );

    Ok((StatusCode::CREATED, Json(connection)))
}

/// GET /api/connections/status?fromSkillId=&toSkillId=
///
/// Looks up the ordered pair only; a connection from `toSkillId` to
/// `fromSkillId` is not returned. `connection` is `null` when none exists.
pub async fn get_connection_status(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ConnectionPairParams>,
) -> AppResult<impl IntoResponse> {
    let (Some(from_skill_id), Some(to_skill_id)) = (params.from_skill_id, params.to_skill_id)
    else {
        return Err(AppError::BadRequest(
            "fromSkillId and toSkillId are required".into(),
        ));
    };

    let connection = state
        .store
        .find_connection(from_skill_id, to_skill_id)
        .await?;

    Ok(Json(ConnectionStatusResponse { connection }))
}

/// PATCH /api/connections/{id}
///
/// Accept or reject a pending connection. Deciding twice is a 409.
pub async fn update_connection_status(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(body): AppJson<Value>,
) -> AppResult<impl IntoResponse> {
    let decision = Decision::from_json(&body)?;
    let connection = state.store.update_connection_status(id, decision).await?;

    tracing::info!(connection_id = id, status = %connection.status, "Connection decided");

    Ok(Json(connection))
}

/// GET /api/skills/{id}/connections
///
/// Connections sent by the skill. Incoming requests are not included.
pub async fn list_outgoing_connections(
    State(state): State<AppState>,
    AppPath(skill_id): AppPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let connections = state.store.list_outgoing_connections(skill_id).await?;

    Ok(Json(connections))
}

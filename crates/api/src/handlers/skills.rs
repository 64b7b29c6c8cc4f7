//! Handlers for skills.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value;
use skillswap_core::skill::NewSkill;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /api/skills
///
/// Every skill, oldest first.
pub async fn list_skills(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let skills = state.store.list_skills().await?;

    Ok(Json(skills))
}

/// POST /api/skills
pub async fn create_skill(
    State(state): State<AppState>,
    AppJson(body): AppJson<Value>,
) -> AppResult<impl IntoResponse> {
    let input = NewSkill::from_json(&body)?;
    let skill = state.store.create_skill(&input).await?;

    tracing::info!(skill_id = skill.id, "Skill created");

    Ok((StatusCode::CREATED, Json(skill)))
}

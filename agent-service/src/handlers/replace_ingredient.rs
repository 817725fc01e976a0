use axum::{extract::State, Json};
use validator::Validate;

use super::AgentRequest;
use crate::agents;
use crate::models::AlternativesReply;
use crate::startup::AppState;
use service_core::error::AppError;

#[tracing::instrument(skip(state, request))]
pub async fn replace_ingredient(
    State(state): State<AppState>,
    Json(request): Json<AgentRequest>,
) -> Result<Json<AlternativesReply>, AppError> {
    request.validate()?;

    let reply: AlternativesReply = state
        .extraction
        .run(&agents::ALTERNATIVE_FINDER, &request.text)
        .await?;

    Ok(Json(reply))
}

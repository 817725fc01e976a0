use axum::{extract::State, Json};
use validator::Validate;

use super::AgentRequest;
use crate::agents;
use crate::models::CalorieEstimate;
use crate::startup::AppState;
use service_core::error::AppError;

#[tracing::instrument(skip(state, request))]
pub async fn calculate_calory(
    State(state): State<AppState>,
    Json(request): Json<AgentRequest>,
) -> Result<Json<CalorieEstimate>, AppError> {
    request.validate()?;

    let estimate: CalorieEstimate = state
        .extraction
        .run(&agents::CALORY_CALCULATOR, &request.text)
        .await?;

    Ok(Json(estimate))
}

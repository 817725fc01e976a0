use axum::{extract::State, Json};
use serde::Serialize;
use validator::Validate;

use super::AgentRequest;
use crate::agents;
use crate::models::SearchQuery;
use crate::startup::AppState;
use service_core::error::AppError;

#[derive(Debug, Serialize)]
pub struct SmartSearchResponse {
    pub parsed_query: SearchQuery,
    pub results: serde_json::Value,
}

#[tracing::instrument(skip(state, request))]
pub async fn smart_search(
    State(state): State<AppState>,
    Json(request): Json<AgentRequest>,
) -> Result<Json<SmartSearchResponse>, AppError> {
    request.validate()?;

    let parsed_query: SearchQuery = state
        .extraction
        .run(&agents::SMART_SEARCH, &request.text)
        .await?;

    // Strictly sequential: the search call is never issued when extraction
    // fails, and there is no parallel fan-out.
    let results = state.search.search(&parsed_query).await?;

    Ok(Json(SmartSearchResponse {
        parsed_query,
        results,
    }))
}

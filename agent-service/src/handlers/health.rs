use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

/// Liveness probe for Docker/K8s. The service holds no stateful dependencies
/// worth probing; outbound collaborators are checked per-request.
pub async fn health_check() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "agent-service",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

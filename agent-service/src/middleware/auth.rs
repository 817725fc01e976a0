use service_core::{
    axum::{
        extract::{Request, State},
        http::header,
        middleware::Next,
        response::Response,
    },
    error::AppError,
};
use subtle::ConstantTimeEq;

use crate::startup::AppState;

/// Bearer gate for the agent endpoints. A single process-wide shared secret
/// covers all callers; there is no per-user identity and no rate limiting.
/// Rejections happen here, before any LLM call is attempted.
pub async fn require_bearer(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let token = match token {
        Some(token) => token,
        None => {
            return Err(AppError::AuthError(anyhow::anyhow!(
                "Missing bearer token"
            )));
        }
    };

    let expected = state.config.auth.access_token.as_bytes();
    let token_matches: bool = token.as_bytes().ct_eq(expected).into();
    if !token_matches {
        return Err(AppError::AuthError(anyhow::anyhow!("Invalid token")));
    }

    Ok(next.run(req).await)
}

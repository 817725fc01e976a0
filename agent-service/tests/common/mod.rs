//! Shared helpers for the agent-service integration tests.

#![allow(dead_code)]

use agent_service::config::{AgentConfig, AuthConfig, GoogleConfig, ModelConfig, SearchConfig};
use agent_service::services::providers::mock::MockTextProvider;
use agent_service::services::{ExtractionService, SearchClient};
use agent_service::startup::AppState;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;

pub const TEST_AGENT_TOKEN: &str = "agent-test-token";
pub const TEST_SEARCH_TOKEN: &str = "search-test-token";

/// Build an `AppState` backed by the scripted mock provider and a short
/// downstream timeout so timeout tests stay fast.
pub fn test_state(provider: Arc<MockTextProvider>, search_url: &str) -> AppState {
    AppState {
        config: AgentConfig {
            common: CoreConfig { port: 0 },
            auth: AuthConfig {
                access_token: TEST_AGENT_TOKEN.to_string(),
            },
            models: ModelConfig {
                text_model: "gemini-2.5-flash".to_string(),
                timeout_secs: 5,
            },
            google: GoogleConfig {
                api_key: "test-api-key".to_string(),
            },
            search: SearchConfig {
                url: search_url.to_string(),
                access_token: TEST_SEARCH_TOKEN.to_string(),
                timeout_secs: 1,
            },
        },
        extraction: ExtractionService::new(provider),
        search: SearchClient::new(search_url, TEST_SEARCH_TOKEN, Duration::from_secs(1)),
    }
}

pub fn post_json(uri: &str, token: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json");

    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    builder.body(Body::from(body.to_owned())).unwrap()
}

pub async fn read_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&bytes).expect("Response body is not valid JSON")
}

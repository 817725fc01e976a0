//! Generic invoke-agent-then-parse pipeline.
//!
//! All three endpoints share one path: render the agent's prompt, call the
//! provider at temperature 0, parse the reply as JSON, and validate it
//! against the agent's output schema. Any failure along the way surfaces to
//! the caller as a client error; nothing is retried.

use crate::agents::AgentPrompt;
use crate::services::providers::{GenerationParams, ProviderError, TextProvider};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use std::sync::Arc;
use thiserror::Error;
use validator::Validate;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error("model returned no text")]
    EmptyResponse,

    #[error("model returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("model output failed schema validation: {0}")]
    SchemaViolation(#[from] validator::ValidationErrors),
}

impl From<ExtractionError> for AppError {
    fn from(err: ExtractionError) -> Self {
        AppError::BadRequest(anyhow::anyhow!("LLM failed: {}", err))
    }
}

#[derive(Clone)]
pub struct ExtractionService {
    provider: Arc<dyn TextProvider>,
}

impl ExtractionService {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Run one agent over the raw user text and parse its reply into `T`.
    pub async fn run<T>(&self, agent: &AgentPrompt, text: &str) -> Result<T, ExtractionError>
    where
        T: DeserializeOwned + Validate,
    {
        let params = GenerationParams {
            temperature: Some(0.0),
            json_output: true,
            ..Default::default()
        };

        let user_message = agent.render_user(text);
        let response = self
            .provider
            .generate(agent.system, &user_message, &params)
            .await?;

        tracing::debug!(
            agent = agent.name,
            input_tokens = response.input_tokens,
            output_tokens = response.output_tokens,
            "Agent call completed"
        );

        let raw = response.text.ok_or(ExtractionError::EmptyResponse)?;
        let value: T = serde_json::from_str(strip_code_fences(&raw))?;
        value.validate()?;

        Ok(value)
    }
}

/// Models sometimes wrap JSON replies in a markdown code fence despite being
/// told not to. Unfence before parsing.
fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

//! LLM provider abstraction.
//!
//! A trait-based seam between the extraction pipeline and the concrete
//! backend (Gemini in production, a scripted mock in tests).

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a provider call.
pub struct ProviderResponse {
    /// Raw text content, expected to be a JSON document.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,
}

/// Generation parameters for LLM requests.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Sampling temperature (0.0 = deterministic).
    pub temperature: Option<f32>,

    /// Top-p sampling.
    pub top_p: Option<f32>,

    /// Maximum output tokens.
    pub max_tokens: Option<i32>,

    /// Ask the provider for a JSON-typed response body.
    pub json_output: bool,
}

/// Trait for text/JSON generation providers.
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a response for a system prompt plus one user message.
    async fn generate(
        &self,
        system_prompt: &str,
        user_message: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;
}

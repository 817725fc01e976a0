//! Scripted mock provider for testing.

use super::{GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Mock text provider that replays a queued script of responses and records
/// how many times it was called.
#[derive(Default)]
pub struct MockTextProvider {
    script: Mutex<VecDeque<Result<String, ProviderError>>>,
    calls: AtomicUsize,
}

impl MockTextProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful text response.
    pub fn push_text(&self, text: impl Into<String>) {
        self.script.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Queue a provider failure.
    pub fn push_error(&self, error: ProviderError) {
        self.script.lock().unwrap().push_back(Err(error));
    }

    /// Number of generate calls made against this mock.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        _system_prompt: &str,
        user_message: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Ok(text)) => Ok(ProviderResponse {
                text: Some(text),
                input_tokens: user_message.len() as i32 / 4,
                output_tokens: 10,
            }),
            Some(Err(e)) => Err(e),
            None => Err(ProviderError::NotConfigured(
                "Mock script exhausted".to_string(),
            )),
        }
    }
}

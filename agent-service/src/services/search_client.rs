//! Client for the downstream vector-search service.

use crate::models::SearchQuery;
use reqwest::Client;
use service_core::error::AppError;
use std::time::Duration;

/// Posts validated search queries to the search backend. The response payload
/// is treated as opaque JSON and relayed to the caller untouched.
#[derive(Clone)]
pub struct SearchClient {
    client: Client,
    url: String,
    access_token: String,
}

impl SearchClient {
    pub fn new(url: &str, access_token: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            url: url.to_string(),
            access_token: access_token.to_string(),
        }
    }

    /// Issue the search request. Network failures, timeouts, and non-success
    /// statuses all surface as gateway errors; there is no retry.
    pub async fn search(&self, query: &SearchQuery) -> Result<serde_json::Value, AppError> {
        tracing::debug!(url = %self.url, limit = query.limit, "Forwarding query to search service");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.access_token)
            .header(reqwest::header::ACCEPT, "*/*")
            .json(query)
            .send()
            .await
            .map_err(|e| AppError::BadGateway(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::BadGateway(format!(
                "search service returned {}: {}",
                status, body
            )));
        }

        response.json().await.map_err(|e| {
            AppError::BadGateway(format!("search service returned invalid JSON: {}", e))
        })
    }
}

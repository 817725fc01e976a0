//! Application startup and lifecycle management.

use crate::config::AgentConfig;
use crate::handlers::{calculate_calory, health_check, replace_ingredient, smart_search};
use crate::middleware::require_bearer;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::{ExtractionService, SearchClient};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state. Configuration is read once at startup and never
/// mutated afterwards; everything else is a clone-cheap handle.
#[derive(Clone)]
pub struct AppState {
    pub config: AgentConfig,
    pub extraction: ExtractionService,
    pub search: SearchClient,
}

/// Build the HTTP router. The three agent routes sit behind the bearer gate;
/// the health probe stays open.
pub fn build_router(state: AppState) -> Router {
    let agent_routes = Router::new()
        .route("/smart-search", post(smart_search))
        .route("/replace-ingredient", post(replace_ingredient))
        .route("/calculate-calory", post(calculate_calory))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_bearer,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(agent_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    listener: TcpListener,
    state: AppState,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: AgentConfig) -> Result<Self, AppError> {
        let gemini_config = GeminiConfig {
            api_key: config.google.api_key.clone(),
            model: config.models.text_model.clone(),
            timeout: Duration::from_secs(config.models.timeout_secs),
        };
        let provider: Arc<dyn TextProvider> = Arc::new(GeminiTextProvider::new(gemini_config));

        tracing::info!(
            model = %config.models.text_model,
            "Initialized Gemini text provider"
        );

        let extraction = ExtractionService::new(provider);
        let search = SearchClient::new(
            &config.search.url,
            &config.search.access_token,
            Duration::from_secs(config.search.timeout_secs),
        );
        tracing::info!(
            endpoint = %config.search.url,
            "Initialized search client"
        );

        let state = AppState {
            config: config.clone(),
            extraction,
            search,
        };

        // Bind HTTP listener (port 0 = random port for testing)
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Agent service listening on port {}", port);

        Ok(Self {
            port,
            listener,
            state,
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        let router = build_router(self.state);
        axum::serve(self.listener, router).await
    }
}

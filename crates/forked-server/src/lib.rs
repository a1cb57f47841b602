//! Forked Server
//!
//! The `/generate` HTTP service: accepts a submission, prompts the
//! configured text-generation provider, and returns the raw narrative
//! envelope consumed by the CLI.

#![warn(missing_docs)]

pub mod config;
pub mod demo;
pub mod handlers;

use config::{ProviderKind, ServerConfig};
use forked_llm::{GeminiProvider, MockProvider, TextGenerator};
use handlers::{create_router, AppState};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

pub use demo::DEMO_NARRATIVE;

/// Server error
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Provider construction error
    #[error("Provider error: {0}")]
    Provider(#[from] forked_llm::LlmError),

    /// Server binding error
    #[error("Failed to bind server: {0}")]
    Bind(#[from] std::io::Error),

    /// Server error
    #[error("Server error: {0}")]
    Server(String),
}

/// Build the configured text-generation provider.
fn build_generator(config: &ServerConfig) -> Result<Arc<dyn TextGenerator>, ServerError> {
    match config.provider.kind {
        ProviderKind::Mock => {
            info!("using mock provider (demo narrative)");
            Ok(Arc::new(MockProvider::new(DEMO_NARRATIVE)))
        }
        ProviderKind::Gemini => {
            let api_key = config.resolve_api_key()?;
            let provider = GeminiProvider::new(
                config.provider.base_url.clone(),
                config.provider.model.clone(),
                api_key,
            )?;
            info!(model = %config.provider.model, "using Gemini provider");
            Ok(Arc::new(provider))
        }
    }
}

/// Start the HTTP server.
///
/// Initializes tracing, builds the provider from config, and serves
/// until shutdown.
pub async fn start_server(config: ServerConfig) -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    info!("Starting Forked server");
    info!("Bind address: {}", config.bind_addr());
    info!("Demo fallback: {}", config.generation.demo_fallback);

    let generator = build_generator(&config)?;

    let state = AppState {
        generator,
        demo_fallback: config.generation.demo_fallback,
        min_output_len: config.generation.min_output_len,
    };

    let app = create_router(state);

    let listener = TcpListener::bind(&config.bind_addr()).await?;
    info!("Server listening on {}", config.bind_addr());

    axum::serve(listener, app)
        .await
        .map_err(|e| ServerError::Server(e.to_string()))?;

    Ok(())
}

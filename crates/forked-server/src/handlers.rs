//! HTTP request handlers for the `/generate` service.

use crate::demo::DEMO_NARRATIVE;
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use forked_domain::{GenerateResponse, SubmissionInput};
use forked_llm::{SimulationPrompt, TextGenerator};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Narrative generation backend
    pub generator: Arc<dyn TextGenerator>,

    /// Serve the demo narrative when the provider errors
    pub demo_fallback: bool,

    /// Minimum trimmed narrative length accepted from the provider
    pub min_output_len: usize,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall health status
    pub status: String,
}

/// POST /generate - Simulate an alternate life timeline
///
/// Validates the required fields, builds the simulation prompt, and
/// returns either `{"raw_output": …}` or `{"error": …}`.
async fn generate(
    State(state): State<AppState>,
    Json(input): Json<SubmissionInput>,
) -> (StatusCode, Json<GenerateResponse>) {
    let request_id = Uuid::now_v7();

    if input.validate().is_err() {
        warn!(%request_id, "submission rejected: missing required fields");
        return (
            StatusCode::BAD_REQUEST,
            Json(GenerateResponse::Failure {
                error: "Missing required fields".to_string(),
            }),
        );
    }

    let prompt = SimulationPrompt::new(&input).build();
    info!(%request_id, prompt_chars = prompt.len(), "generating timeline");

    match state.generator.generate(&prompt).await {
        Ok(text) => {
            let trimmed = text.trim();
            if trimmed.len() < state.min_output_len {
                warn!(%request_id, chars = trimmed.len(), "narrative too short");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(GenerateResponse::Failure {
                        error: "Response too short".to_string(),
                    }),
                );
            }
            info!(%request_id, chars = trimmed.len(), "narrative generated");
            (
                StatusCode::OK,
                Json(GenerateResponse::Success {
                    raw_output: trimmed.to_string(),
                }),
            )
        }
        Err(e) if state.demo_fallback => {
            warn!(%request_id, error = %e, "provider failed, serving demo narrative");
            (
                StatusCode::OK,
                Json(GenerateResponse::Success {
                    raw_output: DEMO_NARRATIVE.to_string(),
                }),
            )
        }
        Err(e) => {
            warn!(%request_id, error = %e, "provider failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(GenerateResponse::Failure {
                    error: e.to_string(),
                }),
            )
        }
    }
}

/// GET /health - Liveness probe
async fn health_check() -> Json<HealthCheckResponse> {
    Json(HealthCheckResponse {
        status: "healthy".to_string(),
    })
}

/// Create the axum router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/generate", post(generate))
        .route("/health", get(health_check))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use forked_llm::MockProvider;
    use tower::ServiceExt; // for oneshot

    fn state_with(provider: MockProvider) -> AppState {
        AppState {
            generator: Arc::new(provider),
            demo_fallback: true,
            min_output_len: 10,
        }
    }

    fn submission_body() -> Body {
        Body::from(r#"{"age": "29", "decision": "moved abroad"}"#)
    }

    #[tokio::test]
    async fn test_health_check() {
        let app = create_router(state_with(MockProvider::default()));

        let request = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_success() {
        let provider = MockProvider::new("YEAR 1:\nWins: something long enough here");
        let app = create_router(state_with(provider));

        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/json")
            .body(submission_body())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_generate_missing_required_field_is_bad_request() {
        let provider = MockProvider::default();
        let call_counter = provider.clone();
        let app = create_router(state_with(provider));

        let request = Request::builder()
            .method("POST")
            .uri("/generate")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"age": "", "decision": "x"}"#))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        // Validation failures never reach the provider
        assert_eq!(call_counter.call_count(), 0);
    }
}

//! Gemini Provider Implementation
//!
//! Integration with the Google Generative Language REST API
//! (`models/{model}:generateContent`).
//!
//! # Features
//!
//! - Async HTTP communication via reqwest
//! - Configurable endpoint, model, and API key
//! - Retry logic with exponential backoff
//! - Timeout handling

use crate::{LlmError, TextGenerator};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model used for simulations
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default timeout for LLM requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Sampling temperature for narrative generation
pub const TEMPERATURE: f64 = 0.7;

/// Output token budget for one narrative
pub const MAX_OUTPUT_TOKENS: u32 = 1500;

/// Gemini API provider for narrative generation
pub struct GeminiProvider {
    base_url: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GeminiProvider {
    /// Create a new Gemini provider.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(|e| LlmError::Communication(format!("Failed to build client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        })
    }

    /// Create a provider against the public API with the default model.
    pub fn default_endpoint(api_key: impl Into<String>) -> Result<Self, LlmError> {
        Self::new(DEFAULT_BASE_URL, DEFAULT_MODEL, api_key)
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// The model this provider generates with.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        )
    }

    async fn generate_once(&self, prompt: &str) -> Result<String, LlmError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let response = self
            .client
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LlmError::ModelNotAvailable(self.model.clone()));
        }
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmError::RateLimitExceeded);
        }
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LlmError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .map(|part| part.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Response contained no candidate text".to_string(),
            ));
        }

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.generate_once(prompt).await {
                Ok(text) => {
                    debug!(model = %self.model, chars = text.len(), "generation succeeded");
                    return Ok(text);
                }
                // Retrying a missing model never helps
                Err(e @ LlmError::ModelNotAvailable(_)) => return Err(e),
                Err(e) => {
                    warn!(attempt = attempts + 1, error = %e, "generation attempt failed");
                    last_error = Some(e);
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = GeminiProvider::new("http://localhost:8089", "gemini-1.5-flash", "key")
            .unwrap();
        assert_eq!(provider.model(), "gemini-1.5-flash");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_with_max_retries() {
        let provider = GeminiProvider::default_endpoint("key")
            .unwrap()
            .with_max_retries(5);
        assert_eq!(provider.max_retries, 5);
    }

    #[test]
    fn test_request_url_shape() {
        let provider = GeminiProvider::new("http://localhost:8089", "test-model", "secret")
            .unwrap();
        assert_eq!(
            provider.request_url(),
            "http://localhost:8089/v1beta/models/test-model:generateContent?key=secret"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_errors() {
        let provider = GeminiProvider::new("http://127.0.0.1:1", "m", "k")
            .unwrap()
            .with_max_retries(1);

        let result = provider.generate("test").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}

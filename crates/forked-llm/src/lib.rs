//! Forked LLM Provider Layer
//!
//! Pluggable text-generation backends for the simulator.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing and offline use
//! - `GeminiProvider`: Google Generative Language API integration
//!
//! # Examples
//!
//! ```
//! use forked_llm::{MockProvider, TextGenerator};
//!
//! # async fn example() {
//! let provider = MockProvider::new("YEAR 1:\nWins: ...");
//! let narrative = provider.generate("test prompt").await.unwrap();
//! assert!(narrative.starts_with("YEAR 1:"));
//! # }
//! ```

#![warn(missing_docs)]

pub mod gemini;
pub mod prompt;

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use gemini::GeminiProvider;
pub use prompt::SimulationPrompt;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Free-text generation backend.
///
/// The server is generic over this trait so tests can run against
/// [`MockProvider`] while production talks to Gemini.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Generate a text completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Mock text generator for deterministic testing
///
/// Returns pre-configured responses without any network calls. A response
/// registered via [`add_error`](MockProvider::add_error) makes the
/// matching prompt fail instead.
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

const MOCK_ERROR_SENTINEL: &str = "\0ERROR";

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Configure the provider to fail for a specific prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), MOCK_ERROR_SENTINEL.to_string());
    }

    /// Create a provider that fails for every prompt
    pub fn always_failing() -> Self {
        Self::new(MOCK_ERROR_SENTINEL)
    }

    /// Number of times `generate` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

#[async_trait]
impl TextGenerator for MockProvider {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        let response = responses
            .get(prompt)
            .cloned()
            .unwrap_or_else(|| self.default_response.clone());

        if response == MOCK_ERROR_SENTINEL {
            return Err(LlmError::Other("Mock error".to_string()));
        }
        Ok(response)
    }
}

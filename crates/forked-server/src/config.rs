//! Configuration file parsing for the server.
//!
//! Loads settings from TOML: bind address, provider selection and
//! credentials, and generation policy.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Server configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Missing required field
    #[error("Missing required configuration field: {0}")]
    MissingField(String),
}

/// Server configuration loaded from TOML
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Bind address (e.g., "127.0.0.1")
    pub bind_address: String,

    /// Bind port (e.g., 5000)
    pub bind_port: u16,

    /// Text-generation provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Generation policy
    #[serde(default)]
    pub generation: GenerationConfig,
}

/// Which backend generates narratives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Google Generative Language API
    Gemini,
    /// Offline canned responses (demo/testing)
    Mock,
}

/// Provider selection and credentials
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Provider backend to use
    #[serde(default = "default_provider_kind")]
    pub kind: ProviderKind,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; falls back to the `GEMINI_API_KEY` environment variable
    #[serde(default)]
    pub api_key: Option<String>,
}

/// Generation policy
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Serve the demo narrative instead of failing when the provider errors
    #[serde(default = "default_true")]
    pub demo_fallback: bool,

    /// Minimum trimmed narrative length; shorter outputs are rejected
    #[serde(default = "default_min_output_len")]
    pub min_output_len: usize,
}

fn default_provider_kind() -> ProviderKind {
    ProviderKind::Gemini
}

fn default_base_url() -> String {
    forked_llm::gemini::DEFAULT_BASE_URL.to_string()
}

fn default_model() -> String {
    forked_llm::gemini::DEFAULT_MODEL.to_string()
}

fn default_true() -> bool {
    true
}

fn default_min_output_len() -> usize {
    100
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: default_provider_kind(),
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            demo_fallback: default_true(),
            min_output_len: default_min_output_len(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: ServerConfig = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Create a default configuration for testing (mock provider)
    pub fn default_test_config() -> Self {
        ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            bind_port: 5000,
            provider: ProviderConfig {
                kind: ProviderKind::Mock,
                ..ProviderConfig::default()
            },
            generation: GenerationConfig::default(),
        }
    }

    /// Get the full bind address (address:port)
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.bind_port)
    }

    /// Resolve the API key from config or environment.
    ///
    /// Only meaningful for the Gemini provider; the mock needs none.
    pub fn resolve_api_key(&self) -> Result<String, ConfigError> {
        if let Some(key) = &self.provider.api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }
        std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingField(format!("provider.api_key (or {})", API_KEY_ENV)))
    }
}

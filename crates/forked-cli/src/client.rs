//! HTTP client for the /generate endpoint.

use crate::error::{CliError, Result};
use forked_domain::{GenerateResponse, SubmissionInput};

/// Client for one /generate server.
pub struct GenerateClient {
    base_url: String,
    client: reqwest::Client,
}

impl GenerateClient {
    /// Create a client against the given server URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// The URL submissions are posted to.
    pub fn endpoint(&self) -> String {
        format!("{}/generate", self.base_url)
    }

    /// Submit the form and return the raw narrative text.
    ///
    /// Transport failures, non-2xx statuses, and bodies carrying an
    /// `error` field all surface as errors; the caller treats them
    /// identically.
    pub async fn submit(&self, input: &SubmissionInput) -> Result<String> {
        let response = self
            .client
            .post(self.endpoint())
            .json(input)
            .send()
            .await
            .map_err(|e| CliError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // Non-2xx is failure regardless of body; surface the server's
            // message when the body still decodes.
            let message = response
                .json::<GenerateResponse>()
                .await
                .ok()
                .and_then(|body| match body {
                    GenerateResponse::Failure { error } => Some(error),
                    GenerateResponse::Success { .. } => None,
                })
                .unwrap_or_else(|| format!("Server error: {}", status));
            return Err(CliError::Generation(message));
        }

        match response
            .json::<GenerateResponse>()
            .await
            .map_err(|e| CliError::Generation(format!("Malformed response: {}", e)))?
        {
            GenerateResponse::Success { raw_output } => Ok(raw_output),
            GenerateResponse::Failure { error } => Err(CliError::Generation(error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_shape() {
        let client = GenerateClient::new("http://localhost:5000");
        assert_eq!(client.endpoint(), "http://localhost:5000/generate");
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let client = GenerateClient::new("http://localhost:5000/");
        assert_eq!(client.endpoint(), "http://localhost:5000/generate");
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        let client = GenerateClient::new("http://127.0.0.1:1");
        let input = SubmissionInput {
            age: "29".to_string(),
            decision: "anything".to_string(),
            ..SubmissionInput::default()
        };
        let result = client.submit(&input).await;
        assert!(matches!(result, Err(CliError::Connection(_))));
    }
}

//! Wire envelope for the `/generate` endpoint.

use serde::{Deserialize, Serialize};

/// The JSON body returned by `POST /generate`.
///
/// Exactly one field is meaningful per response. When a body carries an
/// `error` key the response is a failure regardless of anything else in
/// it, which is why `Failure` is listed first for the untagged decoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GenerateResponse {
    /// Backend-reported logical error
    Failure {
        /// Human-readable error message
        error: String,
    },
    /// Successful generation
    Success {
        /// The unstructured narrative text
        raw_output: String,
    },
}

impl GenerateResponse {
    /// The narrative text, if this is a success.
    pub fn raw_output(&self) -> Option<&str> {
        match self {
            GenerateResponse::Success { raw_output } => Some(raw_output),
            GenerateResponse::Failure { .. } => None,
        }
    }
}

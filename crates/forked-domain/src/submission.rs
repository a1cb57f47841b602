//! User submission: the five form fields and their validation rules.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The raw form fields a user submits to start a simulation.
///
/// All fields are free-text strings straight from form controls. Only
/// `age` and `decision` are required; the rest default to the empty string
/// and get surface-specific placeholder text downstream (the prompt builder
/// and the presenter each substitute their own defaults).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionInput {
    /// User's age, as typed
    #[serde(default)]
    pub age: String,

    /// Current profession (optional)
    #[serde(default)]
    pub profession: String,

    /// Current location (optional)
    #[serde(default)]
    pub location: String,

    /// Self-reported risk appetite (optional)
    #[serde(default)]
    pub risk: String,

    /// The decision being weighed ("what if I had...")
    #[serde(default)]
    pub decision: String,
}

/// A required field that was left empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// The `age` field
    Age,
    /// The `decision` field
    Decision,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequiredField::Age => write!(f, "age"),
            RequiredField::Decision => write!(f, "decision"),
        }
    }
}

impl SubmissionInput {
    /// Check the required fields.
    ///
    /// Returns the first missing required field. Whitespace-only input
    /// counts as missing.
    pub fn validate(&self) -> Result<(), RequiredField> {
        if self.age.trim().is_empty() {
            return Err(RequiredField::Age);
        }
        if self.decision.trim().is_empty() {
            return Err(RequiredField::Decision);
        }
        Ok(())
    }
}

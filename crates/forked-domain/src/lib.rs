//! Forked Domain Layer
//!
//! Core data model for the Forked trade-off simulator. This crate defines
//! the shapes that every other layer agrees on:
//!
//! - **SubmissionInput**: the five free-text fields a user submits
//! - **GenerateResponse**: the JSON envelope returned by the `/generate` service
//! - **ParsedNarrative**: the fixed schema the extractor distills from a
//!   free-text narrative
//! - **ScoreBand**: the qualitative bands of the grass-is-greener score
//!
//! The crate carries no infrastructure. Serialization derives are the only
//! external dependency; HTTP, regex matching, and rendering live in the
//! other workspace crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod generate;
pub mod narrative;
pub mod score;
pub mod submission;

// Re-exports for convenience
pub use generate::GenerateResponse;
pub use narrative::{ParsedNarrative, YearKey, YearOutcome};
pub use score::{clamp_score, ScoreBand, DEFAULT_SCORE};
pub use submission::{RequiredField, SubmissionInput};

//! Forked Narrative Extractor
//!
//! Segments the unstructured narrative returned by the backend into the
//! fixed [`ParsedNarrative`] schema.
//!
//! # Overview
//!
//! The narrative is human/LLM-authored prose with loosely consistent
//! section markers (`YEAR 1:`, `Wins:`, `ENDING:`, a bulleted "lost"
//! list, a numeric score). Extraction is a layered set of
//! case-insensitive regex scans over character offsets:
//!
//! ```text
//! raw text → normalize → locate markers → slice sections → clean → ParsedNarrative
//! ```
//!
//! # Contract
//!
//! [`extract`] never fails and performs no I/O. Every field of the output
//! is populated: a section that cannot be located (or whose content is
//! empty after cleaning) is replaced by a fixed fallback sentence, except
//! the lost-from-path list which is simply left empty. Matching is
//! strictly positional; nested or out-of-order markers produce
//! best-effort slices.
//!
//! [`ParsedNarrative`]: forked_domain::ParsedNarrative

#![warn(missing_docs)]

mod cleanup;
mod extractor;
mod fallback;
mod markers;

#[cfg(test)]
mod tests;

pub use extractor::extract;
pub use fallback::{FALLBACK_ENDING, FALLBACK_STRUGGLES, FALLBACK_WINS};

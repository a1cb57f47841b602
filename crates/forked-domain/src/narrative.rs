//! The fixed schema distilled from a free-text narrative.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// One of the four fixed checkpoint years of a simulated timeline.
///
/// Variant order is ascending year order, so a `BTreeMap` keyed by
/// `YearKey` iterates 1, 3, 5, 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YearKey {
    /// One year in
    Year1,
    /// Three years in
    Year3,
    /// Five years in
    Year5,
    /// Ten years in
    Year10,
}

impl YearKey {
    /// All checkpoint years in ascending order.
    pub const ALL: [YearKey; 4] = [YearKey::Year1, YearKey::Year3, YearKey::Year5, YearKey::Year10];

    /// The numeric year this key stands for.
    pub fn number(self) -> u8 {
        match self {
            YearKey::Year1 => 1,
            YearKey::Year3 => 3,
            YearKey::Year5 => 5,
            YearKey::Year10 => 10,
        }
    }
}

impl fmt::Display for YearKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "year{}", self.number())
    }
}

/// What one checkpoint year looked like on the alternate path.
///
/// Both fields are always non-empty: when extraction finds nothing, a
/// fixed fallback sentence is substituted instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearOutcome {
    /// What went well that year
    pub wins: String,
    /// What it cost that year
    pub struggles: String,
}

/// The structured output of narrative extraction.
///
/// Constructed fresh per narrative and never mutated afterwards. Every
/// year key is always present in `timeline`; missing sections are filled
/// with fallback text rather than omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedNarrative {
    /// Per-year wins and struggles, keyed `year1`/`year3`/`year5`/`year10`
    pub timeline: BTreeMap<YearKey, YearOutcome>,

    /// Free-text ten-year summary
    pub ending: String,

    /// Bulleted things forfeited from the current life, in source order
    pub lost_from_path: Vec<String>,

    /// Grass-is-greener score, clamped to 0..=100
    pub grass_is_green_score: u8,

    /// Free-text rationale for the score (may be empty)
    pub explanation: String,
}

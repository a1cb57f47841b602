//! Grass-is-greener score: clamping and qualitative bands.

use serde::{Deserialize, Serialize};

/// Score substituted when the narrative carries no score marker at all.
pub const DEFAULT_SCORE: u8 = 50;

/// Clamp a raw parsed score into the valid 0..=100 range.
///
/// Out-of-range values are clamped, never rejected; this is only for
/// scores that were actually present in the text (an absent score takes
/// [`DEFAULT_SCORE`] instead, not a clamped boundary).
pub fn clamp_score(raw: i64) -> u8 {
    raw.clamp(0, 100) as u8
}

/// Qualitative band of a score, driving the meter caption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreBand {
    /// Score above 70: the alternate path looks rosier than it is
    Romanticized,
    /// Score below 40: the current path holds up well
    Grounded,
    /// Everything in between
    Balanced,
}

impl ScoreBand {
    /// Band thresholds: strictly above 70, strictly below 40, else balanced.
    pub fn from_score(score: u8) -> Self {
        if score > 70 {
            ScoreBand::Romanticized
        } else if score < 40 {
            ScoreBand::Grounded
        } else {
            ScoreBand::Balanced
        }
    }

    /// The fixed caption shown under the meter for this band.
    pub fn caption(self) -> &'static str {
        match self {
            ScoreBand::Romanticized => {
                "Careful. That timeline also includes difficult bosses and missed family moments."
            }
            ScoreBand::Grounded => "Turns out, your current life isn't missing much.",
            ScoreBand::Balanced => "Life has trade-offs either way.",
        }
    }
}

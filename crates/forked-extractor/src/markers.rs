//! Compiled section-marker patterns.
//!
//! All markers are case-insensitive and tolerate arbitrary whitespace
//! between words and before the trailing colon.

use regex::Regex;
use std::sync::LazyLock;

macro_rules! marker {
    ($name:ident, $pattern:expr) => {
        pub static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($pattern).expect("hardcoded marker pattern"));
    };
}

// Top-level section markers
marker!(RE_YEAR, r"(?i)YEAR\s+(\d+)\s*:");
marker!(RE_ENDING, r"(?i)ENDING\s*:");
marker!(
    RE_LOST,
    r"(?i)WHAT\s+THEY\s+WOULD\s+HAVE\s+LOST\s+FROM\s+THEIR\s+CURRENT\s+LIFE\s*:"
);
marker!(RE_SCORE, r"(?i)GRASS\s+IS\s+GREENER\s+SCORE\s*:");

// Markers inside a year block
marker!(RE_WINS, r"(?i)Wins?\s*:");
marker!(RE_STRUGGLES, r"(?i)Struggles?\s*:");

// First number after the score marker (sign included, so "-5" clamps to 0)
marker!(RE_SCORE_NUMBER, r"-?\d+");

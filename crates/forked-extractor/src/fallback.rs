//! Fixed filler sentences for sections the narrative never spelled out.
//!
//! The extractor never surfaces a missing section as an error; these
//! sentences stand in so every rendered card has content.

/// Substituted when a year's wins cannot be located or clean to nothing.
pub const FALLBACK_WINS: &str = "New opportunities open up, though the details remain unclear.";

/// Substituted when a year's struggles cannot be located or clean to nothing.
pub const FALLBACK_STRUGGLES: &str =
    "Unexpected difficulties surface that your current life never had.";

/// Substituted when the narrative has no ending section.
pub const FALLBACK_ENDING: &str = "Every path carries trade-offs. This one is no exception.";

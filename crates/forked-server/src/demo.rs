//! Canned demo narrative served when the provider is unreachable.
//!
//! Keeps the UI demonstrable offline: the text follows the exact section
//! structure the extractor expects, so a failed provider call still
//! produces a fully rendered timeline.

/// A complete demo narrative in the prompt's output structure.
pub const DEMO_NARRATIVE: &str = "\
YEAR 1:
Wins:
You gain business exposure and networking growth.
Struggles:
You miss deep technical immersion.

YEAR 3:
Wins:
Leadership visibility increases.
Struggles:
Stress and pressure rise.

YEAR 5:
Wins:
Financial stability improves.
Struggles:
You question your creative fulfillment.

YEAR 10:
Wins:
You hold strategic authority.
Struggles:
You wonder about alternate technical mastery.

ENDING:
No path is perfect. Every gain carries cost.

WHAT THEY WOULD HAVE LOST FROM THEIR CURRENT LIFE:
- Technical depth
- Engineering camaraderie
- Daily problem-solving satisfaction

GRASS IS GREENER SCORE:
60 - Attractive, but emotionally complex.
";

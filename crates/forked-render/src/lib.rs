//! Forked Presenter
//!
//! Turns a [`ParsedNarrative`] and the submission that produced it into a
//! typed view tree: baseline card, per-year timeline cards, the hidden
//! costs list, and the score meter.
//!
//! Rendering is structured rather than string-templated: user text only
//! ever enters the tree as a text node, and text nodes are escaped when
//! the tree is serialized to markup. The gauge easing math lives here too
//! so every presentation surface animates identically.
//!
//! [`ParsedNarrative`]: forked_domain::ParsedNarrative

#![warn(missing_docs)]

pub mod gauge;
pub mod node;
pub mod views;

pub use gauge::{ease_out_quad, frame_value, GAUGE_DURATION_MS};
pub use node::{escape_html, Element, Node};
pub use views::{baseline_card, hidden_costs, meter, results_page, timeline};

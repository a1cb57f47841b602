//! View functions: domain values in, view tree out.

use crate::node::{Element, Node};
use forked_domain::{ParsedNarrative, ScoreBand, SubmissionInput, YearKey};

/// Placeholder baseline profession when the form field was blank.
const DEFAULT_PROFESSION: &str = "your current profession";

/// Placeholder baseline location when the form field was blank.
const DEFAULT_LOCATION: &str = "your current location";

/// The "current path" baseline card, interpolating the submission.
pub fn baseline_card(input: &SubmissionInput) -> Node {
    let profession = non_empty_or(&input.profession, DEFAULT_PROFESSION);
    let location = non_empty_or(&input.location, DEFAULT_LOCATION);

    let baseline = format!(
        "Continuing your current life as a {} in {} at age {}. You maintain your \
         established relationships, familiar routines, and the identity you've built. \
         This path offers the warmth of continuity: the friends who know you, the work \
         that's predictable, the life that feels like home.",
        profession, location, input.age
    );

    Element::new("div")
        .class("current-path")
        .text(baseline)
        .build()
}

/// The alternate-path timeline: four year cards plus the perspective card.
pub fn timeline(parsed: &ParsedNarrative) -> Node {
    let mut cards: Vec<Node> = YearKey::ALL
        .iter()
        .map(|key| year_card(*key, parsed))
        .collect();
    cards.push(ending_card(&parsed.ending));

    Element::new("div")
        .class("timeline")
        .children(cards)
        .build()
}

fn year_card(key: YearKey, parsed: &ParsedNarrative) -> Node {
    // Extraction guarantees all four keys, but a card for a missing one
    // still renders rather than panicking.
    let outcome = parsed.timeline.get(&key).cloned().unwrap_or_default();

    Element::new("div")
        .class("timeline-card")
        .child(
            Element::new("div")
                .class("timeline-card-title")
                .text(format!("Year {}", key.number()))
                .build(),
        )
        .child(card_section("Wins", &outcome.wins))
        .child(card_section("Struggles", &outcome.struggles))
        .build()
}

fn card_section(title: &'static str, content: &str) -> Node {
    Element::new("div")
        .class("timeline-section")
        .child(
            Element::new("div")
                .class("timeline-section-title")
                .text(title)
                .build(),
        )
        .child(
            Element::new("div")
                .class("timeline-section-content")
                .text(content)
                .build(),
        )
        .build()
}

fn ending_card(ending: &str) -> Node {
    Element::new("div")
        .class("timeline-card")
        .child(
            Element::new("div")
                .class("timeline-card-title")
                .text("10-Year Perspective")
                .build(),
        )
        .child(
            Element::new("div")
                .class("timeline-section-content")
                .text(ending)
                .build(),
        )
        .build()
}

/// The hidden-costs bullet list, or `None` when there is nothing to show.
pub fn hidden_costs(costs: &[String]) -> Option<Node> {
    if costs.is_empty() {
        return None;
    }

    Some(
        Element::new("ul")
            .class("costs-list")
            .children(
                costs
                    .iter()
                    .map(|cost| Element::new("li").text(cost.clone()).build()),
            )
            .build(),
    )
}

/// The score meter: value, band caption, and explanation.
pub fn meter(score: u8, explanation: &str) -> Node {
    let band = ScoreBand::from_score(score);

    let mut element = Element::new("div")
        .class("meter")
        .child(
            Element::new("div")
                .class("meter-value")
                .text(score.to_string())
                .build(),
        )
        .child(
            Element::new("div")
                .class("meter-insight")
                .text(band.caption())
                .build(),
        );

    if !explanation.is_empty() {
        element = element.child(
            Element::new("div")
                .class("insight-text")
                .text(explanation)
                .build(),
        );
    }

    element.build()
}

/// The full results view for one submission.
pub fn results_page(input: &SubmissionInput, parsed: &ParsedNarrative) -> Node {
    let mut page = Element::new("div")
        .class("results")
        .child(baseline_card(input))
        .child(timeline(parsed));

    if let Some(costs) = hidden_costs(&parsed.lost_from_path) {
        page = page.child(costs);
    }

    page.child(meter(parsed.grass_is_green_score, &parsed.explanation))
        .build()
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

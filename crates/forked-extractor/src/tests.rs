//! Behavioral tests for the full extraction routine

#[cfg(test)]
mod tests {
    use crate::{extract, FALLBACK_ENDING, FALLBACK_STRUGGLES, FALLBACK_WINS};
    use forked_domain::{ScoreBand, YearKey};

    /// A well-formed narrative in the exact shape the prompt asks for.
    const COMPLETE_NARRATIVE: &str = "\
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

    #[test]
    fn test_complete_narrative_uses_no_fallback_copy() {
        let parsed = extract(COMPLETE_NARRATIVE);

        for (key, outcome) in &parsed.timeline {
            assert_ne!(outcome.wins, FALLBACK_WINS, "fallback wins leaked into {key}");
            assert_ne!(
                outcome.struggles, FALLBACK_STRUGGLES,
                "fallback struggles leaked into {key}"
            );
        }
        assert_ne!(parsed.ending, FALLBACK_ENDING);
    }

    #[test]
    fn test_complete_narrative_fields() {
        let parsed = extract(COMPLETE_NARRATIVE);

        let year1 = &parsed.timeline[&YearKey::Year1];
        assert_eq!(year1.wins, "You gain business exposure and networking growth.");
        assert_eq!(year1.struggles, "You miss deep technical immersion.");

        let year10 = &parsed.timeline[&YearKey::Year10];
        assert_eq!(year10.wins, "You hold strategic authority.");

        assert_eq!(parsed.ending, "No path is perfect. Every gain carries cost.");
        assert_eq!(
            parsed.lost_from_path,
            vec![
                "Technical depth",
                "Engineering camaraderie",
                "Daily problem-solving satisfaction",
            ]
        );
        assert_eq!(parsed.grass_is_green_score, 60);
        assert_eq!(parsed.explanation, "Attractive, but emotionally complex.");
    }

    #[test]
    fn test_spec_end_to_end_scenario() {
        let text = "YEAR 1:\nWins: Got promoted\nStruggles: Long hours\nYEAR 3:\nWins: Started business\nENDING:\nYou found balance.\nGRASS IS GREENER SCORE: 82\nThis path offers growth.";
        let parsed = extract(text);

        let year1 = &parsed.timeline[&YearKey::Year1];
        assert_eq!(year1.wins, "Got promoted");
        assert_eq!(year1.struggles, "Long hours");

        let year3 = &parsed.timeline[&YearKey::Year3];
        assert_eq!(year3.wins, "Started business");
        assert_eq!(year3.struggles, FALLBACK_STRUGGLES);

        assert_eq!(parsed.ending, "You found balance.");
        assert_eq!(parsed.grass_is_green_score, 82);
        assert_eq!(parsed.explanation, "This path offers growth.");
        assert_eq!(
            ScoreBand::from_score(parsed.grass_is_green_score),
            ScoreBand::Romanticized
        );
    }

    #[test]
    fn test_missing_year_gets_both_fallbacks() {
        let text = "YEAR 1:\nWins: something good\nStruggles: something hard\n";
        let parsed = extract(text);

        for key in [YearKey::Year3, YearKey::Year5, YearKey::Year10] {
            let outcome = &parsed.timeline[&key];
            assert_eq!(outcome.wins, FALLBACK_WINS);
            assert_eq!(outcome.struggles, FALLBACK_STRUGGLES);
        }
    }

    #[test]
    fn test_all_year_keys_always_present() {
        let parsed = extract("");
        assert_eq!(parsed.timeline.len(), 4);
        for key in YearKey::ALL {
            assert!(parsed.timeline.contains_key(&key));
        }
    }

    #[test]
    fn test_empty_input_is_all_defaults() {
        let parsed = extract("");
        assert_eq!(parsed.ending, FALLBACK_ENDING);
        assert!(parsed.lost_from_path.is_empty());
        assert_eq!(parsed.grass_is_green_score, 50);
        assert_eq!(parsed.explanation, "");
    }

    #[test]
    fn test_score_clamps_negative() {
        let parsed = extract("GRASS IS GREENER SCORE: -5");
        assert_eq!(parsed.grass_is_green_score, 0);
    }

    #[test]
    fn test_score_clamps_overflow() {
        let parsed = extract("GRASS IS GREENER SCORE: 150");
        assert_eq!(parsed.grass_is_green_score, 100);
    }

    #[test]
    fn test_huge_negative_score_clamps_to_zero() {
        let parsed = extract("GRASS IS GREENER SCORE: -99999999999999999999");
        assert_eq!(parsed.grass_is_green_score, 0);
    }

    #[test]
    fn test_huge_positive_score_clamps_to_hundred() {
        let parsed = extract("GRASS IS GREENER SCORE: 99999999999999999999");
        assert_eq!(parsed.grass_is_green_score, 100);
    }

    #[test]
    fn test_score_in_range_passes_through() {
        let parsed = extract("GRASS IS GREENER SCORE: 57");
        assert_eq!(parsed.grass_is_green_score, 57);
    }

    #[test]
    fn test_missing_score_marker_defaults_to_fifty() {
        let parsed = extract("YEAR 1:\nWins: a\nStruggles: b");
        assert_eq!(parsed.grass_is_green_score, 50);
        assert_eq!(parsed.explanation, "");
    }

    #[test]
    fn test_score_marker_without_digits_defaults() {
        let parsed = extract("GRASS IS GREENER SCORE:\nno number to be found here");
        assert_eq!(parsed.grass_is_green_score, 50);
        assert_eq!(parsed.explanation, "");
    }

    #[test]
    fn test_only_first_number_is_the_score() {
        let parsed = extract("GRASS IS GREENER SCORE: 45 out of 100, maybe 80 on a good day");
        assert_eq!(parsed.grass_is_green_score, 45);
        assert_eq!(parsed.explanation, "out of 100, maybe 80 on a good day");
    }

    #[test]
    fn test_bullet_extraction_skips_plain_lines() {
        let text = "\
WHAT THEY WOULD HAVE LOST FROM THEIR CURRENT LIFE:
Some introductory prose that is not a bullet.
- First cost
plain interruption
* Second cost
  • Third cost
GRASS IS GREENER SCORE: 30";
        let parsed = extract(text);
        assert_eq!(
            parsed.lost_from_path,
            vec!["First cost", "Second cost", "Third cost"]
        );
    }

    #[test]
    fn test_lost_list_stops_at_score_marker() {
        let text = "\
WHAT THEY WOULD HAVE LOST FROM THEIR CURRENT LIFE:
- Only cost
GRASS IS GREENER SCORE: 20
- This bullet belongs to the explanation, not the list";
        let parsed = extract(text);
        assert_eq!(parsed.lost_from_path, vec!["Only cost"]);
    }

    #[test]
    fn test_markers_are_case_insensitive() {
        let text = "year 1:\nwins: Quiet mornings\nstruggle: Lonely evenings\nending:\nIt evens out.";
        let parsed = extract(text);

        let year1 = &parsed.timeline[&YearKey::Year1];
        assert_eq!(year1.wins, "Quiet mornings");
        assert_eq!(year1.struggles, "Lonely evenings");
        assert_eq!(parsed.ending, "It evens out.");
    }

    #[test]
    fn test_crlf_input_is_normalized() {
        let text = "YEAR 1:\r\nWins: Crossed the ocean\r\nStruggles: Seasick\r\n";
        let parsed = extract(text);
        let year1 = &parsed.timeline[&YearKey::Year1];
        assert_eq!(year1.wins, "Crossed the ocean");
        assert_eq!(year1.struggles, "Seasick");
    }

    #[test]
    fn test_out_of_order_years_still_resolve() {
        let text = "\
YEAR 10:
Wins: Hindsight
Struggles: Regret
YEAR 1:
Wins: Novelty
Struggles: Chaos";
        let parsed = extract(text);
        assert_eq!(parsed.timeline[&YearKey::Year10].wins, "Hindsight");
        assert_eq!(parsed.timeline[&YearKey::Year1].wins, "Novelty");
        assert_eq!(parsed.timeline[&YearKey::Year1].struggles, "Chaos");
    }

    #[test]
    fn test_duplicate_year_marker_first_occurrence_wins() {
        let text = "\
YEAR 1:
Wins: First pass
Struggles: First doubts
YEAR 1:
Wins: Second pass
Struggles: Second doubts";
        let parsed = extract(text);
        let year1 = &parsed.timeline[&YearKey::Year1];
        assert_eq!(year1.wins, "First pass");
        assert_eq!(year1.struggles, "First doubts");
    }

    #[test]
    fn test_empty_wins_content_gets_fallback() {
        let text = "YEAR 1:\nWins:\nStruggles: Doubt creeps in\nYEAR 3:\nWins: x\nStruggles: y";
        let parsed = extract(text);
        let year1 = &parsed.timeline[&YearKey::Year1];
        assert_eq!(year1.wins, FALLBACK_WINS);
        assert_eq!(year1.struggles, "Doubt creeps in");
    }

    #[test]
    fn test_multiline_bulleted_wins_are_flattened() {
        let text = "\
YEAR 1:
Wins:
- A raise
- A new city
Struggles:
- Missing the old crew
ENDING:
Fine.";
        let parsed = extract(text);
        let year1 = &parsed.timeline[&YearKey::Year1];
        assert_eq!(year1.wins, "A raise A new city");
        assert_eq!(year1.struggles, "Missing the old crew");
    }

    #[test]
    fn test_year_block_bounded_by_lost_marker() {
        let text = "\
YEAR 10:
Wins: Perspective
Struggles: Distance
WHAT THEY WOULD HAVE LOST FROM THEIR CURRENT LIFE:
- Stability";
        let parsed = extract(text);
        let year10 = &parsed.timeline[&YearKey::Year10];
        assert_eq!(year10.struggles, "Distance");
        assert_eq!(parsed.lost_from_path, vec!["Stability"]);
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let first = extract(COMPLETE_NARRATIVE);
        let second = extract(COMPLETE_NARRATIVE);
        assert_eq!(first, second);
    }
}

//! Core extraction: marker scan, positional slicing, fallback substitution.

use crate::cleanup::{clean_block, is_bullet_line, strip_bullet};
use crate::fallback::{FALLBACK_ENDING, FALLBACK_STRUGGLES, FALLBACK_WINS};
use crate::markers::{
    RE_ENDING, RE_LOST, RE_SCORE, RE_SCORE_NUMBER, RE_STRUGGLES, RE_WINS, RE_YEAR,
};
use forked_domain::{clamp_score, ParsedNarrative, YearKey, YearOutcome, DEFAULT_SCORE};
use std::collections::BTreeMap;
use std::ops::Range;
use tracing::debug;

/// Segment a raw narrative into the fixed schema.
///
/// Total function: always returns a fully populated structure. Sections
/// that cannot be located get fallback text (see [`crate::fallback`]);
/// a missing lost-from-path section yields an empty list and a missing
/// score yields the default of 50.
pub fn extract(raw: &str) -> ParsedNarrative {
    let normalized = raw.replace("\r\n", "\n");
    let text = normalized.trim();

    let map = MarkerMap::scan(text);

    let mut timeline = BTreeMap::new();
    for key in YearKey::ALL {
        timeline.insert(key, extract_year(text, &map, key));
    }

    let ending = extract_ending(text, &map);
    let lost_from_path = extract_lost(text, &map);
    let (grass_is_green_score, explanation) = extract_score(text, &map);

    ParsedNarrative {
        timeline,
        ending,
        lost_from_path,
        grass_is_green_score,
        explanation,
    }
}

/// Every top-level marker found in the text, by character offset.
///
/// A section's content runs from the end of its marker to the start of
/// the nearest following top-level marker. Offsets, not structure: the
/// input gives no ordering guarantees, so boundaries are computed over
/// all markers regardless of which kind comes next.
struct MarkerMap {
    /// `(year number, marker span)` for every `YEAR <n>:`, in offset order
    years: Vec<(u32, Range<usize>)>,
    ending: Option<Range<usize>>,
    lost: Option<Range<usize>>,
    score: Option<Range<usize>>,
    /// Start offsets of all of the above, sorted
    boundaries: Vec<usize>,
}

impl MarkerMap {
    fn scan(text: &str) -> Self {
        let years: Vec<(u32, Range<usize>)> = RE_YEAR
            .captures_iter(text)
            .filter_map(|caps| {
                let span = caps.get(0)?.range();
                let year = caps.get(1)?.as_str().parse::<u32>().ok()?;
                Some((year, span))
            })
            .collect();

        let ending = RE_ENDING.find(text).map(|m| m.range());
        let lost = RE_LOST.find(text).map(|m| m.range());
        let score = RE_SCORE.find(text).map(|m| m.range());

        let mut boundaries: Vec<usize> = years.iter().map(|(_, span)| span.start).collect();
        boundaries.extend(ending.iter().map(|span| span.start));
        boundaries.extend(lost.iter().map(|span| span.start));
        boundaries.extend(score.iter().map(|span| span.start));
        boundaries.sort_unstable();

        Self {
            years,
            ending,
            lost,
            score,
            boundaries,
        }
    }

    /// First marker of the given year, if any occurrence exists.
    ///
    /// A duplicated `YEAR n:` resolves to its first occurrence; later
    /// duplicates read as prose inside some other section.
    fn year_marker(&self, year: u32) -> Option<&Range<usize>> {
        self.years
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, span)| span)
    }

    /// Start of the first top-level marker at or past `from`, or `len`.
    fn next_boundary(&self, from: usize, len: usize) -> usize {
        self.boundaries
            .iter()
            .copied()
            .find(|&start| start >= from)
            .unwrap_or(len)
    }
}

fn or_fallback(content: String, fallback: &str) -> String {
    if content.is_empty() {
        fallback.to_string()
    } else {
        content
    }
}

fn extract_year(text: &str, map: &MarkerMap, key: YearKey) -> YearOutcome {
    let Some(marker) = map.year_marker(u32::from(key.number())) else {
        debug!(year = key.number(), "year marker absent, substituting fallback copy");
        return YearOutcome {
            wins: FALLBACK_WINS.to_string(),
            struggles: FALLBACK_STRUGGLES.to_string(),
        };
    };

    let block_end = map.next_boundary(marker.end, text.len());
    let block = &text[marker.end..block_end];

    let wins = match RE_WINS.find(block) {
        Some(m) => {
            // Wins content stops at the first struggles marker after it
            let end = RE_STRUGGLES
                .find_at(block, m.end())
                .map(|s| s.start())
                .unwrap_or(block.len());
            clean_block(&block[m.end()..end])
        }
        None => String::new(),
    };

    // Struggles content runs to the block end; the block is already
    // bounded by the next top-level marker.
    let struggles = match RE_STRUGGLES.find(block) {
        Some(m) => clean_block(&block[m.end()..]),
        None => String::new(),
    };

    YearOutcome {
        wins: or_fallback(wins, FALLBACK_WINS),
        struggles: or_fallback(struggles, FALLBACK_STRUGGLES),
    }
}

fn extract_ending(text: &str, map: &MarkerMap) -> String {
    let Some(marker) = &map.ending else {
        return FALLBACK_ENDING.to_string();
    };

    let end = [map.lost.as_ref(), map.score.as_ref()]
        .into_iter()
        .flatten()
        .map(|span| span.start)
        .filter(|&start| start >= marker.end)
        .min()
        .unwrap_or(text.len());

    or_fallback(clean_block(&text[marker.end..end]), FALLBACK_ENDING)
}

fn extract_lost(text: &str, map: &MarkerMap) -> Vec<String> {
    let Some(marker) = &map.lost else {
        return Vec::new();
    };

    let end = map
        .score
        .as_ref()
        .map(|span| span.start)
        .filter(|&start| start >= marker.end)
        .unwrap_or(text.len());

    text[marker.end..end]
        .lines()
        .filter(|line| is_bullet_line(line))
        .map(|line| strip_bullet(line).to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn extract_score(text: &str, map: &MarkerMap) -> (u8, String) {
    let Some(marker) = &map.score else {
        return (DEFAULT_SCORE, String::new());
    };

    let tail = &text[marker.end..];
    match RE_SCORE_NUMBER.find(tail) {
        Some(m) => {
            // Digit runs too long for i64 saturate toward their sign
            let raw = m.as_str().parse::<i64>().unwrap_or_else(|_| {
                if m.as_str().starts_with('-') {
                    i64::MIN
                } else {
                    i64::MAX
                }
            });
            let explanation = clean_block(&tail[m.end()..]);
            (clamp_score(raw), explanation)
        }
        None => (DEFAULT_SCORE, String::new()),
    }
}

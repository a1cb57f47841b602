//! Whitespace and bullet-prefix cleaning for extracted slices.

/// Bullet glyphs recognized at the start of a line.
pub const BULLET_GLYPHS: [char; 3] = ['-', '*', '•'];

/// Strip one leading bullet glyph (and the whitespace after it) from a
/// trimmed line. Lines without a bullet prefix pass through unchanged.
pub fn strip_bullet(line: &str) -> &str {
    let trimmed = line.trim();
    match trimmed.chars().next() {
        Some(c) if BULLET_GLYPHS.contains(&c) => trimmed[c.len_utf8()..].trim_start(),
        _ => trimmed,
    }
}

/// Flatten a multi-line slice into one cleaned string.
///
/// Per line: trim, strip a leading bullet prefix, drop the line if
/// nothing remains. Surviving lines are rejoined with single spaces.
pub fn clean_block(text: &str) -> String {
    text.lines()
        .map(strip_bullet)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether a line is a bullet item (starts with a bullet glyph after
/// leading whitespace).
pub fn is_bullet_line(line: &str) -> bool {
    line.trim_start()
        .chars()
        .next()
        .is_some_and(|c| BULLET_GLYPHS.contains(&c))
}

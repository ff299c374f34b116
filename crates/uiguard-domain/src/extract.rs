//! Advisory-line extraction from guide documents.

const BULLET_MARKERS: [char; 3] = ['-', '*', '•'];
const NUMBER_TERMINATORS: [char; 3] = ['.', ')', ':'];

/// Whether an already-trimmed line is a bullet or numbered-list item.
///
/// Numbered items need a digit, a terminator, and at least one more
/// character, so a bare `1.` is not advice.
pub fn is_advisory_line(trimmed: &str) -> bool {
    if trimmed.starts_with(BULLET_MARKERS) {
        return true;
    }

    let mut chars = trimmed.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(first), Some(second), Some(_)) => {
            first.is_ascii_digit() && NUMBER_TERMINATORS.contains(&second)
        }
        _ => false,
    }
}

/// First `max` advisory lines of `document`, trimmed, in document order.
pub fn extract_points(document: &str, max: usize) -> Vec<&str> {
    document
        .lines()
        .map(str::trim)
        .filter(|line| is_advisory_line(line))
        .take(max)
        .collect()
}

//! String utilities for the domain layer.
//!
//! Tool names are measured in characters, not bytes, so every helper here
//! counts `char`s.

/// Number of characters in `s`
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Keep at most `max_chars` characters of `s`
pub fn take_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

/// Keep the first `keep` characters and append a literal `...`
///
/// Unlike a width-bounded truncation, the marker is always appended and is
/// not counted against `keep`.
pub fn truncate_with_marker(s: &str, keep: usize) -> String {
    format!("{}...", take_chars(s, keep))
}

//! Whitespace helpers shared by the joiners and the similarity normalizer.

/// Collapses runs of Unicode whitespace into single spaces and trims the edges.
///
/// ```rust
/// use segment::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  hello \t\n world  "), "hello world");
/// assert_eq!(collapse_whitespace("   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}

/// True when `text` is empty or contains only whitespace.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(char::is_whitespace)
}

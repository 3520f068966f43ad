// Output formatting — terminal display and JSON reports.

pub mod json;
pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Tokens from the whitespace policy can be arbitrarily long runs of
/// punctuation; this keeps the word listing aligned without slicing bytes.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}

/// Format an angle in radians with a fixed number of decimal places.
pub fn format_angle(angle: f64, precision: usize) -> String {
    format!("{angle:.precision$}")
}

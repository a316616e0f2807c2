//! Shared utility functions.

/// Shorten `s` to at most `max_chars` characters for log lines and list
/// views, appending `...` when anything was cut.
pub fn preview(s: &str, max_chars: usize) -> String {
    let single_line = s.replace(['\n', '\r'], " ");
    if single_line.chars().count() <= max_chars {
        return single_line;
    }
    let kept: String = single_line
        .chars()
        .take(max_chars.saturating_sub(3))
        .collect();
    format!("{kept}...")
}

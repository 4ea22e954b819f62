//! Shortened prompt view for terminal output

/// Appended to every preview.
pub const TRUNCATION_MARKER: &str = "...\n[truncated]";

/// First `max_chars` characters of `prompt` followed by [`TRUNCATION_MARKER`]
///
/// Counts Unicode scalar values, so a multi-byte character is never split.
/// The marker is appended even when the prompt is shorter than `max_chars`.
#[must_use]
pub fn preview(prompt: &str, max_chars: usize) -> String {
    let end = prompt
        .char_indices()
        .nth(max_chars)
        .map_or(prompt.len(), |(idx, _)| idx);

    let mut out = String::with_capacity(end + TRUNCATION_MARKER.len());
    out.push_str(&prompt[..end]);
    out.push_str(TRUNCATION_MARKER);
    out
}

//! Shared formatting utilities for the samplegen CLI.

/// Truncates a string to fit within `max_len` characters, appending `…` if needed.
///
/// Uses character boundaries instead of byte offsets to avoid panics on
/// multi-byte UTF-8 sequences.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{truncated}\u{2026}")
    }
}

//! Counter text semantics (panic-free).
//!
//! Parsing rules:
//! - Strict base-10 digits, no surrounding whitespace, no sign. Anything
//!   else yields `None` and the counter restarts from zero downstream.
//! - The stored form is the bare decimal string with no trailing delimiter.

/// Parse stored counter text.
///
/// Returns `None` for any content that is not a plain decimal `u64`:
/// empty files, signs, whitespace (including a trailing newline left by an
/// editor), and values past `u64::MAX` all count as "no usable value".
pub fn parse_counter(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Next counter value given what storage produced.
///
/// Absent or unparseable content counts as zero; the increment saturates at
/// `u64::MAX` rather than wrapping back to small values.
pub fn next(current: Option<u64>) -> u64 {
    current.unwrap_or(0).saturating_add(1)
}

/// Serialize a counter value to its stored form.
pub fn format_counter(value: u64) -> String {
    value.to_string()
}

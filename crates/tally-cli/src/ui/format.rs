//! String formatting utilities for UI rendering.

use std::fmt::Write;

use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Truncate a string to max length, adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Format an amount with two decimals and a currency prefix.
pub fn format_money(value: Decimal, currency: &str) -> String {
    format!("{} {}", currency, two_places(value))
}

/// Format an amount with exactly two decimals.
pub fn two_places(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(2);
    rounded.rescale(2);
    rounded
}

/// Format a date with a chrono pattern, falling back to ISO 8601 when the
/// pattern cannot be rendered.
pub fn format_date(date: &NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        tracing::debug!(pattern, "unrenderable date pattern");
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Sanitize a string for single-line output (replace newlines with spaces).
pub fn single_line(s: &str) -> String {
    s.replace('\n', " ").replace('\r', "")
}

//! Normalization of view-layer input.
//!
//! # Responsibility
//! - Trim and bound user-entered text.
//! - Parse event dates from the formats the UI produces.
//! - Check contact handles (`@name` or email address).
//!
//! # Invariants
//! - Returned text is trimmed and at most `max_chars` characters.
//! - Naive dates and date-times are interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

static HANDLE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^@[A-Za-z0-9_.]{2,30}$").expect("valid handle regex"));
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"));

const NAIVE_DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];
const NAIVE_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%B %d, %Y", "%b %d, %Y"];

/// Why a piece of text was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRejection {
    Empty,
    TooLong { max_chars: usize },
}

/// Trims `value` and enforces non-empty and length rules.
pub fn normalize_required_text(value: &str, max_chars: usize) -> Result<String, TextRejection> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TextRejection::Empty);
    }
    normalize_optional_text(trimmed, max_chars)
}

/// Trims `value` and enforces the length rule; empty is allowed.
pub fn normalize_optional_text(value: &str, max_chars: usize) -> Result<String, TextRejection> {
    let trimmed = value.trim();
    if trimmed.chars().count() > max_chars {
        return Err(TextRejection::TooLong { max_chars });
    }
    Ok(trimmed.to_string())
}

/// Whether `handle` is an `@name` handle or an email address.
pub fn is_valid_handle(handle: &str) -> bool {
    HANDLE_RE.is_match(handle) || EMAIL_RE.is_match(handle)
}

/// Parses an event date into Unix epoch milliseconds.
///
/// Accepts RFC 3339, `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM`,
/// `YYYY-MM-DD` and `Month D, YYYY`. Returns `None` for anything else.
pub fn parse_event_date(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(parsed.timestamp_millis());
    }

    if let Some(parsed) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
    {
        return Some(parsed.and_utc().timestamp_millis());
    }

    NAIVE_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc().timestamp_millis())
}

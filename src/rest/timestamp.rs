//! Timestamp parsing for Octopus date fields.
//!
//! Octopus renders dates as `%Y-%m-%dT%H:%M:%S.%f%z`, e.g.
//! `2024-03-02T20:25:53.148000+0000`. Parsing is strict: a value that is
//! present must carry fractional seconds and an explicit UTC offset.

use chrono::{DateTime, FixedOffset};

/// Format used when rendering a timestamp back to text.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f%z";

const PARSE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f%z";
const FRACTION_OFFSET: usize = "YYYY-MM-DDTHH:MM:SS".len();
const MAX_FRACTION_DIGITS: usize = 6;

/// Parses an Octopus timestamp.
///
/// Accepts 1 to 6 fractional digits and a `±HHMM` or `±HH:MM` offset.
///
/// # Errors
///
/// Returns a human-readable reason when `text` does not match the format.
///
/// # Example
///
/// ```rust
/// use octopus_api::rest::{format_timestamp, parse_timestamp};
///
/// let parsed = parse_timestamp("2024-03-02T20:25:53.148000+0000").unwrap();
/// assert_eq!(format_timestamp(&parsed), "2024-03-02T20:25:53.148000+0000");
/// ```
pub fn parse_timestamp(text: &str) -> Result<DateTime<FixedOffset>, String> {
    // fractional seconds are mandatory
    if text.as_bytes().get(FRACTION_OFFSET) != Some(&b'.') {
        return Err("missing fractional seconds".to_string());
    }
    let digits = text.as_bytes()[FRACTION_OFFSET + 1..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if !(1..=MAX_FRACTION_DIGITS).contains(&digits) {
        return Err(format!(
            "expected 1 to {MAX_FRACTION_DIGITS} fractional digits, found {digits}"
        ));
    }
    DateTime::parse_from_str(text, PARSE_FORMAT).map_err(|e| e.to_string())
}

/// Renders a timestamp with microsecond precision and a `±HHMM` offset.
#[must_use]
pub fn format_timestamp(value: &DateTime<FixedOffset>) -> String {
    value.format(TIMESTAMP_FORMAT).to_string()
}

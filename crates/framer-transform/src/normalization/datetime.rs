//! Timestamp parsing and rendering.
//!
//! Legacy exports write dates month-first, usually with a two-digit year and
//! a time part (`03/04/15 00:00:00`). Hand-entered values also appear with
//! four-digit years or in ISO form. Every accepted value renders as
//! `MM/DD/YYYY HH:MM:SS`.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

/// Output format for every migrated timestamp.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %H:%M:%S";

// Two-digit years first: `%Y` would read `15` as the year 15.
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%m/%d/%y", "%m/%d/%Y", "%Y-%m-%d"];

/// Parse a legacy date or date-time; a bare date is taken at midnight.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Render a legacy date as `MM/DD/YYYY HH:MM:SS`; missing when unparseable.
pub fn timestamp(value: Option<&str>) -> Option<String> {
    value
        .and_then(parse_timestamp)
        .map(|parsed| parsed.format(TIMESTAMP_FORMAT).to_string())
}

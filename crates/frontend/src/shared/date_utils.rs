//! Utilities for date and time formatting
//!
//! Provides consistent date/time formatting across the application

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, Offset, TimeZone};

const DATETIME_FORMAT: &str = "%d %b %Y, %H:%M";
const DATE_FORMAT: &str = "%d %b %Y";

/// Format an ISO-8601 timestamp in the browser's local time zone
/// Example: "2024-01-05T10:00:00Z" -> "05 Jan 2024, 10:00" (UTC browser)
///
/// Missing or blank input gives "-", unparseable input is returned as is.
pub fn format_date(iso: Option<&str>) -> String {
    format_date_with_offset(iso, Local::now().offset().fix())
}

/// Same as [`format_date`] with an explicit display offset
pub fn format_date_with_offset(iso: Option<&str>, offset: FixedOffset) -> String {
    let Some(raw) = iso else {
        return "-".to_string();
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "-".to_string();
    }

    if let Some(datetime) = parse_timestamp(trimmed, offset) {
        return datetime.with_timezone(&offset).format(DATETIME_FORMAT).to_string();
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.format(DATE_FORMAT).to_string();
    }

    raw.to_string()
}

/// RFC 3339 first; timestamps without an offset are taken as local time
fn parse_timestamp(value: &str, offset: FixedOffset) -> Option<DateTime<FixedOffset>> {
    if let Ok(datetime) = DateTime::parse_from_rfc3339(value) {
        return Some(datetime);
    }

    let naive = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()?;
    offset.from_local_datetime(&naive).single()
}

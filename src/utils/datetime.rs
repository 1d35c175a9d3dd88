//! Date and time utility functions
//!
//! Task timestamps travel as ISO-8601 strings. This module produces them,
//! parses them back, and renders them in a short human-readable form for
//! the command line (e.g., "yesterday", "today", "last Monday").

use chrono::{DateTime, Datelike, Local, NaiveDate, SecondsFormat, Utc, Weekday};

/// Date format used when a timestamp is too far away for a relative label
pub const DISPLAY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Current UTC time as an RFC 3339 / ISO-8601 string with millisecond precision
pub fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Identifier for a task synthesized locally, derived from the current time
/// in milliseconds since the Unix epoch.
pub fn local_task_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Parse an ISO-8601 timestamp
///
/// Accepts full RFC 3339 strings and, as a fallback, naive
/// `YYYY-MM-DDTHH:MM:SS[.fff]` strings which are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// Format a date relative to `today`
///
/// # Arguments
/// * `date` - The date to describe
/// * `today` - The reference day
///
/// # Returns
/// * `String` - "today", "yesterday", "last <weekday>" within a week, otherwise YYYY-MM-DD
pub fn format_relative_date(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "today".to_string(),
        -1 => "yesterday".to_string(),
        1 => "tomorrow".to_string(),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        _ => date.format(DISPLAY_DATE_FORMAT).to_string(),
    }
}

/// Format a task timestamp for display in local time.
///
/// Unparseable input is returned unchanged.
pub fn format_human_timestamp(value: &str) -> String {
    match parse_timestamp(value) {
        Some(dt) => {
            let local = dt.with_timezone(&Local);
            let day = format_relative_date(local.date_naive(), Local::now().date_naive());
            format!("{} at {}", day, local.format("%H:%M"))
        }
        None => value.to_string(),
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

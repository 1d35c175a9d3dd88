use chrono::{Duration, NaiveDate, Utc};
use taskaio::utils::datetime::*;

#[test]
fn test_now_iso8601_round_trips() {
    let stamp = now_iso8601();
    assert!(stamp.ends_with('Z'));
    let parsed = parse_timestamp(&stamp).unwrap();
    assert!((Utc::now() - parsed) < Duration::seconds(5));
}

#[test]
fn test_parse_timestamp_without_offset() {
    let parsed = parse_timestamp("2025-09-16T09:00:00").unwrap();
    assert_eq!(parsed.to_rfc3339(), "2025-09-16T09:00:00+00:00");
    assert!(parse_timestamp("yesterday").is_none());
}

#[test]
fn test_local_task_id_is_numeric() {
    let id = local_task_id();
    assert!(!id.is_empty());
    assert!(id.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_format_relative_date() {
    let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap(); // Wednesday
    assert_eq!(format_relative_date(today, today), "today");
    assert_eq!(format_relative_date(today - Duration::days(1), today), "yesterday");
    assert_eq!(format_relative_date(today + Duration::days(1), today), "tomorrow");
    assert_eq!(format_relative_date(today - Duration::days(3), today), "last Sunday");
    assert_eq!(format_relative_date(today - Duration::days(30), today), "2024-12-16");
}

#[test]
fn test_format_human_timestamp_passthrough() {
    assert_eq!(format_human_timestamp("garbage"), "garbage");
    assert!(format_human_timestamp(&now_iso8601()).starts_with("today at "));
}

mod common;
use chrono::{Datelike, Local, TimeZone, Weekday};
use common::at;
use zenlog::utils::date::{
    is_same_day, is_this_week, is_today, parse_timestamp, start_of_week, week_days_from,
};
use zenlog::errors::AppError;
use zenlog::utils::time::{
    average_minutes, duration_from_flags, format_duration, percentage, seconds_to_clock,
    seconds_to_minutes,
};

#[test]
fn same_day_ignores_time_of_day() {
    let late = at(2024, 1, 1, 23, 59);
    let early = at(2024, 1, 1, 0, 1);
    let next = at(2024, 1, 2, 0, 1);

    assert!(is_same_day(&late, &early));
    assert!(is_same_day(&early, &late));
    assert!(is_same_day(&late, &late));
    assert!(!is_same_day(&late, &next));
}

#[test]
fn same_day_is_not_a_24h_window() {
    // 2 hours apart across midnight
    assert!(!is_same_day(&at(2024, 3, 4, 23, 0), &at(2024, 3, 5, 1, 0)));
    // 23 hours apart within one day
    assert!(is_same_day(&at(2024, 3, 4, 0, 30), &at(2024, 3, 4, 23, 30)));
}

#[test]
fn parse_accepts_common_iso_shapes() {
    let expected = at(2024, 6, 10, 8, 30);
    assert_eq!(parse_timestamp("2024-06-10T08:30:00"), Some(expected));
    assert_eq!(parse_timestamp("2024-06-10T08:30"), Some(expected));
    assert_eq!(parse_timestamp("2024-06-10 08:30:00"), Some(expected));
    assert_eq!(parse_timestamp("2024-06-10T08:30:00.000"), Some(expected));
    assert_eq!(parse_timestamp("2024-06-10"), Some(at(2024, 6, 10, 0, 0)));
}

#[test]
fn parse_converts_offsets_to_local_time() {
    let local = Local
        .with_ymd_and_hms(2024, 6, 10, 12, 0, 0)
        .single()
        .expect("unambiguous local noon");
    let parsed = parse_timestamp(&local.to_rfc3339()).expect("rfc3339 parses");
    assert_eq!(parsed, at(2024, 6, 10, 12, 0));
}

#[test]
fn parse_rejects_garbage() {
    assert_eq!(parse_timestamp("yesterday"), None);
    assert_eq!(parse_timestamp(""), None);
    assert_eq!(parse_timestamp("2024-13-40"), None);
}

#[test]
fn is_today_uses_calendar_day() {
    let now = at(2024, 6, 10, 0, 5);
    assert!(is_today("2024-06-10T23:59:00", &now));
    assert!(!is_today("2024-06-09T23:59:00", &now));
    assert!(!is_today("not a date", &now));
}

#[test]
fn week_starts_on_sunday_midnight() {
    // Monday
    let now = at(2024, 6, 10, 10, 0);
    let start = start_of_week(&now);
    assert_eq!(start, at(2024, 6, 9, 0, 0));
    assert_eq!(start.weekday(), Weekday::Sun);

    // on a Sunday the week starts that same morning
    let sunday = at(2024, 6, 9, 18, 0);
    assert_eq!(start_of_week(&sunday), at(2024, 6, 9, 0, 0));

    // Saturday goes back six days
    let saturday = at(2024, 6, 15, 23, 0);
    assert_eq!(start_of_week(&saturday), at(2024, 6, 9, 0, 0));
}

#[test]
fn this_week_window_bounds() {
    let now = at(2024, 6, 10, 10, 0);
    assert!(is_this_week(&at(2024, 6, 9, 0, 0), &now));
    assert!(is_this_week(&at(2024, 6, 10, 20, 0), &now));
    assert!(!is_this_week(&at(2024, 6, 8, 23, 59), &now));
    assert!(!is_this_week(&at(2024, 6, 11, 0, 0), &now));
}

#[test]
fn week_days_start_with_today() {
    let days = week_days_from(&at(2024, 6, 12, 9, 0)); // Wednesday
    assert_eq!(days, vec!["Wed", "Thu", "Fri", "Sat", "Sun", "Mon", "Tue"]);
}

#[test]
fn minutes_round_half_up() {
    assert_eq!(seconds_to_minutes(0), 0);
    assert_eq!(seconds_to_minutes(29), 0);
    assert_eq!(seconds_to_minutes(30), 1);
    assert_eq!(seconds_to_minutes(89), 1);
    assert_eq!(seconds_to_minutes(90), 2);
    assert_eq!(seconds_to_minutes(-120), 0);
}

#[test]
fn averages_and_percentages_guard_zero() {
    assert_eq!(average_minutes(0, 0), 0);
    assert_eq!(average_minutes(900, 2), 8); // 7.5 → 8
    assert_eq!(percentage(5, 0), 0);
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
}

#[test]
fn durations_format_for_humans() {
    assert_eq!(format_duration(5), "5m");
    assert_eq!(format_duration(65), "1h 5m");
    assert_eq!(format_duration(120), "2h 0m");
    assert_eq!(seconds_to_clock(65), "1:05");
    assert_eq!(seconds_to_clock(0), "0:00");
}

#[test]
fn conversions_saturate_instead_of_overflowing() {
    assert_eq!(seconds_to_minutes(i64::MAX), i64::MAX / 60);
    assert_eq!(average_minutes(i64::MAX, 1), i64::MAX / 60);
    assert_eq!(percentage(i64::MAX, i64::MAX), 100);
    assert_eq!(percentage(i64::MAX / 2, i64::MAX), 50);
}

#[test]
fn oversized_duration_flags_are_rejected() {
    assert!(matches!(
        duration_from_flags(Some(i64::MAX / 10), None),
        Err(AppError::InvalidDuration(_))
    ));
    assert!(matches!(
        duration_from_flags(Some(1), Some(i64::MAX)),
        Err(AppError::InvalidDuration(_))
    ));
    assert!(matches!(
        duration_from_flags(None, None),
        Err(AppError::InvalidDuration(_))
    ));
    assert_eq!(duration_from_flags(Some(2), Some(5)).ok(), Some(125));
    assert_eq!(duration_from_flags(None, Some(45)).ok(), Some(45));
}

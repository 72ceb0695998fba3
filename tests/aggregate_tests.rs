mod common;
use common::{at, june_10, session};
use zenlog::{Clock, compute_distribution, compute_stats};
use zenlog::core::calculator::aggregate::{
    average_session_length, today_minutes, total_minutes, week_minutes,
};

#[test]
fn empty_list_is_all_zero() {
    let now = june_10().now();
    assert_eq!(total_minutes(&[]), 0);
    assert_eq!(today_minutes(&[], &now), 0);
    assert_eq!(week_minutes(&[], &now), 0);
    assert_eq!(average_session_length(&[]), 0);
}

#[test]
fn total_rounds_summed_seconds_once() {
    // 45s + 45s = 90s → 2 min (per-session rounding would give 1 + 1)
    let sessions = vec![
        session("a", "2024-06-01T08:00:00", 45, "focus"),
        session("b", "2024-06-02T08:00:00", 45, "focus"),
    ];
    assert_eq!(total_minutes(&sessions), 2);
}

#[test]
fn today_only_counts_todays_calendar_day() {
    let now = june_10().now();
    let sessions = vec![
        session("a", "2024-06-10T00:00:01", 600, "mindfulness"),
        session("b", "2024-06-10T23:59:00", 300, "breathing"),
        session("c", "2024-06-09T23:59:59", 1200, "mindfulness"),
    ];
    assert_eq!(today_minutes(&sessions, &now), 15);
}

#[test]
fn week_is_calendar_week_not_rolling() {
    // Wednesday 2024-06-12: the week began Sunday 06-09
    let now = at(2024, 6, 12, 12, 0);
    let sessions = vec![
        session("sun", "2024-06-09T07:00:00", 600, "focus"),
        session("wed", "2024-06-12T07:00:00", 600, "focus"),
        // Saturday: inside a rolling 7-day window, outside the calendar week
        session("sat", "2024-06-08T21:00:00", 600, "focus"),
    ];
    assert_eq!(week_minutes(&sessions, &now), 20);
}

#[test]
fn malformed_dates_are_excluded_from_windows_only() {
    let now = june_10().now();
    let sessions = vec![
        session("ok", "2024-06-10T08:00:00", 600, "focus"),
        session("bad", "garbage", 600, "focus"),
    ];
    assert_eq!(today_minutes(&sessions, &now), 10);
    assert_eq!(week_minutes(&sessions, &now), 10);
    assert_eq!(total_minutes(&sessions), 20);
    assert_eq!(average_session_length(&sessions), 10);
}

#[test]
fn negative_durations_are_clamped() {
    let sessions = vec![
        session("neg", "2024-06-10T08:00:00", -600, "focus"),
        session("pos", "2024-06-10T09:00:00", 600, "focus"),
    ];
    assert_eq!(total_minutes(&sessions), 10);
    assert_eq!(average_session_length(&sessions), 5);
}

#[test]
fn average_rounds_per_session_mean() {
    let sessions = vec![
        session("a", "2024-06-10T08:00:00", 300, "focus"),
        session("b", "2024-06-10T09:00:00", 600, "focus"),
    ];
    // 450s → 7.5 min → 8
    assert_eq!(average_session_length(&sessions), 8);
}

#[test]
fn total_dominates_today_and_week() {
    let now = june_10().now();
    let sessions = vec![
        session("a", "2024-06-10T08:00:00", 610, "focus"),
        session("b", "2024-06-09T08:00:00", 95, "breathing"),
        session("c", "2024-05-01T08:00:00", 1800, "focus"),
        session("d", "2024-06-11T08:00:00", 300, "focus"),
    ];
    let total = total_minutes(&sessions);
    assert!(total >= today_minutes(&sessions, &now));
    assert!(total >= week_minutes(&sessions, &now));
}

#[test]
fn huge_durations_do_not_overflow() {
    let now = june_10().now();
    let sessions = vec![
        session("a", "2024-06-10T08:00:00", i64::MAX, "focus"),
        session("b", "2024-06-10T09:00:00", i64::MAX, "breathing"),
    ];

    assert_eq!(total_minutes(&sessions), i64::MAX / 60);
    assert_eq!(today_minutes(&sessions, &now), i64::MAX / 60);
    assert_eq!(week_minutes(&sessions, &now), i64::MAX / 60);
    assert!(average_session_length(&sessions) > 0);

    let stats = compute_stats(&sessions, &now);
    assert_eq!(stats.total_minutes, i64::MAX / 60);

    let dist = compute_distribution(&sessions);
    assert_eq!(dist.len(), 2);
    assert_eq!(dist[0].percentage, 50);
    assert_eq!(dist[1].percentage, 50);
}

//! Calendar-day utilities: timestamp parsing, day identity, week window.
//!
//! Everything works on local wall-clock time (`NaiveDateTime`). Timestamps
//! carrying an offset are converted to the local zone first, so two
//! records compare by the day the user actually lived them.

use chrono::{DateTime, Datelike, Days, Local, NaiveDate, NaiveDateTime, NaiveTime};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse an ISO-8601 timestamp into local wall time.
///
/// Accepted: RFC 3339 with offset or `Z`, naive date-times with `T` or a
/// space separator, and a bare `YYYY-MM-DD` (midnight).
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local).naive_local());
    }

    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }

    parse_date(s).map(|d| d.and_time(NaiveTime::MIN))
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Same calendar day (year, month, day), regardless of time of day.
pub fn is_same_day(a: &NaiveDateTime, b: &NaiveDateTime) -> bool {
    a.date() == b.date()
}

/// Whether `date_str` falls on the same calendar day as `now`.
/// Unparseable input is never "today".
pub fn is_today(date_str: &str, now: &NaiveDateTime) -> bool {
    parse_timestamp(date_str).is_some_and(|d| is_same_day(&d, now))
}

/// Most recent Sunday 00:00:00 at or before `now`.
pub fn start_of_week(now: &NaiveDateTime) -> NaiveDateTime {
    let back = now.weekday().num_days_from_sunday() as u64;
    let sunday = now
        .date()
        .checked_sub_days(Days::new(back))
        .unwrap_or(NaiveDate::MIN);
    sunday.and_time(NaiveTime::MIN)
}

/// Calendar-week membership: from `start_of_week(now)` through the end of
/// `now`'s calendar day, so anything counted as today is also this week.
///
/// The week runs "Sunday 00:00 through now", with "now" read as the whole
/// current day: a session later today is still this week, so today ≤ week.
pub fn is_this_week(ts: &NaiveDateTime, now: &NaiveDateTime) -> bool {
    *ts >= start_of_week(now) && ts.date() <= now.date()
}

/// The calendar day before `d`; saturates at the minimum date.
pub fn previous_day(d: NaiveDate) -> NaiveDate {
    d.pred_opt().unwrap_or(d)
}

/// Short weekday label, Sunday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Weekday labels reordered to start with `now`'s weekday.
pub fn week_days_from(now: &NaiveDateTime) -> Vec<&'static str> {
    let start = now.weekday().num_days_from_sunday() as usize;
    (0..7).map(|i| WEEKDAY_LABELS[(start + i) % 7]).collect()
}

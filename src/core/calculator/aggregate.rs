//! Minute totals over the session list.
//!
//! Durations are summed in seconds and converted once at the end, so
//! `total_minutes` may differ from the sum of per-session minutes.

use crate::models::session::Session;
use crate::utils::date::{is_same_day, is_this_week};
use crate::utils::time::{average_minutes, seconds_to_minutes};
use chrono::NaiveDateTime;

fn sum_seconds<'a, I>(sessions: I) -> i64
where
    I: IntoIterator<Item = &'a Session>,
{
    sessions
        .into_iter()
        .map(Session::seconds)
        .fold(0, i64::saturating_add)
}

pub fn total_minutes(sessions: &[Session]) -> i64 {
    seconds_to_minutes(sum_seconds(sessions))
}

/// Minutes recorded on `now`'s calendar day.
pub fn today_minutes(sessions: &[Session], now: &NaiveDateTime) -> i64 {
    let today = sessions
        .iter()
        .filter(|s| s.timestamp().is_some_and(|ts| is_same_day(&ts, now)));
    seconds_to_minutes(sum_seconds(today))
}

/// Minutes recorded since Sunday 00:00 of the current calendar week.
/// Not a rolling 7-day window; see `weekly::rolling_week_chart` for that.
pub fn week_minutes(sessions: &[Session], now: &NaiveDateTime) -> i64 {
    let week = sessions
        .iter()
        .filter(|s| s.timestamp().is_some_and(|ts| is_this_week(&ts, now)));
    seconds_to_minutes(sum_seconds(week))
}

pub fn average_session_length(sessions: &[Session]) -> i64 {
    average_minutes(sum_seconds(sessions), sessions.len())
}

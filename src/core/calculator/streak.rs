//! Consecutive-day streaks.

use crate::models::session::Session;
use crate::utils::date::previous_day;
use chrono::{NaiveDate, NaiveDateTime};
use std::collections::BTreeSet;

/// Distinct calendar days that hold at least one session.
/// Sessions with an unparseable date are ignored.
pub fn session_days(sessions: &[Session]) -> BTreeSet<NaiveDate> {
    sessions
        .iter()
        .filter_map(Session::timestamp)
        .map(|ts| ts.date())
        .collect()
}

/// Current streak, counted backward from today.
///
/// A streak is still alive when today has no session yet but yesterday
/// does: in that case counting starts from yesterday.
pub fn current_streak(sessions: &[Session], now: &NaiveDateTime) -> u32 {
    if sessions.is_empty() {
        return 0;
    }

    let days = session_days(sessions);
    let today = now.date();
    let yesterday = previous_day(today);

    let on_today = days.contains(&today);
    let on_yesterday = days.contains(&yesterday);

    if !on_today && !on_yesterday {
        return 0;
    }

    let mut streak = u32::from(on_today);
    let mut cursor = yesterday;

    while days.contains(&cursor) {
        streak += 1;
        let prev = previous_day(cursor);
        if prev == cursor {
            break;
        }
        cursor = prev;
    }

    streak
}

/// Longest run of consecutive calendar days anywhere in the history.
pub fn longest_streak(sessions: &[Session]) -> u32 {
    let days = session_days(sessions);

    let mut best = 0u32;
    let mut run = 0u32;
    let mut last: Option<NaiveDate> = None;

    for day in days {
        run = match last {
            Some(prev) if prev.succ_opt() == Some(day) => run + 1,
            _ => 1,
        };
        best = best.max(run);
        last = Some(day);
    }

    best
}

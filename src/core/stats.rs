//! Stats façade: one snapshot from the session list.

use crate::core::calculator::{aggregate, distribution, streak};
use crate::models::session::Session;
use crate::models::stats::{AppStats, TypeShare};
use chrono::{NaiveDate, NaiveDateTime};

/// Compute every aggregate at once. Pure and deterministic.
pub fn compute_stats(sessions: &[Session], now: &NaiveDateTime) -> AppStats {
    AppStats {
        total_minutes: aggregate::total_minutes(sessions),
        total_today: aggregate::today_minutes(sessions, now),
        minutes_this_week: aggregate::week_minutes(sessions, now),
        current_streak: streak::current_streak(sessions, now),
        longest_streak: streak::longest_streak(sessions),
        average_session_length: aggregate::average_session_length(sessions),
    }
}

pub fn compute_distribution(sessions: &[Session]) -> Vec<TypeShare> {
    distribution::compute_distribution(sessions)
}

/// Memoized snapshot keyed by the owner's revision counter and the
/// calendar day it was computed on.
///
/// The day is part of the key because today/week/streak values change at
/// midnight even if the list does not.
#[derive(Debug, Default)]
pub struct StatsCache {
    key: Option<(u64, NaiveDate)>,
    value: AppStats,
}

impl StatsCache {
    pub fn get_or_compute(
        &mut self,
        revision: u64,
        sessions: &[Session],
        now: &NaiveDateTime,
    ) -> AppStats {
        let key = (revision, now.date());
        if self.key != Some(key) {
            self.value = compute_stats(sessions, now);
            self.key = Some(key);
        }
        self.value
    }

    pub fn invalidate(&mut self) {
        self.key = None;
    }

    pub fn is_fresh(&self, revision: u64, now: &NaiveDateTime) -> bool {
        self.key == Some((revision, now.date()))
    }
}

use crate::models::session::Session;
use crate::models::stats::DayMinutes;
use crate::utils::date::{WEEKDAY_LABELS, week_days_from};
use crate::utils::time::seconds_to_minutes;
use chrono::{Datelike, Duration, NaiveDateTime};

/// Per-weekday minutes over the rolling last 7 days (`now - 7d` .. `now`),
/// ordered starting with today's weekday.
///
/// This window differs from `aggregate::week_minutes`, which counts the
/// calendar week since Sunday. A session exactly 7 days old shares its
/// weekday with today and is added to today's bar.
pub fn rolling_week_chart(sessions: &[Session], now: &NaiveDateTime) -> Vec<DayMinutes> {
    let since = *now - Duration::days(7);
    let mut by_weekday = [0i64; 7];

    for s in sessions {
        let Some(ts) = s.timestamp() else {
            continue;
        };
        if ts >= since && ts <= *now {
            let idx = ts.weekday().num_days_from_sunday() as usize;
            by_weekday[idx] = by_weekday[idx].saturating_add(seconds_to_minutes(s.duration));
        }
    }

    week_days_from(now)
        .into_iter()
        .map(|day| {
            let idx = WEEKDAY_LABELS.iter().position(|d| *d == day).unwrap_or(0);
            DayMinutes {
                day,
                minutes: by_weekday[idx],
            }
        })
        .collect()
}

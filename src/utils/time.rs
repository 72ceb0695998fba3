//! Duration utilities: seconds → minutes rounding, human-readable formatting.

use crate::errors::{AppError, AppResult};

/// Convert seconds to whole minutes, rounding half up (90s → 2).
/// Negative input is clamped to zero.
pub fn seconds_to_minutes(seconds: i64) -> i64 {
    seconds.max(0).saturating_add(30) / 60
}

/// `round(total_seconds / count / 60)` in integer arithmetic; 0 when
/// `count` is zero.
pub fn average_minutes(total_seconds: i64, count: usize) -> i64 {
    if count == 0 {
        return 0;
    }
    // i128 so that `2 * total` cannot overflow
    let total = i128::from(total_seconds.max(0));
    let denom = count as i128 * 60;
    narrow((2 * total + denom) / (2 * denom))
}

/// Percentage `part / whole * 100`, rounded half up; 0 when `whole` is 0.
pub fn percentage(part: i64, whole: i64) -> i64 {
    if whole <= 0 {
        return 0;
    }
    let (part, whole) = (i128::from(part.max(0)), i128::from(whole));
    narrow((200 * part + whole) / (2 * whole))
}

fn narrow(v: i128) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

/// `"1h 5m"` when there are hours, `"5m"` otherwise.
pub fn format_duration(minutes: i64) -> String {
    let m = minutes.max(0);
    let (hours, mins) = (m / 60, m % 60);
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

/// Timer display: `"m:ss"`.
pub fn seconds_to_clock(seconds: i64) -> String {
    let s = seconds.max(0);
    format!("{}:{:02}", s / 60, s % 60)
}

/// Parse the `add` duration flags into seconds.
pub fn duration_from_flags(minutes: Option<i64>, seconds: Option<i64>) -> AppResult<i64> {
    if minutes.is_none() && seconds.is_none() {
        return Err(AppError::InvalidDuration(
            "use --minutes or --seconds".to_string(),
        ));
    }

    let total = minutes
        .unwrap_or(0)
        .checked_mul(60)
        .and_then(|m| m.checked_add(seconds.unwrap_or(0)))
        .ok_or_else(|| AppError::InvalidDuration("duration is too large".to_string()))?;

    if total < 0 {
        return Err(AppError::InvalidDuration(total.to_string()));
    }
    Ok(total)
}

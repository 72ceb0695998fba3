use serde::Serialize;

/// Snapshot of the derived statistics. Always a pure function of the
/// session list; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppStats {
    pub total_minutes: i64,
    pub total_today: i64,
    pub minutes_this_week: i64,
    pub current_streak: u32,
    pub longest_streak: u32,
    pub average_session_length: i64,
}

/// One row of the per-type distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeShare {
    #[serde(rename = "type")]
    pub kind: String,
    pub minutes: i64,
    pub percentage: i64,
}

/// Minutes for one weekday bar of the rolling weekly chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayMinutes {
    /// Short weekday label ("Sun".."Sat").
    pub day: &'static str,
    pub minutes: i64,
}

use super::mood::Mood;
use crate::utils::date::parse_timestamp;
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU32, Ordering};

/// One completed meditation session.
///
/// Field names follow the JSON layout the mobile app persisted
/// (`moodBefore`, `moodAfter`, `type`), so exported files stay
/// interchangeable with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    /// ISO-8601 completion timestamp, kept verbatim.
    pub date: String,
    /// Elapsed seconds.
    pub duration: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub mood_before: Mood,
    pub mood_after: Mood,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Session {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        duration: i64,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            duration,
            kind: kind.into(),
            mood_before: Mood::default(),
            mood_after: Mood::default(),
            notes: None,
        }
    }

    pub fn with_moods(mut self, before: Mood, after: Mood) -> Self {
        self.mood_before = before;
        self.mood_after = after;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Parsed local timestamp, `None` when `date` is malformed.
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.date)
    }

    /// Duration with negative values clamped to zero.
    pub fn seconds(&self) -> i64 {
        self.duration.max(0)
    }

    /// Mood change over the session (after - before).
    pub fn mood_delta(&self) -> i64 {
        self.mood_after.value() as i64 - self.mood_before.value() as i64
    }
}

static ID_COUNTER: AtomicU32 = AtomicU32::new(0);

/// Generate a session/journal id as `<unix-millis>-<pid>-<counter>`.
///
/// The pid keeps ids apart when two CLI runs start in the same millisecond.
pub fn generate_id() -> String {
    let millis = Local::now().timestamp_millis();
    let pid = std::process::id();
    let n = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{millis}-{pid}-{n}")
}

use crate::models::meditation_type::MeditationType;
use crate::models::session::Session;
use serde::Serialize;

/// Flat row for CSV export: one column per field, notes always present.
#[derive(Serialize, Clone, Debug)]
pub struct SessionExport {
    pub id: String,
    pub date: String,
    pub duration_seconds: i64,
    pub minutes: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub type_name: String,
    pub mood_before: u8,
    pub mood_after: u8,
    pub notes: String,
}

impl From<&Session> for SessionExport {
    fn from(s: &Session) -> Self {
        Self {
            id: s.id.clone(),
            date: s.date.clone(),
            duration_seconds: s.seconds(),
            minutes: crate::utils::time::seconds_to_minutes(s.duration),
            kind: s.kind.clone(),
            type_name: MeditationType::display_name(&s.kind),
            mood_before: s.mood_before.value(),
            mood_after: s.mood_after.value(),
            notes: s.notes.clone().unwrap_or_default(),
        }
    }
}

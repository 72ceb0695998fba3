use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: String,
    pub date: String, // ISO-8601, creation time
    pub title: String,
    pub content: String,
}

impl JournalEntry {
    pub fn new(
        id: impl Into<String>,
        date: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            date: date.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

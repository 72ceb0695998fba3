use crate::core::app_data::AppData;
use crate::core::store::{JournalStore, SessionStore};
use crate::errors::AppResult;
use crate::models::session::Session;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub skipped: usize,
}

pub struct ImportLogic;

impl ImportLogic {
    /// Parse a JSON array of sessions: the layout written by `export
    /// --format json` and by the mobile app's local storage.
    pub fn parse(content: &str) -> AppResult<Vec<Session>> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn import_file<S: SessionStore + JournalStore>(
        app: &mut AppData<S>,
        path: &Path,
    ) -> AppResult<ImportReport> {
        let content = fs::read_to_string(path)?;
        let sessions = Self::parse(&content)?;
        app.import_sessions(sessions, &path.to_string_lossy())
    }
}

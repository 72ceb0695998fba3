//! Persistence contract for sessions and journal entries.
//!
//! The calculators never touch storage; `AppData` loads the lists once and
//! writes them back after every mutation through these traits.

use crate::errors::AppResult;
use crate::models::journal::JournalEntry;
use crate::models::session::Session;

pub trait SessionStore {
    /// All sessions, newest first.
    fn load_sessions(&self) -> AppResult<Vec<Session>>;

    /// Replace the stored list with `sessions`.
    fn save_sessions(&mut self, sessions: &[Session]) -> AppResult<()>;

    /// Audit hook for mutating operations. No-op by default.
    fn record(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

pub trait JournalStore {
    fn load_entries(&self) -> AppResult<Vec<JournalEntry>>;
    fn save_entries(&mut self, entries: &[JournalEntry]) -> AppResult<()>;
}

/// In-memory store. Counts saves so callers can check write-back.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub sessions: Vec<Session>,
    pub entries: Vec<JournalEntry>,
    pub saves: usize,
}

impl MemoryStore {
    pub fn with_sessions(sessions: Vec<Session>) -> Self {
        Self {
            sessions,
            ..Self::default()
        }
    }
}

impl SessionStore for MemoryStore {
    fn load_sessions(&self) -> AppResult<Vec<Session>> {
        Ok(self.sessions.clone())
    }

    fn save_sessions(&mut self, sessions: &[Session]) -> AppResult<()> {
        self.sessions = sessions.to_vec();
        self.saves += 1;
        Ok(())
    }
}

impl JournalStore for MemoryStore {
    fn load_entries(&self) -> AppResult<Vec<JournalEntry>> {
        Ok(self.entries.clone())
    }

    fn save_entries(&mut self, entries: &[JournalEntry]) -> AppResult<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }
}

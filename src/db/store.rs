//! SQLite-backed implementation of the store traits.

use crate::core::store::{JournalStore, SessionStore};
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::journal::JournalEntry;
use crate::models::session::Session;

pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Open `path`, running pending migrations first.
    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::open_ready(path)?))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl SessionStore for SqliteStore {
    fn load_sessions(&self) -> AppResult<Vec<Session>> {
        queries::load_sessions(&self.pool.conn)
    }

    fn save_sessions(&mut self, sessions: &[Session]) -> AppResult<()> {
        queries::replace_sessions(&mut self.pool.conn, sessions)
    }

    fn record(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        write_log(&self.pool.conn, operation, target, message)
    }
}

impl JournalStore for SqliteStore {
    fn load_entries(&self) -> AppResult<Vec<JournalEntry>> {
        queries::load_journal(&self.pool.conn)
    }

    fn save_entries(&mut self, entries: &[JournalEntry]) -> AppResult<()> {
        queries::replace_journal(&mut self.pool.conn, entries)
    }
}

use crate::core::calculator::weekly;
use crate::core::clock::Clock;
use crate::core::import::ImportReport;
use crate::core::stats::{StatsCache, compute_distribution};
use crate::core::store::{JournalStore, SessionStore};
use crate::errors::{AppError, AppResult};
use crate::models::journal::JournalEntry;
use crate::models::session::Session;
use crate::models::stats::{AppStats, DayMinutes, TypeShare};

/// Owner of the session list and journal.
///
/// Every mutation builds the new list, writes it to the store and only then
/// swaps it in and bumps `revision`; a failed save leaves the in-memory
/// state untouched. Statistics are recomputed only when the revision (or
/// the calendar day) changed since the last call.
pub struct AppData<S> {
    store: S,
    sessions: Vec<Session>,
    entries: Vec<JournalEntry>,
    revision: u64,
    cache: StatsCache,
}

impl<S: SessionStore + JournalStore> AppData<S> {
    pub fn load(store: S) -> AppResult<Self> {
        let sessions = store.load_sessions()?;
        let entries = store.load_entries()?;
        Ok(Self {
            store,
            sessions,
            entries,
            revision: 0,
            cache: StatsCache::default(),
        })
    }

    pub fn sessions(&self) -> &[Session] {
        &self.sessions
    }

    pub fn journal_entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    // ------------------------------------------------
    // Sessions
    // ------------------------------------------------

    /// Record a completed session (prepended, newest first).
    pub fn add_session(&mut self, session: Session) -> AppResult<()> {
        if self.sessions.iter().any(|s| s.id == session.id) {
            return Err(AppError::DuplicateSession(session.id));
        }

        let target = session.id.clone();
        let message = format!("{} {}s", session.kind, session.seconds());

        let mut next = Vec::with_capacity(self.sessions.len() + 1);
        next.push(session);
        next.extend(self.sessions.iter().cloned());

        self.commit_sessions(next)?;
        self.store.record("add", &target, &message)?;
        Ok(())
    }

    /// Merge `incoming` into the list, skipping ids already present (and
    /// repeated ids within `incoming`). The merged list is re-sorted newest
    /// first; unparseable dates sink to the end.
    pub fn import_sessions(
        &mut self,
        incoming: Vec<Session>,
        source: &str,
    ) -> AppResult<ImportReport> {
        let mut report = ImportReport::default();
        let mut next = self.sessions.clone();

        for s in incoming {
            if next.iter().any(|e| e.id == s.id) {
                report.skipped += 1;
            } else {
                next.push(s);
                report.added += 1;
            }
        }

        if report.added == 0 {
            return Ok(report);
        }

        next.sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
        self.commit_sessions(next)?;
        self.store.record(
            "import",
            source,
            &format!("{} sessions added, {} skipped", report.added, report.skipped),
        )?;
        Ok(report)
    }

    pub fn stats(&mut self, clock: &dyn Clock) -> AppStats {
        let now = clock.now();
        self.cache.get_or_compute(self.revision, &self.sessions, &now)
    }

    pub fn stats_are_fresh(&self, clock: &dyn Clock) -> bool {
        self.cache.is_fresh(self.revision, &clock.now())
    }

    pub fn distribution(&self) -> Vec<TypeShare> {
        compute_distribution(&self.sessions)
    }

    pub fn weekly_chart(&self, clock: &dyn Clock) -> Vec<DayMinutes> {
        weekly::rolling_week_chart(&self.sessions, &clock.now())
    }

    // ------------------------------------------------
    // Journal
    // ------------------------------------------------

    pub fn add_journal_entry(&mut self, entry: JournalEntry) -> AppResult<()> {
        let target = entry.id.clone();
        let message = entry.title.clone();

        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(entry);
        next.extend(self.entries.iter().cloned());

        self.commit_entries(next)?;
        self.store.record("journal_add", &target, &message)?;
        Ok(())
    }

    pub fn update_journal_entry(&mut self, entry: JournalEntry) -> AppResult<()> {
        let mut next = self.entries.clone();
        let slot = next
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| AppError::JournalEntryNotFound(entry.id.clone()))?;

        let target = entry.id.clone();
        let message = entry.title.clone();
        *slot = entry;

        self.commit_entries(next)?;
        self.store.record("journal_edit", &target, &message)?;
        Ok(())
    }

    pub fn delete_journal_entry(&mut self, id: &str) -> AppResult<()> {
        let next: Vec<JournalEntry> = self
            .entries
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();

        if next.len() == self.entries.len() {
            return Err(AppError::JournalEntryNotFound(id.to_string()));
        }

        self.commit_entries(next)?;
        self.store.record("journal_del", id, "Journal entry deleted")?;
        Ok(())
    }

    // ------------------------------------------------
    // Reset
    // ------------------------------------------------

    /// Drop every session and journal entry.
    pub fn reset_all(&mut self) -> AppResult<()> {
        let removed = self.sessions.len();
        let removed_entries = self.entries.len();

        self.commit_sessions(Vec::new())?;
        self.commit_entries(Vec::new())?;
        self.cache.invalidate();

        self.store.record(
            "reset",
            "",
            &format!("Removed {removed} sessions and {removed_entries} journal entries"),
        )?;
        Ok(())
    }

    // ------------------------------------------------
    // Write-back
    // ------------------------------------------------

    /// Persist `next`, then make it the current list.
    fn commit_sessions(&mut self, next: Vec<Session>) -> AppResult<()> {
        self.store.save_sessions(&next)?;
        self.sessions = next;
        self.revision += 1;
        Ok(())
    }

    fn commit_entries(&mut self, next: Vec<JournalEntry>) -> AppResult<()> {
        self.store.save_entries(&next)?;
        self.entries = next;
        Ok(())
    }
}

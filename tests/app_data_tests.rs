mod common;
use common::{at, june_10, session, sessions_on};
use std::io;
use zenlog::core::app_data::AppData;
use zenlog::core::import::ImportLogic;
use zenlog::core::store::{JournalStore, MemoryStore, SessionStore};
use zenlog::errors::{AppError, AppResult};
use zenlog::models::journal::JournalEntry;
use zenlog::models::session::{Session, generate_id};
use zenlog::FixedClock;

fn app_with(days: &[&str]) -> AppData<MemoryStore> {
    AppData::load(MemoryStore::with_sessions(sessions_on(days))).expect("load")
}

/// Store that loads normally but refuses every write.
struct ReadOnlyStore(MemoryStore);

fn disk_full() -> AppError {
    AppError::Io(io::Error::other("disk full"))
}

impl SessionStore for ReadOnlyStore {
    fn load_sessions(&self) -> AppResult<Vec<Session>> {
        self.0.load_sessions()
    }

    fn save_sessions(&mut self, _sessions: &[Session]) -> AppResult<()> {
        Err(disk_full())
    }
}

impl JournalStore for ReadOnlyStore {
    fn load_entries(&self) -> AppResult<Vec<JournalEntry>> {
        self.0.load_entries()
    }

    fn save_entries(&mut self, _entries: &[JournalEntry]) -> AppResult<()> {
        Err(disk_full())
    }
}

fn read_only_app(days: &[&str]) -> AppData<ReadOnlyStore> {
    let mut store = MemoryStore::with_sessions(sessions_on(days));
    store.entries = vec![JournalEntry::new("j1", "2024-06-10", "t", "c")];
    AppData::load(ReadOnlyStore(store)).expect("load")
}

#[test]
fn add_prepends_and_writes_back() {
    let mut app = app_with(&["2024-06-09"]);
    app.add_session(session("new", "2024-06-10T08:00:00", 600, "focus"))
        .expect("add");

    assert_eq!(app.sessions()[0].id, "new");
    assert_eq!(app.sessions().len(), 2);
    assert_eq!(app.revision(), 1);
    assert_eq!(app.store().sessions.len(), 2);
    assert_eq!(app.store().saves, 1);
}

#[test]
fn duplicate_id_is_rejected() {
    let mut app = app_with(&["2024-06-09"]);
    let err = app
        .add_session(session("s0", "2024-06-10T08:00:00", 600, "focus"))
        .unwrap_err();

    assert!(matches!(err, AppError::DuplicateSession(id) if id == "s0"));
    assert_eq!(app.sessions().len(), 1);
    assert_eq!(app.revision(), 0);
}

#[test]
fn stats_are_cached_until_the_list_changes() {
    let clock = june_10();
    let mut app = app_with(&["2024-06-09"]);

    assert!(!app.stats_are_fresh(&clock));
    let before = app.stats(&clock);
    assert!(app.stats_are_fresh(&clock));
    assert_eq!(before.current_streak, 1);

    app.add_session(session("today", "2024-06-10T08:00:00", 600, "focus"))
        .expect("add");
    assert!(!app.stats_are_fresh(&clock));

    let after = app.stats(&clock);
    assert_eq!(after.current_streak, 2);
    assert_eq!(after.total_minutes, before.total_minutes + 10);
}

#[test]
fn cache_expires_at_midnight() {
    let mut app = app_with(&["2024-06-10"]);
    let monday = FixedClock(at(2024, 6, 10, 23, 59));
    let tuesday = FixedClock(at(2024, 6, 11, 0, 1));

    assert_eq!(app.stats(&monday).total_today, 10);
    assert!(!app.stats_are_fresh(&tuesday));
    assert_eq!(app.stats(&tuesday).total_today, 0);
    assert_eq!(app.stats(&tuesday).current_streak, 1);
}

#[test]
fn journal_crud_round() {
    let mut app = app_with(&[]);
    app.add_journal_entry(JournalEntry::new("j1", "2024-06-10T08:00:00", "Calm", "Slept well"))
        .expect("add entry");
    app.add_journal_entry(JournalEntry::new("j2", "2024-06-10T09:00:00", "Busy", "Short sit"))
        .expect("add entry");
    assert_eq!(app.journal_entries()[0].id, "j2");

    app.update_journal_entry(JournalEntry::new("j1", "2024-06-10T08:00:00", "Calmer", "Edited"))
        .expect("update");
    let j1 = app
        .journal_entries()
        .iter()
        .find(|e| e.id == "j1")
        .expect("j1 present");
    assert_eq!(j1.title, "Calmer");

    app.delete_journal_entry("j2").expect("delete");
    assert_eq!(app.journal_entries().len(), 1);
    assert_eq!(app.store().entries.len(), 1);
}

#[test]
fn journal_unknown_ids_fail() {
    let mut app = app_with(&[]);

    let err = app.delete_journal_entry("missing").unwrap_err();
    assert!(matches!(err, AppError::JournalEntryNotFound(_)));

    let err = app
        .update_journal_entry(JournalEntry::new("missing", "2024-06-10", "t", "c"))
        .unwrap_err();
    assert!(matches!(err, AppError::JournalEntryNotFound(_)));
}

#[test]
fn journal_changes_do_not_touch_stats_revision() {
    let mut app = app_with(&["2024-06-10"]);
    app.add_journal_entry(JournalEntry::new("j1", "2024-06-10", "t", "c"))
        .expect("add entry");
    assert_eq!(app.revision(), 0);
}

#[test]
fn reset_clears_everything() {
    let clock = june_10();
    let mut app = app_with(&["2024-06-10", "2024-06-09"]);
    app.add_journal_entry(JournalEntry::new("j1", "2024-06-10", "t", "c"))
        .expect("add entry");
    let _ = app.stats(&clock);

    app.reset_all().expect("reset");

    assert!(app.sessions().is_empty());
    assert!(app.journal_entries().is_empty());
    assert!(app.store().sessions.is_empty());
    assert!(app.store().entries.is_empty());
    assert_eq!(app.stats(&clock), Default::default());
}

#[test]
fn import_merges_and_skips_known_ids() {
    let mut app = app_with(&["2024-06-09"]);
    let incoming = vec![
        session("s0", "2024-06-09T08:00:00", 600, "mindfulness"),
        session("x1", "2024-06-10T07:00:00", 300, "breathing"),
        session("x2", "2024-06-01T07:00:00", 300, "sleep"),
        session("x1", "2024-06-10T07:00:00", 300, "breathing"),
    ];

    let report = app.import_sessions(incoming, "test").expect("import");

    assert_eq!(report.added, 2);
    assert_eq!(report.skipped, 2);
    let ids: Vec<&str> = app.sessions().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["x1", "s0", "x2"]);
    assert_eq!(app.revision(), 1);
}

#[test]
fn import_with_nothing_new_is_a_no_op() {
    let mut app = app_with(&["2024-06-09"]);
    let report = app
        .import_sessions(sessions_on(&["2024-06-09"]), "test")
        .expect("import");

    assert_eq!(report.added, 0);
    assert_eq!(report.skipped, 1);
    assert_eq!(app.revision(), 0);
    assert_eq!(app.store().saves, 0);
}

#[test]
fn import_parses_app_json_layout() {
    let json = r#"[
        {"id":"1718000000000","date":"2024-06-10T08:00:00.000Z","duration":600,
         "type":"mindfulness","moodBefore":2,"moodAfter":4,"notes":"quiet"},
        {"id":"1718000000001","date":"2024-06-09T08:00:00.000Z","duration":300,
         "type":"sleep","moodBefore":3,"moodAfter":3}
    ]"#;

    let sessions = ImportLogic::parse(json).expect("parse");
    assert_eq!(sessions.len(), 2);
    assert_eq!(sessions[0].kind, "mindfulness");
    assert_eq!(sessions[0].mood_delta(), 2);
    assert_eq!(sessions[0].notes.as_deref(), Some("quiet"));
    assert_eq!(sessions[1].notes, None);
}

#[test]
fn import_rejects_malformed_json() {
    assert!(matches!(
        ImportLogic::parse("{not json"),
        Err(AppError::Json(_))
    ));
}

#[test]
fn failed_save_leaves_sessions_untouched() {
    let clock = june_10();
    let mut app = read_only_app(&["2024-06-10", "2024-06-09"]);
    let before = app.stats(&clock);

    let add = app.add_session(session("new", "2024-06-08T08:00:00", 600, "focus"));
    assert!(matches!(add, Err(AppError::Io(_))));

    let incoming = vec![session("x1", "2024-06-01T07:00:00", 300, "focus")];
    let import = app.import_sessions(incoming, "test");
    assert!(import.is_err());

    assert!(app.reset_all().is_err());

    let ids: Vec<&str> = app.sessions().iter().map(|s| s.id.as_str()).collect();
    assert_eq!(ids, vec!["s0", "s1"]);
    assert_eq!(app.revision(), 0);
    assert!(app.stats_are_fresh(&clock));
    assert_eq!(app.stats(&clock), before);
}

#[test]
fn failed_save_leaves_journal_untouched() {
    let mut app = read_only_app(&[]);

    assert!(app
        .add_journal_entry(JournalEntry::new("j2", "2024-06-10", "t", "c"))
        .is_err());
    assert!(app
        .update_journal_entry(JournalEntry::new("j1", "2024-06-10", "edited", "c"))
        .is_err());
    assert!(app.delete_journal_entry("j1").is_err());

    assert_eq!(app.journal_entries().len(), 1);
    assert_eq!(app.journal_entries()[0].title, "t");
}

#[test]
fn imported_out_of_range_moods_load_as_neutral() {
    let json = r#"[
        {"id":"m1","date":"2024-06-10T08:00:00","duration":600,
         "type":"mindfulness","moodBefore":9,"moodAfter":0}
    ]"#;

    let sessions = ImportLogic::parse(json).expect("parse");
    assert_eq!(sessions[0].mood_before.value(), 3);
    assert_eq!(sessions[0].mood_after.value(), 3);
    assert_eq!(sessions[0].mood_delta(), 0);

    let mut app = app_with(&[]);
    app.import_sessions(sessions, "test").expect("import");
    assert_eq!(app.store().sessions[0].mood_before.value(), 3);
}

#[test]
fn generated_ids_are_unique_and_carry_the_pid() {
    let a = generate_id();
    let b = generate_id();
    assert_ne!(a, b);
    assert!(a.contains(&format!("-{}-", std::process::id())));
}

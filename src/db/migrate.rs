use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// A schema step, applied once and recorded in `log`.
struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20240601_0001_create_sessions",
        description: "Created sessions table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS sessions (
            id           TEXT PRIMARY KEY,
            date         TEXT NOT NULL,
            duration     INTEGER NOT NULL DEFAULT 0,
            type         TEXT NOT NULL,
            mood_before  INTEGER NOT NULL DEFAULT 3,
            mood_after   INTEGER NOT NULL DEFAULT 3,
            notes        TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_sessions_date ON sessions(date);
        "#,
    },
    Migration {
        version: "20240601_0002_create_journal",
        description: "Created journal_entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS journal_entries (
            id        TEXT PRIMARY KEY,
            date      TEXT NOT NULL,
            title     TEXT NOT NULL DEFAULT '',
            content   TEXT NOT NULL DEFAULT '',
            position  INTEGER NOT NULL DEFAULT 0
        );
        "#,
    },
    Migration {
        version: "20240915_0003_add_session_position",
        description: "Added position column to sessions",
        sql: r#"
        ALTER TABLE sessions ADD COLUMN position INTEGER NOT NULL DEFAULT 0;
        CREATE INDEX IF NOT EXISTS idx_sessions_position ON sessions(position);
        "#,
    },
];

/// Ensure that the `log` table exists; it also tracks applied migrations.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)?;
    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;

    tx.commit()
}

/// Versions recorded as applied, in order.
pub fn applied_versions(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(
        "SELECT target FROM log WHERE operation = 'migration_applied' ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;
    rows.collect()
}

/// Public entry point: run all pending migrations.
///
/// Called by `db::initialize::init_db()`. Returns how many were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        success(format!("Migration applied: {}", m.version));
        applied += 1;
    }

    Ok(applied)
}

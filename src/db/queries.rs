use crate::errors::AppResult;
use crate::models::journal::JournalEntry;
use crate::models::mood::Mood;
use crate::models::session::Session;
use rusqlite::{Connection, Result, Row, params};

const SESSION_COLUMNS: &str = "id, date, duration, type, mood_before, mood_after, notes";

pub fn map_session(row: &Row) -> Result<Session> {
    // moods are stored as-is; out-of-range values fall back to neutral
    let before: i64 = row.get("mood_before")?;
    let after: i64 = row.get("mood_after")?;

    Ok(Session {
        id: row.get("id")?,
        date: row.get("date")?,
        duration: row.get("duration")?,
        kind: row.get("type")?,
        mood_before: Mood::new(before).unwrap_or_default(),
        mood_after: Mood::new(after).unwrap_or_default(),
        notes: row.get("notes")?,
    })
}

/// All sessions in list order (position 0 = newest).
pub fn load_sessions(conn: &Connection) -> AppResult<Vec<Session>> {
    let sql = format!("SELECT {SESSION_COLUMNS} FROM sessions ORDER BY position ASC, date DESC");
    let mut stmt = conn.prepare(&sql)?;

    let rows = stmt.query_map([], map_session)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Replace the whole sessions table with `sessions`, keeping their order.
pub fn replace_sessions(conn: &mut Connection, sessions: &[Session]) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM sessions", [])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO sessions (id, date, duration, type, mood_before, mood_after, notes, position)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        )?;

        for (pos, s) in sessions.iter().enumerate() {
            stmt.execute(params![
                s.id,
                s.date,
                s.duration,
                s.kind,
                s.mood_before.value(),
                s.mood_after.value(),
                s.notes,
                pos as i64,
            ])?;
        }
    }

    tx.commit()?;
    Ok(())
}

// ------------------------------------------------
// Journal
// ------------------------------------------------

pub fn load_journal(conn: &Connection) -> AppResult<Vec<JournalEntry>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, title, content FROM journal_entries ORDER BY position ASC, date DESC",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(JournalEntry {
            id: row.get(0)?,
            date: row.get(1)?,
            title: row.get(2)?,
            content: row.get(3)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn replace_journal(conn: &mut Connection, entries: &[JournalEntry]) -> AppResult<()> {
    let tx = conn.transaction()?;
    tx.execute("DELETE FROM journal_entries", [])?;

    {
        let mut stmt = tx.prepare(
            "INSERT INTO journal_entries (id, date, title, content, position)
             VALUES (?1, ?2, ?3, ?4, ?5)",
        )?;

        for (pos, e) in entries.iter().enumerate() {
            stmt.execute(params![e.id, e.date, e.title, e.content, pos as i64])?;
        }
    }

    tx.commit()?;
    Ok(())
}

use crate::cli::commands::open_app;
use crate::cli::parser::{Commands, JournalAction};
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::journal::JournalEntry;
use crate::models::session::generate_id;
use crate::ui::messages::{header, info, success};
use crate::utils::date::parse_timestamp;
use crate::utils::table::{Column, Table};
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Journal { action } = cmd else {
        return Ok(());
    };

    let mut app = open_app(cfg)?;

    match action {
        JournalAction::Add {
            title,
            content,
            date,
        } => {
            let date = match date {
                Some(d) => {
                    parse_timestamp(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                    d.clone()
                }
                None => Local::now().to_rfc3339(),
            };

            let entry = JournalEntry::new(generate_id(), date, title.clone(), content.clone());
            let id = entry.id.clone();
            app.add_journal_entry(entry)?;
            success(format!("Journal entry added: {}", id));
        }

        JournalAction::Edit { id, title, content } => {
            let current = app
                .journal_entries()
                .iter()
                .find(|e| &e.id == id)
                .cloned()
                .ok_or_else(|| AppError::JournalEntryNotFound(id.clone()))?;

            let updated = JournalEntry {
                title: title.clone().unwrap_or(current.title),
                content: content.clone().unwrap_or(current.content),
                ..current
            };
            app.update_journal_entry(updated)?;
            success(format!("Journal entry updated: {}", id));
        }

        JournalAction::Del { id } => {
            app.delete_journal_entry(id)?;
            success(format!("Journal entry deleted: {}", id));
        }

        JournalAction::List => {
            let entries = app.journal_entries();
            if entries.is_empty() {
                info("The journal is empty.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 18),
                Column::new("DATE", 16),
                Column::new("TITLE", 40),
            ]);
            for e in entries {
                table.add_row(vec![e.id.clone(), short_date(&e.date), e.title.clone()]);
            }
            print!("{}", table.render());
        }

        JournalAction::View { id } => {
            let entry = app
                .journal_entries()
                .iter()
                .find(|e| &e.id == id)
                .ok_or_else(|| AppError::JournalEntryNotFound(id.clone()))?;

            header(&entry.title);
            println!("{}\n", short_date(&entry.date));
            println!("{}", entry.content);
        }
    }

    Ok(())
}

fn short_date(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

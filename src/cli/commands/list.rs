use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::{Clock, SystemClock};
use crate::errors::AppResult;
use crate::models::meditation_type::MeditationType;
use crate::models::session::Session;
use crate::ui::messages::info;
use crate::utils::date::is_today;
use crate::utils::table::{Column, Table};
use crate::utils::time::seconds_to_clock;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { today, kind } = cmd {
        let app = open_app(cfg)?;
        let now = SystemClock.now();

        let sessions: Vec<&Session> = app
            .sessions()
            .iter()
            .filter(|s| !*today || is_today(&s.date, &now))
            .filter(|s| kind.as_ref().is_none_or(|k| &s.kind == k))
            .collect();

        if sessions.is_empty() {
            info("No sessions found.");
            return Ok(());
        }

        print!("{}", render_sessions(&sessions));
        println!("{} session(s)", sessions.len());
    }
    Ok(())
}

fn render_sessions(sessions: &[&Session]) -> String {
    let mut table = Table::new(vec![
        Column::new("DATE", 16),
        Column::new("TYPE", 16),
        Column::new("TIME", 8),
        Column::new("MOOD", 10),
        Column::new("NOTES", 30),
    ]);

    for s in sessions {
        let date = s
            .timestamp()
            .map(|ts| ts.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| s.date.clone());

        let mood = format!("{}→{} ({:+})", s.mood_before, s.mood_after, s.mood_delta());

        table.add_row(vec![
            date,
            MeditationType::display_name(&s.kind),
            seconds_to_clock(s.seconds()),
            mood,
            s.notes.clone().unwrap_or_default(),
        ]);
    }

    table.render()
}

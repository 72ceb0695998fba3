use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::errors::{AppError, AppResult};
use crate::models::meditation_type::MeditationType;
use crate::models::mood::Mood;
use crate::models::session::{Session, generate_id};
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_timestamp;
use crate::utils::time::{duration_from_flags, format_duration, seconds_to_clock};
use chrono::Local;

/// Record a completed session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        minutes,
        seconds,
        kind,
        date,
        before,
        after,
        notes,
        id,
    } = cmd
    {
        //
        // 1. Validate input before touching the DB
        //
        let duration = duration_from_flags(*minutes, *seconds)?;
        let mood_before = Mood::new(*before)?;
        let mood_after = Mood::new(*after)?;

        let date = match date {
            Some(d) => {
                parse_timestamp(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?;
                d.clone()
            }
            None => Local::now().to_rfc3339(),
        };

        let kind = kind.clone().unwrap_or_else(|| cfg.default_type.clone());
        if MeditationType::by_id(&kind).is_none() {
            warning(format!("Unknown meditation type '{}', recorded as-is.", kind));
        }

        let mut session = Session::new(
            id.clone().unwrap_or_else(generate_id),
            date,
            duration,
            kind,
        )
        .with_moods(mood_before, mood_after);

        if let Some(n) = notes {
            session = session.with_notes(n.clone());
        }

        //
        // 2. Persist and report
        //
        let mut app = open_app(cfg)?;
        let label = format!(
            "{} ({}) recorded as {}",
            MeditationType::display_name(&session.kind),
            seconds_to_clock(session.seconds()),
            session.id
        );
        app.add_session(session)?;

        let stats = app.stats(&SystemClock);
        success(label);
        println!(
            "   Today: {} of {} · Streak: {} day(s)",
            format_duration(stats.total_today),
            format_duration(cfg.daily_goal_minutes),
            stats.current_streak
        );
    }

    Ok(())
}

use crate::cli::commands::open_app;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::errors::AppResult;
use crate::models::meditation_type::MeditationType;
use crate::models::stats::{AppStats, DayMinutes, TypeShare};
use crate::ui::messages::{header, info};
use crate::utils::colors::{BLUE, CYAN, MAGENTA, RESET, color_for_streak, colorize_optional};
use crate::utils::time::{format_duration, percentage};
use serde::Serialize;

const BAR_WIDTH: usize = 20;

#[derive(Serialize)]
struct StatsReport<'a> {
    stats: AppStats,
    distribution: &'a [TypeShare],
    weekly: &'a [DayMinutes],
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { json, today } = cmd {
        let mut app = open_app(cfg)?;
        let stats = app.stats(&SystemClock);
        let distribution = app.distribution();
        let weekly = app.weekly_chart(&SystemClock);

        if *json {
            let report = StatsReport {
                stats,
                distribution: &distribution,
                weekly: &weekly,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        print_today(&stats, cfg.daily_goal_minutes);
        if *today {
            return Ok(());
        }

        println!();
        print_overview(&stats);

        println!();
        header("Meditation types");
        if distribution.is_empty() {
            info("No meditation data available.");
        } else {
            print_distribution(&distribution, cfg.distribution_top);
        }

        println!();
        header("Last 7 days");
        print_weekly(&weekly);
    }

    Ok(())
}

fn bar(filled_pct: i64) -> String {
    let filled = (filled_pct.clamp(0, 100) as usize * BAR_WIDTH) / 100;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn print_today(stats: &AppStats, goal: i64) {
    header("Today");
    let pct = percentage(stats.total_today, goal);
    println!(
        "{}{}{} {} / {} ({}%)",
        BLUE,
        bar(pct),
        RESET,
        colorize_optional(&format_duration(stats.total_today)),
        format_duration(goal),
        pct
    );

    let color = color_for_streak(stats.current_streak);
    println!(
        "🔥 {}{} day streak{}  {}",
        color,
        stats.current_streak,
        RESET,
        if stats.current_streak > 0 {
            "Keep the flame alive!"
        } else {
            "Begin your journey today."
        }
    );
}

fn print_overview(stats: &AppStats) {
    header("Overview");
    let rows = [
        ("Total time", format_duration(stats.total_minutes)),
        ("This week", format!("{} mins", stats.minutes_this_week)),
        ("Current streak", format!("{} days", stats.current_streak)),
        ("Longest streak", format!("{} days", stats.longest_streak)),
        (
            "Average session",
            format!("{} mins", stats.average_session_length),
        ),
    ];

    for (label, value) in rows {
        println!("{}{:<16}{} {}", CYAN, label, RESET, value);
    }
}

fn print_distribution(distribution: &[TypeShare], top: usize) {
    for share in distribution.iter().take(top) {
        println!(
            "{:<16} {:>5} mins {}{}{} {:>3}%",
            MeditationType::display_name(&share.kind),
            share.minutes,
            MAGENTA,
            bar(share.percentage),
            RESET,
            share.percentage
        );
    }

    if distribution.len() > top {
        info(format!("{} more type(s) not shown", distribution.len() - top));
    }
}

fn print_weekly(weekly: &[DayMinutes]) {
    // scale against at least 20 minutes so short days stay visible
    let max = weekly.iter().map(|d| d.minutes).max().unwrap_or(0).max(20);

    for d in weekly {
        println!(
            "{} {}{}{} {}",
            d.day,
            BLUE,
            bar(percentage(d.minutes, max)),
            RESET,
            colorize_optional(&format!("{}m", d.minutes))
        );
    }
}

#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use zenlog::Session;
use zenlog::core::clock::FixedClock;

/// zenlog binary with HOME pointed at a scratch directory, so no real
/// user configuration is read.
pub fn zen() -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push("zenlog_test_home");
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("zenlog");
    cmd.env("HOME", home);
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_zenlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a test DB via the CLI.
pub fn init_db(db_path: &str) {
    zen()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Record one session via the CLI.
pub fn add_session(db_path: &str, date: &str, minutes: &str, kind: &str) {
    zen()
        .args([
            "--db", db_path, "add", "--minutes", minutes, "--type", kind, "--date", date,
        ])
        .assert()
        .success();
}

pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .expect("valid test date")
}

/// The reference clock used across the streak scenarios: Monday 2024-06-10, 10:00.
pub fn june_10() -> FixedClock {
    FixedClock(at(2024, 6, 10, 10, 0))
}

pub fn session(id: &str, date: &str, seconds: i64, kind: &str) -> Session {
    Session::new(id, date, seconds, kind)
}

/// One 10-minute mindfulness session at 08:00 on each given day.
pub fn sessions_on(days: &[&str]) -> Vec<Session> {
    days.iter()
        .enumerate()
        .map(|(i, d)| session(&format!("s{i}"), &format!("{d}T08:00:00"), 600, "mindfulness"))
        .collect()
}

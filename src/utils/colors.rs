/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Streak color: grey when broken, yellow while building, green from a week on.
pub fn color_for_streak(days: u32) -> &'static str {
    match days {
        0 => GREY,
        1..=6 => YELLOW,
        _ => GREEN,
    }
}

/// Grey out empty or zero values.
///
/// Example:
/// `colorize_optional("0m")` → "<grey>0m<reset>"
pub fn colorize_optional(value: &str) -> String {
    let v = value.trim();
    if v.is_empty() || v == "--" || v == "0m" || v == "0" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

//! ANSI color helper utilities for terminal output.
use crate::models::day_status::DayStatus;
use crate::ui::theme;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const WHITE: &str = "\x1b[37m";
pub const BLACK: &str = "\x1b[30m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";

/// Bright variants used when the dark-mode preference is on.
pub const BRIGHT_RED: &str = "\x1b[91m";
pub const BRIGHT_GREEN: &str = "\x1b[92m";
pub const BRIGHT_YELLOW: &str = "\x1b[93m";
pub const BRIGHT_BLUE: &str = "\x1b[94m";

/// Color of a day status label:
/// Posted → blue, Submitted → yellow, Accepted → green, Rejected → red
pub fn color_for_status(status: DayStatus) -> &'static str {
    let dark = theme::is_dark();
    match (status, dark) {
        (DayStatus::Posted, false) => BLUE,
        (DayStatus::Posted, true) => BRIGHT_BLUE,
        (DayStatus::Submitted, false) => YELLOW,
        (DayStatus::Submitted, true) => BRIGHT_YELLOW,
        (DayStatus::Accepted, false) => GREEN,
        (DayStatus::Accepted, true) => BRIGHT_GREEN,
        (DayStatus::Rejected, false) => RED,
        (DayStatus::Rejected, true) => BRIGHT_RED,
    }
}

/// Text color for table bodies.
pub fn foreground() -> &'static str {
    if theme::is_dark() { WHITE } else { BLACK }
}

/// Returns colored formatting of an optional value; empty cells and
/// placeholders are greyed out.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_status(status: DayStatus) -> String {
    format!("{}{}{RESET}", color_for_status(status), status)
}

//! ANSI color helper utilities for terminal output.

use crate::core::calendar::MealStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Not started → grey, started → green, ending soon → yellow, ended → red.
pub fn color_for_status(status: MealStatus) -> &'static str {
    match status {
        MealStatus::NotStarted => GREY,
        MealStatus::Started => GREEN,
        MealStatus::EndingSoon => YELLOW,
        MealStatus::Ended => RED,
    }
}

/// Paused cells are red, eaten cells green.
pub fn colorize_cell(value: &str, paused: bool) -> String {
    if paused {
        format!("{RED}{value}{RESET}")
    } else {
        format!("{GREEN}{value}{RESET}")
    }
}

/// Greys out cancelled or past records.
pub fn colorize_inactive(value: &str, active: bool) -> String {
    if active {
        value.to_string()
    } else {
        format!("{GREY}{value}{RESET}")
    }
}

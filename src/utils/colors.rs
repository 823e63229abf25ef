//! ANSI color helper utilities for terminal output.

use crate::models::{EventStatus, Money};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const REVERSE: &str = "\x1b[7m";

pub fn color_for_status(status: EventStatus) -> &'static str {
    match status {
        EventStatus::Pending => YELLOW,
        EventStatus::Confirmed => BLUE,
        EventStatus::Completed => GREEN,
        EventStatus::Cancelled => GREY,
    }
}

/// Green for a positive amount, red for a negative one.
pub fn color_for_margin(value: Money) -> &'static str {
    if value.is_sign_positive() && !value.is_zero() {
        GREEN
    } else if value.is_sign_negative() && !value.is_zero() {
        RED
    } else {
        RESET
    }
}

/// Grey out empty or placeholder values.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

/// Grey out placeholder values ("-" or blank) in detail output.
pub fn colorize_empty(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Grey parenthetical note appended to counts lines.
pub fn dim(value: &str) -> String {
    format!("{GREY}{value}{RESET}")
}

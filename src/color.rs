//! Terminal color utilities using ANSI escape codes.

/// ANSI color codes
pub mod codes {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";

    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
}

use codes::*;

/// Color a completed-task line (green).
pub fn done(text: &str) -> String {
    format!("{}{}{}", GREEN, text, RESET)
}

/// Color an overdue-deadline line (red + bold).
pub fn overdue(text: &str) -> String {
    format!("{}{}{}{}", BOLD, RED, text, RESET)
}

/// Color a task number (cyan).
pub fn number(n: usize) -> String {
    format!("{}{}{}", CYAN, n, RESET)
}

/// Color a heading (bold).
pub fn label(text: &str) -> String {
    format!("{}{}{}", BOLD, text, RESET)
}

/// Color informational text (cyan).
pub fn info(text: &str) -> String {
    format!("{}{}{}", CYAN, text, RESET)
}

/// Color a date or other secondary detail (dim).
pub fn detail(text: &str) -> String {
    format!("{}{}{}", DIM, text, RESET)
}

/// Color an error message (yellow; fatal errors go to stderr uncolored).
pub fn error(text: &str) -> String {
    format!("{}{}{}", YELLOW, text, RESET)
}

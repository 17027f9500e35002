//! CLI output helpers for consistent formatting.

use colored::Colorize;

pub fn success(text: &str) -> String {
    format!("{}", text.bright_green())
}

pub fn muted(text: &str) -> String {
    format!("{}", text.bright_black())
}

pub fn warning(text: &str) -> String {
    format!("{}", text.yellow())
}

pub fn err_line(text: &str) -> String {
    format!("{} {}", "Error".red().bold(), text)
}

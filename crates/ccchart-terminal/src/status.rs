//! Coloured status lines
//!
//! Short messages telling the user what just happened (report loaded,
//! filter applied, something went wrong). They go to stderr so that
//! stdout only ever carries the chart itself.

use colored::Colorize;

/// Kind of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Info,
}

/// Render a status line
pub fn status_line(message: &str, kind: StatusKind) -> String {
    match kind {
        StatusKind::Success => format!("{} {}", "✔".green().bold(), message),
        StatusKind::Error => format!("{} {}", "✘".red().bold(), message.red()),
        StatusKind::Info => format!("{} {}", "ℹ".blue().bold(), message),
    }
}

/// Print a status line to stderr
pub fn print_status(message: &str, kind: StatusKind) {
    eprintln!("{}", status_line(message, kind));
}

//! User-facing status reporting.
//!
//! Diagnostics go through `tracing`; this sink is the channel for messages
//! meant for the person running the tool.

use std::fmt;
use std::io::Write;

use console::{Style, Term};

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    Info,
    Progress,
    Warn,
    Error,
    /// Logged, then the process terminates.
    Fatal,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Progress => "PROGRESS",
            Severity::Warn => "WARNING",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }

    fn style(self) -> Style {
        match self {
            Severity::Info => Style::new().green(),
            Severity::Progress => Style::new().blue(),
            Severity::Warn => Style::new().yellow(),
            Severity::Error => Style::new().red(),
            Severity::Fatal => Style::new().magenta().bold(),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Destination for severity-tagged status messages.
pub trait LogSink: Send + Sync {
    fn log(&self, message: &str, severity: Severity);

    fn info(&self, message: &str) {
        self.log(message, Severity::Info);
    }

    fn progress(&self, message: &str) {
        self.log(message, Severity::Progress);
    }

    fn warn(&self, message: &str) {
        self.log(message, Severity::Warn);
    }

    fn error(&self, message: &str) {
        self.log(message, Severity::Error);
    }
}

/// Sink that drops every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl LogSink for NullSink {
    fn log(&self, _message: &str, _severity: Severity) {}
}

/// Colored console sink. Errors go to stderr, everything else to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    quiet: bool,
}

/// Exit code used after a [`Severity::Fatal`] message.
pub const FATAL_EXIT_CODE: i32 = 1;

impl ConsoleSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Suppress `Info` and `Progress` messages.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn format(message: &str, severity: Severity) -> String {
        format!("  [{}]: {}", severity.style().apply_to(severity.label()), message)
    }
}

impl LogSink for ConsoleSink {
    fn log(&self, message: &str, severity: Severity) {
        let line = Self::format(message, severity);
        match severity {
            Severity::Info | Severity::Progress => {
                if !self.quiet {
                    let _ = Term::stdout().write_line(&line);
                }
            }
            Severity::Warn => {
                let _ = Term::stdout().write_line(&line);
            }
            Severity::Error => {
                let _ = Term::stderr().write_line(&line);
            }
            Severity::Fatal => {
                let _ = Term::stderr().write_line(&line);
                let _ = std::io::stderr().flush();
                std::process::exit(FATAL_EXIT_CODE);
            }
        }
    }
}

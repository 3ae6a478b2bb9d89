//! Console handler implementation

use crate::core::{Formatter, Handled, Handler, HandlerCore, Level, LoggerError, Record, Result};
use colored::{ColoredString, Colorize};
use serde::{Deserialize, Serialize};
use std::io::{self, Write};

/// Standard stream a [`ConsoleHandler`] writes to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
}

impl ConsoleTarget {
    fn as_str(self) -> &'static str {
        match self {
            ConsoleTarget::Stdout => "stdout",
            ConsoleTarget::Stderr => "stderr",
        }
    }
}

/// Writes formatted records to the console, colored by level.
///
/// Colors go through the `colored` crate, which honors `NO_COLOR`,
/// `CLICOLOR` and `CLICOLOR_FORCE`.
///
/// ```
/// use rust_chain_logger::{ConsoleHandler, ConsoleTarget, Level};
///
/// let handler = ConsoleHandler::new(Level::Info)
///     .with_target(ConsoleTarget::Stderr)
///     .with_colors(false);
/// ```
pub struct ConsoleHandler {
    core: HandlerCore,
    target: ConsoleTarget,
    use_colors: bool,
}

impl ConsoleHandler {
    pub fn new(level: Level) -> Self {
        Self {
            core: HandlerCore::new(level),
            target: ConsoleTarget::default(),
            use_colors: true,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    /// Stop dispatch after this handler when `bubble` is false
    #[must_use]
    pub fn with_bubble(mut self, bubble: bool) -> Self {
        self.core = self.core.with_bubble(bubble);
        self
    }

    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.core = self.core.with_formatter(formatter);
        self
    }

    #[must_use]
    pub fn with_boxed_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.core = self.core.with_boxed_formatter(formatter);
        self
    }

    pub fn set_level(&self, level: Level) {
        self.core.set_level(level);
    }

    /// Stream records are written to; standard output unless changed
    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    pub fn set_bubble(&self, bubble: bool) {
        self.core.set_bubble(bubble);
    }

    fn render(&self, level: Level, formatted: &str) -> String {
        if !self.use_colors {
            return formatted.to_string();
        }

        // Keep the reset sequence ahead of the line break
        let line = formatted.trim_end_matches('\n');
        let newline = &formatted[line.len()..];
        format!("{}{}", paint(level, line), newline)
    }

    fn write(&self, level: Level, formatted: &str) -> Result<()> {
        let output = self.render(level, formatted);
        let result = match self.target {
            ConsoleTarget::Stdout => io::stdout().lock().write_all(output.as_bytes()),
            ConsoleTarget::Stderr => io::stderr().lock().write_all(output.as_bytes()),
        };
        result.map_err(|e| LoggerError::write_failed(self.target.as_str(), e))
    }
}

/// Apply the fixed per-level console style
pub fn paint(level: Level, text: &str) -> ColoredString {
    match level {
        Level::Emergency => text.bold().on_red(),
        Level::Alert => text.bold().magenta(),
        Level::Critical => text.bold().blue(),
        Level::Error => text.bold().red(),
        Level::Warning => text.bold().yellow(),
        Level::Info => text.bold().cyan(),
        Level::Notice | Level::Debug => text.bold().green(),
    }
}

impl Handler for ConsoleHandler {
    fn name(&self) -> &str {
        "console"
    }

    fn level(&self) -> Level {
        self.core.level()
    }

    fn handle(&self, record: &Record) -> Handled {
        self.core
            .process(record, |formatted| self.write(record.level, formatted))
    }

    fn flush(&self) -> Result<()> {
        let result = match self.target {
            ConsoleTarget::Stdout => io::stdout().flush(),
            ConsoleTarget::Stderr => io::stderr().flush(),
        };
        result.map_err(|e| LoggerError::write_failed(self.target.as_str(), e))
    }
}

//! Log record structure

use super::level::Level;
use chrono::{DateTime, Local};
use serde::Serialize;

/// A single logging event, built by the [`Logger`](super::Logger) once per call
/// and lent to every handler in the chain.
///
/// Records carry no rendered text: each handler formats into its own buffer,
/// so one handler's output never leaks into the next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub level: Level,
    pub level_name: &'static str,
    pub message: String,
    pub channel: String,
    pub datetime: DateTime<Local>,
}

impl Record {
    pub fn new(level: Level, message: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            level,
            level_name: level.as_str(),
            message: message.into(),
            channel: channel.into(),
            datetime: Local::now(),
        }
    }

    /// Replace the capture time, e.g. when replaying recorded events
    #[must_use]
    pub fn with_datetime(mut self, datetime: DateTime<Local>) -> Self {
        self.datetime = datetime;
        self
    }
}

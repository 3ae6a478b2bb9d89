//! Log level definitions

use super::error::{LoggerError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a record, from least (`Debug`) to most (`Emergency`) severe.
///
/// Levels compare by their numeric code, so `record.level >= threshold`
/// reads as "at least this severe".
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
#[repr(i32)]
pub enum Level {
    #[default]
    Debug = 100,
    Info = 200,
    Notice = 250,
    Warning = 300,
    Error = 400,
    Critical = 500,
    Alert = 550,
    Emergency = 600,
}

impl Level {
    /// Every level, least severe first.
    pub const ALL: [Level; 8] = [
        Level::Debug,
        Level::Info,
        Level::Notice,
        Level::Warning,
        Level::Error,
        Level::Critical,
        Level::Alert,
        Level::Emergency,
    ];

    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Resolve a numeric code to one of the eight defined levels.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::UnknownLevel`] for any other value.
    pub fn from_code(code: i32) -> Result<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|level| level.code() == code)
            .ok_or(LoggerError::UnknownLevel(code))
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Notice => "NOTICE",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
            Level::Alert => "ALERT",
            Level::Emergency => "EMERGENCY",
        }
    }
}

/// Get the name of a numeric logging level.
///
/// # Examples
///
/// ```
/// use rust_chain_logger::{get_level_name, Level};
///
/// assert_eq!(get_level_name(Level::Notice.code()).unwrap(), "NOTICE");
/// assert!(get_level_name(99).is_err());
/// ```
pub fn get_level_name(code: i32) -> Result<&'static str> {
    Level::from_code(code).map(Level::as_str)
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Level::Debug),
            "INFO" => Ok(Level::Info),
            "NOTICE" => Ok(Level::Notice),
            "WARNING" | "WARN" => Ok(Level::Warning),
            "ERROR" => Ok(Level::Error),
            "CRITICAL" | "CRIT" => Ok(Level::Critical),
            "ALERT" => Ok(Level::Alert),
            "EMERGENCY" | "EMERG" => Ok(Level::Emergency),
            _ => Err(format!("Invalid log level: '{}'", s)),
        }
    }
}

impl TryFrom<i32> for Level {
    type Error = LoggerError;

    fn try_from(code: i32) -> Result<Self> {
        Level::from_code(code)
    }
}

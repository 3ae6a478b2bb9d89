//! Declarative logger configuration
//!
//! A [`LoggerConfig`] describes a logger and its handler chain as plain data,
//! so it can live in a JSON file next to the rest of an application's
//! settings.
//!
//! ```
//! use rust_chain_logger::LoggerConfig;
//!
//! let config = LoggerConfig::from_json(r#"{
//!     "name": "api",
//!     "level": "INFO",
//!     "handlers": [
//!         { "type": "console", "level": "ERROR", "bubble": false },
//!         { "type": "rotating_file", "path": "/tmp/api.log", "level": "DEBUG" }
//!     ]
//! }"#).unwrap();
//!
//! let logger = config.build().unwrap();
//! assert_eq!(logger.get_handlers().len(), 2);
//! ```

use super::error::{LoggerError, Result};
use super::formatter::{Formatter, JsonFormatter, LineFormatter};
use super::handler::Handler;
use super::level::Level;
use super::logger::Logger;
use super::timestamp::TimestampFormat;
use crate::handlers::file::{DEFAULT_DATE_FORMAT, DEFAULT_FILENAME_FORMAT};
use crate::handlers::{ConsoleHandler, ConsoleTarget, FileHandler, RotatingFileHandler};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

fn default_true() -> bool {
    true
}

fn default_filename_format() -> String {
    DEFAULT_FILENAME_FORMAT.to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Which formatter a configured handler uses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FormatterSpec {
    #[default]
    Line,
    Json,
}

impl FormatterSpec {
    fn build(&self, timestamp_format: Option<&TimestampFormat>) -> Box<dyn Formatter> {
        match self {
            FormatterSpec::Line => {
                let mut formatter = LineFormatter::new();
                if let Some(format) = timestamp_format {
                    formatter = formatter.with_timestamp_format(format.clone());
                }
                Box::new(formatter)
            }
            FormatterSpec::Json => {
                let mut formatter = JsonFormatter::new();
                if let Some(format) = timestamp_format {
                    formatter = formatter.with_timestamp_format(format.clone());
                }
                Box::new(formatter)
            }
        }
    }
}

/// One entry of the handler chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HandlerSpec {
    Console {
        #[serde(default)]
        level: Level,
        #[serde(default = "default_true")]
        bubble: bool,
        #[serde(default = "default_true")]
        colors: bool,
        #[serde(default)]
        target: ConsoleTarget,
        #[serde(default)]
        formatter: FormatterSpec,
        #[serde(default)]
        timestamp_format: Option<TimestampFormat>,
    },
    File {
        path: PathBuf,
        #[serde(default)]
        level: Level,
        #[serde(default = "default_true")]
        bubble: bool,
        #[serde(default)]
        rotate: bool,
        #[serde(default = "default_filename_format")]
        filename_format: String,
        #[serde(default = "default_date_format")]
        date_format: String,
        #[serde(default)]
        formatter: FormatterSpec,
        #[serde(default)]
        timestamp_format: Option<TimestampFormat>,
    },
    RotatingFile {
        path: PathBuf,
        #[serde(default)]
        level: Level,
        #[serde(default = "default_true")]
        bubble: bool,
        #[serde(default = "default_filename_format")]
        filename_format: String,
        #[serde(default = "default_date_format")]
        date_format: String,
        #[serde(default)]
        formatter: FormatterSpec,
        #[serde(default)]
        timestamp_format: Option<TimestampFormat>,
    },
}

impl HandlerSpec {
    /// Instantiate the described handler
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty file path
    /// or an empty filename pattern.
    pub fn build(&self) -> Result<Arc<dyn Handler>> {
        match self {
            HandlerSpec::Console {
                level,
                bubble,
                colors,
                target,
                formatter,
                timestamp_format,
            } => Ok(Arc::new(
                ConsoleHandler::new(*level)
                    .with_bubble(*bubble)
                    .with_colors(*colors)
                    .with_target(*target)
                    .with_boxed_formatter(formatter.build(timestamp_format.as_ref())),
            )),
            HandlerSpec::File {
                path,
                level,
                bubble,
                rotate,
                filename_format,
                date_format,
                formatter,
                timestamp_format,
            } => {
                validate_file("FileHandler", path, filename_format)?;
                Ok(Arc::new(
                    FileHandler::new(path.clone(), *level)
                        .with_bubble(*bubble)
                        .with_rotation(*rotate)
                        .with_filename_format(filename_format.clone())
                        .with_date_format(date_format.clone())
                        .with_boxed_formatter(formatter.build(timestamp_format.as_ref())),
                ))
            }
            HandlerSpec::RotatingFile {
                path,
                level,
                bubble,
                filename_format,
                date_format,
                formatter,
                timestamp_format,
            } => {
                validate_file("RotatingFileHandler", path, filename_format)?;
                Ok(Arc::new(
                    RotatingFileHandler::new(path.clone(), *level)
                        .with_bubble(*bubble)
                        .with_filename_format(filename_format.clone())
                        .with_date_format(date_format.clone())
                        .with_boxed_formatter(formatter.build(timestamp_format.as_ref())),
                ))
            }
        }
    }
}

fn validate_file(component: &str, path: &std::path::Path, filename_format: &str) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(LoggerError::config(component, "path must not be empty"));
    }
    if filename_format.trim().is_empty() {
        return Err(LoggerError::config(
            component,
            "filename_format must not be empty",
        ));
    }
    Ok(())
}

/// A logger and its handler chain, front to back
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default)]
    pub handlers: Vec<HandlerSpec>,
}

fn default_name() -> String {
    crate::global::DEFAULT_CHANNEL.to_string()
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            level: Level::default(),
            handlers: Vec::new(),
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build a logger whose chain order matches `handlers`
    pub fn build(&self) -> Result<Logger> {
        let handlers = self
            .handlers
            .iter()
            .map(HandlerSpec::build)
            .collect::<Result<Vec<_>>>()?;

        let logger = Logger::new(self.name.clone(), self.level);
        logger.set_handlers(handlers);
        Ok(logger)
    }
}

//! Core logger types and traits

pub mod config;
pub mod error;
pub mod formatter;
pub mod handler;
pub mod level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod timestamp;

pub use config::{FormatterSpec, HandlerSpec, LoggerConfig};
pub use error::{LoggerError, Result};
pub use formatter::{Formatter, JsonFormatter, LineFormatter};
pub use handler::{Handled, Handler, HandlerCore};
pub use level::{get_level_name, Level};
pub use logger::{ErrorSink, Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::Record;
pub use timestamp::TimestampFormat;

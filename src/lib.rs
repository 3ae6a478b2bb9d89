//! # Rust Chain Logger
//!
//! A leveled logging library that routes every record through an ordered
//! chain of handlers.
//!
//! ## Features
//!
//! - **Eight Levels**: DEBUG through EMERGENCY, compared by severity
//! - **Handler Chain**: console, file and daily rotating file handlers, tried
//!   front to back; a handler with `bubble = false` stops the walk
//! - **Pluggable Formatters**: line and JSON formatters, or your own
//! - **Fire and Forget**: dispatch errors go to an error sink, never to the caller
//! - **Thread Safe**: loggers are `Send + Sync` and can be shared via `Arc`
//!
//! ## Example
//!
//! ```
//! use rust_chain_logger::prelude::*;
//! use rust_chain_logger::info;
//!
//! let logger = Logger::new("app", Level::Debug);
//! logger.push_handler(ConsoleHandler::new(Level::Info));
//!
//! info!(logger, "listening on port {}", 8080);
//! logger.debug("filtered out by the console handler");
//! ```

pub mod core;
pub mod global;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::core::{
        get_level_name, ErrorSink, Formatter, Handled, Handler, HandlerCore, JsonFormatter, Level,
        LineFormatter, Logger, LoggerBuilder, LoggerConfig, LoggerError, LoggerMetrics, Record,
        Result, TimestampFormat,
    };
    pub use crate::global::{default_logger, set_default_logger};
    pub use crate::handlers::{ConsoleHandler, ConsoleTarget, FileHandler, RotatingFileHandler};
}

pub use crate::core::{
    get_level_name, ErrorSink, Formatter, FormatterSpec, Handled, Handler, HandlerCore,
    HandlerSpec, JsonFormatter, Level, LineFormatter, Logger, LoggerBuilder, LoggerConfig,
    LoggerError, LoggerMetrics, Record, Result, TimestampFormat,
};
pub use global::{
    alert, crit, debug, default_logger, emerg, error, info, notice, set_default_logger, warn,
    DEFAULT_CHANNEL,
};
pub use handlers::{ConsoleHandler, ConsoleTarget, FileHandler, RotatingFileHandler};

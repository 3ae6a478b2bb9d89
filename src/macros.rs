//! Logging macros for ergonomic log message formatting.
//!
//! The macros forward `format_args!` to [`Logger::add_record`], so the message
//! is only rendered when some handler in the chain accepts the level.
//!
//! [`Logger::add_record`]: crate::Logger::add_record
//!
//! # Examples
//!
//! ```
//! use rust_chain_logger::prelude::*;
//! use rust_chain_logger::{info, warn};
//!
//! let logger = Logger::new("server", Level::Debug);
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! warn!(logger, "{} of {} workers busy", 7, 8);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use rust_chain_logger::prelude::*;
/// # let logger = Logger::new("app", Level::Debug);
/// use rust_chain_logger::log;
/// log!(logger, Level::Info, "Simple message");
/// log!(logger, Level::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.add_record($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)+)
    };
}

/// Log a notice-level message.
#[macro_export]
macro_rules! notice {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Notice, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_chain_logger::prelude::*;
/// # let logger = Logger::new("app", Level::Debug);
/// use rust_chain_logger::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! crit {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Critical, $($arg)+)
    };
}

/// Log an alert-level message.
#[macro_export]
macro_rules! alert {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Alert, $($arg)+)
    };
}

/// Log an emergency-level message.
///
/// # Examples
///
/// ```
/// # use rust_chain_logger::prelude::*;
/// # let logger = Logger::new("app", Level::Debug);
/// use rust_chain_logger::emerg;
/// emerg!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! emerg {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Level::Emergency, $($arg)+)
    };
}

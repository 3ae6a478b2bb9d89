//! Process-wide default logger
//!
//! The default instance is created on first use (channel `"develop"`,
//! threshold DEBUG, empty chain) and can be swapped at any time with
//! [`set_default_logger`]. Callers holding an `Arc` to a previous default
//! keep using it unaffected.
//!
//! ```
//! use rust_chain_logger::{default_logger, Level};
//!
//! rust_chain_logger::info("started");
//! assert_eq!(default_logger().name(), "develop");
//! ```

use crate::core::{Level, Logger};
use parking_lot::RwLock;
use std::sync::{Arc, OnceLock};

/// Channel name of the implicit default logger
pub const DEFAULT_CHANNEL: &str = "develop";

fn slot() -> &'static RwLock<Arc<Logger>> {
    static DEFAULT: OnceLock<RwLock<Arc<Logger>>> = OnceLock::new();
    DEFAULT.get_or_init(|| RwLock::new(Arc::new(Logger::new(DEFAULT_CHANNEL, Level::Debug))))
}

/// Get the default Logger
pub fn default_logger() -> Arc<Logger> {
    slot().read().clone()
}

/// Replace the default Logger, returning the previous one
pub fn set_default_logger(logger: Arc<Logger>) -> Arc<Logger> {
    std::mem::replace(&mut *slot().write(), logger)
}

/// Adds a record at the DEBUG level to the default logger.
pub fn debug(message: impl Into<String>) {
    default_logger().debug(message);
}

/// Adds a record at the INFO level to the default logger.
pub fn info(message: impl Into<String>) {
    default_logger().info(message);
}

/// Adds a record at the NOTICE level to the default logger.
pub fn notice(message: impl Into<String>) {
    default_logger().notice(message);
}

/// Adds a record at the WARNING level to the default logger.
pub fn warn(message: impl Into<String>) {
    default_logger().warn(message);
}

/// Adds a record at the ERROR level to the default logger.
pub fn error(message: impl Into<String>) {
    default_logger().error(message);
}

/// Adds a record at the CRITICAL level to the default logger.
pub fn crit(message: impl Into<String>) {
    default_logger().crit(message);
}

/// Adds a record at the ALERT level to the default logger.
pub fn alert(message: impl Into<String>) {
    default_logger().alert(message);
}

/// Adds a record at the EMERGENCY level to the default logger.
pub fn emerg(message: impl Into<String>) {
    default_logger().emerg(message);
}

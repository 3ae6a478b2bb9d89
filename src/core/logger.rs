//! Main logger implementation
//!
//! A [`Logger`] owns an ordered chain of handlers. Every log call becomes at
//! most one [`Record`], which is offered to the handlers front to back until
//! one of them stops propagation.
//!
//! All operations take `&self`: the chain and the thresholds sit behind
//! `parking_lot` locks, so a logger can be shared through an `Arc` and used
//! from several threads. Dispatch works on a snapshot of the chain, which
//! lets a handler log through the same logger without deadlocking.

use super::{
    error::{LoggerError, Result},
    handler::{Handled, Handler},
    level::Level,
    metrics::LoggerMetrics,
    record::Record,
};
use crate::handlers::ConsoleHandler;
use chrono::Local;
use parking_lot::RwLock;
use std::collections::VecDeque;
use std::fmt;
use std::io::{self, Write};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Receives every error raised while dispatching a record.
///
/// Called with the logger's channel name and the error. Panics inside the
/// sink are swallowed so that log calls never unwind into the caller.
pub type ErrorSink = Arc<dyn Fn(&str, &LoggerError) + Send + Sync>;

pub struct Logger {
    name: RwLock<String>,
    /// Threshold for the console handler created when the chain is empty
    level: RwLock<Level>,
    handlers: RwLock<VecDeque<Arc<dyn Handler>>>,
    error_sink: RwLock<Option<ErrorSink>>,
    metrics: LoggerMetrics,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: RwLock::new(name.into()),
            level: RwLock::new(level),
            handlers: RwLock::new(VecDeque::new()),
            error_sink: RwLock::new(None),
            metrics: LoggerMetrics::new(),
        }
    }

    /// Channel label stamped on every record
    pub fn name(&self) -> String {
        self.name.read().clone()
    }

    pub fn set_name(&self, name: impl Into<String>) -> &Self {
        *self.name.write() = name.into();
        self
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    /// Set the threshold used for the default console handler.
    ///
    /// Has no effect on handlers already in the chain.
    pub fn set_level(&self, level: Level) -> &Self {
        *self.level.write() = level;
        self
    }

    /// Push a handler on to the front of the chain; it is tried first.
    pub fn push_handler<H: Handler + 'static>(&self, handler: H) -> &Self {
        self.push_shared(Arc::new(handler))
    }

    /// Push an already shared handler on to the front of the chain.
    pub fn push_shared(&self, handler: Arc<dyn Handler>) -> &Self {
        self.handlers.write().push_front(handler);
        self
    }

    /// Remove and return the front handler, if any.
    pub fn pop_handler(&self) -> Option<Arc<dyn Handler>> {
        self.handlers.write().pop_front()
    }

    /// Replace the whole chain; afterwards the chain order equals `handlers`.
    pub fn set_handlers(&self, handlers: Vec<Arc<dyn Handler>>) -> &Self {
        let mut chain = self.handlers.write();
        chain.clear();
        for handler in handlers.into_iter().rev() {
            chain.push_front(handler);
        }
        drop(chain);
        self
    }

    /// The current chain, front to back.
    pub fn get_handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.handlers.read().iter().cloned().collect()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.read().len()
    }

    /// Route dispatch errors to `sink` instead of standard error.
    pub fn set_error_sink(&self, sink: ErrorSink) -> &Self {
        *self.error_sink.write() = Some(sink);
        self
    }

    /// Go back to printing dispatch errors on standard error.
    pub fn reset_error_sink(&self) -> &Self {
        *self.error_sink.write() = None;
        self
    }

    /// Get the logger metrics for detailed observability
    ///
    /// # Example
    ///
    /// ```
    /// use rust_chain_logger::{Level, Logger};
    ///
    /// let logger = Logger::new("app", Level::Error);
    /// logger.debug("below every threshold");
    ///
    /// let metrics = logger.metrics();
    /// assert_eq!(metrics.records_skipped(), 1);
    /// assert_eq!(metrics.records_dispatched(), 0);
    /// ```
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Flush every handler, returning the first error.
    ///
    /// A failing handler does not keep later handlers from being flushed.
    pub fn flush(&self) -> Result<()> {
        let mut first = None;
        for handler in self.get_handlers() {
            if let Err(e) = handler.flush() {
                first.get_or_insert(e);
            }
        }
        first.map_or(Ok(()), Err)
    }

    /// Add a record whose message is built from `format_args!`.
    ///
    /// The message is only rendered when some handler will accept `level`,
    /// and a literal without arguments is used verbatim.
    ///
    /// ```
    /// use rust_chain_logger::{Level, Logger};
    ///
    /// let logger = Logger::new("app", Level::Info);
    /// logger.add_record(Level::Info, format_args!("value={}", 42));
    /// ```
    pub fn add_record(&self, level: Level, args: fmt::Arguments<'_>) {
        self.dispatch(level.code(), || {
            args.as_str()
                .map_or_else(|| args.to_string(), str::to_owned)
        });
    }

    /// Like [`add_record`](Self::add_record) but with a raw numeric level.
    ///
    /// Codes that are not one of the eight levels are reported to the
    /// error sink and nothing is logged.
    pub fn add_record_code(&self, code: i32, args: fmt::Arguments<'_>) {
        self.dispatch(code, || {
            args.as_str()
                .map_or_else(|| args.to_string(), str::to_owned)
        });
    }

    /// Add a record with a ready-made message.
    pub fn log(&self, level: Level, message: impl Into<String>) {
        self.dispatch(level.code(), || message.into());
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(Level::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message);
    }

    #[inline]
    pub fn notice(&self, message: impl Into<String>) {
        self.log(Level::Notice, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(Level::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message);
    }

    #[inline]
    pub fn crit(&self, message: impl Into<String>) {
        self.log(Level::Critical, message);
    }

    #[inline]
    pub fn alert(&self, message: impl Into<String>) {
        self.log(Level::Alert, message);
    }

    #[inline]
    pub fn emerg(&self, message: impl Into<String>) {
        self.log(Level::Emergency, message);
    }

    fn dispatch<F>(&self, code: i32, message: F)
    where
        F: FnOnce() -> String,
    {
        let chain = self.chain_snapshot();

        let level = match Level::from_code(code) {
            Ok(level) => level,
            Err(e) => {
                self.handler_error(&e);
                return;
            }
        };

        if !chain.iter().any(|handler| handler.is_handling(level)) {
            self.metrics.record_skipped();
            return;
        }

        let record = Record::new(level, message(), self.name());
        self.metrics.record_dispatched();

        for handler in &chain {
            self.metrics.record_invocation();
            let handled = panic::catch_unwind(AssertUnwindSafe(|| handler.handle(&record)))
                .unwrap_or_else(|payload| Handled {
                    stop: false,
                    error: Some(LoggerError::handler_panicked(
                        handler.name(),
                        panic_message(payload.as_ref()),
                    )),
                });

            if let Some(ref e) = handled.error {
                self.handler_error(e);
            }
            if handled.stop {
                break;
            }
        }
    }

    /// Clone the chain, first installing a console handler if it is empty
    fn chain_snapshot(&self) -> Vec<Arc<dyn Handler>> {
        {
            let handlers = self.handlers.read();
            if !handlers.is_empty() {
                return handlers.iter().cloned().collect();
            }
        }

        let mut handlers = self.handlers.write();
        if handlers.is_empty() {
            handlers.push_front(Arc::new(default_handler(self.level())));
        }
        handlers.iter().cloned().collect()
    }

    fn handler_error(&self, error: &LoggerError) {
        self.metrics.record_error();

        let sink = self.error_sink.read().clone();
        let channel = self.name();
        let reported = panic::catch_unwind(AssertUnwindSafe(|| match sink {
            Some(sink) => sink(&channel, error),
            None => report_to_stderr(&channel, error),
        }));
        if reported.is_err() {
            report_to_stderr(&channel, error);
        }
    }
}

/// Handler installed when a logger dispatches with an empty chain
fn default_handler(level: Level) -> ConsoleHandler {
    ConsoleHandler::new(level)
}

fn report_to_stderr(channel: &str, error: &LoggerError) {
    let _ = writeln!(
        io::stderr(),
        "{} [LOGGER ERROR] {}: {}",
        Local::now().to_rfc3339(),
        channel,
        error
    );
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let handlers: Vec<String> = self
            .handlers
            .read()
            .iter()
            .map(|h| h.name().to_string())
            .collect();
        f.debug_struct("Logger")
            .field("name", &*self.name.read())
            .field("level", &self.level())
            .field("handlers", &handlers)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing Logger with a fluent API
///
/// Handlers are given in chain order: the first one added is tried first.
///
/// # Example
/// ```
/// use rust_chain_logger::prelude::*;
///
/// let logger = Logger::builder()
///     .name("api")
///     .level(Level::Info)
///     .handler(ConsoleHandler::new(Level::Warning).with_bubble(false))
///     .handler(ConsoleHandler::new(Level::Debug))
///     .build();
///
/// assert_eq!(logger.get_handlers().len(), 2);
/// ```
pub struct LoggerBuilder {
    name: String,
    level: Level,
    handlers: Vec<Arc<dyn Handler>>,
    error_sink: Option<ErrorSink>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: crate::global::DEFAULT_CHANNEL.to_string(),
            level: Level::Debug,
            handlers: Vec::new(),
            error_sink: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Append a handler to the end of the chain
    #[must_use = "builder methods return a new value"]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Arc::new(handler));
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn shared_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn error_sink(mut self, sink: ErrorSink) -> Self {
        self.error_sink = Some(sink);
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let logger = Logger::new(self.name, self.level);
        logger.set_handlers(self.handlers);
        if let Some(sink) = self.error_sink {
            logger.set_error_sink(sink);
        }
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger {
    /// Create a builder for Logger
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }
}

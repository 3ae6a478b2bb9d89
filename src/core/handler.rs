//! Handler trait for log output destinations

use super::error::{LoggerError, Result};
use super::formatter::{Formatter, LineFormatter};
use super::level::Level;
use super::record::Record;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Outcome of [`Handler::handle`].
///
/// `stop` and `error` are independent: a failed write still lets the
/// handler's bubble setting decide whether dispatch continues.
#[derive(Debug, Default)]
pub struct Handled {
    /// Stop walking the handler chain after this handler
    pub stop: bool,
    pub error: Option<LoggerError>,
}

impl Handled {
    /// The record was below the handler's threshold and left untouched
    pub fn skipped() -> Self {
        Self::default()
    }
}

/// A filtering, formatting and writing sink attached to a [`Logger`](super::Logger).
pub trait Handler: Send + Sync {
    fn name(&self) -> &str;

    /// Minimum level this handler accepts
    fn level(&self) -> Level;

    /// Whether a record at `level` passes this handler's threshold
    fn is_handling(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Format and write `record` if it passes the threshold.
    ///
    /// Must return [`Handled::skipped`] without side effects when
    /// `is_handling` is false, so handlers stay safe to call directly.
    fn handle(&self, record: &Record) -> Handled;

    fn flush(&self) -> Result<()> {
        Ok(())
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn level(&self) -> Level {
        (**self).level()
    }

    fn is_handling(&self, level: Level) -> bool {
        (**self).is_handling(level)
    }

    fn handle(&self, record: &Record) -> Handled {
        (**self).handle(record)
    }

    fn flush(&self) -> Result<()> {
        (**self).flush()
    }
}

/// State shared by every handler variant: threshold, bubble flag and formatter.
///
/// Custom handlers embed a `HandlerCore` and delegate to [`HandlerCore::process`]
/// to get the standard gate, format, write and bubble behavior.
///
/// ```
/// use rust_chain_logger::{Handled, Handler, HandlerCore, Level, Record};
///
/// struct Discard(HandlerCore);
///
/// impl Handler for Discard {
///     fn name(&self) -> &str { "discard" }
///     fn level(&self) -> Level { self.0.level() }
///     fn handle(&self, record: &Record) -> Handled {
///         self.0.process(record, |_text| Ok(()))
///     }
/// }
///
/// let handler = Discard(HandlerCore::new(Level::Error).with_bubble(false));
/// assert!(!handler.handle(&Record::new(Level::Info, "x", "app")).stop);
/// assert!(handler.handle(&Record::new(Level::Error, "x", "app")).stop);
/// ```
pub struct HandlerCore {
    level: RwLock<Level>,
    bubble: AtomicBool,
    formatter: Box<dyn Formatter>,
}

impl HandlerCore {
    pub fn new(level: Level) -> Self {
        Self {
            level: RwLock::new(level),
            bubble: AtomicBool::new(true),
            formatter: Box::new(LineFormatter::new()),
        }
    }

    #[must_use]
    pub fn with_bubble(self, bubble: bool) -> Self {
        self.set_bubble(bubble);
        self
    }

    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.formatter = Box::new(formatter);
        self
    }

    #[must_use]
    pub fn with_boxed_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    #[inline]
    pub fn level(&self) -> Level {
        *self.level.read()
    }

    /// Change the minimum level at runtime
    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    #[inline]
    pub fn bubble(&self) -> bool {
        self.bubble.load(Ordering::Relaxed)
    }

    pub fn set_bubble(&self, bubble: bool) {
        self.bubble.store(bubble, Ordering::Relaxed);
    }

    pub fn formatter(&self) -> &dyn Formatter {
        self.formatter.as_ref()
    }

    #[inline]
    pub fn is_handling(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Gate on the threshold, format into a local buffer and hand it to `write`.
    pub fn process<W>(&self, record: &Record, write: W) -> Handled
    where
        W: FnOnce(&str) -> Result<()>,
    {
        if !self.is_handling(record.level) {
            return Handled::skipped();
        }

        let formatted = self.formatter.format(record);
        Handled {
            stop: !self.bubble(),
            error: write(&formatted).err(),
        }
    }
}

impl std::fmt::Debug for HandlerCore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerCore")
            .field("level", &self.level())
            .field("bubble", &self.bubble())
            .finish_non_exhaustive()
    }
}

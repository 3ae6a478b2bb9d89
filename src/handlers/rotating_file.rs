//! Rotating file handler
//!
//! A [`FileHandler`] with date-based naming switched on: each local calendar
//! day gets its own file. The name is recomputed on every write.

use super::file::FileHandler;
use crate::core::{Formatter, Handled, Handler, Level, Record, Result};
use chrono::{NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};

/// File handler writing to `{filename}-{date}.<ext>` by default
///
/// # Examples
///
/// ```no_run
/// use rust_chain_logger::{Level, Logger, RotatingFileHandler};
///
/// let handler = RotatingFileHandler::new("/var/log/app.log", Level::Info)
///     .with_date_format("%Y%m%d");
///
/// let logger = Logger::new("app", Level::Debug);
/// logger.push_handler(handler);
/// logger.info("written to /var/log/app-20250108.log");
/// ```
pub struct RotatingFileHandler {
    inner: FileHandler,
}

impl RotatingFileHandler {
    pub fn new(filename: impl Into<PathBuf>, level: Level) -> Self {
        Self {
            inner: FileHandler::new(filename, level).with_rotation(true),
        }
    }

    #[must_use]
    pub fn with_filename_format(mut self, format: impl Into<String>) -> Self {
        self.inner = self.inner.with_filename_format(format);
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.inner = self.inner.with_date_format(format);
        self
    }

    #[must_use]
    pub fn with_bubble(mut self, bubble: bool) -> Self {
        self.inner = self.inner.with_bubble(bubble);
        self
    }

    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.inner = self.inner.with_formatter(formatter);
        self
    }

    #[must_use]
    pub fn with_boxed_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.inner = self.inner.with_boxed_formatter(formatter);
        self
    }

    pub fn set_level(&self, level: Level) {
        self.inner.set_level(level);
    }

    pub fn set_bubble(&self, bubble: bool) {
        self.inner.set_bubble(bubble);
    }

    pub fn base_filename(&self) -> &Path {
        self.inner.base_filename()
    }

    /// Today's target path
    pub fn filename(&self) -> PathBuf {
        self.inner.timed_filename()
    }

    pub fn filename_for(&self, date: NaiveDate) -> PathBuf {
        self.inner.timed_filename_for(date)
    }

    pub fn filename_at(&self, at: NaiveDateTime) -> PathBuf {
        self.inner.timed_filename_at(at)
    }

    pub fn into_inner(self) -> FileHandler {
        self.inner
    }
}

impl Handler for RotatingFileHandler {
    fn name(&self) -> &str {
        "rotating_file"
    }

    fn level(&self) -> Level {
        self.inner.level()
    }

    fn handle(&self, record: &Record) -> Handled {
        self.inner.handle(record)
    }

    fn flush(&self) -> Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_rotation_is_enabled() {
        let handler = RotatingFileHandler::new("app.log", Level::Info);
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date");
        assert_eq!(handler.filename_for(date), Path::new("app-2024-03-05.log"));
        assert!(handler.into_inner().is_rotating());
    }

    #[test]
    fn test_hourly_pattern() {
        let handler =
            RotatingFileHandler::new("logs/api.log", Level::Info).with_date_format("%Y%m%d%H");
        let at = NaiveDate::from_ymd_opt(2024, 3, 5)
            .and_then(|d| d.and_hms_opt(9, 15, 0))
            .expect("valid datetime");
        assert_eq!(handler.filename_at(at), Path::new("logs/api-2024030509.log"));
    }

    #[test]
    fn test_writes_to_dated_file() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let base = dir.path().join("daily.log");
        let handler = RotatingFileHandler::new(&base, Level::Info);

        handler.handle(&Record::new(Level::Notice, "rotated entry", "test"));

        let target = handler.filename();
        assert_ne!(target, base);
        assert!(!base.exists());
        let content = fs::read_to_string(&target).expect("Failed to read rotated file");
        assert!(content.contains("rotated entry"));
    }
}

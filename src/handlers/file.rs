//! File handler implementation
//!
//! The target file is opened in append mode for every record and closed
//! right after, so external tools may move or truncate it at any time.
//! Parent directories are never created.

use crate::core::{Formatter, Handled, Handler, HandlerCore, Level, LoggerError, Record, Result};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Default pattern for rotated file names
pub const DEFAULT_FILENAME_FORMAT: &str = "{filename}-{date}";

/// Default strftime pattern substituted for `{date}`
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Appends formatted records to a file, optionally one file per day.
///
/// # Examples
///
/// ```no_run
/// use rust_chain_logger::{FileHandler, Level, Logger};
///
/// let logger = Logger::new("app", Level::Debug);
/// logger.push_handler(FileHandler::new("/var/log/app.log", Level::Info));
/// logger.info("written to /var/log/app.log");
/// ```
///
/// With rotation enabled the date is spliced into the name:
///
/// ```
/// use rust_chain_logger::{FileHandler, Level};
/// use chrono::NaiveDate;
/// use std::path::Path;
///
/// let handler = FileHandler::new("logs/app.log", Level::Info).with_rotation(true);
/// let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
/// assert_eq!(handler.timed_filename_for(date), Path::new("logs/app-2024-03-05.log"));
/// ```
pub struct FileHandler {
    core: HandlerCore,
    filename: PathBuf,
    filename_format: String,
    date_format: String,
    rotate: bool,
}

impl FileHandler {
    pub fn new(filename: impl Into<PathBuf>, level: Level) -> Self {
        Self {
            core: HandlerCore::new(level),
            filename: filename.into(),
            filename_format: DEFAULT_FILENAME_FORMAT.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            rotate: false,
        }
    }

    /// Enable or disable date-based file names
    #[must_use]
    pub fn with_rotation(mut self, rotate: bool) -> Self {
        self.rotate = rotate;
        self
    }

    /// Set the rotated name pattern; `{filename}` and `{date}` are substituted
    #[must_use]
    pub fn with_filename_format(mut self, format: impl Into<String>) -> Self {
        self.filename_format = format.into();
        self
    }

    /// Set the strftime pattern used for `{date}`
    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Stop dispatch after this handler when `bubble` is false
    #[must_use]
    pub fn with_bubble(mut self, bubble: bool) -> Self {
        self.core = self.core.with_bubble(bubble);
        self
    }

    #[must_use]
    pub fn with_formatter<F: Formatter + 'static>(mut self, formatter: F) -> Self {
        self.core = self.core.with_formatter(formatter);
        self
    }

    #[must_use]
    pub fn with_boxed_formatter(mut self, formatter: Box<dyn Formatter>) -> Self {
        self.core = self.core.with_boxed_formatter(formatter);
        self
    }

    /// Sets minimum logging level at which this handler will be triggered
    pub fn set_level(&self, level: Level) {
        self.core.set_level(level);
    }

    pub fn set_bubble(&self, bubble: bool) {
        self.core.set_bubble(bubble);
    }

    pub fn is_rotating(&self) -> bool {
        self.rotate
    }

    /// The configured path, before any rotation naming
    pub fn base_filename(&self) -> &Path {
        &self.filename
    }

    /// The path the next record will be written to
    pub fn filename(&self) -> PathBuf {
        if self.rotate {
            self.timed_filename()
        } else {
            self.filename.clone()
        }
    }

    /// The rotated path for the current local time
    pub fn timed_filename(&self) -> PathBuf {
        self.timed_filename_at(Local::now().naive_local())
    }

    /// The rotated path for midnight of `date`
    pub fn timed_filename_for(&self, date: NaiveDate) -> PathBuf {
        self.timed_filename_at(date.and_time(NaiveTime::default()))
    }

    /// The rotated path for the local time `at`.
    ///
    /// The pattern is resolved next to the configured file, `{filename}` is
    /// replaced by the name without its last extension and that extension
    /// is appended. The date pattern may carry time items such as `%H`.
    pub fn timed_filename_at(&self, at: NaiveDateTime) -> PathBuf {
        let base = self
            .filename
            .file_name()
            .map(|s| s.to_string_lossy())
            .unwrap_or_default();
        let (stem, ext) = split_extension(&base);

        let mut day = String::new();
        if write!(day, "{}", at.format(&self.date_format)).is_err() {
            // Invalid strftime items fall back to the default pattern
            day.clear();
            let _ = write!(day, "{}", at.format(DEFAULT_DATE_FORMAT));
        }

        let mut name = self
            .filename_format
            .replace("{filename}", stem)
            .replace("{date}", &day);

        if let Some(ext) = ext {
            name.push('.');
            name.push_str(ext);
        }

        match self.filename.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }

    fn write(&self, formatted: &str) -> Result<()> {
        let path = self.filename();
        let target = || path.display().to_string();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::open_failed(target(), e))?;

        #[cfg(feature = "file-lock")]
        fs2::FileExt::lock_exclusive(&file).map_err(|e| LoggerError::open_failed(target(), e))?;

        let written = file
            .write_all(formatted.as_bytes())
            .map_err(|e| LoggerError::write_failed(target(), e));

        #[cfg(feature = "file-lock")]
        let _ = fs2::FileExt::unlock(&file);

        written
    }
}

/// Split at the last dot, so `.log` is all extension and `app` has none
fn split_extension(name: &str) -> (&str, Option<&str>) {
    match name.rfind('.') {
        Some(dot) => (&name[..dot], Some(&name[dot + 1..])),
        None => (name, None),
    }
}

impl Handler for FileHandler {
    fn name(&self) -> &str {
        "file"
    }

    fn level(&self) -> Level {
        self.core.level()
    }

    fn handle(&self, record: &Record) -> Handled {
        self.core.process(record, |formatted| self.write(formatted))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).expect("valid date")
    }

    #[test]
    fn test_timed_filename_default_pattern() {
        let handler = FileHandler::new("app.log", Level::Debug).with_rotation(true);
        assert_eq!(handler.timed_filename_for(date()), Path::new("app-2024-03-05.log"));
    }

    #[test]
    fn test_timed_filename_keeps_directory() {
        let handler = FileHandler::new("/var/log/api/access.log", Level::Debug);
        assert_eq!(
            handler.timed_filename_for(date()),
            Path::new("/var/log/api/access-2024-03-05.log")
        );
    }

    #[test]
    fn test_timed_filename_custom_patterns() {
        let handler = FileHandler::new("logs/app.log", Level::Debug)
            .with_rotation(true)
            .with_filename_format("{date}_{filename}")
            .with_date_format("%Y%m%d");
        assert_eq!(
            handler.timed_filename_for(date()),
            Path::new("logs/20240305_app.log")
        );
    }

    #[test]
    fn test_timed_filename_without_extension() {
        let handler = FileHandler::new("journal", Level::Debug);
        assert_eq!(handler.timed_filename_for(date()), Path::new("journal-2024-03-05"));
    }

    #[test]
    fn test_invalid_date_format_falls_back() {
        let handler = FileHandler::new("app.log", Level::Debug).with_date_format("%Q");
        assert_eq!(handler.timed_filename_for(date()), Path::new("app-2024-03-05.log"));
    }

    #[test]
    fn test_date_format_with_time_items() {
        let handler = FileHandler::new("app.log", Level::Debug)
            .with_rotation(true)
            .with_date_format("%Y-%m-%d_%H");
        let at = date().and_hms_opt(14, 30, 0).expect("valid time");
        assert_eq!(handler.timed_filename_at(at), Path::new("app-2024-03-05_14.log"));
        assert_eq!(handler.timed_filename_for(date()), Path::new("app-2024-03-05_00.log"));
    }

    #[test]
    fn test_dotfile_name_is_all_extension() {
        let handler = FileHandler::new(".log", Level::Debug);
        assert_eq!(handler.timed_filename_for(date()), Path::new("-2024-03-05.log"));

        let handler = FileHandler::new("logs/archive.tar.gz", Level::Debug);
        assert_eq!(
            handler.timed_filename_for(date()),
            Path::new("logs/archive.tar-2024-03-05.gz")
        );
    }

    #[test]
    fn test_filename_ignores_pattern_without_rotation() {
        let handler = FileHandler::new("logs/app.log", Level::Debug);
        assert!(!handler.is_rotating());
        assert_eq!(handler.filename(), Path::new("logs/app.log"));
    }

    #[test]
    fn test_write_appends() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("append.log");
        let handler = FileHandler::new(&path, Level::Info);

        handler.handle(&Record::new(Level::Info, "first", "test"));
        handler.handle(&Record::new(Level::Error, "second", "test"));

        let content = fs::read_to_string(&path).expect("Failed to read log file");
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("test.INFO: first"));
        assert!(lines[1].ends_with("test.ERROR: second"));
    }

    #[test]
    fn test_below_threshold_creates_nothing() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("quiet.log");
        let handler = FileHandler::new(&path, Level::Warning);

        let handled = handler.handle(&Record::new(Level::Info, "ignored", "test"));
        assert!(!handled.stop);
        assert!(handled.error.is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_directory_is_open_failure() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("no-such-dir").join("app.log");
        let handler = FileHandler::new(&path, Level::Debug).with_bubble(false);

        let handled = handler.handle(&Record::new(Level::Info, "lost", "test"));
        assert!(handled.stop);
        match handled.error {
            Some(LoggerError::OpenFailed { target, .. }) => {
                assert!(target.contains("no-such-dir"));
            }
            other => panic!("expected OpenFailed, got {:?}", other),
        }
        assert!(!dir.path().join("no-such-dir").exists());
    }

    #[test]
    fn test_runtime_level_change() {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("level.log");
        let handler = FileHandler::new(&path, Level::Error);

        handler.handle(&Record::new(Level::Debug, "dropped", "test"));
        handler.set_level(Level::Debug);
        handler.handle(&Record::new(Level::Debug, "kept", "test"));

        let content = fs::read_to_string(&path).expect("Failed to read log file");
        assert!(!content.contains("dropped"));
        assert!(content.contains("kept"));
    }
}

//! Record formatters
//!
//! A formatter turns a [`Record`] into the text a handler writes:
//! - [`LineFormatter`]: human-readable single line (default)
//! - [`JsonFormatter`]: one JSON object per line

use super::record::Record;
use super::timestamp::TimestampFormat;

/// Renders records to text.
///
/// Implementations must be pure: the same record always yields the same text.
pub trait Formatter: Send + Sync {
    fn format(&self, record: &Record) -> String;

    /// Render several records, concatenated in order
    fn format_batch(&self, records: &[Record]) -> String {
        records.iter().map(|record| self.format(record)).collect()
    }
}

/// Human-readable line format
///
/// Example: `[2025-01-08 10:30:45] app.INFO: Request processed`
///
/// ```
/// use rust_chain_logger::{Formatter, Level, LineFormatter, Record};
///
/// let record = Record::new(Level::Warning, "low disk", "app");
/// let line = LineFormatter::new().format(&record);
/// assert!(line.contains("app.WARNING: low disk"));
/// assert!(line.ends_with('\n'));
/// ```
#[derive(Debug, Clone)]
pub struct LineFormatter {
    timestamp_format: TimestampFormat,
    escape_control_chars: bool,
}

impl LineFormatter {
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::default(),
            escape_control_chars: true,
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Keep newlines, carriage returns and tabs in messages as-is.
    ///
    /// By default they are escaped so a message cannot forge extra lines.
    #[must_use]
    pub fn with_raw_messages(mut self) -> Self {
        self.escape_control_chars = false;
        self
    }

    fn escape(message: &str) -> String {
        message
            .replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for LineFormatter {
    fn format(&self, record: &Record) -> String {
        let message = if self.escape_control_chars {
            Self::escape(&record.message)
        } else {
            record.message.clone()
        };

        format!(
            "[{}] {}.{}: {}\n",
            self.timestamp_format.format(&record.datetime),
            record.channel,
            record.level_name,
            message
        )
    }
}

/// JSON-lines format for machine processing
///
/// Example: `{"datetime":"2025-01-08T10:30:45.000+00:00","level":200,"level_name":"INFO","channel":"app","message":"ok"}`
#[derive(Debug, Clone)]
pub struct JsonFormatter {
    timestamp_format: TimestampFormat,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            timestamp_format: TimestampFormat::Iso8601,
        }
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Unix formats become JSON numbers, everything else a string
    fn datetime_value(&self, record: &Record) -> serde_json::Value {
        let text = self.timestamp_format.format(&record.datetime);
        if self.timestamp_format.is_numeric() {
            if let Ok(number) = text.parse::<i64>() {
                return number.into();
            }
        }
        serde_json::Value::String(text)
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, record: &Record) -> String {
        let mut json_obj = serde_json::Map::new();
        json_obj.insert("datetime".to_string(), self.datetime_value(record));
        json_obj.insert("level".to_string(), record.level.code().into());
        json_obj.insert("level_name".to_string(), record.level_name.into());
        json_obj.insert("channel".to_string(), record.channel.clone().into());
        json_obj.insert("message".to_string(), record.message.clone().into());

        let mut line =
            serde_json::to_string(&serde_json::Value::Object(json_obj)).unwrap_or_default();
        line.push('\n');
        line
    }
}

//! Error types for the logger system

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Numeric level with no registered name
    #[error("Level {0} is not defined")]
    UnknownLevel(i32),

    /// Sink could not be opened or created
    #[error("Failed to open '{target}': {source}")]
    OpenFailed {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Write to an opened sink failed
    #[error("Failed to write '{target}': {source}")]
    WriteFailed {
        target: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// A handler panicked while handling a record
    #[error("Handler '{handler}' panicked: {message}")]
    HandlerPanicked { handler: String, message: String },

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LoggerError {
    /// Create an open failure for the given target
    pub fn open_failed(target: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::OpenFailed {
            target: target.into(),
            source,
        }
    }

    /// Create a write failure for the given target
    pub fn write_failed(target: impl Into<String>, source: std::io::Error) -> Self {
        LoggerError::WriteFailed {
            target: target.into(),
            source,
        }
    }

    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn handler_panicked(handler: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::HandlerPanicked {
            handler: handler.into(),
            message: message.into(),
        }
    }
}

//! Custom error types for quit-tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for quit-tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Configuration-related errors (missing or unparseable settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input and data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors (unreadable or malformed data files)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The data was saved but its audit line could not be appended
    #[error("{saved} was saved, but writing the audit log failed: {source}")]
    AuditFailed {
        saved: String,
        source: Box<TrackerError>,
    },
}

impl TrackerError {
    /// Create a "not found" error for daily entries
    pub fn entry_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Entry",
            identifier: identifier.into(),
        }
    }

    /// Create the error returned when a command needs settings that were never saved
    pub fn not_initialized() -> Self {
        Self::Config("No settings found. Run 'quit init' first.".into())
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for TrackerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for quit-tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = TrackerError::entry_not_found("2024-01-01");
        assert_eq!(err.to_string(), "Entry not found: 2024-01-01");
        assert!(err.is_not_found());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_not_initialized_mentions_init() {
        let err = TrackerError::not_initialized();
        assert!(err.to_string().contains("quit init"));
    }

    #[test]
    fn test_audit_failed_names_saved_data() {
        let err = TrackerError::AuditFailed {
            saved: "Entry for 2024-01-04".into(),
            source: Box::new(TrackerError::Io("permission denied".into())),
        };
        let text = err.to_string();
        assert!(text.starts_with("Entry for 2024-01-04 was saved"));
        assert!(text.contains("permission denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TrackerError = io_err.into();
        assert!(matches!(err, TrackerError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: TrackerError = json_err.into();
        assert!(matches!(err, TrackerError::Json(_)));
    }
}

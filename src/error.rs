//! Custom error types for balance-history
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for balance-history operations
#[derive(Error, Debug)]
pub enum HistoryError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A series response that breaks the day/data alignment
    #[error("Validation error: {0}")]
    Validation(String),

    /// The balance history could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The backend answered with an explicit error payload
    #[error("Server error: {0}")]
    Api(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl HistoryError {
    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if the error came from talking to the backend
    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::Api(_))
    }
}

impl From<std::io::Error> for HistoryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for balance-history operations
pub type HistoryResult<T> = Result<T, HistoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HistoryError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_api_error_display() {
        let err = HistoryError::Api("no budgets selected".into());
        assert_eq!(err.to_string(), "Server error: no budgets selected");
        assert!(err.is_remote());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: HistoryError = io_err.into();
        assert!(matches!(err, HistoryError::Io(_)));
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: HistoryError = json_err.into();
        assert!(matches!(err, HistoryError::Json(_)));
    }
}

//! Error types for the CLI

use keypad_calculator::core::CalcError;
use thiserror::Error;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can occur in the CLI
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error (terminal setup, log file)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key sequence that does not map to keypad input
    #[error("Invalid key sequence: {0}")]
    InvalidSequence(#[from] CalcError),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Logging could not be initialized
    #[error("Logging setup failed: {message}")]
    Logging {
        /// Error message
        message: String,
    },
}

impl CliError {
    /// Create a logging error
    #[must_use]
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = CliError::from(std::io::Error::other("no tty"));
        assert_eq!(err.to_string(), "I/O error: no tty");
    }

    #[test]
    fn test_invalid_sequence_display() {
        let err = CliError::from(CalcError::UnknownKey('x'));
        assert_eq!(err.to_string(), "Invalid key sequence: Unknown key: 'x'");
    }

    #[test]
    fn test_logging_error_display() {
        let err = CliError::logging("already set");
        assert_eq!(err.to_string(), "Logging setup failed: already set");
    }

    #[test]
    fn test_json_error_from() {
        let json_err = serde_json::from_str::<u8>("nope").unwrap_err();
        let err: CliError = json_err.into();
        assert!(err.to_string().starts_with("JSON error:"));
    }
}

//! Error types for SafeSpeak
//!
//! Classification and lifecycle computations are total and never fail. The
//! errors here belong to the edges: configuration loading, file I/O, and the
//! feedback submission policy.

use thiserror::Error;

/// Main error type for SafeSpeak operations
#[derive(Error, Debug)]
pub enum SafespeakError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML serialization error
    #[error("TOML serialization error: {0}")]
    TomlSerialization(#[from] toml::ser::Error),

    /// Report reference does not match the expected format
    #[error("Invalid report reference: {0}")]
    InvalidReference(String),

    /// Case-related feedback submitted without a report reference
    #[error("Report ID is required for case-related feedback")]
    ReferenceRequired,

    /// Interface feedback is routed elsewhere and not accepted here
    #[error("App-related feedback should be submitted via the Help page instead")]
    InterfaceFeedbackRejected,

    /// Feedback message outside the accepted length range
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// Timestamp could not be parsed
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Generic error with context
    #[error("{0}")]
    Other(String),
}

/// Result type alias for SafeSpeak operations
pub type Result<T> = std::result::Result<T, SafespeakError>;

/// Convert anyhow::Error to SafespeakError
impl From<anyhow::Error> for SafespeakError {
    fn from(err: anyhow::Error) -> Self {
        SafespeakError::Other(err.to_string())
    }
}

impl From<chrono::ParseError> for SafespeakError {
    fn from(err: chrono::ParseError) -> Self {
        SafespeakError::InvalidTimestamp(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SafespeakError::InvalidReference("RPT-abc".to_string());
        assert_eq!(err.to_string(), "Invalid report reference: RPT-abc");

        let err = SafespeakError::ReferenceRequired;
        assert_eq!(
            err.to_string(),
            "Report ID is required for case-related feedback"
        );
    }

    #[test]
    fn test_error_conversion() {
        let parse_err = chrono::DateTime::parse_from_rfc3339("yesterday");
        assert!(parse_err.is_err());

        let safespeak_err: SafespeakError = parse_err.unwrap_err().into();
        assert!(matches!(safespeak_err, SafespeakError::InvalidTimestamp(_)));

        let anyhow_err = anyhow::anyhow!("boom");
        let safespeak_err: SafespeakError = anyhow_err.into();
        assert_eq!(safespeak_err.to_string(), "boom");
    }
}

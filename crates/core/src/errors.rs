//! Core error types for the feasibility engine.
//!
//! Numeric edge cases (zero revenue, zero capital, IRR non-convergence, ...)
//! never surface here; they are reported through sentinel values on the
//! metrics bundle. These types cover structural failures only: malformed form
//! input, invalid configuration and analysis provider failures.

use std::num::ParseFloatError;
use thiserror::Error;

use crate::analysis::AnalysisError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the feasibility engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load configuration: {0}")]
    ConfigIO(String),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Analysis failed: {0}")]
    Analysis(#[from] AnalysisError),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl ValidationError {
    /// Creates an InvalidInput error for a named field.
    pub fn invalid_field(field: &str, message: impl std::fmt::Display) -> Self {
        Self::InvalidInput(format!("{}: {}", field, message))
    }
}

// === From implementations for common error types ===

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::ConfigIO(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::from(ValidationError::MissingField("unitPrice".to_string()));
        assert_eq!(
            err.to_string(),
            "Input validation failed: Required field 'unitPrice' is missing"
        );

        let err = ValidationError::invalid_field("monthlyVolume", "must not be negative");
        assert_eq!(
            err.to_string(),
            "Invalid input: monthlyVolume: must not be negative"
        );
    }

    #[test]
    fn test_parse_float_error_converts() {
        let parse_err = "abc".parse::<f64>().unwrap_err();
        let err: ValidationError = parse_err.into();
        assert!(matches!(err, ValidationError::NumberParse(_)));
    }

    #[test]
    fn test_serde_error_maps_to_config_io() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::ConfigIO(_)));
    }
}

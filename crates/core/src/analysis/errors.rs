//! Analysis error types.

use thiserror::Error;

/// Errors raised by analysis providers.
#[derive(Error, Debug, PartialEq)]
pub enum AnalysisError {
    /// The metrics bundle cannot be analysed (e.g. non-finite ROI).
    #[error("Invalid metrics: {0}")]
    InvalidMetrics(String),

    /// The request is missing information the provider needs.
    #[error("Invalid analysis request: {0}")]
    InvalidRequest(String),

    /// The provider itself failed (network, model, quota, ...).
    #[error("Analysis provider '{provider_id}' failed: {message}")]
    ProviderFailed {
        provider_id: String,
        message: String,
    },
}

impl AnalysisError {
    pub fn invalid_metrics(msg: impl Into<String>) -> Self {
        Self::InvalidMetrics(msg.into())
    }

    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Creates a ProviderFailed error.
    pub fn provider_failed(provider_id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ProviderFailed {
            provider_id: provider_id.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_provider_failed_message() {
        let err = AnalysisError::provider_failed("gemini", "quota exceeded");
        assert_eq!(
            err.to_string(),
            "Analysis provider 'gemini' failed: quota exceeded"
        );
    }

    #[test]
    fn test_converts_into_root_error() {
        let err: Error = AnalysisError::invalid_metrics("ROI is NaN").into();
        assert_eq!(err.to_string(), "Analysis failed: Invalid metrics: ROI is NaN");
    }
}

//! Error types for the model boundary
//!
//! The pure text transformations (detect, build, segment) cannot fail;
//! these errors only arise from the provider call and input validation,
//! using thiserror for automatic error trait implementations.

use std::time::Duration;
use thiserror::Error;

/// Error produced by the model-service boundary
#[derive(Debug, Error)]
pub enum LLMError {
    /// The model service answered with a non-success status
    #[error("Model service error (status {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The model service could not be reached
    #[error("Network error: {message}")]
    NetworkError { message: String },

    /// Request timed out
    #[error("Request timed out after {duration:?}")]
    Timeout { duration: Duration },

    /// Requested model is not present on the service
    #[error("Model '{model}' not found or not available")]
    ModelNotFound { model: String },

    /// Caller passed an unusable request, e.g. a blank snippet
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    /// Feature not supported by provider
    #[error("Feature '{feature}' is not supported by provider '{provider}'")]
    NotSupported { feature: String, provider: String },
}

impl LLMError {
    /// Create an API error
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError { status, message: message.into() }
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::NetworkError { message: message.into() }
    }

    /// Create a timeout error
    pub fn timeout(duration: Duration) -> Self {
        Self::Timeout { duration }
    }

    /// Create a model not found error
    pub fn model_not_found(model: impl Into<String>) -> Self {
        Self::ModelNotFound { model: model.into() }
    }

    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest { message: message.into() }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigurationError { message: message.into() }
    }

    /// Create a not supported error
    pub fn not_supported(feature: impl Into<String>, provider: impl Into<String>) -> Self {
        Self::NotSupported { feature: feature.into(), provider: provider.into() }
    }
}

/// Result type for model-boundary operations
pub type LLMResult<T> = Result<T, LLMError>;

/// Convert from standard IO errors
impl From<std::io::Error> for LLMError {
    fn from(err: std::io::Error) -> Self {
        Self::NetworkError { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LLMError::api(500, "internal error");
        assert_eq!(err.to_string(), "Model service error (status 500): internal error");

        let err = LLMError::model_not_found("codellama-3");
        assert_eq!(err.to_string(), "Model 'codellama-3' not found or not available");

        let err = LLMError::invalid_request("empty snippet");
        assert!(err.to_string().contains("Invalid request"));
    }

    #[test]
    fn test_error_conversion() {
        let io_err =
            std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection failed");
        let llm_err: LLMError = io_err.into();
        assert!(matches!(llm_err, LLMError::NetworkError { .. }));
    }
}

//! Error types for bond screener operations

use thiserror::Error;

/// Bond screener specific errors
#[derive(Debug, Error)]
pub enum ScreenerError {
    /// Provider request failed (non-2xx status or provider-level error)
    #[error("API error: {0}")]
    ApiError(String),

    /// Invalid ticker identifier provided
    #[error("Invalid ticker: {0}")]
    InvalidTicker(String),

    /// Network or HTTP error
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Command parsing error
    #[error("Command error: {0}")]
    CommandError(String),

    /// Session storage error
    #[error("Session error: {0}")]
    SessionError(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type alias for screener operations
pub type Result<T> = std::result::Result<T, ScreenerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScreenerError::InvalidTicker("??".to_string());
        assert_eq!(err.to_string(), "Invalid ticker: ??");

        let err = ScreenerError::ApiError("503 Service Unavailable".to_string());
        assert_eq!(err.to_string(), "API error: 503 Service Unavailable");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json")
            .expect_err("must fail");
        let err: ScreenerError = json_err.into();
        assert!(matches!(err, ScreenerError::JsonError(_)));
    }
}

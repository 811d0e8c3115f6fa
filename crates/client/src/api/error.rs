//! API client error types.

use std::sync::Arc;

/// Errors from the API request pipeline.
///
/// Every variant is terminal for the call that produced it; nothing is
/// retried internally.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A request could not be constructed from the given inputs.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-success HTTP status.
    #[error("HTTP error: {status}")]
    Http { status: u16 },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { ApiError::Timeout } else { ApiError::Network(Arc::new(err)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::InvalidUrl("nope".to_string());
        assert!(err.to_string().contains("invalid URL"));

        let err = ApiError::Http { status: 503 };
        assert!(err.to_string().contains("503"));
    }
}

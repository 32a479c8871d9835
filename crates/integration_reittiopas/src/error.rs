//! Journey planner error types

use domain::ResponseFormat;
use thiserror::Error;

/// Longest slice of an error body kept in an `HttpError` message
const MAX_BODY_IN_MESSAGE: usize = 200;

/// Errors that can occur during journey planner requests
#[derive(Debug, Error)]
pub enum ReittiopasError {
    /// Non-2xx response, or the request never produced a response
    /// (connection error, timeout, malformed response)
    #[error("HTTP error: {message}")]
    HttpError {
        /// Response status, `None` when no response was received
        status: Option<u16>,
        /// Human-readable description
        message: String,
    },

    /// The body could not be decoded in the configured format
    #[error("Decode error: {0}")]
    DecodeError(String),

    /// The configured response format has no decoder
    #[error("Unsupported response format: {0}")]
    UnsupportedFormat(ResponseFormat),

    /// Client configuration is invalid
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl ReittiopasError {
    /// Error for a response with a non-success status
    pub fn http_status(status: u16, body: &str) -> Self {
        let body = body.trim();
        let message = if body.is_empty() {
            format!("HTTP {status}")
        } else {
            let snippet: String = body.chars().take(MAX_BODY_IN_MESSAGE).collect();
            format!("HTTP {status}: {snippet}")
        };
        Self::HttpError {
            status: Some(status),
            message,
        }
    }

    /// Error for a request that produced no usable response
    pub fn transport(message: impl Into<String>) -> Self {
        Self::HttpError {
            status: None,
            message: message.into(),
        }
    }

    /// HTTP status carried by the error, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::HttpError { status, .. } => *status,
            _ => None,
        }
    }

    /// Returns true if repeating the same request may succeed
    ///
    /// Only classifies; the client never retries on its own.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError { status: None, .. } => true,
            Self::HttpError {
                status: Some(status),
                ..
            } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

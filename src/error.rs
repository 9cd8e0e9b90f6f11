//! Typed error hierarchy for the tenable-ad crate.
//!
//! Every variant maps to a real boundary of a single request/response
//! exchange:
//! - `Config` covers building the session (API key, URL, HTTP client).
//! - `Api` covers non-success statuses from the Tenable.ad REST API and
//!   keeps the response body, which carries the server's error message.
//! - `Network` wraps `reqwest::Error` for failures that never produced a
//!   status code (DNS, TCP, TLS, timeouts).
//! - `Parse` wraps `serde_json::Error` when a body does not match the
//!   expected record shape.
//!
//! Nothing here is retried. Errors propagate to the caller unchanged.

use reqwest::StatusCode;

/// Unified error type for all tenable-ad operations.
#[derive(Debug, thiserror::Error)]
pub enum TadError {
    /// The session could not be configured.
    ///
    /// Raised for a missing `TAD_API_KEY`/`TAD_URL`, an API key that is not
    /// a valid header value, or a failure building the HTTP client.
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable description of what is missing or invalid.
        message: String,
        /// The underlying cause, if any.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The Tenable.ad API returned a non-success HTTP status code.
    #[error("API error {status}: {body}")]
    Api {
        /// The HTTP status code returned by the API.
        status: StatusCode,
        /// The raw response body text, or an empty string if it could not
        /// be read.
        body: String,
    },

    /// JSON deserialization of a response body failed.
    #[error("failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A transport-level failure occurred before a status was received.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl TadError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TadError::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Returns the HTTP status for `Api` errors.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            TadError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, TadError>;

//! API-key authentication for the Tenable.ad API.
//!
//! Tenable.ad authenticates every request with a static key sent in the
//! `X-API-Key` header. There is no token exchange and no expiry to track,
//! so the key is validated once when the client is built and then attached
//! as a default header.

use std::fmt;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{Result, TadError};

/// Header carrying the API key on every request.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Environment variable read by [`ApiKey::from_env`].
pub const API_KEY_ENV: &str = "TAD_API_KEY";

/// A Tenable.ad API key.
///
/// `Debug` output is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        ApiKey(key.into())
    }

    /// Reads the key from `TAD_API_KEY`.
    ///
    /// # Errors
    ///
    /// `TadError::Config` when the variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Ok(ApiKey(key)),
            _ => Err(TadError::config(format!("{API_KEY_ENV} is not set"))),
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Builds the default header set for an authenticated session.
    ///
    /// The key value is marked sensitive so reqwest does not print it in
    /// its own debug output.
    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut value = HeaderValue::from_str(&self.0).map_err(|e| TadError::Config {
            message: "API key is not a valid header value".to_string(),
            source: Some(Box::new(e)),
        })?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(HeaderName::from_static("x-api-key"), value);
        headers.insert(
            reqwest::header::ACCEPT,
            HeaderValue::from_static("application/json"),
        );
        Ok(headers)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

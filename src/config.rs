//! Session configuration: where the API lives and how to authenticate.
//!
//! Values come either from the caller or from the `TAD_*` environment
//! variables. The configuration is immutable once the client is built.

use std::time::Duration;

use reqwest::Url;

use crate::auth::ApiKey;
use crate::error::{Result, TadError};

/// Environment variable holding the Tenable.ad instance URL.
pub const URL_ENV: &str = "TAD_URL";

/// Path segment every endpoint lives under.
const API_BASE_PATH: &str = "api";

/// Covers TCP + TLS handshake only.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Covers the full round trip including the response body.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Configuration for a [`crate::client::TadClient`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Instance URL, e.g. `https://tenable-ad.example.com`.
    pub url: String,
    pub api_key: ApiKey,
    pub connect_timeout: Duration,
    pub timeout: Duration,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>, api_key: ApiKey) -> Self {
        ClientConfig {
            url: url.into(),
            api_key,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Loads `TAD_URL` and `TAD_API_KEY`.
    ///
    /// # Errors
    ///
    /// `TadError::Config` when either variable is unset or empty.
    pub fn from_env() -> Result<Self> {
        let url = match std::env::var(URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url,
            _ => return Err(TadError::config(format!("{URL_ENV} is not set"))),
        };
        Ok(ClientConfig::new(url, ApiKey::from_env()?))
    }

    pub fn with_timeouts(mut self, connect_timeout: Duration, timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self.timeout = timeout;
        self
    }

    /// The URL every endpoint path is appended to: `<url>/api/`.
    ///
    /// # Errors
    ///
    /// `TadError::Config` when the URL is not an absolute http(s) URL with
    /// a host.
    pub fn base_url(&self) -> Result<String> {
        let url = self.url.trim().trim_end_matches('/');
        let parsed = Url::parse(url).map_err(|e| TadError::Config {
            message: format!("invalid instance URL '{url}'"),
            source: Some(Box::new(e)),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
            return Err(TadError::config(format!(
                "instance URL must be http(s) with a host, got '{url}'"
            )));
        }
        Ok(format!("{url}/{API_BASE_PATH}/"))
    }
}

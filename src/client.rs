//! Authenticated HTTP client for the Tenable.ad REST API.
//!
//! `TadClient` wraps a `reqwest::Client` configured with the `X-API-Key`
//! default header and the instance's `<url>/api/` base. It offers JSON
//! request helpers (`get`, `post`, `patch`, `put`, ...) used by the
//! endpoint modules, and one accessor per endpoint family:
//!
//! ```ignore
//! let client = TadClient::new(&ClientConfig::from_env()?)?;
//! let users = client.users().list().await?;
//! ```
//!
//! Request semantics:
//! - One HTTP call per helper invocation. No retry, no caching.
//! - Non-2xx responses become `TadError::Api` with the body text kept.
//! - JSON helpers decode the body into the requested type; unit helpers
//!   (`delete`, `execute`) ignore its content but still read it to the end,
//!   so a dropped connection surfaces as `TadError::Network`.
//!
//! The client holds no mutable state, so it is `Send + Sync` and can be
//! shared across tasks by reference.

use reqwest::{Client, Method};
use serde::{Serialize, de::DeserializeOwned};

use crate::about::AboutApi;
use crate::ad_objects::AdObjectsApi;
use crate::alerts::AlertsApi;
use crate::api_keys::ApiKeysApi;
use crate::application_settings::ApplicationSettingsApi;
use crate::attack_types::{AttackTypeOptionsApi, AttackTypesApi};
use crate::attacks::AttacksApi;
use crate::auth::ApiKey;
use crate::config::ClientConfig;
use crate::deviances::DeviancesApi;
use crate::directories::DirectoriesApi;
use crate::email_notifiers::EmailNotifiersApi;
use crate::error::{Result, TadError};
use crate::ldap_configuration::LdapConfigurationApi;
use crate::license::LicenseApi;
use crate::lockout_policy::LockoutPolicyApi;
use crate::preferences::PreferencesApi;
use crate::profiles::ProfilesApi;
use crate::query::Query;
use crate::roles::RolesApi;
use crate::saml_configuration::SamlConfigurationApi;
use crate::users::UsersApi;
use crate::widgets::WidgetsApi;

/// Authenticated client for the Tenable.ad REST API.
///
/// `base_url` always ends with `/` and endpoint paths never start with
/// one, so `format!("{base_url}{path}")` yields the full URL.
#[derive(Debug, Clone)]
pub struct TadClient {
    client: Client,
    base_url: String,
}

impl TadClient {
    /// Builds a client from a [`ClientConfig`].
    ///
    /// # Errors
    ///
    /// `TadError::Config` if the URL is not absolute, the API key is not a
    /// valid header value, or the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = config.base_url()?;
        let client = Client::builder()
            .default_headers(config.api_key.headers()?)
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .map_err(|e| TadError::Config {
                message: "failed to build HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;
        Ok(TadClient { client, base_url })
    }

    /// Builds a client against an explicit API base (e.g. a mock server's
    /// `http://127.0.0.1:1234/api/`). A missing trailing slash is added.
    pub fn with_base_url(api_key: &ApiKey, base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .default_headers(api_key.headers()?)
            .build()
            .map_err(|e| TadError::Config {
                message: "failed to build HTTP client".to_string(),
                source: Some(Box::new(e)),
            })?;
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        Ok(TadClient { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one request and returns the body text of a success response.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        body: Option<&B>,
    ) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, path, "sending request");

        let mut req = self.client.request(method.clone(), &url);
        if let Some(q) = query.filter(|q| !q.is_empty()) {
            req = req.query(q.pairs());
        }
        if let Some(payload) = body {
            req = req.json(payload);
        }

        let resp = req.send().await?;
        let status = resp.status();
        tracing::debug!(%method, path, status = status.as_u16(), "received response");

        if !status.is_success() {
            tracing::warn!(%method, path, status = status.as_u16(), "request failed");
            // The status is the error; an unreadable body only loses the
            // server's message.
            let body = resp.text().await.unwrap_or_default();
            return Err(TadError::Api { status, body });
        }
        // A body cut short is a transport failure, even for callers that
        // discard it.
        Ok(resp.text().await?)
    }

    /// Sends a request and decodes the JSON response into `T`.
    pub async fn send_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        body: Option<&B>,
    ) -> Result<T> {
        let text = self.send(method, path, query, body).await?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Sends a request whose response carries nothing the caller needs.
    pub async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        query: Option<&Query>,
        body: Option<&B>,
    ) -> Result<()> {
        self.send(method, path, query, body).await.map(|_| ())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.send_json::<T, ()>(Method::GET, path, None, None).await
    }

    pub async fn get_query<T: DeserializeOwned>(&self, path: &str, query: &Query) -> Result<T> {
        self.send_json::<T, ()>(Method::GET, path, Some(query), None)
            .await
    }

    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send_json(Method::POST, path, None, Some(body)).await
    }

    pub async fn post_query<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &Query,
        body: &B,
    ) -> Result<T> {
        self.send_json(Method::POST, path, Some(query), Some(body))
            .await
    }

    pub async fn patch<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send_json(Method::PATCH, path, None, Some(body)).await
    }

    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        self.send_json(Method::PUT, path, None, Some(body)).await
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.execute::<()>(Method::DELETE, path, None, None).await
    }

    // ── Endpoint families ──────────────────────────────────────────────

    pub fn about(&self) -> AboutApi<'_> {
        AboutApi::new(self)
    }

    pub fn api_keys(&self) -> ApiKeysApi<'_> {
        ApiKeysApi::new(self)
    }

    pub fn directories(&self) -> DirectoriesApi<'_> {
        DirectoriesApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_> {
        UsersApi::new(self)
    }

    pub fn roles(&self) -> RolesApi<'_> {
        RolesApi::new(self)
    }

    pub fn profiles(&self) -> ProfilesApi<'_> {
        ProfilesApi::new(self)
    }

    pub fn alerts(&self) -> AlertsApi<'_> {
        AlertsApi::new(self)
    }

    pub fn deviances(&self) -> DeviancesApi<'_> {
        DeviancesApi::new(self)
    }

    pub fn ad_objects(&self) -> AdObjectsApi<'_> {
        AdObjectsApi::new(self)
    }

    pub fn attacks(&self) -> AttacksApi<'_> {
        AttacksApi::new(self)
    }

    pub fn attack_types(&self) -> AttackTypesApi<'_> {
        AttackTypesApi::new(self)
    }

    pub fn attack_type_options(&self) -> AttackTypeOptionsApi<'_> {
        AttackTypeOptionsApi::new(self)
    }

    pub fn widgets(&self) -> WidgetsApi<'_> {
        WidgetsApi::new(self)
    }

    pub fn email_notifiers(&self) -> EmailNotifiersApi<'_> {
        EmailNotifiersApi::new(self)
    }

    pub fn license(&self) -> LicenseApi<'_> {
        LicenseApi::new(self)
    }

    pub fn preferences(&self) -> PreferencesApi<'_> {
        PreferencesApi::new(self)
    }

    pub fn lockout_policy(&self) -> LockoutPolicyApi<'_> {
        LockoutPolicyApi::new(self)
    }

    pub fn ldap_configuration(&self) -> LdapConfigurationApi<'_> {
        LdapConfigurationApi::new(self)
    }

    pub fn saml_configuration(&self) -> SamlConfigurationApi<'_> {
        SamlConfigurationApi::new(self)
    }

    pub fn application_settings(&self) -> ApplicationSettingsApi<'_> {
        ApplicationSettingsApi::new(self)
    }
}

//! Instance-wide application settings (`/api/application-settings`).

use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;

/// Registration, audit log retention and outgoing mail settings.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationSettings {
    pub user_registration: Option<bool>,
    pub keep_audit_log: Option<bool>,
    /// Days.
    pub log_retention_period: Option<i64>,
    pub smtp_server_address: Option<String>,
    pub smtp_server_port: Option<i64>,
    pub smtp_account: Option<String>,
    pub smtp_account_password: Option<String>,
    pub smtp_user_start_tls: Option<bool>,
    pub tls: Option<bool>,
    pub email_sender: Option<String>,
    pub default_role_ids: Option<Vec<i64>>,
    pub default_profile_id: Option<i64>,
    pub internal_certificate: Option<String>,
}

pub struct ApplicationSettingsApi<'a> {
    client: &'a TadClient,
}

impl<'a> ApplicationSettingsApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        ApplicationSettingsApi { client }
    }

    pub async fn details(&self) -> Result<ApplicationSettings> {
        self.client.get("application-settings").await
    }

    pub async fn update(&self, update: &ApplicationSettings) -> Result<ApplicationSettings> {
        self.client.patch("application-settings", update).await
    }
}

//! Preferences of the calling user (`/api/preferences`).

use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preference {
    /// UI language code, e.g. `"en"`.
    pub language: Option<String>,
    pub preferred_profile_id: Option<i64>,
}

pub struct PreferencesApi<'a> {
    client: &'a TadClient,
}

impl<'a> PreferencesApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        PreferencesApi { client }
    }

    pub async fn details(&self) -> Result<Preference> {
        self.client.get("preferences").await
    }

    pub async fn update(&self, update: &Preference) -> Result<Preference> {
        self.client.patch("preferences", update).await
    }
}

//! API key retrieval and rotation for the calling user.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`ApiKeysApi::details`] | GET `/api/api-key` |
//! | [`ApiKeysApi::refresh`] | POST `/api/api-key` |
//!
//! Refreshing invalidates the key the current client was built with. Build
//! a new client with the returned key before issuing further calls.

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::TadClient;

/// The API key of the calling user.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiKey {
    pub key: String,
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiKey").field("key", &"***").finish()
    }
}

pub struct ApiKeysApi<'a> {
    client: &'a TadClient,
}

impl<'a> ApiKeysApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        ApiKeysApi { client }
    }

    /// Retrieves the current API key.
    pub async fn details(&self) -> crate::error::Result<ApiKey> {
        self.client.get("api-key").await
    }

    /// Generates a new API key, revoking the current one.
    pub async fn refresh(&self) -> crate::error::Result<ApiKey> {
        self.client
            .send_json::<ApiKey, ()>(Method::POST, "api-key", None, None)
            .await
    }
}

//! Instance information (`GET /api/about`).

use serde::{Deserialize, Serialize};

use crate::client::TadClient;

/// Version information reported by the Tenable.ad instance.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct About {
    pub version: Option<String>,
}

pub struct AboutApi<'a> {
    client: &'a TadClient,
}

impl<'a> AboutApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        AboutApi { client }
    }

    /// Retrieves the instance's version information.
    pub async fn details(&self) -> crate::error::Result<About> {
        self.client.get("about").await
    }
}

//! Account lockout policy singleton (`/api/lockout-policy`).

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockoutPolicy {
    pub enabled: Option<bool>,
    /// Seconds an account stays locked.
    pub lockout_duration: Option<i64>,
    pub failed_attempt_threshold: Option<i64>,
    /// Window, in seconds, over which failed attempts are counted.
    pub failed_attempt_period: Option<i64>,
}

pub struct LockoutPolicyApi<'a> {
    client: &'a TadClient,
}

impl<'a> LockoutPolicyApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        LockoutPolicyApi { client }
    }

    pub async fn details(&self) -> Result<LockoutPolicy> {
        self.client.get("lockout-policy").await
    }

    /// The server answers with an empty body.
    pub async fn update(&self, update: &LockoutPolicy) -> Result<()> {
        self.client
            .execute(Method::PATCH, "lockout-policy", None, Some(update))
            .await
    }
}

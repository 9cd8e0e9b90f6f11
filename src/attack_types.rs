//! Attack types and their per-profile options.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`AttackTypesApi::list`] | GET `/api/attack-types` |
//! | [`AttackTypeOptionsApi::list`] | GET `/api/profiles/{p}/attack-types/{t}/attack-type-options` |
//! | [`AttackTypeOptionsApi::create`] | POST `/api/profiles/{p}/attack-types/{t}/attack-type-options` |

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;
use crate::query::{Page, Query};

// ── Attack types ───────────────────────────────────────────────────────

/// A kind of attack Tenable.ad detects.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackType {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub yarn_rules: Option<String>,
    pub description: Option<String>,
    pub workload_quota: Option<i64>,
    pub mitre_attack_description: Option<String>,
    /// Severity, e.g. `"critical"`.
    pub criticity: Option<String>,
    #[serde(default)]
    pub resources: Vec<AttackTypeResource>,
    pub vector_template: Option<String>,
    #[serde(default)]
    pub vector_template_replacements: Vec<VectorTemplateReplacement>,
}

/// External documentation attached to an attack type.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackTypeResource {
    pub name: Option<String>,
    pub url: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: Option<String>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorTemplateReplacement {
    pub name: Option<String>,
    pub value_type: Option<String>,
}

pub struct AttackTypesApi<'a> {
    client: &'a TadClient,
}

impl<'a> AttackTypesApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        AttackTypesApi { client }
    }

    pub async fn list(&self) -> Result<Vec<AttackType>> {
        self.client.get("attack-types").await
    }
}

// ── Attack type options ────────────────────────────────────────────────

/// A configurable option of an attack type on a profile.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackTypeOption {
    pub id: Option<i64>,
    pub codename: Option<String>,
    pub profile_id: Option<i64>,
    pub attack_type_id: Option<i64>,
    pub directory_id: Option<i64>,
    /// JSON-encoded option value, interpreted according to `value_type`.
    pub value: Option<String>,
    pub value_type: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub translations: Option<Vec<String>>,
    pub staged: Option<bool>,
}

pub struct AttackTypeOptionsApi<'a> {
    client: &'a TadClient,
}

impl<'a> AttackTypeOptionsApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        AttackTypeOptionsApi { client }
    }

    /// Lists the options of an attack type on a profile. `staged` selects
    /// the uncommitted (`true`) or committed (`false`) values.
    pub async fn list(
        &self,
        profile_id: impl Display,
        attack_type_id: impl Display,
        staged: Option<bool>,
        page: &Page,
    ) -> Result<Vec<AttackTypeOption>> {
        let query = Query::new().opt("staged", staged).page(page);
        self.client
            .get_query(&options_path(profile_id, attack_type_id), &query)
            .await
    }

    /// Creates options on an attack type. Each entry needs `codename`,
    /// `value` and `value_type`; `directory_id` scopes it to one directory.
    pub async fn create(
        &self,
        profile_id: impl Display,
        attack_type_id: impl Display,
        options: &[AttackTypeOption],
    ) -> Result<Vec<AttackTypeOption>> {
        self.client
            .post(&options_path(profile_id, attack_type_id), options)
            .await
    }
}

fn options_path(profile_id: impl Display, attack_type_id: impl Display) -> String {
    format!("profiles/{profile_id}/attack-types/{attack_type_id}/attack-type-options")
}

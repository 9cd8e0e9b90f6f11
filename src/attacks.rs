//! Attacks detected on a profile (`GET /api/profiles/{profileId}/attacks`).

use std::fmt::{self, Display};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;
use crate::query::Query;
use crate::schema::Attribute;

// ── Response types ─────────────────────────────────────────────────────

/// A detected attack.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub id: Option<i64>,
    pub directory_id: Option<i64>,
    pub attack_type_id: Option<i64>,
    /// Targeted domain controller.
    pub dc: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub vector: Option<AttackVector>,
    pub source: Option<AttackPath>,
    pub destination: Option<AttackPath>,
    pub is_closed: Option<bool>,
}

#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackVector {
    pub template: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
}

/// One end of an attack.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttackPath {
    pub ip: Option<String>,
    pub hostname: Option<String>,
}

// ── Request types ──────────────────────────────────────────────────────

/// What `resource_value` designates in [`AttacksApi::list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Infrastructure,
    Directory,
    Hostname,
    Ip,
}

impl Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ResourceType::Infrastructure => "infrastructure",
            ResourceType::Directory => "directory",
            ResourceType::Hostname => "hostname",
            ResourceType::Ip => "ip",
        })
    }
}

/// Optional filters for [`AttacksApi::list`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttackFilter {
    /// Sent as repeated `attackTypeIds` parameters.
    pub attack_type_ids: Vec<i64>,
    pub date_start: Option<DateTime<Utc>>,
    pub date_end: Option<DateTime<Utc>>,
    pub include_closed: Option<bool>,
    pub limit: Option<u32>,
    /// Sort order, passed through as-is (e.g. `"asc"`).
    pub order: Option<String>,
    pub search: Option<String>,
}

// ── Endpoints ──────────────────────────────────────────────────────────

pub struct AttacksApi<'a> {
    client: &'a TadClient,
}

impl<'a> AttacksApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        AttacksApi { client }
    }

    /// Lists the attacks on a resource, as seen through a profile.
    pub async fn list(
        &self,
        profile_id: impl Display,
        resource_type: ResourceType,
        resource_value: &str,
        filter: &AttackFilter,
    ) -> Result<Vec<Attack>> {
        self.client
            .get_query(
                &format!("profiles/{profile_id}/attacks"),
                &list_query(resource_type, resource_value, filter),
            )
            .await
    }
}

fn list_query(resource_type: ResourceType, resource_value: &str, filter: &AttackFilter) -> Query {
    Query::new()
        .param("resource_type", resource_type)
        .param("resource_value", resource_value)
        .list("attack_type_ids", &filter.attack_type_ids)
        .date("date_start", filter.date_start)
        .date("date_end", filter.date_end)
        .opt("include_closed", filter.include_closed)
        .opt("limit", filter.limit)
        .opt("order", filter.order.as_deref())
        .opt("search", filter.search.as_deref())
}

//! Alerts raised on a security profile.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`AlertsApi::list`] | GET `/api/profiles/{profileId}/alerts` |
//! | [`AlertsApi::details`] | GET `/api/alerts/{id}` |
//! | [`AlertsApi::update`] | PATCH `/api/alerts/{id}` |
//! | [`AlertsApi::update_on_profile`] | PATCH `/api/profiles/{profileId}/alerts` |
//!
//! The server reports `archived` and `read` either as JSON booleans or as
//! the strings `"true"`/`"false"`; both decode to `bool`.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::serde_as;

use crate::client::TadClient;
use crate::error::Result;
use crate::query::{Page, Query};
use crate::schema::Lenient;

// ── Response types ─────────────────────────────────────────────────────

/// An alert generated from a deviance.
#[serde_as]
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: Option<i64>,
    pub deviance_id: Option<i64>,
    #[serde_as(as = "Option<Lenient>")]
    pub archived: Option<bool>,
    #[serde_as(as = "Option<Lenient>")]
    pub read: Option<bool>,
    pub date: Option<DateTime<Utc>>,
    pub directory_id: Option<i64>,
    pub infrastructure_id: Option<i64>,
}

// ── Request types ──────────────────────────────────────────────────────

/// Filters for [`AlertsApi::list`]. Unset fields are not sent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlertFilter {
    pub archived: Option<bool>,
    pub read: Option<bool>,
    pub page: Page,
}

/// Body of [`AlertsApi::update`] and [`AlertsApi::update_on_profile`].
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AlertUpdate {
    pub archived: Option<bool>,
    pub read: Option<bool>,
}

// ── Endpoints ──────────────────────────────────────────────────────────

pub struct AlertsApi<'a> {
    client: &'a TadClient,
}

impl<'a> AlertsApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        AlertsApi { client }
    }

    /// Lists the alerts of a profile.
    pub async fn list(&self, profile_id: impl Display, filter: &AlertFilter) -> Result<Vec<Alert>> {
        let query = Query::new()
            .opt("archived", filter.archived)
            .opt("read", filter.read)
            .page(&filter.page);
        self.client
            .get_query(&format!("profiles/{profile_id}/alerts"), &query)
            .await
    }

    pub async fn details(&self, alert_id: impl Display) -> Result<Alert> {
        self.client.get(&format!("alerts/{alert_id}")).await
    }

    /// Marks one alert as archived and/or read.
    pub async fn update(&self, alert_id: impl Display, update: &AlertUpdate) -> Result<Alert> {
        self.client
            .patch(&format!("alerts/{alert_id}"), update)
            .await
    }

    /// Applies `update` to every alert of a profile.
    pub async fn update_on_profile(
        &self,
        profile_id: impl Display,
        update: &AlertUpdate,
    ) -> Result<()> {
        self.client
            .execute(
                reqwest::Method::PATCH,
                &format!("profiles/{profile_id}/alerts"),
                None,
                Some(update),
            )
            .await
    }
}

//! Deviances: checker findings against AD objects.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`DeviancesApi::list`] | GET `/api/infrastructures/{i}/directories/{d}/deviances` |
//! | [`DeviancesApi::history_details`] | GET `/api/infrastructures/{i}/directories/{d}/deviances/{id}` |
//! | [`DeviancesApi::update`] | PATCH `/api/infrastructures/{i}/directories/{d}/deviances/{id}` |
//! | [`DeviancesApi::list_by_directory_and_checker`] | GET `/api/profiles/{p}/infrastructures/{i}/directories/{d}/checkers/{c}/deviances` |
//! | [`DeviancesApi::list_by_checker`] | POST `/api/profiles/{p}/checkers/{c}/deviances` |
//! | [`DeviancesApi::update_by_checker`] | PATCH `/api/profiles/{p}/checkers/{c}/deviances` |
//! | [`DeviancesApi::search`] | POST `/api/profiles/{p}/checkers/{c}/ad-objects/{o}` |
//! | [`DeviancesApi::update_on_ad_object_and_checker`] | PATCH `/api/profiles/{p}/checkers/{c}/ad-objects/{o}/deviances` |
//! | [`DeviancesApi::list_by_event`] | POST `/api/profiles/{p}/infrastructures/{i}/directories/{d}/events/{e}/deviances` |
//!
//! The bulk `update_*` calls send the profile, checker and AD object
//! identifiers both in the path and as query parameters, as the API
//! expects. The query values repeat the path identifiers unless a
//! [`DevianceQueryIds`] overrides them.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;
use crate::query::{Page, Query};
use crate::schema::Attribute;

// ── Response types ─────────────────────────────────────────────────────

/// A deviance: one checker finding on one AD object.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deviance {
    pub id: Option<i64>,
    pub directory_id: Option<i64>,
    pub checker_id: Option<i64>,
    pub profile_id: Option<i64>,
    pub ad_object_id: Option<i64>,
    pub reason_id: Option<i64>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub event_date: Option<DateTime<Utc>>,
    pub ignore_until: Option<DateTime<Utc>>,
    pub deviance_provider_id: Option<String>,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    pub description: Option<DevianceDescription>,
}

/// Human-readable description: a template plus its substitutions.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevianceDescription {
    pub template: Option<String>,
    #[serde(default)]
    pub replacements: Vec<Attribute>,
}

// ── Request types ──────────────────────────────────────────────────────

/// Paging and filtering for [`DeviancesApi::list`] (sent as query
/// parameters) and [`DeviancesApi::list_by_checker`] (sent as the body).
///
/// `resolved` only applies to `list`; `expression` only to
/// `list_by_checker`.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevianceFilter {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
    pub batch_size: Option<u32>,
    pub last_identifier_seen: Option<String>,
    pub resolved: Option<bool>,
    /// Search expression object, passed through as-is.
    pub expression: Option<serde_json::Value>,
}

/// Body of [`DeviancesApi::search`].
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DevianceSearch {
    pub date_start: Option<DateTime<Utc>>,
    pub date_end: Option<DateTime<Utc>>,
    pub show_ignored: Option<bool>,
}

/// Query-parameter identifiers of the bulk deviance updates. A `None`
/// field falls back to the matching path identifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DevianceQueryIds {
    pub profile_id: Option<i64>,
    pub checker_id: Option<i64>,
    pub ad_object_id: Option<i64>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct IgnoreUntil {
    ignore_until: DateTime<Utc>,
}

#[derive(Serialize)]
struct EventDeviances<'a> {
    checkers: &'a [i64],
    reasons: &'a [i64],
}

// ── Endpoints ──────────────────────────────────────────────────────────

pub struct DeviancesApi<'a> {
    client: &'a TadClient,
}

impl<'a> DeviancesApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        DeviancesApi { client }
    }

    /// Lists the deviances of a directory.
    pub async fn list(
        &self,
        infrastructure_id: impl Display,
        directory_id: impl Display,
        filter: &DevianceFilter,
    ) -> Result<Vec<Deviance>> {
        let query = Query::new()
            .opt("page", filter.page)
            .opt("per_page", filter.per_page)
            .opt("batch_size", filter.batch_size)
            .opt("last_identifier_seen", filter.last_identifier_seen.as_deref())
            .opt("resolved", filter.resolved);
        self.client
            .get_query(
                &format!("infrastructures/{infrastructure_id}/directories/{directory_id}/deviances"),
                &query,
            )
            .await
    }

    /// Retrieves one entry of a directory's deviance history.
    pub async fn history_details(
        &self,
        infrastructure_id: impl Display,
        directory_id: impl Display,
        deviance_id: impl Display,
    ) -> Result<Deviance> {
        self.client
            .get(&deviance_path(infrastructure_id, directory_id, deviance_id))
            .await
    }

    /// Ignores a deviance until `ignore_until`.
    pub async fn update(
        &self,
        infrastructure_id: impl Display,
        directory_id: impl Display,
        deviance_id: impl Display,
        ignore_until: DateTime<Utc>,
    ) -> Result<Deviance> {
        self.client
            .patch(
                &deviance_path(infrastructure_id, directory_id, deviance_id),
                &IgnoreUntil { ignore_until },
            )
            .await
    }

    pub async fn list_by_directory_and_checker(
        &self,
        profile_id: impl Display,
        infrastructure_id: impl Display,
        directory_id: impl Display,
        checker_id: impl Display,
        page: &Page,
    ) -> Result<Vec<Deviance>> {
        let path = format!(
            "profiles/{profile_id}/infrastructures/{infrastructure_id}/directories/{directory_id}/checkers/{checker_id}/deviances"
        );
        self.client
            .get_query(&path, &Query::new().page(page))
            .await
    }

    /// Lists a checker's deviances on a profile, filtered by `filter`.
    pub async fn list_by_checker(
        &self,
        profile_id: impl Display,
        checker_id: impl Display,
        filter: &DevianceFilter,
    ) -> Result<Vec<Deviance>> {
        self.client
            .post(
                &format!("profiles/{profile_id}/checkers/{checker_id}/deviances"),
                filter,
            )
            .await
    }

    /// Ignores every deviance of a checker on a profile until `ignore_until`.
    pub async fn update_by_checker(
        &self,
        profile_id: impl Display,
        checker_id: impl Display,
        ignore_until: DateTime<Utc>,
        query_ids: &DevianceQueryIds,
    ) -> Result<()> {
        let query = Query::new()
            .param("profile_id", or_path(query_ids.profile_id, &profile_id))
            .param("checker_id", or_path(query_ids.checker_id, &checker_id));
        self.client
            .execute(
                Method::PATCH,
                &format!("profiles/{profile_id}/checkers/{checker_id}/deviances"),
                Some(&query),
                Some(&IgnoreUntil { ignore_until }),
            )
            .await
    }

    /// Searches the deviances a checker raised on one AD object.
    pub async fn search(
        &self,
        profile_id: impl Display,
        checker_id: impl Display,
        ad_object_id: impl Display,
        search: &DevianceSearch,
        page: &Page,
    ) -> Result<Vec<Deviance>> {
        self.client
            .post_query(
                &format!("profiles/{profile_id}/checkers/{checker_id}/ad-objects/{ad_object_id}"),
                &Query::new().page(page),
                search,
            )
            .await
    }

    /// Ignores the deviances a checker raised on one AD object until
    /// `ignore_until`.
    pub async fn update_on_ad_object_and_checker(
        &self,
        profile_id: impl Display,
        checker_id: impl Display,
        ad_object_id: impl Display,
        ignore_until: DateTime<Utc>,
        query_ids: &DevianceQueryIds,
    ) -> Result<()> {
        let query = Query::new()
            .param("profile_id", or_path(query_ids.profile_id, &profile_id))
            .param("checker_id", or_path(query_ids.checker_id, &checker_id))
            .param("ad_object_id", or_path(query_ids.ad_object_id, &ad_object_id));
        self.client
            .execute(
                Method::PATCH,
                &format!(
                    "profiles/{profile_id}/checkers/{checker_id}/ad-objects/{ad_object_id}/deviances"
                ),
                Some(&query),
                Some(&IgnoreUntil { ignore_until }),
            )
            .await
    }

    /// Lists the deviances caused by one event, restricted to the given
    /// checkers and reasons.
    #[allow(clippy::too_many_arguments)]
    pub async fn list_by_event(
        &self,
        profile_id: impl Display,
        infrastructure_id: impl Display,
        directory_id: impl Display,
        event_id: impl Display,
        checkers: &[i64],
        reasons: &[i64],
        page: &Page,
    ) -> Result<Vec<Deviance>> {
        let path = format!(
            "profiles/{profile_id}/infrastructures/{infrastructure_id}/directories/{directory_id}/events/{event_id}/deviances"
        );
        self.client
            .post_query(
                &path,
                &Query::new().page(page),
                &EventDeviances { checkers, reasons },
            )
            .await
    }
}

fn or_path(query_id: Option<i64>, path_id: &impl Display) -> String {
    query_id.map_or_else(|| path_id.to_string(), |id| id.to_string())
}

fn deviance_path(
    infrastructure_id: impl Display,
    directory_id: impl Display,
    deviance_id: impl Display,
) -> String {
    format!("infrastructures/{infrastructure_id}/directories/{directory_id}/deviances/{deviance_id}")
}

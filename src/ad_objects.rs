//! Active Directory objects observed by Tenable.ad.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`AdObjectsApi::details`] | GET `/api/infrastructures/{i}/directories/{d}/ad-objects/{id}` |
//! | [`AdObjectsApi::details_by_profile_and_checker`] | GET `/api/profiles/{p}/checkers/{c}/ad-objects/{id}` |
//! | [`AdObjectsApi::details_by_event`] | GET `/api/infrastructures/{i}/directories/{d}/events/{e}/ad-objects/{id}` |
//! | [`AdObjectsApi::changes`] | GET `/api/infrastructures/{i}/directories/{d}/events/{e}/ad-objects/{id}/changes` |
//! | [`AdObjectsApi::search`] | POST `/api/profiles/{p}/checkers/{c}/ad-objects/search` |

use std::fmt::Display;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;
use crate::query::{Page, Query};
use crate::schema::Attribute;

/// An AD object (user, group, GPO, ...) with its LDAP attributes.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdObject {
    pub id: Option<i64>,
    pub directory_id: Option<i64>,
    pub object_id: Option<String>,
    /// Object source, e.g. `"LDAP"` or `"SYSVOL"`.
    #[serde(rename = "type")]
    pub object_type: Option<String>,
    #[serde(default)]
    pub object_attributes: Vec<Attribute>,
    /// Reason identifiers of the deviances raised on the object.
    pub reasons: Option<Vec<i64>>,
}

/// Body of [`AdObjectsApi::search`].
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdObjectSearch {
    /// Search expression object, passed through as-is.
    pub expression: serde_json::Value,
    pub directories: Vec<i64>,
    pub reasons: Vec<i64>,
    pub show_ignored: bool,
    pub date_start: Option<DateTime<Utc>>,
    pub date_end: Option<DateTime<Utc>>,
}

pub struct AdObjectsApi<'a> {
    client: &'a TadClient,
}

impl<'a> AdObjectsApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        AdObjectsApi { client }
    }

    pub async fn details(
        &self,
        infrastructure_id: impl Display,
        directory_id: impl Display,
        ad_object_id: impl Display,
    ) -> Result<AdObject> {
        self.client
            .get(&format!(
                "infrastructures/{infrastructure_id}/directories/{directory_id}/ad-objects/{ad_object_id}"
            ))
            .await
    }

    /// Retrieves an AD object having deviances for a profile and checker.
    pub async fn details_by_profile_and_checker(
        &self,
        profile_id: impl Display,
        checker_id: impl Display,
        ad_object_id: impl Display,
    ) -> Result<AdObject> {
        self.client
            .get(&format!(
                "profiles/{profile_id}/checkers/{checker_id}/ad-objects/{ad_object_id}"
            ))
            .await
    }

    /// Retrieves an AD object as it was at the time of an event.
    pub async fn details_by_event(
        &self,
        infrastructure_id: impl Display,
        directory_id: impl Display,
        event_id: impl Display,
        ad_object_id: impl Display,
    ) -> Result<AdObject> {
        self.client
            .get(&event_path(
                infrastructure_id,
                directory_id,
                event_id,
                ad_object_id,
            ))
            .await
    }

    /// Retrieves the changes an event made to an AD object.
    ///
    /// `wanted_values` restricts the attributes returned; it is sent as a
    /// repeated `wantedValues` parameter. An empty slice sends nothing.
    pub async fn changes(
        &self,
        infrastructure_id: impl Display,
        directory_id: impl Display,
        event_id: impl Display,
        ad_object_id: impl Display,
        wanted_values: &[&str],
    ) -> Result<Vec<AdObject>> {
        let path = format!(
            "{}/changes",
            event_path(infrastructure_id, directory_id, event_id, ad_object_id)
        );
        let query = Query::new().list("wanted_values", wanted_values);
        self.client.get_query(&path, &query).await
    }

    /// Searches the AD objects having deviances for a profile and checker.
    pub async fn search(
        &self,
        profile_id: impl Display,
        checker_id: impl Display,
        search: &AdObjectSearch,
        page: &Page,
    ) -> Result<Vec<AdObject>> {
        self.client
            .post_query(
                &format!("profiles/{profile_id}/checkers/{checker_id}/ad-objects/search"),
                &Query::new().page(page),
                search,
            )
            .await
    }
}

fn event_path(
    infrastructure_id: impl Display,
    directory_id: impl Display,
    event_id: impl Display,
    ad_object_id: impl Display,
) -> String {
    format!(
        "infrastructures/{infrastructure_id}/directories/{directory_id}/events/{event_id}/ad-objects/{ad_object_id}"
    )
}

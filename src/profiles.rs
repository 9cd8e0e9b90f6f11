//! Security profile management.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`ProfilesApi::list`] | GET `/api/profiles` |
//! | [`ProfilesApi::create`] | POST `/api/profiles` |
//! | [`ProfilesApi::details`] | GET `/api/profiles/{id}` |
//! | [`ProfilesApi::update`] | PATCH `/api/profiles/{id}` |
//! | [`ProfilesApi::delete`] | DELETE `/api/profiles/{id}` |
//! | [`ProfilesApi::copy_profile`] | POST `/api/profiles/from/{id}` |
//! | [`ProfilesApi::commit`] | POST `/api/profiles/{id}/commit` |
//! | [`ProfilesApi::unstage`] | POST `/api/profiles/{id}/unstage` |
//!
//! Changes to a profile are staged until committed. `unstage` discards
//! the staged changes.

use std::fmt::Display;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;

/// A security profile: a named view over a set of directories.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub deleted: Option<bool>,
    /// Directory identifiers covered by the profile.
    pub directories: Option<Vec<i64>>,
    /// `true` while the profile has uncommitted changes.
    pub dirty: Option<bool>,
    pub has_ever_been_committed: Option<bool>,
}

#[derive(Serialize)]
struct NewProfile<'a> {
    name: &'a str,
    directories: &'a [i64],
}

pub struct ProfilesApi<'a> {
    client: &'a TadClient,
}

impl<'a> ProfilesApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        ProfilesApi { client }
    }

    pub async fn list(&self) -> Result<Vec<Profile>> {
        self.client.get("profiles").await
    }

    /// Creates a profile. The server answers with a list of created
    /// profiles.
    pub async fn create(&self, name: &str, directories: &[i64]) -> Result<Vec<Profile>> {
        self.client
            .post("profiles", &NewProfile { name, directories })
            .await
    }

    pub async fn details(&self, profile_id: impl Display) -> Result<Profile> {
        self.client.get(&format!("profiles/{profile_id}")).await
    }

    pub async fn update(&self, profile_id: impl Display, update: &Profile) -> Result<Profile> {
        self.client
            .patch(&format!("profiles/{profile_id}"), update)
            .await
    }

    pub async fn delete(&self, profile_id: impl Display) -> Result<()> {
        self.client
            .delete(&format!("profiles/{profile_id}"))
            .await
    }

    /// Creates a new profile from `from_id`'s settings.
    pub async fn copy_profile(
        &self,
        from_id: impl Display,
        name: &str,
        directories: &[i64],
    ) -> Result<Profile> {
        self.client
            .post(
                &format!("profiles/from/{from_id}"),
                &NewProfile { name, directories },
            )
            .await
    }

    /// Commits the profile's staged changes.
    pub async fn commit(&self, profile_id: impl Display) -> Result<()> {
        self.client
            .execute::<()>(
                Method::POST,
                &format!("profiles/{profile_id}/commit"),
                None,
                None,
            )
            .await
    }

    /// Discards the profile's staged changes.
    pub async fn unstage(&self, profile_id: impl Display) -> Result<()> {
        self.client
            .execute::<()>(
                Method::POST,
                &format!("profiles/{profile_id}/unstage"),
                None,
                None,
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::assert_wire_names;

    #[test]
    fn profile_deserializes_full_response() {
        let json = r#"{
            "id": 1,
            "name": "Tenable",
            "deleted": false,
            "directories": [1, 2],
            "dirty": true,
            "hasEverBeenCommitted": true
        }"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.directories, Some(vec![1, 2]));
        assert_eq!(profile.has_ever_been_committed, Some(true));
        assert_wire_names(
            &serde_json::to_value(&profile).unwrap(),
            &[
                "id",
                "name",
                "deleted",
                "directories",
                "dirty",
                "has_ever_been_committed",
            ],
        );
    }

    #[test]
    fn profile_ignores_unknown_fields() {
        let json = r#"{"id": 4, "name": "p", "someFutureField": {"nested": 1}}"#;
        let profile: Profile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, Some(4));
    }
}

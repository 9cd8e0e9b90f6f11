//! Directory (Active Directory domain) management.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`DirectoriesApi::list`] | GET `/api/directories` |
//! | [`DirectoriesApi::create`] | POST `/api/directories` |
//! | [`DirectoriesApi::details`] | GET `/api/directories/{id}` |
//! | [`DirectoriesApi::details_in_infrastructure`] | GET `/api/infrastructures/{i}/directories/{d}` |
//! | [`DirectoriesApi::update`] | PATCH `/api/infrastructures/{i}/directories/{d}` |
//! | [`DirectoriesApi::delete`] | DELETE `/api/infrastructures/{i}/directories/{d}` |
//!
//! Directories belong to an infrastructure (forest). Reads by bare ID are
//! allowed; mutations are addressed through the owning infrastructure.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;

/// A monitored Active Directory domain.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Directory {
    pub id: Option<i64>,
    pub name: Option<String>,
    /// Domain controller address used for LDAP/SMB crawling.
    pub ip: Option<String>,
    /// Directory kind, e.g. `"ADDS"`.
    #[serde(rename = "type")]
    pub directory_type: Option<String>,
    pub ldap_port: Option<i64>,
    pub global_catalog_port: Option<i64>,
    pub smb_port: Option<i64>,
    /// Fully qualified DNS name of the domain.
    pub dns: Option<String>,
    pub infrastructure_id: Option<i64>,
    pub ldap_crawling_status: Option<String>,
    pub sysvol_crawling_status: Option<String>,
    pub honey_account_ad_object_id: Option<i64>,
    pub honey_account_distinguished_name: Option<String>,
    pub honey_account_configuration_status: Option<String>,
}

pub struct DirectoriesApi<'a> {
    client: &'a TadClient,
}

impl<'a> DirectoriesApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        DirectoriesApi { client }
    }

    /// Retrieves all directories.
    pub async fn list(&self) -> Result<Vec<Directory>> {
        self.client.get("directories").await
    }

    /// Creates one or more directories.
    ///
    /// Each entry needs at least `name`, `ip`, `dns` and
    /// `infrastructure_id`; the server rejects incomplete entries.
    pub async fn create(&self, directories: &[Directory]) -> Result<Vec<Directory>> {
        self.client.post("directories", directories).await
    }

    pub async fn details(&self, directory_id: impl Display) -> Result<Directory> {
        self.client
            .get(&format!("directories/{directory_id}"))
            .await
    }

    pub async fn details_in_infrastructure(
        &self,
        infrastructure_id: impl Display,
        directory_id: impl Display,
    ) -> Result<Directory> {
        self.client
            .get(&infrastructure_path(infrastructure_id, directory_id))
            .await
    }

    /// Updates the fields set on `update`; `None` fields are left unchanged.
    pub async fn update(
        &self,
        infrastructure_id: impl Display,
        directory_id: impl Display,
        update: &Directory,
    ) -> Result<Directory> {
        self.client
            .patch(&infrastructure_path(infrastructure_id, directory_id), update)
            .await
    }

    pub async fn delete(
        &self,
        infrastructure_id: impl Display,
        directory_id: impl Display,
    ) -> Result<()> {
        self.client
            .delete(&infrastructure_path(infrastructure_id, directory_id))
            .await
    }
}

fn infrastructure_path(infrastructure_id: impl Display, directory_id: impl Display) -> String {
    format!("infrastructures/{infrastructure_id}/directories/{directory_id}")
}

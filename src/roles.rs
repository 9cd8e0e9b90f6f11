//! Role management.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`RolesApi::list`] | GET `/api/roles` |
//! | [`RolesApi::create`] | POST `/api/roles` |
//! | [`RolesApi::default_roles`] | GET `/api/roles/user-creation-defaults` |
//! | [`RolesApi::details`] | GET `/api/roles/{id}` |
//! | [`RolesApi::update`] | PATCH `/api/roles/{id}` |
//! | [`RolesApi::delete`] | DELETE `/api/roles/{id}` |
//! | [`RolesApi::copy_role`] | POST `/api/roles/from/{id}` |
//! | [`RolesApi::replace_role_permissions`] | PUT `/api/roles/{id}/permissions` |

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;
use crate::schema::Permission;

/// A named set of permissions assignable to users.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: Vec<Permission>,
}

#[derive(Serialize)]
struct NewRole<'a> {
    name: &'a str,
    description: &'a str,
}

#[derive(Serialize)]
struct CopyRole<'a> {
    name: &'a str,
}

pub struct RolesApi<'a> {
    client: &'a TadClient,
}

impl<'a> RolesApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        RolesApi { client }
    }

    pub async fn list(&self) -> Result<Vec<Role>> {
        self.client.get("roles").await
    }

    pub async fn create(&self, name: &str, description: &str) -> Result<Role> {
        self.client
            .post("roles", &NewRole { name, description })
            .await
    }

    /// Roles granted to newly created users.
    pub async fn default_roles(&self) -> Result<Vec<Role>> {
        self.client.get("roles/user-creation-defaults").await
    }

    pub async fn details(&self, role_id: impl Display) -> Result<Role> {
        self.client.get(&format!("roles/{role_id}")).await
    }

    /// Updates name and/or description. Permissions are replaced through
    /// [`RolesApi::replace_role_permissions`] instead.
    pub async fn update(&self, role_id: impl Display, update: &Role) -> Result<Role> {
        self.client
            .patch(&format!("roles/{role_id}"), update)
            .await
    }

    pub async fn delete(&self, role_id: impl Display) -> Result<()> {
        self.client.delete(&format!("roles/{role_id}")).await
    }

    /// Creates a new role named `name` with the permissions of `from_id`.
    pub async fn copy_role(&self, from_id: impl Display, name: &str) -> Result<Role> {
        self.client
            .post(&format!("roles/from/{from_id}"), &CopyRole { name })
            .await
    }

    pub async fn replace_role_permissions(
        &self,
        role_id: impl Display,
        permissions: &[Permission],
    ) -> Result<Role> {
        self.client
            .put(&format!("roles/{role_id}/permissions"), permissions)
            .await
    }
}

//! User management and account actions.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`UsersApi::list`] | GET `/api/users` |
//! | [`UsersApi::create`] | POST `/api/users` |
//! | [`UsersApi::info`] | GET `/api/users/whoami` |
//! | [`UsersApi::details`] | GET `/api/users/{id}` |
//! | [`UsersApi::update`] | PATCH `/api/users/{id}` |
//! | [`UsersApi::delete`] | DELETE `/api/users/{id}` |
//! | [`UsersApi::log_in`] | POST `/api/users/login` |
//! | [`UsersApi::log_out`] | POST `/api/users/logout` |
//! | [`UsersApi::create_password`] | POST `/api/users/forgotten-password` |
//! | [`UsersApi::retrieve_password`] | POST `/api/users/retrieve-password` |
//! | [`UsersApi::change_password`] | PATCH `/api/users/password` |
//! | [`UsersApi::update_user_roles`] | PUT `/api/users/{id}/roles` |

use std::fmt::Display;

use reqwest::Method;
use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;
use crate::roles::Role;

// ── Records ────────────────────────────────────────────────────────────

/// A Tenable.ad user account.
///
/// Also used as the payload for [`UsersApi::create`] and
/// [`UsersApi::update`]: only the fields that are `Some` are sent.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Option<i64>,
    pub surname: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    /// Write-only; never returned by the server.
    pub password: Option<String>,
    pub locked_out: Option<bool>,
    pub department: Option<String>,
    pub biography: Option<String>,
    pub active: Option<bool>,
    /// Avatar image as raw byte values.
    pub picture: Option<Vec<i64>>,
    /// Role identifiers assigned to the user.
    pub roles: Option<Vec<i64>>,
    /// The separate `role` list some server versions return beside `roles`.
    pub role: Option<Vec<i64>>,
    pub identifier: Option<String>,
    pub provider: Option<String>,
    pub eula_version: Option<i64>,
}

/// The calling user as returned by `whoami`, with roles expanded.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: Option<i64>,
    pub surname: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub locked_out: Option<bool>,
    pub department: Option<String>,
    pub biography: Option<String>,
    pub active: Option<bool>,
    pub picture: Option<Vec<i64>>,
    pub identifier: Option<String>,
    pub provider: Option<String>,
    pub eula_version: Option<i64>,
    /// Whether the account is local (as opposed to LDAP/SAML provisioned).
    pub internal: Option<bool>,
    #[serde(default)]
    pub roles: Vec<Role>,
}

// ── Request bodies ─────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct LogInRequest<'a> {
    auth_token: &'a str,
}

#[derive(Serialize)]
struct ForgottenPasswordRequest<'a> {
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RetrievePasswordRequest<'a> {
    token: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChangePasswordRequest<'a> {
    old_password: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct UserRolesRequest<'a> {
    roles: &'a [i64],
}

// ── Endpoints ──────────────────────────────────────────────────────────

pub struct UsersApi<'a> {
    client: &'a TadClient,
}

impl<'a> UsersApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        UsersApi { client }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        self.client.get("users").await
    }

    /// Creates a user. `name`, `email` and `password` are required; any
    /// other field set on `extra` (surname, department, active, ...) is sent
    /// along with them.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password: &str,
        extra: User,
    ) -> Result<User> {
        let user = User {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            password: Some(password.to_string()),
            ..extra
        };
        self.client.post("users", &user).await
    }

    /// Retrieves the user the API key belongs to.
    pub async fn info(&self) -> Result<UserInfo> {
        self.client.get("users/whoami").await
    }

    pub async fn details(&self, user_id: impl Display) -> Result<User> {
        self.client.get(&format!("users/{user_id}")).await
    }

    pub async fn update(&self, user_id: impl Display, update: &User) -> Result<User> {
        self.client
            .patch(&format!("users/{user_id}"), update)
            .await
    }

    pub async fn delete(&self, user_id: impl Display) -> Result<()> {
        self.client.delete(&format!("users/{user_id}")).await
    }

    pub async fn log_in(&self, auth_token: &str) -> Result<()> {
        let body = LogInRequest { auth_token };
        self.client
            .execute(Method::POST, "users/login", None, Some(&body))
            .await
    }

    pub async fn log_out(&self) -> Result<()> {
        self.client
            .execute::<()>(Method::POST, "users/logout", None, None)
            .await
    }

    /// Sends the "create a new password" email to `email`.
    pub async fn create_password(&self, email: &str) -> Result<()> {
        let body = ForgottenPasswordRequest { email };
        self.client
            .execute(Method::POST, "users/forgotten-password", None, Some(&body))
            .await
    }

    /// Sets a new password using the token from the password email.
    pub async fn retrieve_password(&self, token: &str, new_password: &str) -> Result<()> {
        let body = RetrievePasswordRequest {
            token,
            new_password,
        };
        self.client
            .execute(Method::POST, "users/retrieve-password", None, Some(&body))
            .await
    }

    /// Changes the calling user's password.
    pub async fn change_password(&self, old_password: &str, new_password: &str) -> Result<()> {
        let body = ChangePasswordRequest {
            old_password,
            new_password,
        };
        self.client
            .execute(Method::PATCH, "users/password", None, Some(&body))
            .await
    }

    /// Replaces the user's role list.
    pub async fn update_user_roles(&self, user_id: impl Display, roles: &[i64]) -> Result<User> {
        self.client
            .put(&format!("users/{user_id}/roles"), &UserRolesRequest { roles })
            .await
    }
}

//! LDAP authentication settings.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`LdapConfigurationApi::details`] | GET `/api/ldap-configuration` |
//! | [`LdapConfigurationApi::update`] | PATCH `/api/ldap-configuration` |

use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;
use crate::schema::AllowedGroup;

/// LDAP sign-in configuration.
///
/// `search_user_dn` is spelled `searchUserDN` on the wire, which the
/// regular camelCase rule would not produce.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LdapConfiguration {
    pub enabled: Option<bool>,
    pub url: Option<String>,
    #[serde(rename = "searchUserDN")]
    pub search_user_dn: Option<String>,
    pub search_user_password: Option<String>,
    pub user_search_base: Option<String>,
    pub user_search_filter: Option<String>,
    pub allowed_groups: Option<Vec<AllowedGroup>>,
}

pub struct LdapConfigurationApi<'a> {
    client: &'a TadClient,
}

impl<'a> LdapConfigurationApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        LdapConfigurationApi { client }
    }

    pub async fn details(&self) -> Result<LdapConfiguration> {
        self.client.get("ldap-configuration").await
    }

    pub async fn update(&self, update: &LdapConfiguration) -> Result<LdapConfiguration> {
        self.client.patch("ldap-configuration", update).await
    }
}

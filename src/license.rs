//! License singleton.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`LicenseApi::details`] | GET `/api/license` |
//! | [`LicenseApi::create`] | POST `/api/license` |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;

/// The installed license.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct License {
    pub customer_name: Option<String>,
    pub max_active_user_count: Option<i64>,
    pub current_active_user_count: Option<i64>,
    #[serde(rename = "expirationDateUTC")]
    pub expiration_date_utc: Option<DateTime<Utc>>,
    pub in_app_eula: Option<bool>,
    pub features: Option<Vec<String>>,
}

#[derive(Serialize)]
struct LicenseUpload<'a> {
    license: &'a str,
}

pub struct LicenseApi<'a> {
    client: &'a TadClient,
}

impl<'a> LicenseApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        LicenseApi { client }
    }

    pub async fn details(&self) -> Result<License> {
        self.client.get("license").await
    }

    /// Installs a license from its encoded form, replacing the current one.
    pub async fn create(&self, license: &str) -> Result<License> {
        self.client
            .post("license", &LicenseUpload { license })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::assert_wire_names;
    use chrono::TimeZone;

    #[test]
    fn license_decodes_irregular_expiration_name() {
        let json = r#"{
            "customerName": "customer name",
            "maxActiveUserCount": 1,
            "currentActiveUserCount": 0,
            "expirationDateUTC": "2021-11-17T13:44:24.259Z",
            "inAppEula": true,
            "features": ["something"]
        }"#;
        let license: License = serde_json::from_str(json).unwrap();
        assert_eq!(license.customer_name.as_deref(), Some("customer name"));
        assert_eq!(license.current_active_user_count, Some(0));
        let expected = Utc.with_ymd_and_hms(2021, 11, 17, 13, 44, 24).unwrap()
            + chrono::Duration::milliseconds(259);
        assert_eq!(license.expiration_date_utc, Some(expected));
        assert_eq!(license.features, Some(vec!["something".to_string()]));
        assert_wire_names(
            &serde_json::to_value(&license).unwrap(),
            &[
                "customer_name",
                "max_active_user_count",
                "current_active_user_count",
                "expiration_date_utc",
                "in_app_eula",
                "features",
            ],
        );
    }
}

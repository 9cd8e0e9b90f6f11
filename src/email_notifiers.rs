//! Email notifier management.
//!
//! | Method | API Path |
//! |--------|----------|
//! | [`EmailNotifiersApi::list`] | GET `/api/email-notifiers` |
//! | [`EmailNotifiersApi::create`] | POST `/api/email-notifiers` |
//! | [`EmailNotifiersApi::details`] | GET `/api/email-notifiers/{id}` |
//! | [`EmailNotifiersApi::update`] | PATCH `/api/email-notifiers/{id}` |
//! | [`EmailNotifiersApi::delete`] | DELETE `/api/email-notifiers/{id}` |
//!
//! A notifier either watches deviances (`input_type = "Deviances"` with
//! `checkers` and `profiles`) or attacks (`attack_types` and `profiles`).

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::client::TadClient;
use crate::error::Result;

/// An email notification rule.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailNotifier {
    pub id: Option<i64>,
    pub address: Option<String>,
    pub criticity_threshold: Option<i64>,
    pub directories: Option<Vec<i64>>,
    pub description: Option<String>,
    pub checkers: Option<Vec<i64>>,
    pub attack_types: Option<Vec<i64>>,
    pub profiles: Option<Vec<i64>>,
    pub should_notify_on_initial_full_security_check: Option<bool>,
    pub input_type: Option<String>,
}

pub struct EmailNotifiersApi<'a> {
    client: &'a TadClient,
}

impl<'a> EmailNotifiersApi<'a> {
    pub(crate) fn new(client: &'a TadClient) -> Self {
        EmailNotifiersApi { client }
    }

    pub async fn list(&self) -> Result<Vec<EmailNotifier>> {
        self.client.get("email-notifiers").await
    }

    pub async fn create(&self, notifier: &EmailNotifier) -> Result<EmailNotifier> {
        self.client.post("email-notifiers", notifier).await
    }

    pub async fn details(&self, email_notifier_id: impl Display) -> Result<EmailNotifier> {
        self.client
            .get(&format!("email-notifiers/{email_notifier_id}"))
            .await
    }

    pub async fn update(
        &self,
        email_notifier_id: impl Display,
        update: &EmailNotifier,
    ) -> Result<EmailNotifier> {
        self.client
            .patch(&format!("email-notifiers/{email_notifier_id}"), update)
            .await
    }

    pub async fn delete(&self, email_notifier_id: impl Display) -> Result<()> {
        self.client
            .delete(&format!("email-notifiers/{email_notifier_id}"))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::assert_wire_names;

    #[test]
    fn email_notifier_deserializes_full_response() {
        let json = r#"{
            "id": 1,
            "address": "soc@example.com",
            "criticityThreshold": 50,
            "directories": [1, 2],
            "description": "notify the SOC",
            "checkers": [3],
            "attackTypes": [4],
            "profiles": [1],
            "shouldNotifyOnInitialFullSecurityCheck": false,
            "inputType": "Deviances"
        }"#;
        let notifier: EmailNotifier = serde_json::from_str(json).unwrap();
        assert_eq!(notifier.criticity_threshold, Some(50));
        assert_eq!(notifier.attack_types, Some(vec![4]));
        assert_eq!(
            notifier.should_notify_on_initial_full_security_check,
            Some(false)
        );
        assert_wire_names(
            &serde_json::to_value(&notifier).unwrap(),
            &[
                "id",
                "address",
                "criticity_threshold",
                "directories",
                "description",
                "checkers",
                "attack_types",
                "profiles",
                "should_notify_on_initial_full_security_check",
                "input_type",
            ],
        );
    }
}

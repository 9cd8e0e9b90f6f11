//! Shape coercion shared by the record types.
//!
//! Records are plain serde structs: every field optional, `None` omitted on
//! the way out, unknown keys ignored on the way in. The only coercion the
//! API needs beyond that is numbers and flags that sometimes arrive as
//! strings (`"dashboardId": "1"`, `"archived": "true"`), handled by
//! [`Lenient`].

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, Same};

/// Accepts the native JSON type or its string form; always writes the
/// native type.
///
/// ```ignore
/// #[serde_as(as = "Option<Lenient>")]
/// pub dashboard_id: Option<i64>,
/// ```
pub type Lenient = PickFirst<(Same, DisplayFromStr)>;

/// A permission entry attached to roles.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Permission {
    pub entity_name: Option<String>,
    pub action: Option<String>,
    #[serde(default)]
    pub entity_ids: Vec<i64>,
    pub dynamic_id: Option<String>,
}

/// A `{name, value}` attribute pair, as found on deviances.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attribute {
    pub name: Option<String>,
    pub value: Option<String>,
    pub value_type: Option<String>,
}

/// A directory group whose members may sign in, with the role and profile
/// given to users it provisions. Shared by the LDAP and SAML settings.
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllowedGroup {
    pub name: Option<String>,
    #[serde(default)]
    pub default_role_ids: Vec<i64>,
    pub default_profile_id: Option<i64>,
}

/// Asserts that `value` is a JSON object whose keys are exactly the wire
/// spellings of `fields`.
#[cfg(test)]
pub(crate) fn assert_wire_names(value: &serde_json::Value, fields: &[&str]) {
    let object = value.as_object().expect("record should serialize to an object");
    let mut actual: Vec<&str> = object.keys().map(String::as_str).collect();
    let mut expected: Vec<String> = fields.iter().map(|f| crate::naming::to_wire(f)).collect();
    actual.sort_unstable();
    expected.sort_unstable();
    assert_eq!(actual, expected);
    for key in object.keys() {
        assert!(
            fields.contains(&crate::naming::from_wire(key).as_str()),
            "{key} does not map back to a declared field"
        );
    }
}

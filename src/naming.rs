//! Field-name conversion between Rust (snake_case) and the Tenable.ad wire
//! format (camelCase).
//!
//! The record types in this crate rely on `#[serde(rename_all = "camelCase")]`
//! for their declared fields. This module is the explicit form of the same
//! rule, used wherever names are not known at compile time: query-string
//! keys built by [`crate::query::Query`] and free-form JSON maps such as the
//! widget series options.
//!
//! Two fields do not follow the regular rule because their wire form ends
//! in an all-caps abbreviation. They are resolved through [`IRREGULAR`]
//! before the algorithm runs, in both directions.

use serde_json::{Map, Value};

/// Fixed `(snake_case, wire)` overrides for irregularly capitalized fields.
pub const IRREGULAR: &[(&str, &str)] = &[
    ("search_user_dn", "searchUserDN"),
    ("expiration_date_utc", "expirationDateUTC"),
];

/// Converts a snake_case field name to its wire (camelCase) form.
///
/// The first segment is lower-cased; every following segment is
/// title-cased (first character upper, the rest lower) and appended.
///
/// ```
/// use tenable_ad::naming::to_wire;
/// assert_eq!(to_wire("ad_object_id"), "adObjectId");
/// assert_eq!(to_wire("search_user_dn"), "searchUserDN");
/// ```
pub fn to_wire(name: &str) -> String {
    if let Some((_, wire)) = IRREGULAR.iter().find(|(snake, _)| *snake == name) {
        return (*wire).to_string();
    }

    let mut segments = name.split('_');
    let mut out = segments.next().unwrap_or_default().to_lowercase();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// Converts a wire (camelCase) field name back to snake_case.
///
/// An underscore is inserted before every upper-case character that
/// follows a lower-case letter or a digit; the result is lower-cased.
///
/// ```
/// use tenable_ad::naming::from_wire;
/// assert_eq!(from_wire("adObjectId"), "ad_object_id");
/// assert_eq!(from_wire("expirationDateUTC"), "expiration_date_utc");
/// ```
pub fn from_wire(name: &str) -> String {
    if let Some((snake, _)) = IRREGULAR.iter().find(|(_, wire)| *wire == name) {
        return (*snake).to_string();
    }

    let mut out = String::with_capacity(name.len() + 4);
    let mut prev: Option<char> = None;
    for c in name.chars() {
        if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
            out.push('_');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }
    out
}

/// Recursively rewrites every object key of `value` with [`to_wire`].
pub fn wire_keys(value: Value) -> Value {
    convert_keys(value, &to_wire)
}

/// Recursively rewrites every object key of `value` with [`from_wire`].
pub fn snake_keys(value: Value) -> Value {
    convert_keys(value, &from_wire)
}

fn convert_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(convert_map(map, rename)),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| convert_keys(item, rename))
                .collect(),
        ),
        scalar => scalar,
    }
}

fn convert_map(map: Map<String, Value>, rename: &dyn Fn(&str) -> String) -> Map<String, Value> {
    map.into_iter()
        .map(|(key, value)| (rename(&key), convert_keys(value, rename)))
        .collect()
}

/// Serde adapter for free-form maps held in snake_case on the Rust side and
/// sent in camelCase on the wire.
///
/// ```ignore
/// #[serde(default, with = "crate::naming::keys")]
/// pub data_options: serde_json::Map<String, serde_json::Value>,
/// ```
pub mod keys {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use serde_json::{Map, Value};

    pub fn serialize<S: Serializer>(
        map: &Map<String, Value>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        super::convert_map(map.clone(), &super::to_wire).serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Map<String, Value>, D::Error> {
        let map = Map::<String, Value>::deserialize(deserializer)?;
        Ok(super::convert_map(map, &super::from_wire))
    }
}

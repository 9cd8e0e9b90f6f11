//! Query-string construction.
//!
//! Callers name parameters the way the Rust API does (snake_case) and the
//! builder emits the wire spelling through [`crate::naming::to_wire`]. List
//! parameters are sent as repeated keys (`wantedValues=a&wantedValues=b`),
//! which `serde_urlencoded` cannot express from a struct.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::naming::to_wire;

/// An ordered list of query parameters with wire-format keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Query::default()
    }

    /// Appends `name=value`.
    pub fn param(mut self, name: &str, value: impl Display) -> Self {
        self.pairs.push((to_wire(name), value.to_string()));
        self
    }

    /// Appends `name=value` when `value` is present.
    pub fn opt<T: Display>(self, name: &str, value: Option<T>) -> Self {
        match value {
            Some(v) => self.param(name, v),
            None => self,
        }
    }

    /// Appends one `name=value` pair per element.
    pub fn list<T: Display>(mut self, name: &str, values: &[T]) -> Self {
        let key = to_wire(name);
        self.pairs
            .extend(values.iter().map(|v| (key.clone(), v.to_string())));
        self
    }

    /// Appends an RFC 3339 timestamp when present.
    pub fn date(self, name: &str, value: Option<DateTime<Utc>>) -> Self {
        self.opt(
            name,
            value.map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true)),
        )
    }

    /// Appends `page` and `perPage` when set.
    pub fn page(self, page: &Page) -> Self {
        self.opt("page", page.page).opt("per_page", page.per_page)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Page selection shared by the paginated list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Page {
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl Page {
    pub fn new(page: u32, per_page: u32) -> Self {
        Page {
            page: Some(page),
            per_page: Some(per_page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn keys_are_converted_to_wire_names() {
        let q = Query::new()
            .param("per_page", 50)
            .param("last_identifier_seen", "abc");
        assert_eq!(
            q.pairs(),
            &[
                ("perPage".to_string(), "50".to_string()),
                ("lastIdentifierSeen".to_string(), "abc".to_string()),
            ]
        );
    }

    #[test]
    fn absent_optionals_are_skipped() {
        let q = Query::new()
            .opt::<u32>("page", None)
            .opt("resolved", Some(false));
        assert_eq!(q.pairs(), &[("resolved".to_string(), "false".to_string())]);
    }

    #[test]
    fn lists_are_repeated_keys() {
        let q = Query::new().list("wanted_values", &["cn", "memberOf"]);
        let encoded = serde_urlencoded::to_string(q.pairs()).unwrap();
        assert_eq!(encoded, "wantedValues=cn&wantedValues=memberOf");
    }

    #[test]
    fn empty_list_adds_nothing() {
        let q = Query::new().list::<u32>("attack_type_ids", &[]);
        assert!(q.is_empty());
    }

    #[test]
    fn dates_are_rfc3339_with_millis() {
        let date = Utc.with_ymd_and_hms(2021, 11, 17, 13, 44, 24).unwrap();
        let q = Query::new().date("date_start", Some(date));
        assert_eq!(q.pairs()[0].0, "dateStart");
        assert_eq!(q.pairs()[0].1, "2021-11-17T13:44:24.000Z");
    }

    #[test]
    fn page_emits_both_keys() {
        let q = Query::new().page(&Page::new(2, 25));
        let encoded = serde_urlencoded::to_string(q.pairs()).unwrap();
        assert_eq!(encoded, "page=2&perPage=25");
        assert!(Query::new().page(&Page::default()).is_empty());
    }
}

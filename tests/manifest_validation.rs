//! CI validation for the endpoint manifest (manifest/endpoints.toml).
//!
//! The manifest lists every Tenable.ad endpoint the client wraps. These
//! tests keep it parseable and consistent: required fields present, verbs
//! recognized, paths relative, query keys in wire spelling, and every
//! endpoint family of the client represented.

use std::collections::HashSet;

use serde::Deserialize;

/// Top-level manifest structure matching the TOML schema.
#[derive(Debug, Deserialize)]
struct Manifest {
    meta: Meta,
    endpoints: Vec<Endpoint>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Meta {
    schema_version: u32,
    last_validated: String,
}

/// A single endpoint entry in the manifest.
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Endpoint {
    family: String,
    name: String,
    method: String,
    path: String,
    #[serde(default)]
    query: Vec<String>,
    #[serde(default)]
    body: String,
    returns: String,
    implemented: bool,
    #[serde(default)]
    notes: String,
}

fn load() -> Manifest {
    let content = std::fs::read_to_string("manifest/endpoints.toml")
        .expect("manifest/endpoints.toml should exist and be readable");
    toml::from_str(&content).expect("manifest/endpoints.toml should be valid TOML")
}

#[test]
fn manifest_endpoints_toml_is_valid() {
    let manifest = load();

    assert!(
        manifest.meta.schema_version >= 1,
        "schema_version must be at least 1"
    );
    assert!(
        !manifest.endpoints.is_empty(),
        "manifest should contain at least one endpoint"
    );

    for ep in &manifest.endpoints {
        assert!(!ep.family.is_empty(), "endpoint family must not be empty");
        assert!(!ep.name.is_empty(), "endpoint name must not be empty");
        assert!(!ep.method.is_empty(), "endpoint method must not be empty");
        assert!(!ep.path.is_empty(), "endpoint path must not be empty");
        assert!(!ep.returns.is_empty(), "endpoint returns must not be empty");
    }
}

#[test]
fn manifest_endpoint_methods_are_valid_http_verbs() {
    let manifest = load();

    let valid_methods = ["GET", "POST", "PUT", "PATCH", "DELETE"];
    for ep in &manifest.endpoints {
        assert!(
            valid_methods.contains(&ep.method.as_str()),
            "endpoint '{}.{}' has invalid method '{}', expected one of {:?}",
            ep.family,
            ep.name,
            ep.method,
            valid_methods
        );
    }
}

#[test]
fn manifest_paths_are_relative_to_api_root() {
    // The client joins paths onto `<url>/api/`; a leading slash would
    // escape the prefix.
    let manifest = load();

    for ep in &manifest.endpoints {
        assert!(
            !ep.path.starts_with('/') && !ep.path.starts_with("api/"),
            "endpoint '{}.{}' path '{}' should be relative to /api/",
            ep.family,
            ep.name,
            ep.path
        );
        assert!(
            !ep.path.contains("//"),
            "endpoint '{}.{}' path '{}' has an empty segment",
            ep.family,
            ep.name,
            ep.path
        );
    }
}

#[test]
fn manifest_query_keys_use_wire_spelling() {
    let manifest = load();

    for ep in &manifest.endpoints {
        for key in &ep.query {
            assert!(
                !key.contains('_') && key.chars().next().is_some_and(|c| c.is_ascii_lowercase()),
                "endpoint '{}.{}' query key '{key}' should be camelCase",
                ep.family,
                ep.name
            );
        }
    }
}

#[test]
fn manifest_endpoint_names_are_unique_per_family() {
    let manifest = load();

    let mut seen = HashSet::new();
    for ep in &manifest.endpoints {
        assert!(
            seen.insert((ep.family.as_str(), ep.name.as_str())),
            "endpoint '{}.{}' is listed twice",
            ep.family,
            ep.name
        );
    }
}

#[test]
fn manifest_covers_every_client_family() {
    let manifest = load();

    let families: HashSet<&str> = manifest
        .endpoints
        .iter()
        .filter(|ep| ep.implemented)
        .map(|ep| ep.family.as_str())
        .collect();

    for expected in [
        "about",
        "api_keys",
        "directories",
        "users",
        "roles",
        "profiles",
        "alerts",
        "deviances",
        "ad_objects",
        "attacks",
        "attack_types",
        "attack_type_options",
        "widgets",
        "email_notifiers",
        "license",
        "preferences",
        "lockout_policy",
        "ldap_configuration",
        "saml_configuration",
        "application_settings",
    ] {
        assert!(
            families.contains(expected),
            "family '{expected}' should have implemented endpoints"
        );
    }
}

#[test]
fn manifest_repeated_query_keys_are_noted() {
    // The two endpoints taking list parameters must document the
    // repeated-key encoding.
    let manifest = load();

    for (family, name) in [("ad_objects", "changes"), ("attacks", "list")] {
        let ep = manifest
            .endpoints
            .iter()
            .find(|ep| ep.family == family && ep.name == name)
            .unwrap_or_else(|| panic!("endpoint '{family}.{name}' should be listed"));
        assert!(
            ep.notes.contains("repeated"),
            "endpoint '{family}.{name}' should note repeated query keys"
        );
    }
}

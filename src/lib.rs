//! Async Rust client library for the Tenable.ad REST API.
//!
//! Authenticates with an `X-API-Key` header and exposes one typed view per
//! endpoint family. Records are plain serde structs in snake_case; the
//! camelCase wire format is handled by serde attributes and, for free-form
//! maps, by [`naming`].
//!
//! # Modules
//!
//! - [`client`]: Authenticated HTTP wrapper and endpoint family accessors.
//! - [`config`]: Instance URL, API key and timeouts.
//! - [`auth`]: API key handling and default headers.
//! - [`error`]: Typed error hierarchy (`TadError`).
//! - [`naming`]: snake_case / camelCase field name conversion.
//! - [`query`]: Query-string builder and pagination.
//! - [`schema`]: Shared record shapes and lenient decoding.
//! - Endpoint families: [`about`], [`api_keys`], [`directories`], [`users`],
//!   [`roles`], [`profiles`], [`alerts`], [`deviances`], [`ad_objects`],
//!   [`attacks`], [`attack_types`], [`widgets`], [`email_notifiers`],
//!   [`license`], [`preferences`], [`lockout_policy`],
//!   [`ldap_configuration`], [`saml_configuration`],
//!   [`application_settings`].
//!
//! # Quick Start
//!
//! ```ignore
//! use tenable_ad::client::TadClient;
//! use tenable_ad::config::ClientConfig;
//!
//! let client = TadClient::new(&ClientConfig::from_env()?)?;
//! let me = client.users().info().await?;
//! for profile in client.profiles().list().await? {
//!     println!("{:?}", profile.name);
//! }
//! ```

pub mod about;
pub mod ad_objects;
pub mod alerts;
pub mod api_keys;
pub mod application_settings;
pub mod attack_types;
pub mod attacks;
pub mod auth;
pub mod client;
pub mod config;
pub mod deviances;
pub mod directories;
pub mod email_notifiers;
pub mod error;
pub mod ldap_configuration;
pub mod license;
pub mod lockout_policy;
pub mod naming;
pub mod preferences;
pub mod profiles;
pub mod query;
pub mod roles;
pub mod saml_configuration;
pub mod schema;
pub mod users;
pub mod widgets;

//! Realm Status Core Library
//!
//! This crate scrapes the World of Warcraft realm status page and exposes
//! the result as an in-memory catalog of realm records.
//!
//! # Features
//! - Fetch the status page for a configurable region URL
//! - Parse the realm table into typed records (name, status, type,
//!   population, locale)
//! - Memoized population: at most one fetch per catalog instance
//! - Name-keyed lookups that return `None` for unknown realms

pub mod catalog;
pub mod client;
pub mod error;
pub mod parser;
pub mod types;

// Re-export main types for convenience
pub use catalog::RealmCatalog;
pub use client::{ClientConfig, RealmStatusClient, US_STATUS_URL};
pub use error::{RealmStatusError, Result};
pub use parser::parse_realm_table;
pub use types::{Realm, RealmStatus, RealmType};

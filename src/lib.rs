//! CharityConnect aggregation and registration core
//!
//! A unified directory of charitable activities (scheduled events and open
//! fund-raising requests) sourced from a key/value document store, with
//! two-sided event registration. This library provides the aggregation,
//! normalization and registration services consumed by an external
//! presentation layer.

#![allow(non_snake_case)]

pub mod config;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{CharityConnectError, Result};

// Re-export main components for easy access
pub use models::CatalogEntry;
pub use services::ServiceFactory;
pub use store::{DocumentStore, MemoryDocumentStore, RedisDocumentStore, StoreService};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}

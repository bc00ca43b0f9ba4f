//! Document store module
//!
//! The record store is treated as a key/value document store addressed by
//! collection name and document id. This module defines the store boundary
//! and the backends implementing it.

pub mod memory;
pub mod redis;
pub mod repositories;
pub mod service;

// Re-export commonly used store components
pub use memory::MemoryDocumentStore;
pub use redis::RedisDocumentStore;
pub use repositories::{
    EventRepository, FundRaisingRepository, OrganizationRepository, ParticipantRepository,
};
pub use service::StoreService;

use async_trait::async_trait;
use serde_json::Value;

use crate::utils::errors::{CharityConnectError, Result};

/// Collection names consumed by the directory core
pub mod collections {
    pub const EVENTS: &str = "events";
    pub const NGOS: &str = "ngos";
    pub const INVENTORY_REQUESTS: &str = "inventoryRequests";
    pub const USERS: &str = "users";
}

/// Key/value document store boundary.
///
/// `array_union` is a field-level update with set-union semantics: adding an
/// already-present value is a no-op, so repeated application is idempotent.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch a single document by id, `None` when absent
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>>;

    /// List every document in a collection, store-defined order
    async fn list(&self, collection: &str) -> Result<Vec<Value>>;

    /// Create or replace a document
    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<()>;

    /// Add `value` to the array field `field` of an existing document unless
    /// already present. Fails with `DocumentNotFound` when the document is
    /// missing.
    async fn array_union(&self, collection: &str, id: &str, field: &str, value: &str)
        -> Result<()>;

    /// Check the store connection
    async fn health_check(&self) -> Result<()>;
}

/// Apply set-union semantics to an array field of a JSON document.
pub(crate) fn apply_array_union(document: &mut Value, field: &str, value: &str) -> Result<()> {
    let object = document.as_object_mut().ok_or_else(|| {
        CharityConnectError::InvalidInput("cannot update a non-object document".to_string())
    })?;

    let items = object
        .entry(field.to_string())
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or_else(|| {
            CharityConnectError::InvalidInput(format!("field {} is not an array", field))
        })?;

    let candidate = Value::String(value.to_string());
    if !items.contains(&candidate) {
        items.push(candidate);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_union_is_idempotent() {
        let mut document = serde_json::json!({ "id": "e1", "registeredUsers": [] });

        apply_array_union(&mut document, "registeredUsers", "u1").unwrap();
        apply_array_union(&mut document, "registeredUsers", "u1").unwrap();

        assert_eq!(document["registeredUsers"], serde_json::json!(["u1"]));
    }

    #[test]
    fn test_array_union_creates_missing_field() {
        let mut document = serde_json::json!({ "id": "u1" });

        apply_array_union(&mut document, "registeredEvents", "e1").unwrap();

        assert_eq!(document["registeredEvents"], serde_json::json!(["e1"]));
    }

    #[test]
    fn test_array_union_rejects_non_array_field() {
        let mut document = serde_json::json!({ "id": "u1", "registeredEvents": "oops" });

        let result = apply_array_union(&mut document, "registeredEvents", "e1");
        assert!(matches!(
            result,
            Err(CharityConnectError::InvalidInput(_))
        ));
    }
}

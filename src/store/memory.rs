//! In-memory document store
//!
//! Backing store for tests and degraded/dev contexts. Documents are JSON
//! values grouped by collection name behind a single `RwLock`.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use crate::store::{apply_array_union, DocumentStore};
use crate::utils::errors::{CharityConnectError, Result};

/// In-memory `DocumentStore` implementation
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentStore {
    collections: Arc<RwLock<HashMap<String, HashMap<String, Value>>>>,
}

impl MemoryDocumentStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a document under a store-generated id, returning the id.
    ///
    /// The generated id is also written into the document's `id` field so
    /// documents carry their own identity, as the typed models expect.
    pub async fn insert(&self, collection: &str, mut document: Value) -> Result<String> {
        let id = Uuid::new_v4().to_string();
        if let Value::Object(ref mut map) = document {
            map.insert("id".to_string(), Value::String(id.clone()));
        }
        self.put(collection, &id, document).await?;
        Ok(id)
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|documents| documents.get(id))
            .cloned())
    }

    async fn list(&self, collection: &str) -> Result<Vec<Value>> {
        let collections = self.collections.read().await;
        let documents = collections
            .get(collection)
            .map(|documents| documents.values().cloned().collect())
            .unwrap_or_default();
        Ok(documents)
    }

    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        let mut collections = self.collections.write().await;
        collections
            .entry(collection.to_string())
            .or_default()
            .insert(id.to_string(), document);
        debug!(collection = collection, id = id, "Document stored");
        Ok(())
    }

    async fn array_union(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: &str,
    ) -> Result<()> {
        let mut collections = self.collections.write().await;
        let document = collections
            .get_mut(collection)
            .and_then(|documents| documents.get_mut(id))
            .ok_or_else(|| CharityConnectError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        apply_array_union(document, field, value)?;
        debug!(collection = collection, id = id, field = field, "Array union applied");
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::collections;

    #[tokio::test]
    async fn test_put_get_list() {
        let store = MemoryDocumentStore::new();
        store
            .put(collections::NGOS, "n1", serde_json::json!({ "id": "n1", "ngoName": "Green Org" }))
            .await
            .unwrap();

        let document = store.get(collections::NGOS, "n1").await.unwrap().unwrap();
        assert_eq!(document["ngoName"], "Green Org");

        assert!(store.get(collections::NGOS, "missing").await.unwrap().is_none());
        assert_eq!(store.list(collections::NGOS).await.unwrap().len(), 1);
        assert!(store.list(collections::EVENTS).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let store = MemoryDocumentStore::new();
        let id = store
            .insert(collections::EVENTS, serde_json::json!({ "title": "Food Drive" }))
            .await
            .unwrap();

        let document = store.get(collections::EVENTS, &id).await.unwrap().unwrap();
        assert_eq!(document["id"], id.as_str());
        assert_eq!(document["title"], "Food Drive");
    }

    #[tokio::test]
    async fn test_array_union_idempotent() {
        let store = MemoryDocumentStore::new();
        store
            .put(collections::EVENTS, "e1", serde_json::json!({ "id": "e1", "registeredUsers": [] }))
            .await
            .unwrap();

        store
            .array_union(collections::EVENTS, "e1", "registeredUsers", "u1")
            .await
            .unwrap();
        store
            .array_union(collections::EVENTS, "e1", "registeredUsers", "u1")
            .await
            .unwrap();

        let document = store.get(collections::EVENTS, "e1").await.unwrap().unwrap();
        assert_eq!(document["registeredUsers"], serde_json::json!(["u1"]));
    }

    #[tokio::test]
    async fn test_array_union_missing_document() {
        let store = MemoryDocumentStore::new();

        let result = store
            .array_union(collections::USERS, "ghost", "registeredEvents", "e1")
            .await;

        assert!(matches!(
            result,
            Err(CharityConnectError::DocumentNotFound { .. })
        ));
    }
}

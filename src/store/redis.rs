//! Redis-backed document store
//!
//! Persists documents as JSON strings under `{prefix}{collection}:{id}` keys.
//! The set-union update is read-modify-write over the whole document, so
//! concurrent writers to the same document follow last-writer-wins on the
//! non-updated fields.

use async_trait::async_trait;
use redis::AsyncCommands;
use serde_json::Value;
use tracing::{debug, error};

use crate::config::StoreConfig;
use crate::store::{apply_array_union, DocumentStore};
use crate::utils::errors::{CharityConnectError, Result};

/// Redis-based `DocumentStore` implementation
#[derive(Clone)]
pub struct RedisDocumentStore {
    /// Redis connection manager
    connection_manager: redis::aio::ConnectionManager,
    /// Store configuration
    config: StoreConfig,
}

impl RedisDocumentStore {
    /// Create a new store instance
    pub async fn new(config: StoreConfig) -> Result<Self> {
        let client = redis::Client::open(config.url.as_str())?;
        let connection_manager = redis::aio::ConnectionManager::new(client).await?;

        Ok(Self {
            connection_manager,
            config,
        })
    }

    /// Get the Redis key for a document
    fn document_key(&self, collection: &str, id: &str) -> String {
        format!("{}{}:{}", self.config.prefix, collection, id)
    }
}

#[async_trait]
impl DocumentStore for RedisDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Value>> {
        let key = self.document_key(collection, id);
        let mut conn = self.connection_manager.clone();

        let serialized: Option<String> = conn.get(&key).await?;
        match serialized {
            Some(data) => {
                debug!(collection = collection, id = id, "Document loaded");
                Ok(Some(serde_json::from_str(&data)?))
            }
            None => {
                debug!(collection = collection, id = id, "Document not present");
                Ok(None)
            }
        }
    }

    async fn list(&self, collection: &str) -> Result<Vec<Value>> {
        let pattern = format!("{}{}:*", self.config.prefix, collection);
        let mut conn = self.connection_manager.clone();

        let keys: Vec<String> = conn.keys(&pattern).await?;
        let mut documents = Vec::with_capacity(keys.len());
        for key in keys {
            // A key may expire between KEYS and GET; skip it rather than fail
            let serialized: Option<String> = conn.get(&key).await?;
            if let Some(data) = serialized {
                documents.push(serde_json::from_str(&data)?);
            }
        }

        debug!(collection = collection, count = documents.len(), "Collection listed");
        Ok(documents)
    }

    async fn put(&self, collection: &str, id: &str, document: Value) -> Result<()> {
        let key = self.document_key(collection, id);
        let serialized = serde_json::to_string(&document)?;
        let mut conn = self.connection_manager.clone();

        match conn.set::<_, _, ()>(&key, serialized).await {
            Ok(_) => {
                debug!(collection = collection, id = id, "Document stored");
                Ok(())
            }
            Err(e) => {
                error!(collection = collection, id = id, error = %e, "Failed to store document");
                Err(e.into())
            }
        }
    }

    async fn array_union(
        &self,
        collection: &str,
        id: &str,
        field: &str,
        value: &str,
    ) -> Result<()> {
        let mut document = self.get(collection, id).await?.ok_or_else(|| {
            CharityConnectError::DocumentNotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            }
        })?;

        apply_array_union(&mut document, field, value)?;
        self.put(collection, id, document).await?;

        debug!(collection = collection, id = id, field = field, "Array union applied");
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        let mut conn = self.connection_manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }
}

impl std::fmt::Debug for RedisDocumentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisDocumentStore")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

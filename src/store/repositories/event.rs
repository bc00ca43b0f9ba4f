//! Event repository implementation

use std::sync::Arc;

use crate::models::event::Event;
use crate::store::{collections, DocumentStore};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct EventRepository {
    store: Arc<dyn DocumentStore>,
}

impl EventRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List all events, store-defined order
    pub async fn list(&self) -> Result<Vec<Event>> {
        let documents = self.store.list(collections::EVENTS).await?;
        documents
            .into_iter()
            .map(|document| serde_json::from_value(document).map_err(Into::into))
            .collect()
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Event>> {
        match self.store.get(collections::EVENTS, id).await? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    /// Add a participant to the event's registered set (idempotent)
    pub async fn add_registered_user(&self, event_id: &str, participant_id: &str) -> Result<()> {
        self.store
            .array_union(collections::EVENTS, event_id, "registeredUsers", participant_id)
            .await
    }
}

impl std::fmt::Debug for EventRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRepository").finish_non_exhaustive()
    }
}

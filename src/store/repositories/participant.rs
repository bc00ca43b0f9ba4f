//! Participant repository implementation

use std::sync::Arc;

use crate::models::participant::Participant;
use crate::store::{collections, DocumentStore};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct ParticipantRepository {
    store: Arc<dyn DocumentStore>,
}

impl ParticipantRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find participant by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Participant>> {
        match self.store.get(collections::USERS, id).await? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }

    /// Add an event to the participant's registered set (idempotent)
    pub async fn add_registered_event(&self, participant_id: &str, event_id: &str) -> Result<()> {
        self.store
            .array_union(collections::USERS, participant_id, "registeredEvents", event_id)
            .await
    }
}

impl std::fmt::Debug for ParticipantRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParticipantRepository").finish_non_exhaustive()
    }
}

//! Event registration coordination
//!
//! Links a participant to an event and an event to a participant through two
//! ordered set-union writes with no cross-record transaction.

use tracing::{debug, error, info};

use crate::store::{EventRepository, ParticipantRepository};
use crate::utils::errors::{CharityConnectError, Result};

/// Coordinator for the two-sided registration write
#[derive(Debug, Clone)]
pub struct RegistrationService {
    participants: ParticipantRepository,
    events: EventRepository,
}

impl RegistrationService {
    /// Create a new registration service instance
    pub fn new(participants: ParticipantRepository, events: EventRepository) -> Self {
        Self {
            participants,
            events,
        }
    }

    /// Register a participant for an event.
    ///
    /// Exactly two writes, participant side first: the event id is added to
    /// the participant's `registeredEvents` set, then the participant id to
    /// the event's `registeredUsers` set. If the first write fails the second
    /// is never attempted. If the second fails after the first succeeded the
    /// operation still reports failure and the store is left partially
    /// updated; both writes are idempotent set-unions, so re-registration is
    /// the recovery path.
    pub async fn register(&self, participant_id: &str, event_id: &str) -> Result<()> {
        if participant_id.is_empty() {
            return Err(CharityConnectError::InvalidInput(
                "participant id must not be empty".to_string(),
            ));
        }

        debug!(participant_id = %participant_id, event_id = %event_id, "Registering participant for event");

        if let Err(e) = self
            .participants
            .add_registered_event(participant_id, event_id)
            .await
        {
            error!(participant_id = %participant_id, event_id = %event_id, error = %e,
                   "Participant-side registration write failed");
            return Err(e);
        }

        if let Err(e) = self
            .events
            .add_registered_user(event_id, participant_id)
            .await
        {
            error!(participant_id = %participant_id, event_id = %event_id, error = %e,
                   "Event-side registration write failed, store may be partially updated");
            return Err(e);
        }

        info!(participant_id = %participant_id, event_id = %event_id, "Participant registered for event");
        Ok(())
    }

    /// Check whether a participant appears on an event's registered set
    pub async fn is_registered(&self, participant_id: &str, event_id: &str) -> Result<bool> {
        match self.events.find_by_id(event_id).await? {
            Some(event) => Ok(event
                .registered_users
                .iter()
                .any(|id| id == participant_id)),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{collections, DocumentStore, MemoryDocumentStore};
    use assert_matches::assert_matches;
    use std::sync::Arc;

    fn event_document(id: &str) -> serde_json::Value {
        serde_json::json!({
            "id": id,
            "title": "Beach Cleanup",
            "eventType": "Cleanup",
            "description": "desc",
            "date": "2025-06-01",
            "location": "Shoreline Park",
            "contactName": "Jo",
            "contactEmail": "jo@example.org",
            "contactPhone": "555-0100",
            "ngoId": "n1",
            "registeredUsers": []
        })
    }

    async fn seeded_store() -> Arc<MemoryDocumentStore> {
        let store = Arc::new(MemoryDocumentStore::new());
        store
            .put(collections::EVENTS, "e1", event_document("e1"))
            .await
            .unwrap();
        store
            .put(
                collections::USERS,
                "u1",
                serde_json::json!({ "id": "u1", "registeredEvents": [] }),
            )
            .await
            .unwrap();
        store
    }

    fn service(store: Arc<MemoryDocumentStore>) -> RegistrationService {
        RegistrationService::new(
            ParticipantRepository::new(store.clone()),
            EventRepository::new(store),
        )
    }

    #[tokio::test]
    async fn test_register_links_both_sides() {
        let store = seeded_store().await;
        let service = service(store.clone());

        service.register("u1", "e1").await.unwrap();

        let user = store.get(collections::USERS, "u1").await.unwrap().unwrap();
        let event = store.get(collections::EVENTS, "e1").await.unwrap().unwrap();
        assert_eq!(user["registeredEvents"], serde_json::json!(["e1"]));
        assert_eq!(event["registeredUsers"], serde_json::json!(["u1"]));
        assert!(service.is_registered("u1", "e1").await.unwrap());
    }

    #[tokio::test]
    async fn test_register_twice_is_idempotent() {
        let store = seeded_store().await;
        let service = service(store.clone());

        service.register("u1", "e1").await.unwrap();
        service.register("u1", "e1").await.unwrap();

        let user = store.get(collections::USERS, "u1").await.unwrap().unwrap();
        let event = store.get(collections::EVENTS, "e1").await.unwrap().unwrap();
        assert_eq!(user["registeredEvents"], serde_json::json!(["e1"]));
        assert_eq!(event["registeredUsers"], serde_json::json!(["u1"]));
    }

    #[tokio::test]
    async fn test_register_unknown_participant_leaves_event_untouched() {
        let store = seeded_store().await;
        let service = service(store.clone());

        let result = service.register("ghost", "e1").await;
        assert_matches!(result, Err(CharityConnectError::DocumentNotFound { .. }));

        let event = store.get(collections::EVENTS, "e1").await.unwrap().unwrap();
        assert_eq!(event["registeredUsers"], serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_register_rejects_empty_participant_id() {
        let store = seeded_store().await;
        let service = service(store);

        let result = service.register("", "e1").await;
        assert_matches!(result, Err(CharityConnectError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_is_registered_missing_event() {
        let store = seeded_store().await;
        let service = service(store);
        assert!(!service.is_registered("u1", "ghost").await.unwrap());
    }
}

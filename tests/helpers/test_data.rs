//! Test data helpers for creating store documents
//!
//! This module provides helper functions for creating test events,
//! organizations, fund-raising requests and participants, and for seeding
//! an in-memory document store with them.

use std::sync::Arc;

use serde_json::{json, Value};

use CharityConnect::store::{collections, DocumentStore, MemoryDocumentStore};
use CharityConnect::Settings;

/// Helper function to create a test event document
pub fn create_test_event(id: &str, title: &str, ngo_id: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "eventType": "Community",
        "description": "A community event",
        "date": "2025-06-01",
        "location": "Shoreline Park",
        "contactName": "Jo Doe",
        "contactEmail": "jo@example.org",
        "contactPhone": "555-0100",
        "ngoId": ngo_id,
        "registeredUsers": []
    })
}

/// Helper function to create a test virtual event document
pub fn create_test_virtual_event(id: &str, title: &str, ngo_id: &str, link: &str) -> Value {
    let mut event = create_test_event(id, title, ngo_id);
    event["location"] = json!("virtual");
    event["virtualLink"] = json!(link);
    event
}

/// Helper function to create a test organization document
pub fn create_test_organization(id: &str, ngo_name: &str) -> Value {
    json!({ "id": id, "ngoName": ngo_name })
}

/// Helper function to create a test fund-raising request document
pub fn create_test_request(id: &str, ngo_name: &str, status: &str) -> Value {
    json!({ "id": id, "ngoName": ngo_name, "status": status })
}

/// Helper function to create a test participant document
pub fn create_test_participant(id: &str) -> Value {
    json!({ "id": id, "registeredEvents": [] })
}

/// Seed a document into a collection, keyed by its `id` field
pub async fn seed(store: &Arc<MemoryDocumentStore>, collection: &str, document: Value) {
    let id = document["id"]
        .as_str()
        .expect("test document must carry an id")
        .to_string();
    store
        .put(collection, &id, document)
        .await
        .expect("failed to seed test document");
}

/// Create a store seeded with one event, its organization and one participant
pub async fn seeded_store() -> Arc<MemoryDocumentStore> {
    let store = Arc::new(MemoryDocumentStore::new());
    seed(&store, collections::EVENTS, create_test_event("e1", "Beach Cleanup", "n1")).await;
    seed(&store, collections::NGOS, create_test_organization("n1", "Green Org")).await;
    seed(&store, collections::USERS, create_test_participant("u1")).await;
    store
}

/// Default settings for tests
pub fn test_settings() -> Settings {
    Settings::default()
}

//! Event model

use serde::{Deserialize, Serialize};
use url::Url;

/// Sentinel value in `location` that enables the virtual link display.
pub const VIRTUAL_LOCATION: &str = "virtual";

/// A scheduled charitable event as stored in the `events` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub event_type: String,
    pub description: String,
    pub date: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_link: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub ngo_id: String,
    #[serde(default)]
    pub registered_users: Vec<String>,
}

impl Event {
    /// Whether the event is held virtually
    pub fn is_virtual(&self) -> bool {
        self.location == VIRTUAL_LOCATION
    }

    /// Parsed virtual link, present only for virtual events carrying a valid URL
    pub fn virtual_link_url(&self) -> Option<Url> {
        if !self.is_virtual() {
            return None;
        }
        self.virtual_link
            .as_deref()
            .and_then(|link| Url::parse(link).ok())
    }
}

/// Display-ready event record with the owning organization's name resolved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListing {
    pub id: String,
    pub title: String,
    pub event_type: String,
    pub description: String,
    pub date: String,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_link: Option<String>,
    pub contact_name: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub ngo_id: String,
    #[serde(default)]
    pub registered_users: Vec<String>,
    pub ngo_name: String,
}

impl EventListing {
    /// Combine a stored event with its resolved organization name
    pub fn new(event: Event, ngo_name: String) -> Self {
        Self {
            id: event.id,
            title: event.title,
            event_type: event.event_type,
            description: event.description,
            date: event.date,
            location: event.location,
            virtual_link: event.virtual_link,
            contact_name: event.contact_name,
            contact_email: event.contact_email,
            contact_phone: event.contact_phone,
            ngo_id: event.ngo_id,
            registered_users: event.registered_users,
            ngo_name,
        }
    }
}

//! Participant model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A registered participant as stored in the `users` collection.
///
/// `registeredEvents` grows monotonically; there is no removal path.
/// Store-native fields beyond the known ones are passed through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub id: String,
    #[serde(default)]
    pub registered_events: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Participant {
    /// Whether the participant already holds a registration for an event
    pub fn is_registered_for(&self, event_id: &str) -> bool {
        self.registered_events.iter().any(|id| id == event_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_participant_wire_shape() {
        let participant: Participant = serde_json::from_value(serde_json::json!({
            "id": "u1",
            "registeredEvents": ["e1", "e2"],
            "displayName": "Jo"
        }))
        .unwrap();

        assert!(participant.is_registered_for("e1"));
        assert!(!participant.is_registered_for("e3"));
        assert_eq!(participant.extra["displayName"], "Jo");

        let json = serde_json::to_value(&participant).unwrap();
        assert_eq!(json["registeredEvents"][1], "e2");
    }

    #[test]
    fn test_registered_events_defaults_empty() {
        let participant: Participant =
            serde_json::from_value(serde_json::json!({ "id": "u2" })).unwrap();
        assert!(participant.registered_events.is_empty());
    }
}

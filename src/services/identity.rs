//! Participant identity boundary
//!
//! Identity is supplied by an external session accessor and injected into the
//! core; the core never reads ambient state. Absence of an identity is a
//! handled case resolved to a configured fallback identifier.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::config::IdentityConfig;

/// Identity supplied by the external session accessor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantIdentity {
    pub id: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ParticipantIdentity {
    /// Create an identity carrying only an id
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            extra: Map::new(),
        }
    }
}

/// Accessor for the current participant's identity
pub trait IdentityProvider: Send + Sync {
    /// Current participant from prior session state, if any
    fn current_participant(&self) -> Option<ParticipantIdentity>;
}

/// Identity provider holding session state handed over by the embedding
/// application
#[derive(Debug, Clone, Default)]
pub struct SessionIdentityProvider {
    participant: Option<ParticipantIdentity>,
}

impl SessionIdentityProvider {
    /// Create a provider from prior session state
    pub fn new(participant: Option<ParticipantIdentity>) -> Self {
        Self { participant }
    }

    /// Provider with no resolvable participant
    pub fn anonymous() -> Self {
        Self { participant: None }
    }
}

impl IdentityProvider for SessionIdentityProvider {
    fn current_participant(&self) -> Option<ParticipantIdentity> {
        self.participant.clone()
    }
}

/// Resolve the participant id for a registration attempt.
///
/// Falls back to the configured placeholder identifier when no identity is
/// available, so the operation can still be attempted in degraded or test
/// contexts. This is a deliberate fallback, not a silent default: real
/// operation assumes the external accessor always supplies an identity.
pub fn resolve_participant_id(provider: &dyn IdentityProvider, config: &IdentityConfig) -> String {
    match provider.current_participant() {
        Some(identity) => identity.id,
        None => {
            warn!(fallback_id = %config.fallback_participant_id,
                  "No participant identity in session, using fallback identifier");
            config.fallback_participant_id.clone()
        }
    }
}

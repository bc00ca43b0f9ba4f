//! Store service layer
//!
//! This module bundles the typed repositories over a shared document store

use std::sync::Arc;

use crate::store::{
    DocumentStore, EventRepository, FundRaisingRepository, OrganizationRepository,
    ParticipantRepository,
};

#[derive(Debug, Clone)]
pub struct StoreService {
    pub events: EventRepository,
    pub organizations: OrganizationRepository,
    pub fund_raising: FundRaisingRepository,
    pub participants: ParticipantRepository,
}

impl StoreService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            events: EventRepository::new(store.clone()),
            organizations: OrganizationRepository::new(store.clone()),
            fund_raising: FundRaisingRepository::new(store.clone()),
            participants: ParticipantRepository::new(store),
        }
    }
}

//! Services module
//!
//! This module contains business logic services

pub mod donation;
pub mod events;
pub mod fundraising;
pub mod identity;
pub mod organization;
pub mod registration;

// Re-export commonly used services
pub use donation::DonationHandoff;
pub use events::EventDirectoryService;
pub use fundraising::FundRaisingService;
pub use identity::{
    resolve_participant_id, IdentityProvider, ParticipantIdentity, SessionIdentityProvider,
};
pub use organization::{OrganizationResolver, UNKNOWN_NGO};
pub use registration::RegistrationService;

use std::sync::Arc;

use crate::config::Settings;
use crate::models::catalog::CatalogEntry;
use crate::store::{DocumentStore, StoreService};
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub event_service: EventDirectoryService,
    pub fund_raising_service: FundRaisingService,
    pub registration_service: RegistrationService,
    pub organization_resolver: OrganizationResolver,
    pub donation_handoff: DonationHandoff,
    settings: Settings,
    store: Arc<dyn DocumentStore>,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(store: Arc<dyn DocumentStore>, settings: Settings) -> Self {
        let repositories = StoreService::new(store.clone());

        let organization_resolver = OrganizationResolver::new(repositories.organizations.clone());
        let event_service =
            EventDirectoryService::new(repositories.events.clone(), organization_resolver.clone());
        let fund_raising_service = FundRaisingService::new(repositories.fund_raising.clone());
        let registration_service =
            RegistrationService::new(repositories.participants, repositories.events);
        let donation_handoff = DonationHandoff::new(settings.donation.clone());

        Self {
            event_service,
            fund_raising_service,
            registration_service,
            organization_resolver,
            donation_handoff,
            settings,
            store,
        }
    }

    /// Merged directory of events and fund-raising requests, events first
    pub async fn list_directory(&self) -> Result<Vec<CatalogEntry>> {
        let events = self.event_service.list_events().await?;
        let requests = self.fund_raising_service.list_requests().await?;

        let mut entries: Vec<CatalogEntry> = events.into_iter().map(CatalogEntry::Event).collect();
        entries.extend(requests.into_iter().map(CatalogEntry::FundRaising));
        Ok(entries)
    }

    /// Resolve the participant id to register with, applying the configured
    /// fallback when the session carries no identity
    pub fn resolve_participant_id(&self, provider: &dyn IdentityProvider) -> String {
        resolve_participant_id(provider, &self.settings.identity)
    }

    /// Health check for the underlying document store
    pub async fn health_check(&self) -> Result<()> {
        self.store.health_check().await
    }
}

impl std::fmt::Debug for ServiceFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceFactory")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

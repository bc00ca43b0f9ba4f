//! Event directory aggregation
//!
//! Lists every stored event and joins each with its owning organization's
//! display name.

use futures::future::try_join_all;
use tracing::{debug, info};

use crate::models::event::EventListing;
use crate::services::organization::OrganizationResolver;
use crate::store::EventRepository;
use crate::utils::errors::{CharityConnectError, Result};

/// Aggregation service for the event side of the directory
#[derive(Debug, Clone)]
pub struct EventDirectoryService {
    events: EventRepository,
    resolver: OrganizationResolver,
}

impl EventDirectoryService {
    /// Create a new aggregation service instance
    pub fn new(events: EventRepository, resolver: OrganizationResolver) -> Self {
        Self { events, resolver }
    }

    /// List all events with each event's organization name resolved.
    ///
    /// Per-event lookups run concurrently and the join is all-or-nothing: a
    /// failing listing or an unexpected lookup failure aborts the whole
    /// aggregation and no partial list is returned. Store order is accepted
    /// as-is.
    pub async fn list_events(&self) -> Result<Vec<EventListing>> {
        let events = self.events.list().await?;
        debug!(event_count = events.len(), "Aggregating event directory");

        let listings = try_join_all(events.into_iter().map(|event| {
            let resolver = self.resolver.clone();
            async move {
                let ngo_name = resolver.resolve(&event.ngo_id).await?;
                Ok::<_, CharityConnectError>(EventListing::new(event, ngo_name))
            }
        }))
        .await?;

        info!(listing_count = listings.len(), "Event directory aggregated");
        Ok(listings)
    }
}

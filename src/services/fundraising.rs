//! Fund-raising request normalization
//!
//! Maps stored inventory/fund-raising requests into the directory's display
//! shape with fixed category metadata. No external join is required.

use tracing::{debug, info};

use crate::models::fundraising::FundRaisingListing;
use crate::store::FundRaisingRepository;
use crate::utils::errors::Result;

/// Normalization service for the fund-raising side of the directory
#[derive(Debug, Clone)]
pub struct FundRaisingService {
    requests: FundRaisingRepository,
}

impl FundRaisingService {
    /// Create a new normalization service instance
    pub fn new(requests: FundRaisingRepository) -> Self {
        Self { requests }
    }

    /// List all fund-raising requests in their display shape.
    ///
    /// A failing listing aborts the whole call; no partial list is returned.
    pub async fn list_requests(&self) -> Result<Vec<FundRaisingListing>> {
        let requests = self.requests.list().await?;
        debug!(request_count = requests.len(), "Normalizing fund-raising requests");

        let listings: Vec<FundRaisingListing> = requests
            .into_iter()
            .map(FundRaisingListing::from_request)
            .collect();

        info!(listing_count = listings.len(), "Fund-raising requests normalized");
        Ok(listings)
    }
}

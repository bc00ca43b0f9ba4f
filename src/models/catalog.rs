//! Merged directory entry shapes

use serde::Serialize;

use super::event::EventListing;
use super::fundraising::FundRaisingListing;

/// A single display-ready entry in the charitable activity directory.
///
/// The presentation layer matches exhaustively on the two variants; the
/// union is never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum CatalogEntry {
    Event(EventListing),
    FundRaising(FundRaisingListing),
}

impl CatalogEntry {
    /// Identity of the underlying record
    pub fn id(&self) -> &str {
        match self {
            CatalogEntry::Event(listing) => &listing.id,
            CatalogEntry::FundRaising(listing) => &listing.id,
        }
    }

    /// Display name of the owning organization
    pub fn ngo_name(&self) -> &str {
        match self {
            CatalogEntry::Event(listing) => &listing.ngo_name,
            CatalogEntry::FundRaising(listing) => &listing.ngo_name,
        }
    }
}

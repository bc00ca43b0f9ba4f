//! Organization name resolution
//!
//! Resolves an event's `ngoId` to the organization's display name, absorbing
//! the expected missing-organization case behind a fallback sentinel.

use tracing::{debug, warn};

use crate::store::OrganizationRepository;
use crate::utils::errors::Result;

/// Fallback display name for events whose organization cannot be found.
pub const UNKNOWN_NGO: &str = "Unknown NGO";

/// Resolver for organization display names
#[derive(Debug, Clone)]
pub struct OrganizationResolver {
    organizations: OrganizationRepository,
}

impl OrganizationResolver {
    /// Create a new resolver instance
    pub fn new(organizations: OrganizationRepository) -> Self {
        Self { organizations }
    }

    /// Resolve an organization id to its display name.
    ///
    /// A missing organization is an expected case (events may carry a dangling
    /// or malformed `ngoId`) and yields the fallback sentinel instead of an
    /// error. Unexpected store failures propagate.
    pub async fn resolve(&self, ngo_id: &str) -> Result<String> {
        debug!(ngo_id = %ngo_id, "Resolving organization name");

        match self.organizations.find_by_id(ngo_id).await? {
            Some(organization) => Ok(organization.ngo_name),
            None => {
                warn!(ngo_id = %ngo_id, "Organization not found, using fallback name");
                Ok(UNKNOWN_NGO.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{collections, DocumentStore, MemoryDocumentStore};
    use std::sync::Arc;

    async fn resolver_with_org(id: &str, name: &str) -> OrganizationResolver {
        let store = Arc::new(MemoryDocumentStore::new());
        store
            .put(
                collections::NGOS,
                id,
                serde_json::json!({ "id": id, "ngoName": name }),
            )
            .await
            .unwrap();
        OrganizationResolver::new(OrganizationRepository::new(store))
    }

    #[tokio::test]
    async fn test_resolve_existing_organization() {
        let resolver = resolver_with_org("n1", "Green Org").await;
        assert_eq!(resolver.resolve("n1").await.unwrap(), "Green Org");
    }

    #[tokio::test]
    async fn test_resolve_missing_organization_yields_fallback() {
        let resolver = resolver_with_org("n1", "Green Org").await;
        assert_eq!(resolver.resolve("missing").await.unwrap(), UNKNOWN_NGO);
        assert_eq!(resolver.resolve("").await.unwrap(), UNKNOWN_NGO);
    }
}

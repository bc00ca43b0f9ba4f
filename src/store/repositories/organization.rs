//! Organization repository implementation

use std::sync::Arc;

use crate::models::organization::Organization;
use crate::store::{collections, DocumentStore};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct OrganizationRepository {
    store: Arc<dyn DocumentStore>,
}

impl OrganizationRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Find organization by ID
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Organization>> {
        match self.store.get(collections::NGOS, id).await? {
            Some(document) => Ok(Some(serde_json::from_value(document)?)),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for OrganizationRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrganizationRepository").finish_non_exhaustive()
    }
}

//! Fund-raising request repository implementation

use std::sync::Arc;

use crate::models::fundraising::FundRaisingRequest;
use crate::store::{collections, DocumentStore};
use crate::utils::errors::Result;

#[derive(Clone)]
pub struct FundRaisingRepository {
    store: Arc<dyn DocumentStore>,
}

impl FundRaisingRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// List all fund-raising requests, store-defined order
    pub async fn list(&self) -> Result<Vec<FundRaisingRequest>> {
        let documents = self.store.list(collections::INVENTORY_REQUESTS).await?;
        documents
            .into_iter()
            .map(|document| serde_json::from_value(document).map_err(Into::into))
            .collect()
    }
}

impl std::fmt::Debug for FundRaisingRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FundRaisingRepository").finish_non_exhaustive()
    }
}

//! Organization (NGO) model

use serde::{Deserialize, Serialize};

/// An organization hosting events or fund-raising requests, as stored in the
/// `ngos` collection. Read-only from this crate's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: String,
    pub ngo_name: String,
}

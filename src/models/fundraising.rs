//! Fund-raising request model

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Category label attached to every fund-raising listing.
pub const FUND_RAISING_EVENT_TYPE: &str = "Fund Raising";

/// Explanatory description attached to every fund-raising listing.
pub const FUND_RAISING_DESCRIPTION: &str = "A fund raising event that helps the needy";

/// An open fund-raising request as stored in the `inventoryRequests`
/// collection. Store-native fields beyond the known ones are passed through
/// unmodified. Read-only from this crate's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRaisingRequest {
    pub id: String,
    pub ngo_name: String,
    pub status: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Display-ready fund-raising record carrying the fixed category metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundRaisingListing {
    pub id: String,
    pub ngo_name: String,
    pub status: String,
    pub event_type: String,
    pub description: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FundRaisingListing {
    /// Normalize a stored request into its display shape.
    ///
    /// Native `eventType`/`description` fields are overwritten by the fixed
    /// display constants.
    pub fn from_request(request: FundRaisingRequest) -> Self {
        let mut extra = request.extra;
        extra.remove("eventType");
        extra.remove("description");

        Self {
            id: request.id,
            ngo_name: request.ngo_name,
            status: request.status,
            event_type: FUND_RAISING_EVENT_TYPE.to_string(),
            description: FUND_RAISING_DESCRIPTION.to_string(),
            extra,
        }
    }
}

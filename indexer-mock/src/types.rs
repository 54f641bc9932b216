/// Mock indexer request and response types
///
/// The lookup envelope matches the indexer API format so clients can consume
/// it transparently.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Envelope returned by /v2/accounts/{address}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupResponse {
    pub account: Value,
    #[serde(rename = "current-round")]
    pub current_round: u64,
}

/// Error body returned on 404/500, matching the indexer's shape
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Query parameters accepted by the lookup endpoint
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct LookupQuery {
    #[serde(default, rename = "include-all")]
    pub include_all: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminAccountResponse {
    pub address: String,
    pub round: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminRemoveResponse {
    pub address: String,
    pub removed: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct OutageRequest {
    pub active: bool,
}

/// Axum HTTP handlers for the mock indexer endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::ledger::LedgerState;
use crate::types::*;

/// Shared application state
pub type AppState = Arc<LedgerState>;

/// Custom error type for handlers
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("no accounts found for address")]
    NoAccount,
    #[error("ledger unavailable")]
    Outage,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::NoAccount => StatusCode::NOT_FOUND,
            ApiError::Outage => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            message: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// GET /v2/accounts/{address}
/// Returns the account record wrapped in a lookup envelope.
/// Unknown addresses yield 404 with an error body, matching indexer behavior.
pub async fn lookup_account(
    State(ledger): State<AppState>,
    Path(address): Path<String>,
    Query(query): Query<LookupQuery>,
) -> Result<Json<LookupResponse>, ApiError> {
    if ledger.outage() {
        return Err(ApiError::Outage);
    }

    let account = ledger.account(&address).await.ok_or(ApiError::NoAccount)?;

    // Closed-out accounts stay hidden unless include-all is set
    let deleted = account
        .get("deleted")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    if deleted && !query.include_all {
        return Err(ApiError::NoAccount);
    }

    Ok(Json(LookupResponse {
        account,
        current_round: ledger.current_round(),
    }))
}

// ============================================================================
// ADMIN ENDPOINTS (test fixtures, not part of the indexer API)
// ============================================================================

/// PUT /admin/accounts/{address}
/// Seeds or replaces an account record
pub async fn put_account(
    State(ledger): State<AppState>,
    Path(address): Path<String>,
    Json(account): Json<Value>,
) -> Json<AdminAccountResponse> {
    log::info!("Seeding account {}", address);
    let round = ledger.put_account(&address, account).await;
    Json(AdminAccountResponse { address, round })
}

/// DELETE /admin/accounts/{address}
/// Removes an account so later lookups return 404
pub async fn remove_account(
    State(ledger): State<AppState>,
    Path(address): Path<String>,
) -> Json<AdminRemoveResponse> {
    log::info!("Removing account {}", address);
    let removed = ledger.remove_account(&address).await;
    Json(AdminRemoveResponse { address, removed })
}

/// POST /admin/outage
/// Switches simulated downtime on or off
pub async fn set_outage(
    State(ledger): State<AppState>,
    Json(req): Json<OutageRequest>,
) -> StatusCode {
    log::info!("Outage mode: {}", req.active);
    ledger.set_outage(req.active);
    StatusCode::NO_CONTENT
}

/// GET /health
/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}

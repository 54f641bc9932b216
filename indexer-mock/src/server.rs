/// Axum HTTP server setup and routing

use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers::*;
use crate::ledger::LedgerState;

pub fn create_router(ledger: Arc<LedgerState>) -> Router {
    // Configure CORS to allow requests from dashboard/tests
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health_check))
        // Indexer endpoints
        .route("/v2/accounts/:address", get(lookup_account))
        // Admin helper endpoints
        .route(
            "/admin/accounts/:address",
            put(put_account).delete(remove_account),
        )
        .route("/admin/outage", post(set_outage))
        // Shared state
        .with_state(ledger)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn run_server(ledger: Arc<LedgerState>, host: String, port: u16) -> anyhow::Result<()> {
    let app = create_router(ledger);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    log::info!("🚀 Indexer mock server listening on http://{}", addr);
    log::info!("📒 Serving in-memory account records");
    log::info!("🔧 Seed endpoint: PUT /admin/accounts/{{address}}");

    axum::serve(listener, app).await?;

    Ok(())
}

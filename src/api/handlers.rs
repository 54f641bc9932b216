/// API request handlers
///
/// Each handler delegates to the session manager and returns the resulting
/// snapshot, so the dashboard always renders from the same read model no
/// matter which mutation it called.

use axum::{extract::State, Json};
use log::info;

use crate::api::server::AppContext;
use crate::api::types::{ConnectRequest, DisconnectRequest};
use crate::error::SessionError;
use crate::providers::{ProviderKind, WalletProvider};
use crate::session::SessionSnapshot;

pub async fn health_handler() -> &'static str {
    "OK"
}

pub async fn get_session_handler(State(ctx): State<AppContext>) -> Json<SessionSnapshot> {
    Json(ctx.manager.snapshot().await)
}

pub async fn connect_handler(
    State(ctx): State<AppContext>,
    Json(req): Json<ConnectRequest>,
) -> Result<Json<SessionSnapshot>, SessionError> {
    info!(
        "Connect request via {} with {} wallet(s)",
        req.provider,
        req.accounts.len()
    );

    // Hand the request to the adapter first so its transport state matches
    // what the session links; connect() reports the full granted set
    let batch = match req.provider {
        ProviderKind::Extension => {
            ctx.extension.announce(&req.accounts);
            ctx.extension.connect().await?
        }
        ProviderKind::WalletConnect => {
            ctx.walletconnect.announce(&req.accounts);
            ctx.walletconnect.connect().await?
        }
    };

    let snapshot = ctx.manager.reconcile(req.provider, batch).await?;
    Ok(Json(snapshot))
}

pub async fn refresh_handler(
    State(ctx): State<AppContext>,
) -> Result<Json<SessionSnapshot>, SessionError> {
    info!("Refresh request");
    let snapshot = ctx.manager.refresh().await?;
    Ok(Json(snapshot))
}

pub async fn disconnect_handler(
    State(ctx): State<AppContext>,
    Json(req): Json<DisconnectRequest>,
) -> Result<Json<SessionSnapshot>, SessionError> {
    info!("Disconnect request for {}", req.address);
    let snapshot = ctx.manager.disconnect(&req.address).await?;
    Ok(Json(snapshot))
}

/// HTTP server setup and routing

use std::sync::Arc;

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use log::{info, warn};
use tower_http::cors::{Any, CorsLayer};

use crate::api::handlers;
use crate::config::SessionConfig;
use crate::providers::{ExtensionProvider, ProviderRegistry, WalletConnectProvider};
use crate::session::SessionManager;

/// Shared state handed to every handler
///
/// Carries the concrete adapters alongside the manager so connect requests
/// can announce batches to the right transport before reconciling.
#[derive(Clone)]
pub struct AppContext {
    pub manager: Arc<SessionManager>,
    pub extension: Arc<ExtensionProvider>,
    pub walletconnect: Arc<WalletConnectProvider>,
}

pub async fn start_server(config: SessionConfig) -> anyhow::Result<()> {
    let extension = Arc::new(ExtensionProvider::new());
    let walletconnect = Arc::new(WalletConnectProvider::new());

    let mut registry = ProviderRegistry::new();
    registry.register(extension.clone());
    registry.register(walletconnect.clone());

    let bind_address = config.bind_address.clone();
    let manager = Arc::new(SessionManager::new(config, registry));
    manager.start().await;

    let ctx = AppContext {
        manager,
        extension,
        walletconnect,
    };

    // Configure CORS for the dashboard frontend
    let cors = match std::env::var("ALLOWED_ORIGINS") {
        Ok(origins) => {
            let origins: Vec<HeaderValue> = origins
                .split(',')
                .map(|origin| origin.trim().parse().expect("Invalid CORS origin"))
                .collect();
            info!("🔒 CORS restricted to {} origin(s)", origins.len());
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods(Any)
                .allow_headers(Any)
        }
        Err(_) => {
            warn!("⚠️ ALLOWED_ORIGINS not set, allowing all origins (development mode)");
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    };

    let app = Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/api/session", get(handlers::get_session_handler))
        .route("/api/session/connect", post(handlers::connect_handler))
        .route("/api/session/refresh", post(handlers::refresh_handler))
        .route("/api/session/disconnect", post(handlers::disconnect_handler))
        .with_state(ctx)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("🚀 Session server listening on {}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    // Every mutation commits to disk before responding, so a signal here
    // has nothing left to flush
    info!("Shutdown signal received, stopping server");
}

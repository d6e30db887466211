//! Custody Ledger HTTP Server

use std::{net::SocketAddr, sync::Arc};
use tracing::{error, info};

use axum::{
    Router,
    routing::{get, post},
};
use custody_ledger::CustodyService;

use crate::service::{audit_service, health_service, registry_service, share_service};

/// Create and configure the Axum router
pub fn create_router(service: Arc<CustodyService>) -> Router {
    Router::new()
        // Health
        .route("/health", get(health_service::check))
        // Custodians
        .route("/register_custodian", post(registry_service::register_custodian))
        // Shares
        .route("/submit_share", post(share_service::submit_share))
        .route("/get_shares", get(share_service::get_shares))
        // Audit
        .route("/audit", get(audit_service::recent_events))
        .with_state(service)
}

/// Run the HTTP server
pub async fn run(
    listener: tokio::net::TcpListener,
    service: Arc<CustodyService>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let app = create_router(service);

    info!(
        "Custody ledger listening on {}",
        listener
            .local_addr()
            .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 0)))
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for SIGTERM or SIGINT signal
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C signal"),
            Err(e) => error!("Failed to listen for Ctrl+C: {}", e),
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                info!("Received SIGTERM signal");
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutting down; in-memory ledger is discarded");
}

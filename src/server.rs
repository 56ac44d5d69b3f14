//! HTTP server initialization and runtime setup.
//!
//! Builds the registry and services, spawns the expiry sweeper and drives the
//! Axum server until a shutdown signal arrives.

use crate::application::services::{AuthService, LinkService};
use crate::config::Config;
use crate::domain::registry::Registry;
use crate::domain::sweeper::run_sweeper;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::watch;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory link registry
/// - Link and auth services
/// - Background expiry sweeper
/// - Axum HTTP server with graceful shutdown
///
/// All links live in process memory and are lost when this returns.
///
/// # Errors
///
/// Returns an error if:
/// - Listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let registry = Arc::new(Registry::new());

    let link_service = Arc::new(LinkService::new(
        registry.clone(),
        config.default_ttl,
        config.base_url.clone(),
    ));
    let auth_service = Arc::new(AuthService::new(
        &config.api_key,
        config.allowed_referrers.clone(),
    ));

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = tokio::spawn(run_sweeper(
        registry.clone(),
        config.sweep_interval(),
        shutdown_rx,
    ));

    let state = AppState::new(link_service, auth_service);
    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    let served = axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await;

    shutdown_tx.send(true).ok();
    if let Err(e) = sweeper.await {
        tracing::warn!("Sweeper task ended abnormally: {e}");
    }

    served?;
    tracing::info!(links = registry.len(), "Server stopped, discarding links");

    Ok(())
}

/// Resolves on Ctrl+C or, on Unix, SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {e}");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {e}");
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

    tracing::info!("Shutdown signal received");
}

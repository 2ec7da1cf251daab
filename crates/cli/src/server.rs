//! # CLI Server
//!
//! Server startup for the Docman CLI.

use std::net::SocketAddr;

use anyhow::anyhow;
use error::Result;
use migration::{Migrator, MigratorTrait as _};
use server::{create_app_router, AppState};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::{
    commands::ServeArgs,
    config::{parse_socket_addr, DatabaseConfig, ServerConfig},
};

/// Starts the API server
///
/// Connects, applies pending migrations, then serves until Ctrl+C or
/// SIGTERM.
pub async fn serve(db_config: &DatabaseConfig, server_config: &ServerConfig, args: &ServeArgs) -> Result<()> {
    info!(target: "serve", "Starting API server...");

    let address = parse_socket_addr(&args.host, args.port)
        .map_err(|e| anyhow!("Invalid address {}:{}: {}", args.host, args.port, e))?;

    info!(target: "serve", "Connecting to database...");
    let db = migration::connect_to_database(&db_config.database_url())
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    info!(target: "serve", "Running database migrations...");
    Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow!("Failed to run database migrations: {}", e))?;
    info!(target: "serve", "Database migrations completed successfully");

    let settings = server_config.settings();
    tokio::fs::create_dir_all(&settings.media_root)
        .await
        .map_err(|e| anyhow!("Failed to create media root {}: {}", settings.media_root.display(), e))?;

    let policies = server_config.policies()?;
    let state = AppState::new(db, server_config.jwt.clone(), policies, settings);
    let app = create_app_router(state);

    serve_http(app, address).await
}

async fn serve_http(app: axum::Router, address: SocketAddr) -> Result<()> {
    let listener = TcpListener::bind(address)
        .await
        .map_err(|e| anyhow!("Failed to bind to {}: {}", address, e))?;

    info!(target: "serve", %address, "Starting HTTP server...");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(|e| anyhow!("HTTP server error: {}", e))?;

    info!(target: "serve", "Server stopped");
    Ok(())
}

/// Waits for shutdown signals (Ctrl+C or SIGTERM)
///
/// A handler that cannot be installed is logged and never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(target: "serve", error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            },
            Err(e) => {
                warn!(target: "serve", error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            },
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!(target: "serve", "Shutdown signal received");
}

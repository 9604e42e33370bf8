//! Clubs API Server Binary
//!
//! Starts the HTTP API for reference data, name & address records, the
//! instrument and style catalog, and artists.
//!
//! # Usage
//!
//! ```bash
//! # Run against PostgreSQL
//! CLUBS_DATABASE_URL=postgres://... cargo run --bin clubs-api
//!
//! # Run with seeded in-memory adapters
//! CLUBS_STORE=mock cargo run --bin clubs-api
//! ```
//!
//! # Environment Variables
//!
//! * `CLUBS_HOST` - Server host (default: 0.0.0.0)
//! * `CLUBS_PORT` - Server port (default: 8080)
//! * `CLUBS_DATABASE_URL` - PostgreSQL connection string
//! * `CLUBS_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `CLUBS_STORE` - `internal` (PostgreSQL) or `mock` (default: internal)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use core_kernel::AdapterSource;
use infra_db::{
    create_pool_from_url, run_migrations, PostgresArtistAdapter, PostgresCatalogAdapter,
    PostgresNameAddressAdapter, PostgresReferenceAdapter,
};
use interface_api::{config::ApiConfig, create_router, Adapters, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("Failed to load configuration")?;

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = ?config.store,
        "Starting Clubs API Server"
    );

    let state = build_state(config.clone()).await?;
    let app = create_router(state);

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Connects the adapters selected by `config.store`
async fn build_state(config: ApiConfig) -> anyhow::Result<AppState> {
    match config.store {
        AdapterSource::Internal => {
            tracing::info!("Connecting to database...");
            let pool = create_pool_from_url(&config.database_url)
                .await
                .context("Failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database ready");

            let adapters = Adapters {
                reference: Arc::new(PostgresReferenceAdapter::new(pool.clone())),
                records: Arc::new(PostgresNameAddressAdapter::new(pool.clone())),
                catalog: Arc::new(PostgresCatalogAdapter::new(pool.clone())),
                artists: Arc::new(PostgresArtistAdapter::new(pool)),
            };
            Ok(AppState::new(config, adapters))
        }
        AdapterSource::Mock => {
            tracing::warn!("Using in-memory adapters; records are lost on shutdown");
            Ok(AppState::in_memory(config).await)
        }
    }
}

fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for Ctrl+C or SIGTERM
///
/// A signal handler that cannot be installed never fires.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}

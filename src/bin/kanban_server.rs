//! Serves the Kanban board API over HTTP.
//!
//! Usage:
//!
//! ```text
//! kanban-server --jwt-secret <SECRET> [--database-url <URL>] [--port <PORT>]
//! ```
//!
//! Every flag also reads from the environment (`JWT_SECRET`, `DATABASE_URL`,
//! `KANBAN_PORT`, ...). Without a database URL boards live in process memory
//! and are lost on exit.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use kanban_board::{
    board::{
        adapters::{
            access::JwtAccessTokenVerifier,
            memory::InMemoryBoardRepository,
            postgres::{PostgresBoardRepository, build_pool},
        },
        ports::{AccessTokenVerifier, BoardRepository},
        services::BoardService,
    },
    config::ServerConfig,
    http::{AppState, router},
    telemetry::init_logging,
};
use mockable::DefaultClock;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    init_logging(&config.log_level).context("invalid log filter")?;

    let verifier: Arc<dyn AccessTokenVerifier> =
        Arc::new(JwtAccessTokenVerifier::new(config.jwt_secret.as_bytes()));

    match config.database_url.clone() {
        Some(database_url) => {
            let pool_size = config.db_pool_size;
            let pool = tokio::task::spawn_blocking(move || build_pool(&database_url, pool_size))
                .await
                .context("database pool task failed")?
                .context("failed to connect to PostgreSQL")?;
            let repository = PostgresBoardRepository::new(pool);
            repository
                .ensure_schema()
                .await
                .context("failed to prepare the boards table")?;
            info!(pool_size, "using PostgreSQL board storage");
            serve(&config, repository, verifier).await
        }
        None => {
            warn!("DATABASE_URL is not set; boards are kept in memory only");
            serve(&config, InMemoryBoardRepository::new(), verifier).await
        }
    }
}

async fn serve<R>(
    config: &ServerConfig,
    repository: R,
    verifier: Arc<dyn AccessTokenVerifier>,
) -> Result<()>
where
    R: BoardRepository + 'static,
{
    let service = BoardService::new(Arc::new(repository), Arc::new(DefaultClock));
    let app = router(AppState::new(service, verifier));

    let address = config.bind_address().context("invalid bind address")?;
    let listener = TcpListener::bind(address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!(%address, "kanban server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server terminated unexpectedly")
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}

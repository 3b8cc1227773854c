//! Server configuration read from command-line flags and the environment.

use clap::Parser;
use std::net::SocketAddr;

/// Runtime configuration for the board server.
#[derive(Debug, Clone, Parser)]
#[command(name = "kanban-server", version, about = "Kanban board HTTP backend")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "KANBAN_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "KANBAN_PORT", default_value_t = 4000)]
    pub port: u16,

    /// `PostgreSQL` connection URL. Boards are kept in memory when unset.
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum number of pooled database connections.
    #[arg(long, env = "KANBAN_DB_POOL_SIZE", default_value_t = 8)]
    pub db_pool_size: u32,

    /// Shared secret used to verify HS256 access tokens.
    #[arg(long, env = "JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, env = "KANBAN_LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    /// Returns `host:port` as a socket address.
    ///
    /// # Errors
    ///
    /// Returns [`std::net::AddrParseError`] when the host is not an IP
    /// address.
    pub fn bind_address(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.host, self.port).parse()
    }
}

//! HTTP server command
//!
//! Connects the pool, optionally creates the schema, and serves until shutdown.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::config::{DEFAULT_BIND, DEFAULT_MAX_CONNECTIONS};
use trivia_server::db::{create_pool_with_options, schema::ensure_schema};
use trivia_server::{run_server, PgStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "TRIVIA_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "TRIVIA_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Create missing tables before serving
    #[arg(long)]
    pub init_schema: bool,
}

impl ServeArgs {
    fn into_config(self) -> Result<ServerConfig> {
        let database_url = self
            .database_url
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

        let config = ServerConfig::new(database_url)
            .with_bind_addr(self.bind)
            .with_max_connections(self.max_connections);
        config.validate().context("Invalid server configuration")?;
        Ok(config)
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let init_schema = args.init_schema;
    let config = args.into_config()?;

    tracing::info!(
        bind = %config.bind_addr,
        database = %config.redacted_database_url(),
        max_connections = config.max_connections,
        "starting trivia server"
    );

    let pool = create_pool_with_options(&config.database_url, config.max_connections)
        .await
        .context("Failed to create database pool")?;

    if init_schema {
        ensure_schema(&pool)
            .await
            .context("Failed to create schema")?;
    }

    run_server(Arc::new(PgStore::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}

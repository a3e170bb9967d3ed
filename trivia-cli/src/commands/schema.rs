//! Schema command: create the trivia tables and exit

use anyhow::{Context, Result};
use clap::Parser;

use trivia_server::db::{create_pool, schema::ensure_schema};

/// Arguments for the schema command
#[derive(Parser, Debug)]
pub struct SchemaArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,
}

pub async fn run_schema(args: SchemaArgs) -> Result<()> {
    let database_url = args
        .database_url
        .filter(|url| !url.trim().is_empty())
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;
    ensure_schema(&pool)
        .await
        .context("Failed to create schema")?;

    tracing::info!("schema ready");
    Ok(())
}

//! Command implementations for the teenwise CLI

pub mod migrate;
pub mod serve;

pub use migrate::run_migrate;
pub use serve::run_serve;

use anyhow::{Context, Result};
use clap::Args;
use sqlx::PgPool;

use teenwise_server::db::{create_pool_with_options, DEFAULT_MAX_CONNECTIONS};

/// Database connection flags shared by every command
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Database URL (also read from DATABASE_URL or ./.env)
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "TEENWISE_MAX_CONNECTIONS", default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,
}

impl DatabaseArgs {
    pub async fn connect(&self) -> Result<PgPool> {
        let url = self
            .database_url
            .as_deref()
            .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or ./.env")?;

        create_pool_with_options(url, self.max_connections)
            .await
            .context("Failed to create database pool")
    }
}

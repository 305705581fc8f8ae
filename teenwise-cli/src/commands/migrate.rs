//! Schema bootstrap command

use anyhow::{Context, Result};
use clap::Parser;

use teenwise_server::db::schema;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

pub async fn run_migrate(args: MigrateArgs) -> Result<()> {
    let pool = args.db.connect().await?;
    schema::run(&pool)
        .await
        .context("Failed to prepare database schema")?;

    pool.close().await;
    println!("Schema is up to date");
    Ok(())
}

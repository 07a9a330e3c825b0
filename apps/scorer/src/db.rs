use anyhow::{Context, Result};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::audit::{postgres::CREATE_APPLICATION_LOG, COLLECTION};

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
        .context("Failed to connect to PostgreSQL")?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the audit log table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_APPLICATION_LOG)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to create {COLLECTION} table"))?;

    info!("{COLLECTION} table ready");
    Ok(())
}

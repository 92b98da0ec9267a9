//! Connection pool setup and schema migration

use std::path::Path;
use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::DbConfig;
use crate::error::{Result, StorageError};

/// Open a PostgreSQL connection pool.
///
/// The pool is created once at startup and shared for the process lifetime;
/// concurrency handling is delegated entirely to sqlx and Postgres.
pub async fn connect(config: &DbConfig) -> std::result::Result<PgPool, StorageError> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.timeout_seconds))
        .connect(&config.url())
        .await
        .map_err(|e| StorageError::Connection {
            message: e.to_string(),
        })?;

    info!("PostgreSQL connection established");
    Ok(pool)
}

/// Execute the schema script at `schema_path` verbatim.
///
/// The script is an external collaborator: it is run as-is and never
/// interpreted. Any failure is fatal to the migration run.
pub async fn migrate(pool: &PgPool, schema_path: &Path) -> Result<()> {
    let schema = tokio::fs::read_to_string(schema_path).await?;

    sqlx::raw_sql(&schema)
        .execute(pool)
        .await
        .map_err(|e| StorageError::Migration {
            message: e.to_string(),
        })?;

    info!("Schema script {} applied", schema_path.display());
    Ok(())
}

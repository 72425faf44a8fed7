//! Postgres connection pool setup.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use tracing::{error, info};

use lor_shared::config::database::DatabaseConfig;

use crate::InfrastructureError;

/// Builds a connection pool from the database configuration.
///
/// The URL is parsed up front so a malformed value surfaces as a
/// configuration error rather than a connect failure.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, InfrastructureError> {
    let options = PgConnectOptions::from_str(&config.url)
        .map_err(|e| InfrastructureError::Config(format!("invalid database URL: {}", e)))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .test_before_acquire(true)
        .connect_with(options)
        .await
        .map_err(|e| {
            error!("Failed to create database pool: {}", e);
            InfrastructureError::Database(e)
        })?;

    info!(
        "Database pool created (max_connections: {})",
        config.max_connections
    );

    Ok(pool)
}

/// Verifies the pool can reach the database.
pub async fn health_check(pool: &PgPool) -> Result<(), InfrastructureError> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map_err(InfrastructureError::Database)?;
    Ok(())
}

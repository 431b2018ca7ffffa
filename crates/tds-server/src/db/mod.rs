//! Database access layer
//!
//! Pool construction plus the asset queries. All queries are runtime-checked
//! (`sqlx::query` / `query_as`) so the workspace builds without a live
//! database or an offline prepare cache.

use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;

use crate::config::DatabaseConfig;

pub mod assets;

/// Create the connection pool from configuration
///
/// The pool is the single database handle for the process; it is constructed
/// once in `main` and handed to every component that needs it.
pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_secs))
        .idle_timeout(Duration::from_secs(config.idle_timeout_secs))
        .connect(&config.url)
        .await
}

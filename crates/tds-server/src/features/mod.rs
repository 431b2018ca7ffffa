//! Feature modules implementing the TDS Registry API
//!
//! Each feature is organized as a vertical slice with its own commands
//! (write operations), queries (read operations), route table, and error
//! mapping:
//!
//! - **assets**: asset CRUD and the CSV bulk-import pipeline
//! - **search**: AI-assisted search over the registry
//!
//! Route handlers dispatch straight to `handle(pool, command)` functions so
//! every operation is callable (and testable) without the HTTP layer.

pub mod assets;
pub mod search;
pub mod shared;

use axum::Router;

use crate::ai::AiClient;

/// Shared state for feature routes
///
/// Both handles are constructed once at startup and injected here; no
/// component reaches for an ambient client.
#[derive(Clone)]
pub struct FeatureState {
    /// PostgreSQL connection pool
    pub db: sqlx::PgPool,
    /// Hosted language-model client
    pub ai: AiClient,
}

/// Creates the API router with all feature routes mounted
///
/// - `/assets` - asset management and CSV import
/// - `/search` - AI-assisted search
pub fn router(state: FeatureState) -> Router<()> {
    Router::new()
        .nest("/assets", assets::assets_routes().with_state(state.db.clone()))
        .nest("/search", search::search_routes().with_state(state))
}

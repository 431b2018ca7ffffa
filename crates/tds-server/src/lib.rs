//! TDS Registry Server Library
//!
//! HTTP server for managing Transportation Data Sheet (TDS) assets.
//!
//! # Overview
//!
//! The server provides a REST API for the asset registry:
//!
//! - **Asset management**: create, list, and fetch assets grouped under SSRs
//! - **CSV bulk import**: one-request batch import with per-row outcomes
//! - **AI-assisted search**: natural-language lookup backed by a hosted
//!   language-model API
//! - **Database**: PostgreSQL via SQLx with startup migrations
//! - **Middleware**: CORS (including pre-flight), request tracing,
//!   response compression
//!
//! # Architecture
//!
//! Features are organized as vertical slices under [`features`]: each slice
//! owns its commands (write operations), queries (read operations), route
//! table, and error mapping. The CSV import pipeline lives inside the assets
//! slice and is pure up to its persistence sink, which keeps the row
//! semantics unit-testable without a database.
//!
//! # Example
//!
//! ```no_run
//! use tds_server::{api, config::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::load()?;
//!     api::serve(config).await?;
//!     Ok(())
//! }
//! ```

pub mod ai;
pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod middleware;

// Re-export commonly used types
pub use error::{AppError, AppResult};

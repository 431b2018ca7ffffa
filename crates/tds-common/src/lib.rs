//! TDS Common Library
#![deny(clippy::unwrap_used, clippy::expect_used)]
//!
//! Shared types, utilities, and error handling for the TDS Registry project.
//!
//! # Overview
//!
//! This crate provides common functionality used across all workspace members:
//!
//! - **Error Handling**: Custom error types and result types
//! - **Logging**: Centralized tracing configuration for server and CLI
//! - **Types**: Shared domain types (assets, statuses, import summaries)
//!
//! # Example
//!
//! ```no_run
//! use tds_common::types::AssetStatus;
//!
//! let status: AssetStatus = "Active".parse().unwrap_or_default();
//! assert_eq!(status.to_string(), "active");
//! ```

pub mod error;
pub mod logging;
pub mod types;

// Re-export commonly used types
pub use error::{Result, TdsError};

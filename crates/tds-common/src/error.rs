//! Error types for the TDS Registry

use thiserror::Error;

/// Result type alias for TDS operations
pub type Result<T> = std::result::Result<T, TdsError>;

/// Main error type for the TDS Registry
#[derive(Error, Debug)]
pub enum TdsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("Invalid asset status: {0}")]
    InvalidStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

//! Asset write operations

pub mod create;
pub mod import;

pub use create::{CreateAssetCommand, CreateAssetError, CreateAssetResponse};
pub use import::{ImportAssetsCommand, ImportAssetsError, PgAssetSink};

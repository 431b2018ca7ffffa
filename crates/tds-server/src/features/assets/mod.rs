//! Assets feature module
//!
//! Asset registry operations: single-asset create, paginated listing,
//! fetch by id, and the CSV bulk-import pipeline.

pub mod commands;
pub mod import;
pub mod queries;
pub mod routes;

#[cfg(test)]
mod routes_test;

pub use commands::{
    CreateAssetCommand, CreateAssetError, CreateAssetResponse, ImportAssetsCommand,
    ImportAssetsError,
};

pub use queries::{
    GetAssetError, GetAssetQuery, ListAssetsError, ListAssetsQuery, ListAssetsResponse,
};

pub use routes::assets_routes;

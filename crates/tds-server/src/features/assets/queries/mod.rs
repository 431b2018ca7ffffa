//! Asset read operations

pub mod get;
pub mod list;

pub use get::{GetAssetError, GetAssetQuery};
pub use list::{ListAssetsError, ListAssetsQuery, ListAssetsResponse};

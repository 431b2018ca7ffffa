//! Get asset query

use sqlx::PgPool;
use uuid::Uuid;

use tds_common::types::Asset;

use crate::db::assets::fetch_asset;

/// Query to fetch a single asset by id
#[derive(Debug, Clone)]
pub struct GetAssetQuery {
    pub id: Uuid,
}

/// Errors that can occur when fetching an asset
#[derive(Debug, thiserror::Error)]
pub enum GetAssetError {
    #[error("Asset '{0}' not found")]
    NotFound(Uuid),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Stored asset could not be read: {0}")]
    InvalidRecord(String),
}

/// Handles the get asset query
#[tracing::instrument(skip(pool), fields(id = %query.id))]
pub async fn handle(pool: PgPool, query: GetAssetQuery) -> Result<Asset, GetAssetError> {
    let row = fetch_asset(&pool, query.id)
        .await?
        .ok_or(GetAssetError::NotFound(query.id))?;

    Asset::try_from(row).map_err(|e| GetAssetError::InvalidRecord(e.to_string()))
}

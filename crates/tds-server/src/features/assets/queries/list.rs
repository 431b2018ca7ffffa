//! List assets query
//!
//! Paginated listing with optional SSR and status filters.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use tds_common::types::{Asset, AssetStatus};

use crate::db::assets::{count_assets, list_assets};
use crate::features::shared::pagination::{PaginationMetadata, PaginationParams};

/// Query to list assets with pagination and filtering
///
/// Pagination fields are inlined rather than flattened: query-string
/// deserialization buffers flattened values as strings, which breaks the
/// numeric fields.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ListAssetsQuery {
    /// Page number (1-indexed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<i64>,
    /// Items per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<i64>,
    /// Restrict to one SSR
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssr: Option<String>,
    /// Restrict to one lifecycle status
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response containing a paginated list of assets
#[derive(Debug, Clone, Serialize)]
pub struct ListAssetsResponse {
    pub items: Vec<Asset>,
    pub pagination: PaginationMetadata,
}

/// Errors that can occur when listing assets
#[derive(Debug, thiserror::Error)]
pub enum ListAssetsError {
    #[error("Page must be greater than 0")]
    InvalidPage,
    #[error("Per page must be between 1 and 100")]
    InvalidPerPage,
    #[error("Invalid status filter '{0}': expected active, inactive, or retired")]
    InvalidStatus(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Stored asset could not be read: {0}")]
    InvalidRecord(String),
}

impl ListAssetsQuery {
    /// Pagination view over the inline fields
    pub fn pagination(&self) -> PaginationParams {
        PaginationParams::new(self.page, self.per_page)
    }

    /// Validates the query parameters and resolves the status filter
    pub fn validate(&self) -> Result<Option<AssetStatus>, ListAssetsError> {
        self.pagination().validate().map_err(|msg| match msg {
            "Page must be greater than 0" => ListAssetsError::InvalidPage,
            _ => ListAssetsError::InvalidPerPage,
        })?;

        match self.status.as_deref() {
            None => Ok(None),
            Some(raw) => raw
                .parse()
                .map(Some)
                .map_err(|_| ListAssetsError::InvalidStatus(raw.to_string())),
        }
    }
}

/// Handles the list assets query
#[tracing::instrument(skip(pool, query), fields(ssr = ?query.ssr, page = ?query.page))]
pub async fn handle(
    pool: PgPool,
    query: ListAssetsQuery,
) -> Result<ListAssetsResponse, ListAssetsError> {
    let status = query.validate()?;
    let pagination = query.pagination();
    let ssr = query.ssr.as_deref();

    let total = count_assets(&pool, ssr, status).await?;

    let rows = list_assets(&pool, ssr, status, pagination.per_page(), pagination.offset()).await?;

    let items = rows
        .into_iter()
        .map(Asset::try_from)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| ListAssetsError::InvalidRecord(e.to_string()))?;

    Ok(ListAssetsResponse {
        items,
        pagination: PaginationMetadata::from_params(&pagination, total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_filter_parses() {
        let query = ListAssetsQuery {
            status: Some("retired".to_string()),
            ..Default::default()
        };
        assert_eq!(query.validate().ok(), Some(Some(AssetStatus::Retired)));
    }

    #[test]
    fn unknown_status_filter_rejected() {
        let query = ListAssetsQuery {
            status: Some("scrapped".to_string()),
            ..Default::default()
        };
        assert!(matches!(query.validate(), Err(ListAssetsError::InvalidStatus(_))));
    }

    #[test]
    fn bad_pagination_rejected() {
        let query = ListAssetsQuery {
            page: Some(0),
            ..Default::default()
        };
        assert!(matches!(query.validate(), Err(ListAssetsError::InvalidPage)));

        let query = ListAssetsQuery {
            per_page: Some(500),
            ..Default::default()
        };
        assert!(matches!(query.validate(), Err(ListAssetsError::InvalidPerPage)));
    }
}

//! Asset table queries

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use tds_common::types::{Asset, AssetStatus};
use tds_common::TdsError;

/// Raw row as stored; `status` is parsed into [`AssetStatus`] on conversion.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AssetRow {
    pub id: Uuid,
    pub ssr_reference: String,
    pub nsn: String,
    pub asset_code: String,
    pub designation: String,
    pub asset_type: String,
    pub short_name: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<AssetRow> for Asset {
    type Error = TdsError;

    fn try_from(row: AssetRow) -> Result<Self, Self::Error> {
        let status: AssetStatus = row.status.parse()?;
        Ok(Asset {
            id: row.id,
            ssr_reference: row.ssr_reference,
            nsn: row.nsn,
            asset_code: row.asset_code,
            designation: row.designation,
            asset_type: row.asset_type,
            short_name: row.short_name,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Insert parameters for a new asset
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub ssr_reference: String,
    pub nsn: String,
    pub asset_code: String,
    pub designation: String,
    pub asset_type: String,
    pub short_name: Option<String>,
    pub status: AssetStatus,
}

/// Insert a single asset and return the stored row
pub async fn insert_asset(pool: &PgPool, asset: &NewAsset) -> Result<AssetRow, sqlx::Error> {
    sqlx::query_as::<_, AssetRow>(
        r#"
        INSERT INTO assets (id, ssr_reference, nsn, asset_code, designation,
                            asset_type, short_name, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING id, ssr_reference, nsn, asset_code, designation,
                  asset_type, short_name, status, created_at, updated_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(&asset.ssr_reference)
    .bind(&asset.nsn)
    .bind(&asset.asset_code)
    .bind(&asset.designation)
    .bind(&asset.asset_type)
    .bind(&asset.short_name)
    .bind(asset.status.to_string())
    .fetch_one(pool)
    .await
}

/// Fetch one asset by id
pub async fn fetch_asset(pool: &PgPool, id: Uuid) -> Result<Option<AssetRow>, sqlx::Error> {
    sqlx::query_as::<_, AssetRow>(
        r#"
        SELECT id, ssr_reference, nsn, asset_code, designation,
               asset_type, short_name, status, created_at, updated_at
        FROM assets
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Count assets matching the optional filters
pub async fn count_assets(
    pool: &PgPool,
    ssr_reference: Option<&str>,
    status: Option<AssetStatus>,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM assets
        WHERE ($1::TEXT IS NULL OR ssr_reference = $1)
          AND ($2::TEXT IS NULL OR status = $2)
        "#,
    )
    .bind(ssr_reference)
    .bind(status.map(|s| s.to_string()))
    .fetch_one(pool)
    .await
}

/// List assets matching the optional filters, newest first
pub async fn list_assets(
    pool: &PgPool,
    ssr_reference: Option<&str>,
    status: Option<AssetStatus>,
    limit: i64,
    offset: i64,
) -> Result<Vec<AssetRow>, sqlx::Error> {
    sqlx::query_as::<_, AssetRow>(
        r#"
        SELECT id, ssr_reference, nsn, asset_code, designation,
               asset_type, short_name, status, created_at, updated_at
        FROM assets
        WHERE ($1::TEXT IS NULL OR ssr_reference = $1)
          AND ($2::TEXT IS NULL OR status = $2)
        ORDER BY created_at DESC, asset_code
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(ssr_reference)
    .bind(status.map(|s| s.to_string()))
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await
}

/// Bounded candidate lookup for AI-assisted search
pub async fn search_candidates(
    pool: &PgPool,
    ssr_reference: Option<&str>,
    term: &str,
    limit: i64,
) -> Result<Vec<AssetRow>, sqlx::Error> {
    let pattern = format!("%{}%", term);

    sqlx::query_as::<_, AssetRow>(
        r#"
        SELECT id, ssr_reference, nsn, asset_code, designation,
               asset_type, short_name, status, created_at, updated_at
        FROM assets
        WHERE ($1::TEXT IS NULL OR ssr_reference = $1)
          AND (nsn ILIKE $2
               OR asset_code ILIKE $2
               OR designation ILIKE $2
               OR asset_type ILIKE $2
               OR short_name ILIKE $2)
        ORDER BY asset_code
        LIMIT $3
        "#,
    )
    .bind(ssr_reference)
    .bind(pattern)
    .bind(limit)
    .fetch_all(pool)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(status: &str) -> AssetRow {
        AssetRow {
            id: Uuid::new_v4(),
            ssr_reference: "ssr-42".to_string(),
            nsn: "1005-01-123-4567".to_string(),
            asset_code: "AC1".to_string(),
            designation: "Widget".to_string(),
            asset_type: "Other".to_string(),
            short_name: None,
            status: status.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn row_converts_with_known_status() {
        let asset = Asset::try_from(sample_row("active")).unwrap();
        assert_eq!(asset.status, AssetStatus::Active);
    }

    #[test]
    fn row_conversion_rejects_unknown_status() {
        assert!(Asset::try_from(sample_row("scrapped")).is_err());
    }
}

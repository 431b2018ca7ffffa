//! CSV bulk-import command
//!
//! Accepts one text payload (header row + data rows) and a parent SSR
//! reference, drives the import pipeline over it, and returns the batch
//! summary. Partial success is the designed behavior: the summary reports
//! row failures in-band and the request still completes.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use tds_common::types::{AssetStatus, ImportSummary};

use crate::db::assets::{insert_asset, NewAsset};
use crate::features::assets::import::{run_batch, AssetRecord, AssetSink, ImportError, SinkError};

/// Command to bulk-import assets from a delimited-text payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportAssetsCommand {
    /// Opaque reference of the SSR the assets belong to
    pub ssr_reference: String,
    /// Raw CSV payload, header row first
    pub csv: String,
}

/// Errors that can occur when importing assets
///
/// All of these are batch-level: row-level failures are reported inside the
/// returned [`ImportSummary`] instead.
#[derive(Debug, thiserror::Error)]
pub enum ImportAssetsError {
    #[error("SSR reference is required and cannot be empty")]
    SsrReferenceRequired,

    #[error(transparent)]
    Import(#[from] ImportError),
}

impl ImportAssetsCommand {
    /// Validates the command parameters
    pub fn validate(&self) -> Result<(), ImportAssetsError> {
        if self.ssr_reference.trim().is_empty() {
            return Err(ImportAssetsError::SsrReferenceRequired);
        }
        Ok(())
    }
}

/// Handles the import command against the production Postgres sink
#[tracing::instrument(skip(pool, command), fields(ssr = %command.ssr_reference))]
pub async fn handle(
    pool: PgPool,
    command: ImportAssetsCommand,
) -> Result<ImportSummary, ImportAssetsError> {
    command.validate()?;

    let sink = PgAssetSink::new(pool);
    let summary = run_batch(&command.csv, command.ssr_reference.trim(), &sink).await?;

    tracing::info!(
        assets_created = summary.assets_created,
        failed = summary.errors.len(),
        "Assets imported via API"
    );

    Ok(summary)
}

/// Persistence sink backed by the assets table.
///
/// Inserts one record per call; no bulk statement. Status text parses into
/// [`AssetStatus`] here so a bad value rejects its own row.
pub struct PgAssetSink {
    pool: PgPool,
}

impl PgAssetSink {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetSink for PgAssetSink {
    async fn insert(&self, record: &AssetRecord) -> Result<(), SinkError> {
        let status: AssetStatus = record
            .status
            .parse()
            .map_err(|_| SinkError::Rejected(format!("Invalid status '{}'", record.status)))?;

        let new_asset = NewAsset {
            ssr_reference: record.ssr_reference.clone(),
            nsn: record.nsn.clone(),
            asset_code: record.asset_code.clone(),
            designation: record.designation.clone(),
            asset_type: record.asset_type.clone(),
            short_name: if record.short_name.is_empty() {
                None
            } else {
                Some(record.short_name.clone())
            },
            status,
        };

        insert_asset(&self.pool, &new_asset)
            .await
            .map(|_| ())
            .map_err(classify_sink_error)
    }
}

/// Split a database failure into the pipeline's two tiers: statement-level
/// rejections continue the batch, connectivity failures abort it.
fn classify_sink_error(err: sqlx::Error) -> SinkError {
    match err {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            SinkError::Rejected("Asset code already exists for this SSR".to_string())
        },
        sqlx::Error::Database(db) => SinkError::Rejected(db.message().to_string()),
        other => SinkError::Unavailable(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_rejects_empty_ssr_reference() {
        let command = ImportAssetsCommand {
            ssr_reference: "   ".to_string(),
            csv: "nsn,asset_code,designation".to_string(),
        };
        assert!(matches!(
            command.validate(),
            Err(ImportAssetsError::SsrReferenceRequired)
        ));
    }

    #[test]
    fn validation_accepts_populated_command() {
        let command = ImportAssetsCommand {
            ssr_reference: "ssr-42".to_string(),
            csv: "nsn,asset_code,designation\nN1,A1,D1".to_string(),
        };
        assert!(command.validate().is_ok());
    }

    #[test]
    fn command_deserializes_camel_case() {
        let command: ImportAssetsCommand =
            serde_json::from_str(r#"{"ssrReference":"ssr-42","csv":"nsn"}"#).unwrap();
        assert_eq!(command.ssr_reference, "ssr-42");
    }

    #[test]
    fn connectivity_failures_classify_as_unavailable() {
        assert!(matches!(
            classify_sink_error(sqlx::Error::PoolTimedOut),
            SinkError::Unavailable(_)
        ));
        assert!(matches!(
            classify_sink_error(sqlx::Error::WorkerCrashed),
            SinkError::Unavailable(_)
        ));
    }
}

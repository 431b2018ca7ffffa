//! Create asset command
//!
//! Creates a single asset under an SSR. The CSV import path bypasses this
//! command and talks to the sink directly; this is the one-at-a-time API
//! used by interactive clients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use tds_common::types::{Asset, AssetStatus};

use crate::db::assets::{insert_asset, NewAsset};

/// Command to create a new asset
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAssetCommand {
    pub ssr_reference: String,
    pub nsn: String,
    pub asset_code: String,
    pub designation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response from creating an asset
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAssetResponse {
    pub id: Uuid,
    pub ssr_reference: String,
    pub nsn: String,
    pub asset_code: String,
    pub designation: String,
    pub asset_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,
    pub status: AssetStatus,
    pub created_at: DateTime<Utc>,
}

impl From<Asset> for CreateAssetResponse {
    fn from(asset: Asset) -> Self {
        Self {
            id: asset.id,
            ssr_reference: asset.ssr_reference,
            nsn: asset.nsn,
            asset_code: asset.asset_code,
            designation: asset.designation,
            asset_type: asset.asset_type,
            short_name: asset.short_name,
            status: asset.status,
            created_at: asset.created_at,
        }
    }
}

/// Errors that can occur when creating an asset
#[derive(Debug, thiserror::Error)]
pub enum CreateAssetError {
    #[error("SSR reference is required and cannot be empty")]
    SsrReferenceRequired,
    #[error("NSN is required and cannot be empty")]
    NsnRequired,
    #[error("Asset code is required and cannot be empty")]
    AssetCodeRequired,
    #[error("Designation is required and cannot be empty")]
    DesignationRequired,
    #[error("{0} must not exceed 255 characters")]
    FieldTooLong(&'static str),
    #[error("Invalid status '{0}': expected active, inactive, or retired")]
    InvalidStatus(String),
    #[error("Asset with code '{0}' already exists for this SSR")]
    DuplicateAssetCode(String),
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Stored asset could not be read back: {0}")]
    InvalidRecord(String),
}

impl CreateAssetCommand {
    /// Validates the command parameters
    pub fn validate(&self) -> Result<(), CreateAssetError> {
        if self.ssr_reference.trim().is_empty() {
            return Err(CreateAssetError::SsrReferenceRequired);
        }
        if self.nsn.trim().is_empty() {
            return Err(CreateAssetError::NsnRequired);
        }
        if self.asset_code.trim().is_empty() {
            return Err(CreateAssetError::AssetCodeRequired);
        }
        if self.designation.trim().is_empty() {
            return Err(CreateAssetError::DesignationRequired);
        }

        for (name, value) in [
            ("SSR reference", &self.ssr_reference),
            ("NSN", &self.nsn),
            ("Asset code", &self.asset_code),
            ("Designation", &self.designation),
        ] {
            if value.len() > 255 {
                return Err(CreateAssetError::FieldTooLong(name));
            }
        }

        Ok(())
    }

    fn status(&self) -> Result<AssetStatus, CreateAssetError> {
        match self.status.as_deref() {
            None => Ok(AssetStatus::default()),
            Some(raw) if raw.trim().is_empty() => Ok(AssetStatus::default()),
            Some(raw) => raw
                .parse()
                .map_err(|_| CreateAssetError::InvalidStatus(raw.to_string())),
        }
    }
}

/// Handles the create asset command
#[tracing::instrument(skip(pool, command), fields(ssr = %command.ssr_reference, asset_code = %command.asset_code))]
pub async fn handle(
    pool: PgPool,
    command: CreateAssetCommand,
) -> Result<CreateAssetResponse, CreateAssetError> {
    command.validate()?;
    let status = command.status()?;

    let new_asset = NewAsset {
        ssr_reference: command.ssr_reference.trim().to_string(),
        nsn: command.nsn.trim().to_string(),
        asset_code: command.asset_code.trim().to_string(),
        designation: command.designation.trim().to_string(),
        asset_type: command
            .asset_type
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or("Other")
            .to_string(),
        short_name: command
            .short_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        status,
    };

    let row = insert_asset(&pool, &new_asset).await.map_err(|e| match e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            CreateAssetError::DuplicateAssetCode(new_asset.asset_code.clone())
        },
        other => CreateAssetError::Database(other),
    })?;

    let asset =
        Asset::try_from(row).map_err(|e| CreateAssetError::InvalidRecord(e.to_string()))?;

    tracing::info!(asset_id = %asset.id, "Asset created via API");

    Ok(asset.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command() -> CreateAssetCommand {
        CreateAssetCommand {
            ssr_reference: "ssr-42".to_string(),
            nsn: "1005-01-123-4567".to_string(),
            asset_code: "AC1".to_string(),
            designation: "Widget".to_string(),
            asset_type: None,
            short_name: None,
            status: None,
        }
    }

    #[test]
    fn valid_command_passes() {
        assert!(command().validate().is_ok());
    }

    #[test]
    fn empty_required_fields_fail() {
        let mut c = command();
        c.nsn = " ".to_string();
        assert!(matches!(c.validate(), Err(CreateAssetError::NsnRequired)));

        let mut c = command();
        c.asset_code = String::new();
        assert!(matches!(c.validate(), Err(CreateAssetError::AssetCodeRequired)));
    }

    #[test]
    fn oversized_field_fails() {
        let mut c = command();
        c.designation = "x".repeat(256);
        assert!(matches!(c.validate(), Err(CreateAssetError::FieldTooLong(_))));
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(command().status().ok(), Some(AssetStatus::Active));
    }

    #[test]
    fn unknown_status_is_rejected() {
        let mut c = command();
        c.status = Some("scrapped".to_string());
        assert!(matches!(c.status(), Err(CreateAssetError::InvalidStatus(_))));
    }
}

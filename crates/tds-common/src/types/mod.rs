//! Common types used across the TDS Registry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::TdsError;

/// Lifecycle status of an asset.
///
/// Stored as lowercase text in the database; parsing is case-insensitive so
/// CSV sources with mixed casing still resolve. Unknown values are rejected
/// at the persistence boundary rather than silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    #[default]
    Active,
    Inactive,
    Retired,
}

impl std::str::FromStr for AssetStatus {
    type Err = TdsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "active" => Ok(AssetStatus::Active),
            "inactive" => Ok(AssetStatus::Inactive),
            "retired" => Ok(AssetStatus::Retired),
            other => Err(TdsError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AssetStatus::Active => "active",
            AssetStatus::Inactive => "inactive",
            AssetStatus::Retired => "retired",
        };
        write!(f, "{}", name)
    }
}

/// A registered asset under an SSR.
///
/// The SSR is an upstream grouping entity; only its opaque reference is
/// carried here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
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
    pub updated_at: DateTime<Utc>,
}

/// Result of a completed CSV import batch.
///
/// `errors` preserves row order; a batch that ran to completion always
/// reports failures here in-band, never via the transport status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub assets_created: u64,
    pub errors: Vec<String>,
}

impl ImportSummary {
    pub fn new() -> Self {
        Self {
            assets_created: 0,
            errors: Vec::new(),
        }
    }
}

impl Default for ImportSummary {
    fn default() -> Self {
        Self::new()
    }
}

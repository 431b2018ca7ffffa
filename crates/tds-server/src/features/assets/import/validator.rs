//! Mandatory-field validation
//!
//! The single branch point of the pipeline: a mapped record either carries
//! all three mandatory identifiers or it is failed with a descriptive
//! reason. Reasons are plain strings so they drop straight into the batch
//! summary's error list.

use super::AssetRecord;

/// Reason reported for any record missing a mandatory identifier.
pub const MISSING_REQUIRED_FIELDS: &str =
    "Missing required fields (NSN, asset_code, designation)";

/// Check mandatory-field presence on a mapped record.
///
/// Returns the record's failure reason; never panics. Defaulted fields
/// (`status`, `asset_type`) cannot fail here.
pub fn validate(record: &AssetRecord) -> Result<(), String> {
    if record.nsn.is_empty() || record.asset_code.is_empty() || record.designation.is_empty() {
        return Err(MISSING_REQUIRED_FIELDS.to_string());
    }

    Ok(())
}

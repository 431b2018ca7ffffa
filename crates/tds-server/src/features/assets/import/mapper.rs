//! Positional row-to-record mapping
//!
//! Zips header names onto row tokens and applies the column aliases and
//! per-field defaults. Pure: no I/O, no failure modes — a malformed row
//! still maps, and the validator decides its fate.

use super::AssetRecord;

/// Column aliases accepted for `asset_code`, in priority order.
const ASSET_CODE_COLUMNS: &[&str] = &["asset_code", "code"];

/// Column aliases accepted for `asset_type`, in priority order.
const ASSET_TYPE_COLUMNS: &[&str] = &["asset_type", "type"];

/// Default status for rows without a usable `status` value.
const DEFAULT_STATUS: &str = "active";

/// Default type for rows without a usable `asset_type` value.
const DEFAULT_ASSET_TYPE: &str = "Other";

/// Map one raw row onto the fixed asset schema.
///
/// A row shorter than the header set reads as empty strings for the missing
/// positions; extra tokens beyond the header set are ignored. Values are
/// trimmed, and an empty value falls back to the field default exactly like
/// an absent column does.
pub fn map_record(headers: &[String], row: &[String], ssr_reference: &str) -> AssetRecord {
    let value_of = |names: &[&str]| -> String {
        names
            .iter()
            .find_map(|name| headers.iter().position(|h| h == name))
            .and_then(|idx| row.get(idx))
            .map(|token| token.trim().to_string())
            .unwrap_or_default()
    };

    let status = value_of(&["status"]);
    let asset_type = value_of(ASSET_TYPE_COLUMNS);

    AssetRecord {
        ssr_reference: ssr_reference.to_string(),
        nsn: value_of(&["nsn"]),
        asset_code: value_of(ASSET_CODE_COLUMNS),
        designation: value_of(&["designation"]),
        asset_type: if asset_type.is_empty() {
            DEFAULT_ASSET_TYPE.to_string()
        } else {
            asset_type
        },
        short_name: value_of(&["short_name"]),
        status: if status.is_empty() {
            DEFAULT_STATUS.to_string()
        } else {
            status
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    fn row(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn maps_named_columns_positionally() {
        let record = map_record(
            &headers(&["nsn", "asset_code", "designation"]),
            &row(&["N1", "AC1", "Widget"]),
            "ssr-42",
        );

        assert_eq!(record.ssr_reference, "ssr-42");
        assert_eq!(record.nsn, "N1");
        assert_eq!(record.asset_code, "AC1");
        assert_eq!(record.designation, "Widget");
    }

    #[test]
    fn code_column_aliases_to_asset_code() {
        let record = map_record(
            &headers(&["nsn", "code", "designation"]),
            &row(&["N1", "C1", "D1"]),
            "ssr-1",
        );
        assert_eq!(record.asset_code, "C1");
    }

    #[test]
    fn type_column_aliases_to_asset_type() {
        let record = map_record(
            &headers(&["nsn", "code", "type", "designation"]),
            &row(&["N1", "C1", "Valve", "D1"]),
            "ssr-1",
        );
        assert_eq!(record.asset_type, "Valve");
    }

    #[test]
    fn asset_code_column_wins_over_code() {
        let record = map_record(
            &headers(&["code", "asset_code"]),
            &row(&["alias", "canonical"]),
            "ssr-1",
        );
        assert_eq!(record.asset_code, "canonical");
    }

    #[test]
    fn missing_columns_default() {
        let record = map_record(
            &headers(&["nsn", "asset_code", "designation"]),
            &row(&["N1", "AC1", "D1"]),
            "ssr-1",
        );
        assert_eq!(record.status, "active");
        assert_eq!(record.asset_type, "Other");
        assert_eq!(record.short_name, "");
    }

    #[test]
    fn short_row_pads_with_empty_strings() {
        let record = map_record(
            &headers(&["nsn", "asset_code", "designation"]),
            &row(&["N1"]),
            "ssr-1",
        );
        assert_eq!(record.nsn, "N1");
        assert_eq!(record.asset_code, "");
        assert_eq!(record.designation, "");
    }

    #[test]
    fn values_are_trimmed() {
        let record = map_record(
            &headers(&["nsn", "asset_code"]),
            &row(&[" N1 ", "  AC1"]),
            "ssr-1",
        );
        assert_eq!(record.nsn, "N1");
        assert_eq!(record.asset_code, "AC1");
    }

    #[test]
    fn whitespace_only_status_falls_back_to_default() {
        let record = map_record(
            &headers(&["nsn", "status"]),
            &row(&["N1", "   "]),
            "ssr-1",
        );
        assert_eq!(record.status, "active");
    }
}

//! Row parsing for CSV import payloads
//!
//! Splits the raw payload into a normalized header set and positional data
//! rows. No line is discarded: a blank line inside the payload becomes a
//! single-token empty row, which downstream validation reports against its
//! row number instead of silently dropping it.

use thiserror::Error;

/// A parsed CSV payload: one header set plus zero or more data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    /// Trimmed, lower-cased column names from the first line
    pub headers: Vec<String>,
    /// Raw comma-split tokens per data row, in payload order
    pub rows: Vec<Vec<String>>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Import payload contains no rows")]
    EmptyInput,
}

/// Parse a raw delimited-text payload.
///
/// The payload is trimmed as a whole and split on newlines; the first line
/// is the header row. Returns [`ParseError::EmptyInput`] when nothing
/// remains after trimming.
pub fn parse(text: &str) -> Result<CsvTable, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut lines = trimmed.split('\n');

    // split() on a non-empty string always yields at least one item
    let header_line = lines.next().unwrap_or_default();
    let headers = header_line
        .split(',')
        .map(|token| token.trim().to_lowercase())
        .collect();

    let rows = lines
        .map(|line| {
            line.split(',')
                .map(|token| token.to_string())
                .collect::<Vec<_>>()
        })
        .collect();

    Ok(CsvTable { headers, rows })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headers_are_trimmed_and_lowercased() {
        let table = parse("NSN, Asset_Code ,Designation\n").unwrap();
        assert_eq!(table.headers, vec!["nsn", "asset_code", "designation"]);
        assert!(table.rows.is_empty());
    }

    #[test]
    fn data_rows_preserve_raw_tokens() {
        let table = parse("nsn,code\nN1, C1 ").unwrap();
        assert_eq!(table.rows, vec![vec!["N1".to_string(), " C1 ".to_string()]]);
    }

    #[test]
    fn row_count_matches_lines_minus_header() {
        let table = parse("nsn,code\nN1,C1\nN2,C2\nN3,C3").unwrap();
        assert_eq!(table.rows.len(), 3);
    }

    #[test]
    fn blank_lines_are_kept_as_rows() {
        let table = parse("nsn,code\nN1,C1\n\nN2,C2").unwrap();
        assert_eq!(table.rows.len(), 3);
        assert_eq!(table.rows[1], vec!["".to_string()]);
    }

    #[test]
    fn empty_input_is_a_parse_error() {
        assert_eq!(parse(""), Err(ParseError::EmptyInput));
        assert_eq!(parse("   \n\n  "), Err(ParseError::EmptyInput));
    }

    #[test]
    fn header_only_payload_has_no_rows() {
        let table = parse("nsn,asset_code,designation").unwrap();
        assert_eq!(table.headers.len(), 3);
        assert!(table.rows.is_empty());
    }
}

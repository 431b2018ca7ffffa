//! CSV bulk-import pipeline
//!
//! One linear pass over the payload: parse once, then for every data row
//! map -> validate -> submit. Rows are processed strictly sequentially with
//! at most one sink call in flight, because the summary's ordering guarantee
//! (failures listed in ascending row order) requires sequential
//! accumulation. There are no retries and no cancellation: a started batch
//! runs over every row.
//!
//! Failure handling follows two tiers. A validation failure or a sink
//! rejection is a row-level outcome: it is recorded against the row's
//! 1-based number (the header occupies row 1) and the pass continues. An
//! unavailable sink is batch-fatal and surfaces as [`ImportError`] with no
//! partial summary.

use async_trait::async_trait;
use thiserror::Error;
use tracing::debug;

use tds_common::types::ImportSummary;

pub mod mapper;
pub mod parser;
pub mod validator;

pub use parser::{CsvTable, ParseError};

/// A mapped row ready for validation and persistence.
///
/// All fields are text at this stage; typed conversion (status parsing)
/// happens at the persistence boundary so a bad value fails its own row
/// instead of the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetRecord {
    pub ssr_reference: String,
    pub nsn: String,
    pub asset_code: String,
    pub designation: String,
    pub asset_type: String,
    pub short_name: String,
    pub status: String,
}

/// Per-call failure from the persistence sink.
#[derive(Debug, Error)]
pub enum SinkError {
    /// The sink refused this record; the batch continues.
    #[error("{0}")]
    Rejected(String),

    /// The sink cannot be reached at all; the batch aborts.
    #[error("Persistence backend unavailable: {0}")]
    Unavailable(String),
}

/// Accepts one validated record at a time for storage.
///
/// No bulk contract: the coordinator submits row by row and the summary
/// accounting depends on one acknowledgement or error per record.
#[async_trait]
pub trait AssetSink: Send + Sync {
    async fn insert(&self, record: &AssetRecord) -> Result<(), SinkError>;
}

/// Batch-level failures; none of these yields a partial summary.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Persistence backend unavailable: {0}")]
    SinkUnavailable(String),
}

/// Outcome of processing a single data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Created,
    Failed { row: usize, reason: String },
}

/// Drive the full pipeline over a payload.
///
/// Returns the completed [`ImportSummary`]; every data row contributes
/// exactly one outcome, so `assets_created + errors.len()` equals the data
/// row count.
pub async fn run_batch(
    text: &str,
    ssr_reference: &str,
    sink: &dyn AssetSink,
) -> Result<ImportSummary, ImportError> {
    let table = parser::parse(text)?;

    let mut summary = ImportSummary::new();

    for (index, row) in table.rows.iter().enumerate() {
        // 1-based numbering counting the header line
        let row_number = index + 2;

        match process_row(&table.headers, row, ssr_reference, row_number, sink).await? {
            RowOutcome::Created => summary.assets_created += 1,
            RowOutcome::Failed { row, reason } => {
                summary.errors.push(format!("Row {}: {}", row, reason));
            },
        }
    }

    debug!(
        assets_created = summary.assets_created,
        failed = summary.errors.len(),
        "Import batch finished"
    );

    Ok(summary)
}

/// Map, validate, and submit one row.
///
/// Only sink unavailability escapes as an error; every other failure is
/// folded into the row's outcome so the total-row-count invariant holds.
async fn process_row(
    headers: &[String],
    row: &[String],
    ssr_reference: &str,
    row_number: usize,
    sink: &dyn AssetSink,
) -> Result<RowOutcome, ImportError> {
    let record = mapper::map_record(headers, row, ssr_reference);

    if let Err(reason) = validator::validate(&record) {
        return Ok(RowOutcome::Failed {
            row: row_number,
            reason,
        });
    }

    match sink.insert(&record).await {
        Ok(()) => Ok(RowOutcome::Created),
        Err(SinkError::Rejected(reason)) => Ok(RowOutcome::Failed {
            row: row_number,
            reason,
        }),
        Err(SinkError::Unavailable(reason)) => Err(ImportError::SinkUnavailable(reason)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    /// In-memory sink recording inserts; rejects asset codes listed in
    /// `reject`, reports unavailability when `down` is set.
    #[derive(Default)]
    struct MemorySink {
        inserted: Mutex<Vec<AssetRecord>>,
        reject: Vec<(String, String)>,
        down: bool,
    }

    impl MemorySink {
        fn rejecting(code: &str, reason: &str) -> Self {
            Self {
                reject: vec![(code.to_string(), reason.to_string())],
                ..Self::default()
            }
        }

        fn records(&self) -> Vec<AssetRecord> {
            self.inserted.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AssetSink for MemorySink {
        async fn insert(&self, record: &AssetRecord) -> Result<(), SinkError> {
            if self.down {
                return Err(SinkError::Unavailable("connection refused".to_string()));
            }
            if let Some((_, reason)) =
                self.reject.iter().find(|(code, _)| *code == record.asset_code)
            {
                return Err(SinkError::Rejected(reason.clone()));
            }
            self.inserted.lock().unwrap().push(record.clone());
            Ok(())
        }
    }

    #[tokio::test]
    async fn worked_example_missing_nsn() {
        let sink = MemorySink::default();
        let summary = run_batch(
            "nsn,asset_code,designation\nNSN1,AC1,Widget\n,AC2,Gadget",
            "ssr-42",
            &sink,
        )
        .await
        .unwrap();

        assert_eq!(summary.assets_created, 1);
        assert_eq!(
            summary.errors,
            vec!["Row 3: Missing required fields (NSN, asset_code, designation)".to_string()]
        );
        assert_eq!(sink.records()[0].ssr_reference, "ssr-42");
    }

    #[tokio::test]
    async fn worked_example_aliases_and_defaults() {
        let sink = MemorySink::default();
        let summary = run_batch("nsn,code,type,designation\nN1,C1,Valve,D1", "ssr-1", &sink)
            .await
            .unwrap();

        assert_eq!(summary.assets_created, 1);
        let records = sink.records();
        assert_eq!(records[0].asset_code, "C1");
        assert_eq!(records[0].asset_type, "Valve");
        assert_eq!(records[0].status, "active");
    }

    #[tokio::test]
    async fn every_row_yields_exactly_one_outcome() {
        let sink = MemorySink::rejecting("DUP", "Asset code already exists");
        let summary = run_batch(
            "nsn,asset_code,designation\nN1,A1,D1\n,A2,D2\nN3,DUP,D3\nN4,A4,D4",
            "ssr-1",
            &sink,
        )
        .await
        .unwrap();

        assert_eq!(summary.assets_created as usize + summary.errors.len(), 4);
        assert_eq!(summary.assets_created, 2);
    }

    #[tokio::test]
    async fn errors_preserve_row_order_across_causes() {
        let sink = MemorySink::rejecting("DUP", "Asset code already exists");
        let summary = run_batch(
            "nsn,asset_code,designation\n,A1,D1\nN2,DUP,D2\n,A3,D3",
            "ssr-1",
            &sink,
        )
        .await
        .unwrap();

        assert_eq!(summary.errors.len(), 3);
        assert!(summary.errors[0].starts_with("Row 2:"));
        assert_eq!(summary.errors[1], "Row 3: Asset code already exists");
        assert!(summary.errors[2].starts_with("Row 4:"));
    }

    #[tokio::test]
    async fn sink_rejection_does_not_stop_the_batch() {
        let sink = MemorySink::rejecting("BAD", "rejected");
        let summary = run_batch(
            "nsn,asset_code,designation\nN1,BAD,D1\nN2,OK,D2",
            "ssr-1",
            &sink,
        )
        .await
        .unwrap();

        assert_eq!(summary.assets_created, 1);
        assert_eq!(summary.errors, vec!["Row 2: rejected".to_string()]);
    }

    #[tokio::test]
    async fn unavailable_sink_aborts_without_partial_summary() {
        let sink = MemorySink {
            down: true,
            ..MemorySink::default()
        };
        let result = run_batch("nsn,asset_code,designation\nN1,A1,D1", "ssr-1", &sink).await;

        assert!(matches!(result, Err(ImportError::SinkUnavailable(_))));
    }

    #[tokio::test]
    async fn empty_payload_fails_before_any_row() {
        let sink = MemorySink::default();
        let result = run_batch("  \n ", "ssr-1", &sink).await;

        assert!(matches!(result, Err(ImportError::Parse(ParseError::EmptyInput))));
        assert!(sink.records().is_empty());
    }

    #[tokio::test]
    async fn blank_line_fails_its_own_row_number() {
        let sink = MemorySink::default();
        let summary = run_batch(
            "nsn,asset_code,designation\nN1,A1,D1\n\nN3,A3,D3",
            "ssr-1",
            &sink,
        )
        .await
        .unwrap();

        assert_eq!(summary.assets_created, 2);
        assert_eq!(
            summary.errors,
            vec!["Row 3: Missing required fields (NSN, asset_code, designation)".to_string()]
        );
    }

    #[tokio::test]
    async fn validation_failures_never_reach_the_sink() {
        let sink = MemorySink::default();
        let summary = run_batch(
            "nsn,asset_code,designation\n,MISSING-NSN,D1",
            "ssr-1",
            &sink,
        )
        .await
        .unwrap();

        assert_eq!(summary.assets_created, 0);
        assert!(sink.records().is_empty());
    }
}

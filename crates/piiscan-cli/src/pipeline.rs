//! CSV batch pipeline
//!
//! Each input row carries an opaque record id and one JSON-encoded record.
//! Rows are streamed and classified one at a time; a row whose record cannot
//! be decoded is skipped and reported without stopping the run.

use crate::config::{InputConfig, ScanConfig};
use crate::error::{Result, ScanError};
use piiscan_pii::{Record, RecordClassifier};
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Header written to the output CSV
pub const OUTPUT_HEADER: [&str; 3] = ["record_id", "redacted_data_json", "is_pii"];

/// What happened to one input row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Written {
        record_id: String,
        is_pii: bool,
        masked_fields: usize,
    },
    Skipped {
        record_id: String,
        reason: String,
    },
}

/// Totals for a completed scan
///
/// Only skipped rows are kept individually, so memory does not grow with the
/// number of rows written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanSummary {
    pub total: usize,
    pub written: usize,
    pub flagged: usize,
    pub skipped: usize,
    pub skipped_rows: Vec<RowOutcome>,
}

impl ScanSummary {
    fn record(&mut self, outcome: RowOutcome) {
        self.total += 1;
        match &outcome {
            RowOutcome::Written { is_pii, .. } => {
                self.written += 1;
                if *is_pii {
                    self.flagged += 1;
                }
            }
            RowOutcome::Skipped { .. } => {
                self.skipped += 1;
                self.skipped_rows.push(outcome);
            }
        }
    }
}

/// Classify every row from `input` and write redacted rows to `output`
///
/// Rows are read and written one at a time.
pub fn scan_records<R: Read, W: Write>(
    input: R,
    output: W,
    columns: &InputConfig,
    classifier: &RecordClassifier,
) -> Result<ScanSummary> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(input);
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(OUTPUT_HEADER)?;

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        // Empty input file: header-only output
        writer.flush()?;
        return Ok(ScanSummary::default());
    }

    let id_index = column_index(&headers, &columns.record_id_column)?;
    let data_index = column_index(&headers, &columns.data_column)?;

    let mut summary = ScanSummary::default();
    let mut row = csv::ByteRecord::new();

    while reader.read_byte_record(&mut row)? {
        let raw_id = row.get(id_index).unwrap_or_default();
        let record_id = match std::str::from_utf8(raw_id) {
            Ok(id) => id.to_string(),
            Err(e) => {
                let lossy_id = String::from_utf8_lossy(raw_id).into_owned();
                summary.record(skip(lossy_id, format!("invalid UTF-8 in record id: {}", e)));
                continue;
            }
        };

        let Some(data) = row.get(data_index) else {
            summary.record(skip(record_id, format!("missing {} column", columns.data_column)));
            continue;
        };

        let record = match decode_record(data) {
            Ok(record) => record,
            Err(reason) => {
                summary.record(skip(record_id, reason));
                continue;
            }
        };

        let classification = classifier.classify_and_redact(&record);
        for finding in &classification.findings {
            debug!(
                "Record {}: masked {} ({}, {:?})",
                record_id, finding.field, finding.pii_type, finding.category
            );
        }

        let redacted_json = serde_json::to_string(&classification.redacted)?;
        writer.write_record([
            record_id.as_str(),
            redacted_json.as_str(),
            flag_text(classification.is_pii),
        ])?;

        summary.record(RowOutcome::Written {
            record_id,
            is_pii: classification.is_pii,
            masked_fields: classification.findings.len(),
        });
    }

    writer.flush()?;

    Ok(summary)
}

/// Stream `input_path` through the classifier into `output_path`
///
/// A missing input file is fatal; no output file is created in that case.
pub async fn process_csv(
    input_path: &Path,
    output_path: &Path,
    config: &ScanConfig,
) -> Result<ScanSummary> {
    let classifier = RecordClassifier::new(config.classifier.clone())?;
    let columns = config.input.clone();
    let input_path: PathBuf = input_path.to_path_buf();
    let output_path: PathBuf = output_path.to_path_buf();

    let summary = tokio::task::spawn_blocking(move || -> Result<ScanSummary> {
        let input = match File::open(&input_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ScanError::InputNotFound(input_path));
            }
            Err(e) => return Err(e.into()),
        };
        let output = File::create(&output_path)?;

        let summary = scan_records(
            BufReader::new(input),
            BufWriter::new(output),
            &columns,
            &classifier,
        )?;

        info!(
            "Scanned {} rows from {}: {} written ({} with PII), {} skipped",
            summary.total,
            input_path.display(),
            summary.written,
            summary.flagged,
            summary.skipped
        );

        Ok(summary)
    })
    .await??;

    Ok(summary)
}

fn column_index(headers: &csv::StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|header| header == name)
        .ok_or_else(|| ScanError::MissingColumn(name.to_string()))
}

fn decode_record(data: &[u8]) -> std::result::Result<Record, String> {
    let text = std::str::from_utf8(data).map_err(|e| format!("invalid UTF-8: {}", e))?;
    match serde_json::from_str::<Value>(text) {
        Ok(Value::Object(record)) => Ok(record),
        Ok(_) => Err("record is not a JSON object".to_string()),
        Err(e) => Err(format!("JSON decoding error: {}", e)),
    }
}

fn skip(record_id: String, reason: String) -> RowOutcome {
    warn!("Skipping record_id {} due to {}", record_id, reason);
    RowOutcome::Skipped { record_id, reason }
}

/// Flags are written capitalized, `True` or `False`
fn flag_text(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

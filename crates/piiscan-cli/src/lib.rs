//! piiscan batch pipeline
//!
//! Reads CSV rows carrying one JSON record each, classifies and redacts every
//! record with `piiscan-pii`, and writes the redacted rows back out:
//! - File and environment configuration
//! - CSV record source and sink
//! - Skip-and-continue handling for malformed rows

pub mod config;
pub mod error;
pub mod pipeline;

pub use config::{InputConfig, LoggingConfig, OutputConfig, ScanConfig};
pub use error::{Result, ScanError};
pub use pipeline::{RowOutcome, ScanSummary, process_csv, scan_records};

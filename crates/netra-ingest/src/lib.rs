//! Dataset ingestion for Netra Profiler.
//!
//! Loads a file into the in-memory columnar [`Frame`](netra_core::Frame),
//! dispatching on extension: CSV/TSV through the `csv` crate, NDJSON and
//! standard JSON arrays through `serde_json`. JSON records are flattened one
//! level: nested objects become `parent_field` columns and arrays become
//! `<col>_len` length columns.

pub mod delimited;
pub mod error;
pub mod infer;
pub mod json;

use std::path::Path;

use netra_core::Frame;

pub use error::{IngestError, Result};

/// Source format detected from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Csv,
    Tsv,
    Ndjson,
    Json,
}

impl FileFormat {
    /// Human-readable label for the dashboard.
    pub fn label(self) -> &'static str {
        match self {
            FileFormat::Csv => "CSV",
            FileFormat::Tsv => "TSV",
            FileFormat::Ndjson => "JSON (Newline)",
            FileFormat::Json => "JSON (Standard)",
        }
    }
}

/// Load a dataset file into a frame based on its extension.
pub fn scan_file(path: &Path) -> Result<(Frame, FileFormat)> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    let (frame, format) = match extension.as_str() {
        "csv" => (delimited::read_delimited(path, b',')?, FileFormat::Csv),
        "tsv" => (delimited::read_delimited(path, b'\t')?, FileFormat::Tsv),
        "ndjson" | "jsonl" => (json::read_ndjson(path)?, FileFormat::Ndjson),
        "json" => json::read_json(path)?,
        other => return Err(IngestError::UnsupportedFormat(other.to_string())),
    };

    tracing::debug!(
        event = "file_scanned",
        path = %path.display(),
        format = format.label(),
        rows = frame.row_count(),
        columns = frame.column_count(),
    );

    Ok((frame, format))
}

use std::path::Path;

use csv::ReaderBuilder;
use netra_core::{Column, Frame};

use crate::error::{IngestError, Result};
use crate::infer;

/// Read a delimited file (CSV or TSV) with a header row into a frame.
pub fn read_delimited(path: &Path, delimiter: u8) -> Result<Frame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(delimiter)
        .flexible(true)
        .from_path(path)?;

    let headers = reader
        .headers()?
        .iter()
        .map(|header| header.to_string())
        .collect::<Vec<_>>();

    if headers.is_empty() {
        return Err(IngestError::InvalidData(format!(
            "no header row in {}",
            path.display()
        )));
    }

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record?;
        for (idx, column) in cells.iter_mut().enumerate() {
            // Short records read as missing trailing cells.
            column.push(infer::normalize_cell(record.get(idx).unwrap_or_default()));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, raw)| Column::new(name, infer::build_column(raw)))
        .collect();

    Frame::new(columns).map_err(IngestError::from)
}

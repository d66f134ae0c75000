use std::collections::HashMap;
use std::fs;
use std::path::Path;

use netra_core::{Column, ColumnData, Frame, Value};
use serde_json::Value as JsonValue;

use crate::error::{IngestError, Result};
use crate::FileFormat;

/// Read a newline-delimited JSON file into a frame.
pub fn read_ndjson(path: &Path) -> Result<Frame> {
    let text = fs::read_to_string(path)?;
    frame_from_records(parse_ndjson(&text)?)
}

/// Read a `.json` file. A leading `[` means a standard JSON array of
/// objects; anything else is treated as newline-delimited records.
pub fn read_json(path: &Path) -> Result<(Frame, FileFormat)> {
    let text = fs::read_to_string(path)?;
    if text.trim_start().starts_with('[') {
        Ok((frame_from_records(parse_array(&text)?)?, FileFormat::Json))
    } else {
        Ok((frame_from_records(parse_ndjson(&text)?)?, FileFormat::Ndjson))
    }
}

fn parse_ndjson(text: &str) -> Result<Vec<serde_json::Map<String, JsonValue>>> {
    let mut records = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: JsonValue = serde_json::from_str(line)?;
        match value {
            JsonValue::Object(map) => records.push(map),
            other => {
                return Err(IngestError::InvalidData(format!(
                    "line {} is not a JSON object: {}",
                    line_no + 1,
                    truncate(&other.to_string())
                )));
            }
        }
    }
    Ok(records)
}

fn parse_array(text: &str) -> Result<Vec<serde_json::Map<String, JsonValue>>> {
    let value: JsonValue = serde_json::from_str(text)?;
    let items = match value {
        JsonValue::Array(items) => items,
        _ => {
            return Err(IngestError::InvalidData(
                "top-level JSON value is not an array".to_string(),
            ));
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (idx, item) in items.into_iter().enumerate() {
        match item {
            JsonValue::Object(map) => records.push(map),
            other => {
                return Err(IngestError::InvalidData(format!(
                    "array element {} is not a JSON object: {}",
                    idx,
                    truncate(&other.to_string())
                )));
            }
        }
    }
    Ok(records)
}

/// Assemble flattened records into typed columns. Columns appear in
/// first-seen order; rows missing a key read as null.
fn frame_from_records(records: Vec<serde_json::Map<String, JsonValue>>) -> Result<Frame> {
    let mut order: Vec<String> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut cells: Vec<Vec<Value>> = Vec::new();

    for (row, record) in records.iter().enumerate() {
        for (name, value) in flatten_record(record) {
            let column_idx = match index.get(&name) {
                Some(idx) => *idx,
                None => {
                    let idx = order.len();
                    order.push(name.clone());
                    index.insert(name, idx);
                    // Backfill rows seen before this column existed.
                    cells.push(vec![Value::Null; row]);
                    idx
                }
            };
            let column = &mut cells[column_idx];
            if column.len() == row {
                column.push(value);
            } else {
                // Duplicate flattened key within one record keeps the first value.
                tracing::debug!(event = "duplicate_json_key", column = %order[column_idx], row = row);
            }
        }

        for column in cells.iter_mut() {
            if column.len() == row {
                column.push(Value::Null);
            }
        }
    }

    let columns = order
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, unify(values)))
        .collect();

    Frame::new(columns).map_err(IngestError::from)
}

/// Flatten one level of nesting: objects spread into `parent_field` columns
/// and arrays collapse to a `<col>_len` length column.
fn flatten_record(record: &serde_json::Map<String, JsonValue>) -> Vec<(String, Value)> {
    let mut flat = Vec::with_capacity(record.len());
    for (key, value) in record {
        match value {
            JsonValue::Object(inner) => {
                for (sub_key, sub_value) in inner {
                    flat.push((format!("{key}_{sub_key}"), scalar_value(sub_value)));
                }
            }
            JsonValue::Array(items) => {
                flat.push((format!("{key}_len"), Value::Int(items.len() as i64)));
            }
            other => flat.push((key.clone(), scalar_value(other))),
        }
    }
    flat
}

fn scalar_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(*b),
        JsonValue::Number(number) => {
            if let Some(int) = number.as_i64() {
                Value::Int(int)
            } else {
                number.as_f64().map(Value::Float).unwrap_or(Value::Null)
            }
        }
        JsonValue::String(s) => Value::Str(s.clone()),
        // Deeper nesting is kept as its JSON text.
        other => Value::Str(other.to_string()),
    }
}

/// Pick the narrowest storage that fits every non-null cell.
fn unify(values: Vec<Value>) -> ColumnData {
    let mut has_int = false;
    let mut has_float = false;
    let mut has_bool = false;
    let mut has_str = false;

    for value in &values {
        match value {
            Value::Null => {}
            Value::Int(_) => has_int = true,
            Value::Float(_) => has_float = true,
            Value::Bool(_) => has_bool = true,
            Value::Str(_) => has_str = true,
        }
    }

    if has_str || (has_bool && (has_int || has_float)) {
        return ColumnData::Utf8(
            values
                .into_iter()
                .map(|value| match value {
                    Value::Null => None,
                    other => Some(other.to_string()),
                })
                .collect(),
        );
    }

    if has_float {
        return ColumnData::Float(values.into_iter().map(|value| value.as_f64()).collect());
    }

    if has_int {
        return ColumnData::Int(
            values
                .into_iter()
                .map(|value| match value {
                    Value::Int(int) => Some(int),
                    _ => None,
                })
                .collect(),
        );
    }

    if has_bool {
        return ColumnData::Bool(
            values
                .into_iter()
                .map(|value| match value {
                    Value::Bool(b) => Some(b),
                    _ => None,
                })
                .collect(),
        );
    }

    // All-null column.
    ColumnData::Utf8(values.into_iter().map(|_| None).collect())
}

fn truncate(text: &str) -> String {
    const MAX: usize = 60;
    if text.chars().count() > MAX {
        let head: String = text.chars().take(MAX).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

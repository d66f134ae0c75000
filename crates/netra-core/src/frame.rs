use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::value::Value;

/// Logical column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DType {
    Int,
    Float,
    Bool,
    Utf8,
}

impl DType {
    pub fn is_numeric(self) -> bool {
        matches!(self, DType::Int | DType::Float)
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::Int => "Int64",
            DType::Float => "Float64",
            DType::Bool => "Boolean",
            DType::Utf8 => "Utf8",
        };
        write!(f, "{name}")
    }
}

/// Typed column storage. Missing cells are `None`.
#[derive(Debug, Clone)]
pub enum ColumnData {
    Int(Vec<Option<i64>>),
    Float(Vec<Option<f64>>),
    Bool(Vec<Option<bool>>),
    Utf8(Vec<Option<String>>),
}

impl ColumnData {
    pub fn len(&self) -> usize {
        match self {
            ColumnData::Int(values) => values.len(),
            ColumnData::Float(values) => values.len(),
            ColumnData::Bool(values) => values.len(),
            ColumnData::Utf8(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dtype(&self) -> DType {
        match self {
            ColumnData::Int(_) => DType::Int,
            ColumnData::Float(_) => DType::Float,
            ColumnData::Bool(_) => DType::Bool,
            ColumnData::Utf8(_) => DType::Utf8,
        }
    }
}

/// A named column of a frame.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub data: ColumnData,
}

impl Column {
    pub fn new(name: impl Into<String>, data: ColumnData) -> Self {
        Self {
            name: name.into(),
            data,
        }
    }

    pub fn dtype(&self) -> DType {
        self.data.dtype()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn null_count(&self) -> u64 {
        let nulls = match &self.data {
            ColumnData::Int(values) => values.iter().filter(|v| v.is_none()).count(),
            ColumnData::Float(values) => values.iter().filter(|v| v.is_none()).count(),
            ColumnData::Bool(values) => values.iter().filter(|v| v.is_none()).count(),
            ColumnData::Utf8(values) => values.iter().filter(|v| v.is_none()).count(),
        };
        nulls as u64
    }

    /// Numeric view of the column, aligned with row order. `None` for
    /// non-numeric columns.
    pub fn as_f64(&self) -> Option<Vec<Option<f64>>> {
        match &self.data {
            ColumnData::Int(values) => Some(
                values
                    .iter()
                    .map(|value| value.map(|v| v as f64))
                    .collect(),
            ),
            ColumnData::Float(values) => Some(values.clone()),
            _ => None,
        }
    }

    /// Materialize a single cell.
    pub fn value_at(&self, index: usize) -> Value {
        match &self.data {
            ColumnData::Int(values) => values
                .get(index)
                .and_then(|v| *v)
                .map_or(Value::Null, Value::Int),
            ColumnData::Float(values) => values
                .get(index)
                .and_then(|v| *v)
                .map_or(Value::Null, Value::Float),
            ColumnData::Bool(values) => values
                .get(index)
                .and_then(|v| *v)
                .map_or(Value::Null, Value::Bool),
            ColumnData::Utf8(values) => values
                .get(index)
                .and_then(|v| v.clone())
                .map_or(Value::Null, Value::Str),
        }
    }
}

/// An in-memory columnar table. All columns share the same row count.
#[derive(Debug, Clone, Default)]
pub struct Frame {
    columns: Vec<Column>,
}

impl Frame {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.name.clone()) {
                return Err(CoreError::DuplicateColumn(column.name.clone()));
            }
        }

        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(CoreError::LengthMismatch {
                        column: column.name.clone(),
                        found: column.len(),
                        expected,
                    });
                }
            }
        }

        Ok(Self { columns })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> u64 {
        self.columns.first().map(|c| c.len() as u64).unwrap_or(0)
    }

    /// Compact dtype summary for display, e.g. `"2 Int64, 1 Utf8"`.
    pub fn dtype_summary(&self) -> String {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for column in &self.columns {
            *counts.entry(column.dtype().to_string()).or_default() += 1;
        }
        counts
            .into_iter()
            .map(|(dtype, count)| format!("{count} {dtype}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

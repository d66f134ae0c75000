//! Frequent-value counting.

use std::cmp::Ordering;
use std::collections::HashMap;

use netra_core::{Column, Value};

use crate::model::TopEntry;

/// Hashable stand-in for a cell value. Floats key on their bit pattern so a
/// column containing NaN still counts deterministically.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum ValueKey {
    Null,
    Bool(bool),
    Int(i64),
    Float(u64),
    Str(String),
}

impl ValueKey {
    fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => ValueKey::Null,
            Value::Bool(b) => ValueKey::Bool(*b),
            Value::Int(i) => ValueKey::Int(*i),
            Value::Float(f) => ValueKey::Float(f.to_bits()),
            Value::Str(s) => ValueKey::Str(s.clone()),
        }
    }

    fn into_value(self) -> Value {
        match self {
            ValueKey::Null => Value::Null,
            ValueKey::Bool(b) => Value::Bool(b),
            ValueKey::Int(i) => Value::Int(i),
            ValueKey::Float(bits) => Value::Float(f64::from_bits(bits)),
            ValueKey::Str(s) => Value::Str(s),
        }
    }
}

/// Count the `k` most frequent values in a column, nulls included.
///
/// Ordering is count descending, then value ascending with nulls last, so
/// repeated runs over the same data produce identical output.
pub fn top_k(column: &Column, k: usize) -> Vec<TopEntry> {
    if k == 0 || column.is_empty() {
        return Vec::new();
    }

    let mut counts: HashMap<ValueKey, u64> = HashMap::new();
    for index in 0..column.len() {
        *counts
            .entry(ValueKey::from_value(&column.value_at(index)))
            .or_default() += 1;
    }

    let mut entries: Vec<(ValueKey, u64)> = counts.into_iter().collect();
    entries.sort_by(|(a_key, a_count), (b_key, b_count)| {
        b_count
            .cmp(a_count)
            .then_with(|| compare_keys(a_key, b_key))
    });

    entries
        .into_iter()
        .take(k)
        .map(|(key, count)| TopEntry {
            value: key.into_value(),
            count,
        })
        .collect()
}

/// Count distinct non-null values exactly.
pub fn n_unique(column: &Column) -> u64 {
    let mut seen: std::collections::HashSet<ValueKey> = std::collections::HashSet::new();
    for index in 0..column.len() {
        let value = column.value_at(index);
        if !value.is_null() {
            seen.insert(ValueKey::from_value(&value));
        }
    }
    seen.len() as u64
}

fn compare_keys(a: &ValueKey, b: &ValueKey) -> Ordering {
    match (a, b) {
        (ValueKey::Null, ValueKey::Null) => Ordering::Equal,
        (ValueKey::Null, _) => Ordering::Greater,
        (_, ValueKey::Null) => Ordering::Less,
        (ValueKey::Bool(a), ValueKey::Bool(b)) => a.cmp(b),
        (ValueKey::Int(a), ValueKey::Int(b)) => a.cmp(b),
        (ValueKey::Float(a), ValueKey::Float(b)) => {
            f64::from_bits(*a).total_cmp(&f64::from_bits(*b))
        }
        (ValueKey::Str(a), ValueKey::Str(b)) => a.cmp(b),
        // Columns are homogeneous; a mismatch falls back to a stable order.
        _ => Ordering::Equal,
    }
}

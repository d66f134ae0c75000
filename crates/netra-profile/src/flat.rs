//! Flat-map serialization of a profile.
//!
//! The wire contract is a single JSON object keyed by `{column}_{metric}`:
//! `table_row_count`, `<col>_null_count`, `<col>_n_unique`, the numeric and
//! string statistic keys, `<col>_histogram`, `<col>_top_k`, plus the
//! `correlations` and `_meta` objects. Consumers index it directly, so key
//! names are part of the public contract.

use serde_json::{json, Map, Value as JsonValue};

use crate::model::{ColumnProfile, ColumnStats, Correlations, Profile};

/// Serialize a profile into the flat JSON map.
pub fn to_flat_json(profile: &Profile) -> Map<String, JsonValue> {
    let mut map = Map::new();
    map.insert(
        "table_row_count".to_string(),
        JsonValue::from(profile.row_count),
    );

    for column in &profile.columns {
        insert_column(&mut map, column);
    }

    if !profile.correlations.is_empty() {
        map.insert(
            "correlations".to_string(),
            correlations_json(&profile.correlations),
        );
    }

    map.insert(
        "_meta".to_string(),
        serde_json::to_value(&profile.meta).unwrap_or(JsonValue::Null),
    );

    map
}

fn insert_column(map: &mut Map<String, JsonValue>, column: &ColumnProfile) {
    let name = &column.name;
    map.insert(
        format!("{name}_null_count"),
        JsonValue::from(column.null_count),
    );
    map.insert(
        format!("{name}_n_unique"),
        JsonValue::from(column.n_unique),
    );

    match &column.stats {
        ColumnStats::Numeric(stats) => {
            map.insert(format!("{name}_min"), opt_value(&stats.min));
            map.insert(format!("{name}_max"), opt_value(&stats.max));
            map.insert(format!("{name}_mean"), opt_f64(stats.mean));
            map.insert(format!("{name}_std"), opt_f64(stats.std));
            map.insert(format!("{name}_skew"), opt_f64(stats.skew));
            map.insert(format!("{name}_kurtosis"), opt_f64(stats.kurtosis));
            map.insert(format!("{name}_p25"), opt_f64(stats.p25));
            map.insert(format!("{name}_p50"), opt_f64(stats.p50));
            map.insert(format!("{name}_p75"), opt_f64(stats.p75));

            if let Some(histogram) = &stats.histogram {
                map.insert(
                    format!("{name}_histogram"),
                    serde_json::to_value(histogram).unwrap_or(JsonValue::Null),
                );
            }
        }
        ColumnStats::Text(stats) => {
            map.insert(format!("{name}_min"), opt_str(&stats.min));
            map.insert(format!("{name}_max"), opt_str(&stats.max));
            map.insert(
                format!("{name}_min_length"),
                stats.min_length.map(JsonValue::from).unwrap_or(JsonValue::Null),
            );
            map.insert(
                format!("{name}_max_length"),
                stats.max_length.map(JsonValue::from).unwrap_or(JsonValue::Null),
            );
            map.insert(format!("{name}_mean_length"), opt_f64(stats.mean_length));
        }
        ColumnStats::Categorical => {}
    }

    if !column.top_k.is_empty() {
        map.insert(
            format!("{name}_top_k"),
            serde_json::to_value(&column.top_k).unwrap_or(JsonValue::Null),
        );
    }
}

fn correlations_json(correlations: &Correlations) -> JsonValue {
    json!({
        "pearson": matrix_rows(&correlations.columns, &correlations.pearson),
        "spearman": matrix_rows(&correlations.columns, &correlations.spearman),
    })
}

/// Render one matrix as a list of row objects:
/// `{"column": "age", "age": 1.0, "salary": 0.99}`.
fn matrix_rows(columns: &[String], matrix: &[Vec<Option<f64>>]) -> JsonValue {
    let rows: Vec<JsonValue> = columns
        .iter()
        .zip(matrix)
        .map(|(name, row)| {
            let mut object = Map::new();
            object.insert("column".to_string(), JsonValue::from(name.as_str()));
            for (other, value) in columns.iter().zip(row) {
                object.insert(other.clone(), opt_f64(*value));
            }
            JsonValue::Object(object)
        })
        .collect();
    JsonValue::Array(rows)
}

fn opt_f64(value: Option<f64>) -> JsonValue {
    value
        .and_then(serde_json::Number::from_f64)
        .map(JsonValue::Number)
        .unwrap_or(JsonValue::Null)
}

fn opt_str(value: &Option<String>) -> JsonValue {
    value
        .as_ref()
        .map(|v| JsonValue::from(v.as_str()))
        .unwrap_or(JsonValue::Null)
}

fn opt_value(value: &Option<netra_core::Value>) -> JsonValue {
    value.as_ref().map(|v| v.to_json()).unwrap_or(JsonValue::Null)
}

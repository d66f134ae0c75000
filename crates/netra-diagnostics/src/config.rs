use serde::{Deserialize, Serialize};

/// Centralized thresholds for the diagnostic rules.
///
/// Every field has a serde default so a partial `netra.toml` override only
/// needs to name the thresholds it changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticConfig {
    /// Null fraction above which a column is considered empty.
    pub null_critical_threshold: f64,
    /// Null fraction above which imputation becomes questionable.
    pub null_warning_threshold: f64,
    /// Absolute skewness beyond which a distribution is flagged.
    pub skew_threshold: f64,
    /// Zero fraction beyond which a column looks zero-inflated.
    pub zero_inflated_threshold: f64,
    /// Distinct-count ceiling for string columns.
    pub high_cardinality_threshold: u64,
    /// Absolute correlation beyond which two columns are redundant.
    pub high_correlation_threshold: f64,
    /// Distinctness ratio above which a column looks like an ID.
    pub id_uniqueness_threshold: f64,
    /// Minimum rows before the ID heuristic is trusted.
    pub min_rows_for_id_check: u64,
    /// How many frequent values the numeric-looking-text heuristic samples.
    pub possible_numeric_check_count: usize,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            null_critical_threshold: 0.95,
            null_warning_threshold: 0.50,
            skew_threshold: 2.0,
            zero_inflated_threshold: 0.10,
            high_cardinality_threshold: 10_000,
            high_correlation_threshold: 0.99,
            id_uniqueness_threshold: 0.99,
            min_rows_for_id_check: 100,
            possible_numeric_check_count: 5,
        }
    }
}

use netra_profile::{ColumnProfile, ColumnStats, Correlations, Profile};

use crate::config::DiagnosticConfig;
use crate::model::{Alert, AlertLevel};

/// Analyzes a profile and generates alerts.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticEngine {
    config: DiagnosticConfig,
}

impl DiagnosticEngine {
    pub fn new(config: DiagnosticConfig) -> Self {
        Self { config }
    }

    /// Run every diagnostic check. An empty dataset yields no alerts.
    pub fn run(&self, profile: &Profile) -> Vec<Alert> {
        if profile.row_count == 0 {
            return Vec::new();
        }

        let mut alerts = Vec::new();
        for column in &profile.columns {
            self.check_nulls(column, profile.row_count, &mut alerts);
            self.check_constant(column, profile.row_count, &mut alerts);
            self.check_cardinality(column, profile.row_count, &mut alerts);
            self.check_skew(column, &mut alerts);
            self.check_zeros(column, profile.row_count, &mut alerts);
            self.check_possible_numeric(column, &mut alerts);
        }
        self.check_correlations(&profile.correlations, &mut alerts);

        alerts
    }

    /// EMPTY_COLUMN above the critical null threshold, HIGH_NULLS above the
    /// warning threshold. Both are critical findings: imputation past 50%
    /// missing is already questionable.
    fn check_nulls(&self, column: &ColumnProfile, rows: u64, alerts: &mut Vec<Alert>) {
        let null_fraction = column.null_count as f64 / rows as f64;

        if null_fraction > self.config.null_critical_threshold {
            alerts.push(Alert {
                column: column.name.clone(),
                alert_type: "EMPTY_COLUMN".to_string(),
                level: AlertLevel::Critical,
                message: format!(
                    "Column is {:.1}% empty. It likely contains no useful information.",
                    null_fraction * 100.0
                ),
                value: Some(null_fraction),
            });
        } else if null_fraction > self.config.null_warning_threshold {
            alerts.push(Alert {
                column: column.name.clone(),
                alert_type: "HIGH_NULLS".to_string(),
                level: AlertLevel::Critical,
                message: format!(
                    "Column is {:.1}% empty. Imputation may be difficult.",
                    null_fraction * 100.0
                ),
                value: Some(null_fraction),
            });
        }
    }

    /// CONSTANT for single-valued columns, ALL_DISTINCT for ID-like ones.
    /// The ID heuristic needs a minimum row count before it is trusted.
    fn check_constant(&self, column: &ColumnProfile, rows: u64, alerts: &mut Vec<Alert>) {
        if column.n_unique == 1 {
            alerts.push(Alert {
                column: column.name.clone(),
                alert_type: "CONSTANT".to_string(),
                level: AlertLevel::Critical,
                message: "Column has only 1 unique value. It adds no variance to the dataset."
                    .to_string(),
                value: Some(1.0),
            });
        }

        if column.n_unique > 0
            && rows > self.config.min_rows_for_id_check
            && column.n_unique as f64 > rows as f64 * self.config.id_uniqueness_threshold
        {
            let display_ratio = (column.n_unique as f64 / rows as f64).min(1.0);
            alerts.push(Alert {
                column: column.name.clone(),
                alert_type: "ALL_DISTINCT".to_string(),
                level: AlertLevel::Info,
                message: format!(
                    "Column is {:.1}% distinct. Likely a Primary Key or ID.",
                    display_ratio * 100.0
                ),
                value: Some(column.n_unique as f64),
            });
        }
    }

    /// HIGH_CARDINALITY for string columns only; numeric columns are
    /// expected to be high-cardinality.
    fn check_cardinality(&self, column: &ColumnProfile, rows: u64, alerts: &mut Vec<Alert>) {
        if !matches!(column.stats, ColumnStats::Text(_)) {
            return;
        }

        if column.n_unique > self.config.high_cardinality_threshold && column.n_unique < rows {
            alerts.push(Alert {
                column: column.name.clone(),
                alert_type: "HIGH_CARDINALITY".to_string(),
                level: AlertLevel::Warning,
                message: format!(
                    "High cardinality ({} unique values). Avoid One-Hot Encoding.",
                    column.n_unique
                ),
                value: Some(column.n_unique as f64),
            });
        }
    }

    fn check_skew(&self, column: &ColumnProfile, alerts: &mut Vec<Alert>) {
        let Some(skew) = column.numeric().and_then(|stats| stats.skew) else {
            return;
        };

        if skew.abs() > self.config.skew_threshold {
            alerts.push(Alert {
                column: column.name.clone(),
                alert_type: "SKEWED".to_string(),
                level: AlertLevel::Warning,
                message: format!(
                    "Distribution is highly skewed ({skew:.2}). Linear models may require transformation."
                ),
                value: Some(skew),
            });
        }
    }

    /// ZERO_INFLATED when the literal zero dominates. Top-k already carries
    /// the count, so this is a lookup rather than a data scan.
    fn check_zeros(&self, column: &ColumnProfile, rows: u64, alerts: &mut Vec<Alert>) {
        let Some(entry) = column.top_k.iter().find(|entry| entry.value.is_zero()) else {
            return;
        };

        let zero_fraction = entry.count as f64 / rows as f64;
        if zero_fraction > self.config.zero_inflated_threshold {
            alerts.push(Alert {
                column: column.name.clone(),
                alert_type: "ZERO_INFLATED".to_string(),
                level: AlertLevel::Warning,
                message: format!(
                    "Column is {:.1}% zeros. Check if '0' represents missing data.",
                    zero_fraction * 100.0
                ),
                value: Some(zero_fraction),
            });
        }
    }

    /// POSSIBLE_NUMERIC when the most frequent string values all parse as
    /// numbers. Sampling top-k keeps this O(k) instead of a full scan, and a
    /// single non-numeric sample vetoes the recommendation.
    fn check_possible_numeric(&self, column: &ColumnProfile, alerts: &mut Vec<Alert>) {
        if !matches!(column.stats, ColumnStats::Text(_)) {
            return;
        }

        let samples: Vec<&netra_core::Value> = column
            .top_k
            .iter()
            .take(self.config.possible_numeric_check_count)
            .map(|entry| &entry.value)
            .filter(|value| !value.is_null())
            .collect();

        if samples.is_empty() {
            return;
        }

        let all_numeric = samples.iter().all(|value| match value {
            netra_core::Value::Str(text) => text.parse::<f64>().is_ok(),
            _ => false,
        });

        if all_numeric {
            alerts.push(Alert {
                column: column.name.clone(),
                alert_type: "POSSIBLE_NUMERIC".to_string(),
                level: AlertLevel::Info,
                message: "Top values look like numbers. Consider casting to Integer/Float."
                    .to_string(),
                value: None,
            });
        }
    }

    /// HIGH_CORRELATION once per column pair per method. Iterating the upper
    /// triangle keeps each pair canonical.
    fn check_correlations(&self, correlations: &Correlations, alerts: &mut Vec<Alert>) {
        let methods = [
            ("pearson", &correlations.pearson),
            ("spearman", &correlations.spearman),
        ];

        for (method, matrix) in methods {
            for i in 0..correlations.columns.len() {
                for j in (i + 1)..correlations.columns.len() {
                    let Some(value) = matrix[i][j] else {
                        continue;
                    };
                    if value.abs() > self.config.high_correlation_threshold {
                        alerts.push(Alert {
                            column: format!(
                                "{} <-> {}",
                                correlations.columns[i], correlations.columns[j]
                            ),
                            alert_type: "HIGH_CORRELATION".to_string(),
                            level: AlertLevel::Warning,
                            message: format!(
                                "Columns are highly correlated ({value:.4}) via {method}. They contain redundant information."
                            ),
                            value: Some(value),
                        });
                    }
                }
            }
        }
    }
}

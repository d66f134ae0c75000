use std::time::Instant;

use netra_core::{Column, ColumnData, Frame, Value, PROFILE_VERSION};

use crate::correlation;
use crate::error::{ProfileError, Result};
use crate::histogram;
use crate::model::{
    ColumnProfile, ColumnStats, Correlations, NumericStats, Profile, ProfileMeta, ProfileOptions,
    TextStats,
};
use crate::stats;
use crate::topk;

/// Profile frames with a fixed set of options.
///
/// Execution is staged: the scalar pass must succeed, while the histogram
/// and top-k passes degrade into `_meta.warnings` entries instead of
/// failing the whole report.
#[derive(Debug, Clone)]
pub struct ProfileEngine {
    options: ProfileOptions,
}

impl ProfileEngine {
    pub fn new(options: ProfileOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, frame: &Frame) -> Result<Profile> {
        if self.options.bins == 0 {
            return Err(ProfileError::InvalidOptions(
                "histogram bin count must be greater than zero".to_string(),
            ));
        }

        let start = Instant::now();
        let mut warnings: Vec<String> = Vec::new();

        tracing::debug!(
            event = "scalar_pass_started",
            rows = frame.row_count(),
            columns = frame.column_count(),
        );
        let mut columns: Vec<ColumnProfile> =
            frame.columns().iter().map(scalar_profile).collect();

        tracing::debug!(event = "histogram_pass_started", bins = self.options.bins);
        for (column, profile) in frame.columns().iter().zip(columns.iter_mut()) {
            if let ColumnStats::Numeric(numeric) = &mut profile.stats {
                let (finite, dropped) = finite_values(column);
                if dropped > 0 {
                    warnings.push(format!(
                        "Histogram for '{}' excluded {} non-finite value(s).",
                        column.name, dropped
                    ));
                }
                numeric.histogram = histogram::build(&finite, self.options.bins);
            }
        }

        tracing::debug!(event = "top_k_pass_started", k = self.options.top_k);
        for (column, profile) in frame.columns().iter().zip(columns.iter_mut()) {
            profile.top_k = topk::top_k(column, self.options.top_k);
        }

        let correlations = correlation_matrices(frame);

        let meta = ProfileMeta {
            engine_time: start.elapsed().as_secs_f64(),
            warnings,
            correlation_method: "exact".to_string(),
            profile_version: PROFILE_VERSION.to_string(),
        };

        tracing::debug!(
            event = "profile_finished",
            engine_time = meta.engine_time,
            warnings = meta.warnings.len(),
        );

        Ok(Profile {
            row_count: frame.row_count(),
            columns,
            correlations,
            meta,
        })
    }
}

fn scalar_profile(column: &Column) -> ColumnProfile {
    let stats = match &column.data {
        ColumnData::Int(values) => {
            let present: Vec<i64> = values.iter().flatten().copied().collect();
            let floats: Vec<f64> = present.iter().map(|v| *v as f64).collect();
            let mut numeric = numeric_stats(&floats);
            numeric.min = present.iter().min().copied().map(Value::Int);
            numeric.max = present.iter().max().copied().map(Value::Int);
            ColumnStats::Numeric(numeric)
        }
        ColumnData::Float(_) => {
            let (finite, _) = finite_values(column);
            let mut numeric = numeric_stats(&finite);
            numeric.min = finite
                .iter()
                .cloned()
                .reduce(f64::min)
                .map(Value::Float);
            numeric.max = finite
                .iter()
                .cloned()
                .reduce(f64::max)
                .map(Value::Float);
            ColumnStats::Numeric(numeric)
        }
        ColumnData::Bool(_) => ColumnStats::Categorical,
        ColumnData::Utf8(values) => ColumnStats::Text(text_stats(values)),
    };

    ColumnProfile {
        name: column.name.clone(),
        dtype: column.dtype(),
        null_count: column.null_count(),
        n_unique: topk::n_unique(column),
        stats,
        top_k: Vec::new(),
    }
}

fn numeric_stats(values: &[f64]) -> NumericStats {
    let mut numeric = NumericStats::default();

    if let Some(summary) = stats::describe(values) {
        numeric.mean = Some(summary.mean);
        numeric.std = summary.std;
        numeric.skew = summary.skew;
        numeric.kurtosis = summary.kurtosis;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    numeric.p25 = stats::quantile(&sorted, 0.25);
    numeric.p50 = stats::quantile(&sorted, 0.50);
    numeric.p75 = stats::quantile(&sorted, 0.75);

    numeric
}

fn text_stats(values: &[Option<String>]) -> TextStats {
    let mut text = TextStats::default();

    let mut length_sum = 0u64;
    let mut length_count = 0u64;
    for value in values.iter().flatten() {
        let length = value.chars().count() as u64;
        length_sum += length;
        length_count += 1;

        text.min_length = Some(text.min_length.map_or(length, |m| m.min(length)));
        text.max_length = Some(text.max_length.map_or(length, |m| m.max(length)));

        match &text.min {
            Some(current) if current.as_str() <= value.as_str() => {}
            _ => text.min = Some(value.clone()),
        }
        match &text.max {
            Some(current) if current.as_str() >= value.as_str() => {}
            _ => text.max = Some(value.clone()),
        }
    }

    if length_count > 0 {
        text.mean_length = Some(length_sum as f64 / length_count as f64);
    }

    text
}

/// Present, finite numeric values plus the count of dropped non-finite ones.
fn finite_values(column: &Column) -> (Vec<f64>, usize) {
    let Some(view) = column.as_f64() else {
        return (Vec::new(), 0);
    };

    let mut finite = Vec::with_capacity(view.len());
    let mut dropped = 0;
    for value in view.into_iter().flatten() {
        if value.is_finite() {
            finite.push(value);
        } else {
            dropped += 1;
        }
    }
    (finite, dropped)
}

fn correlation_matrices(frame: &Frame) -> Correlations {
    let numeric: Vec<(&str, Vec<Option<f64>>)> = frame
        .columns()
        .iter()
        .filter_map(|column| column.as_f64().map(|view| (column.name.as_str(), view)))
        .collect();

    let n = numeric.len();
    let mut pearson = vec![vec![None; n]; n];
    let mut spearman = vec![vec![None; n]; n];

    for i in 0..n {
        pearson[i][i] = Some(1.0);
        spearman[i][i] = Some(1.0);
        for j in (i + 1)..n {
            let p = correlation::pearson(&numeric[i].1, &numeric[j].1);
            pearson[i][j] = p;
            pearson[j][i] = p;

            let s = correlation::spearman(&numeric[i].1, &numeric[j].1);
            spearman[i][j] = s;
            spearman[j][i] = s;
        }
    }

    Correlations {
        columns: numeric.into_iter().map(|(name, _)| name.to_string()).collect(),
        pearson,
        spearman,
    }
}

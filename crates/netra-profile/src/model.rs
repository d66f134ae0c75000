use serde::Serialize;

use netra_core::{DType, Value};

/// Knobs for a profiling run.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileOptions {
    /// Number of histogram bins for numeric columns.
    pub bins: usize,
    /// Number of frequent values to keep per column.
    pub top_k: usize,
}

impl Default for ProfileOptions {
    fn default() -> Self {
        Self { bins: 20, top_k: 10 }
    }
}

/// One histogram bin. `category` renders the half-open range `(lo, hi]` and
/// `breakpoint` is the upper edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramBin {
    pub breakpoint: f64,
    pub category: String,
    pub count: u64,
}

/// One frequent-value entry. Nulls participate with `value: null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopEntry {
    pub value: Value,
    pub count: u64,
}

/// Statistics for integer and float columns.
///
/// `std` is the sample standard deviation (ddof = 1), `skew` and `kurtosis`
/// are population moments with `kurtosis` reported as excess, and quantiles
/// use linear interpolation at `q * (n - 1)`. All are `None` when undefined
/// (empty column, or zero variance for the shape moments).
#[derive(Debug, Clone, Default)]
pub struct NumericStats {
    pub min: Option<Value>,
    pub max: Option<Value>,
    pub mean: Option<f64>,
    pub std: Option<f64>,
    pub skew: Option<f64>,
    pub kurtosis: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub histogram: Option<Vec<HistogramBin>>,
}

/// Statistics for string columns. `min`/`max` are lexicographic and lengths
/// count characters.
#[derive(Debug, Clone, Default)]
pub struct TextStats {
    pub min: Option<String>,
    pub max: Option<String>,
    pub min_length: Option<u64>,
    pub max_length: Option<u64>,
    pub mean_length: Option<f64>,
}

/// Type-specific portion of a column profile. Booleans carry only the
/// universal statistics.
#[derive(Debug, Clone)]
pub enum ColumnStats {
    Numeric(NumericStats),
    Text(TextStats),
    Categorical,
}

/// Full profile of a single column.
#[derive(Debug, Clone)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: DType,
    pub null_count: u64,
    pub n_unique: u64,
    pub stats: ColumnStats,
    pub top_k: Vec<TopEntry>,
}

impl ColumnProfile {
    pub fn is_numeric(&self) -> bool {
        matches!(self.stats, ColumnStats::Numeric(_))
    }

    pub fn numeric(&self) -> Option<&NumericStats> {
        match &self.stats {
            ColumnStats::Numeric(stats) => Some(stats),
            _ => None,
        }
    }

    pub fn text(&self) -> Option<&TextStats> {
        match &self.stats {
            ColumnStats::Text(stats) => Some(stats),
            _ => None,
        }
    }
}

/// Symmetric correlation matrices over the numeric columns. `matrix[i][j]`
/// pairs `columns[i]` with `columns[j]`; the diagonal is fixed at 1.0 and
/// undefined coefficients (constant columns, fewer than two complete pairs)
/// are `None`.
#[derive(Debug, Clone, Default)]
pub struct Correlations {
    pub columns: Vec<String>,
    pub pearson: Vec<Vec<Option<f64>>>,
    pub spearman: Vec<Vec<Option<f64>>>,
}

impl Correlations {
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// Execution metadata carried under `_meta` in the flat map.
#[derive(Debug, Clone, Serialize)]
pub struct ProfileMeta {
    /// Wall-clock engine time in seconds.
    pub engine_time: f64,
    /// Non-fatal degradations from the histogram and top-k passes.
    pub warnings: Vec<String>,
    pub correlation_method: String,
    pub profile_version: String,
}

/// The complete result of a profiling run.
#[derive(Debug, Clone)]
pub struct Profile {
    pub row_count: u64,
    pub columns: Vec<ColumnProfile>,
    pub correlations: Correlations,
    pub meta: ProfileMeta,
}

impl Profile {
    pub fn column(&self, name: &str) -> Option<&ColumnProfile> {
        self.columns.iter().find(|column| column.name == name)
    }
}

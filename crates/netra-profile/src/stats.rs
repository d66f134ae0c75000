//! Moment and quantile math for numeric columns.

/// Central-moment summary of a finite sample.
#[derive(Debug, Clone, Copy)]
pub struct MomentSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation, ddof = 1. `None` for a single observation.
    pub std: Option<f64>,
    /// Population (biased) Fisher-Pearson skewness. `None` at zero variance.
    pub skew: Option<f64>,
    /// Population excess kurtosis. `None` at zero variance.
    pub kurtosis: Option<f64>,
}

/// Two-pass moment computation. Returns `None` for an empty sample.
pub fn describe(values: &[f64]) -> Option<MomentSummary> {
    let n = values.len();
    if n == 0 {
        return None;
    }

    let mean = values.iter().sum::<f64>() / n as f64;

    let mut m2 = 0.0;
    let mut m3 = 0.0;
    let mut m4 = 0.0;
    for value in values {
        let dev = value - mean;
        let dev2 = dev * dev;
        m2 += dev2;
        m3 += dev2 * dev;
        m4 += dev2 * dev2;
    }

    let std = if n > 1 {
        Some((m2 / (n - 1) as f64).sqrt())
    } else {
        None
    };

    let var_p = m2 / n as f64;
    let (skew, kurtosis) = if var_p > 0.0 {
        (
            Some((m3 / n as f64) / var_p.powf(1.5)),
            Some((m4 / n as f64) / (var_p * var_p) - 3.0),
        )
    } else {
        (None, None)
    };

    Some(MomentSummary {
        count: n,
        mean,
        std,
        skew,
        kurtosis,
    })
}

/// Linear-interpolation quantile over a sorted slice. `q` in `[0, 1]`.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }

    let position = q * (sorted.len() - 1) as f64;
    let low = position.floor() as usize;
    let high = position.ceil() as usize;
    if low == high {
        return Some(sorted[low]);
    }

    let fraction = position - low as f64;
    Some(sorted[low] + fraction * (sorted[high] - sorted[low]))
}

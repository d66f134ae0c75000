//! Uniform-width histogram construction.

use crate::model::HistogramBin;

/// Bin finite values into `bins` uniform buckets over `[min, max]`.
///
/// Returns `None` for an empty sample or a zero bin count. A constant sample
/// collapses into a single bin holding everything. The first bin is closed on
/// the left, `[min, hi]`, since it counts values equal to `min`; every other
/// bin renders the half-open `(lo, hi]`.
pub fn build(values: &[f64], bins: usize) -> Option<Vec<HistogramBin>> {
    if values.is_empty() || bins == 0 {
        return None;
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return Some(vec![HistogramBin {
            breakpoint: max,
            category: format!("[{min}, {max}]"),
            count: values.len() as u64,
        }]);
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for value in values {
        // Right-closed bins: a value on a boundary belongs to the bin below,
        // and the minimum falls into the first bin.
        let position = (value - min) / width;
        let index = if position <= 0.0 {
            0
        } else {
            (position.ceil() as usize - 1).min(bins - 1)
        };
        counts[index] += 1;
    }

    let mut result = Vec::with_capacity(bins);
    for (index, count) in counts.into_iter().enumerate() {
        let lo = min + width * index as f64;
        let hi = if index + 1 == bins {
            max
        } else {
            min + width * (index + 1) as f64
        };
        let category = if index == 0 {
            format!("[{lo}, {hi}]")
        } else {
            format!("({lo}, {hi}]")
        };
        result.push(HistogramBin {
            breakpoint: hi,
            category,
            count,
        });
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_cover_every_value() {
        let values = [1.0, 2.0, 3.0, 4.0, 10.0];
        let bins = build(&values, 3).expect("histogram");
        assert_eq!(bins.len(), 3);
        assert_eq!(bins.iter().map(|b| b.count).sum::<u64>(), 5);
        // Max lands in the last bin, not one past it.
        assert_eq!(bins.last().expect("last bin").breakpoint, 10.0);
    }

    #[test]
    fn first_bin_label_admits_the_minimum() {
        let bins = build(&[0.0, 5.0, 10.0], 2).expect("histogram");
        // The minimum lands in the first bin, so its label is closed-left.
        // The minimum and the shared boundary both land in the first bin.
        assert_eq!(bins[0].category, "[0, 5]");
        assert_eq!(bins[0].count, 2);
        assert_eq!(bins[1].category, "(5, 10]");
        assert_eq!(bins[1].count, 1);
    }

    #[test]
    fn constant_sample_collapses_to_one_bin() {
        let bins = build(&[7.0, 7.0, 7.0], 20).expect("histogram");
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 3);
        assert_eq!(bins[0].category, "[7, 7]");
    }

    #[test]
    fn empty_sample_has_no_histogram() {
        assert!(build(&[], 20).is_none());
        assert!(build(&[1.0], 0).is_none());
    }
}

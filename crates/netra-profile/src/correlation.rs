//! Pearson and Spearman correlation over numeric column pairs.
//!
//! Both methods use pairwise-complete observations: a row contributes to a
//! pair only when both cells are present and finite.

/// Pearson product-moment coefficient. `None` with fewer than two complete
/// pairs or when either side has zero variance.
pub fn pearson(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs = complete_pairs(xs, ys);
    pearson_dense(&pairs)
}

/// Spearman rank coefficient: Pearson over average-ranked values.
pub fn spearman(xs: &[Option<f64>], ys: &[Option<f64>]) -> Option<f64> {
    let pairs = complete_pairs(xs, ys);
    if pairs.len() < 2 {
        return None;
    }

    let rank_x = average_ranks(pairs.iter().map(|(x, _)| *x).collect::<Vec<_>>());
    let rank_y = average_ranks(pairs.iter().map(|(_, y)| *y).collect::<Vec<_>>());
    let ranked: Vec<(f64, f64)> = rank_x.into_iter().zip(rank_y).collect();
    pearson_dense(&ranked)
}

fn complete_pairs(xs: &[Option<f64>], ys: &[Option<f64>]) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys)
        .filter_map(|(x, y)| match (x, y) {
            (Some(x), Some(y)) if x.is_finite() && y.is_finite() => Some((*x, *y)),
            _ => None,
        })
        .collect()
}

fn pearson_dense(pairs: &[(f64, f64)]) -> Option<f64> {
    let n = pairs.len();
    if n < 2 {
        return None;
    }

    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n as f64;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n as f64;

    let mut covariance = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (x, y) in pairs {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denominator = (var_x * var_y).sqrt();
    if denominator == 0.0 {
        return None;
    }

    Some((covariance / denominator).clamp(-1.0, 1.0))
}

/// 1-based ranks with ties assigned their group average.
fn average_ranks(values: Vec<f64>) -> Vec<f64> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|a, b| values[*a].total_cmp(&values[*b]));

    let mut ranks = vec![0.0; values.len()];
    let mut start = 0;
    while start < order.len() {
        let mut end = start;
        while end + 1 < order.len() && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        // Ranks are 1-based; tied group members share the average rank.
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for position in start..=end {
            ranks[order[position]] = rank;
        }
        start = end + 1;
    }

    ranks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(values: &[f64]) -> Vec<Option<f64>> {
        values.iter().map(|v| Some(*v)).collect()
    }

    #[test]
    fn perfect_linear_relation_is_one() {
        let xs = some(&[1.0, 2.0, 3.0, 4.0]);
        let ys = some(&[2.0, 4.0, 6.0, 8.0]);
        assert!((pearson(&xs, &ys).expect("pearson") - 1.0).abs() < 1e-12);
        assert!((spearman(&xs, &ys).expect("spearman") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn inverse_relation_is_negative_one() {
        let xs = some(&[1.0, 2.0, 3.0]);
        let ys = some(&[9.0, 6.0, 3.0]);
        assert!((pearson(&xs, &ys).expect("pearson") + 1.0).abs() < 1e-12);
    }

    #[test]
    fn monotonic_but_nonlinear_is_spearman_one() {
        let xs = some(&[1.0, 2.0, 3.0, 4.0]);
        let ys = some(&[1.0, 8.0, 27.0, 64.0]);
        let pearson_r = pearson(&xs, &ys).expect("pearson");
        let spearman_r = spearman(&xs, &ys).expect("spearman");
        assert!(pearson_r < 1.0);
        assert!((spearman_r - 1.0).abs() < 1e-12);
    }

    #[test]
    fn missing_cells_are_dropped_pairwise() {
        let xs = vec![Some(1.0), Some(2.0), None, Some(4.0)];
        let ys = vec![Some(2.0), None, Some(6.0), Some(8.0)];
        // Only rows 0 and 3 are complete; two points define a line.
        assert!((pearson(&xs, &ys).expect("pearson") - 1.0).abs() < 1e-12);
    }

    #[test]
    fn constant_column_has_no_coefficient() {
        let xs = some(&[5.0, 5.0, 5.0]);
        let ys = some(&[1.0, 2.0, 3.0]);
        assert!(pearson(&xs, &ys).is_none());
    }

    #[test]
    fn tied_values_share_average_ranks() {
        assert_eq!(
            average_ranks(vec![1.0, 2.0, 2.0, 3.0]),
            vec![1.0, 2.5, 2.5, 4.0]
        );
    }
}

//! Finite differencing of a series and its inverse

/// Apply the first-difference operator `order` times
///
/// Each pass shortens the series by one; an input no longer than `order`
/// yields an empty vector.
pub fn difference(series: &[f64], order: usize) -> Vec<f64> {
    let mut current = series.to_vec();
    for _ in 0..order {
        if current.len() < 2 {
            return Vec::new();
        }
        current = current.windows(2).map(|w| w[1] - w[0]).collect();
    }
    current
}

/// First value of each lower-order difference, `seeds[k]` from the k-times
/// differenced series, as needed by [`integrate`]
pub fn leading_values(series: &[f64], order: usize) -> Vec<f64> {
    (0..order)
        .filter_map(|k| difference(series, k).first().copied())
        .collect()
}

/// Invert [`difference`]: rebuild a level series from its `seeds.len()`-times
/// differenced form and the leading value of every lower order
pub fn integrate(diffs: &[f64], seeds: &[f64]) -> Vec<f64> {
    let mut current = diffs.to_vec();
    for &seed in seeds.iter().rev() {
        let mut level = Vec::with_capacity(current.len() + 1);
        let mut acc = seed;
        level.push(acc);
        for d in &current {
            acc += d;
            level.push(acc);
        }
        current = level;
    }
    current
}

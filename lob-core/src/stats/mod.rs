//! Small statistics helpers shared by the feature and model layers
//!
//! # Design
//!
//! - Plain f64 slices in, plain f64 out
//! - Empty input yields 0 rather than NaN (guarded division)
//! - [`RingBuffer`] is the only bounded streaming structure

mod ring_buffer;

pub use ring_buffer::RingBuffer;

/// Calculate mean (0 for an empty slice)
#[inline]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance: divides by n, not n - 1
#[inline]
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|x| (x - m).powi(2)).sum::<f64>() / values.len() as f64
}

/// Population covariance of two equally long series
///
/// Extra elements of the longer slice are ignored.
pub fn population_covariance(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len().min(y.len());
    if n == 0 {
        return 0.0;
    }
    let (x, y) = (&x[..n], &y[..n]);
    let mean_x = mean(x);
    let mean_y = mean(y);
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum::<f64>()
        / n as f64
}

/// Calculate min and max in one pass
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Simple return: (new - old) / old, None when old is zero
#[inline]
pub fn simple_return(old: f64, new: f64) -> Option<f64> {
    if old == 0.0 {
        return None;
    }
    Some((new - old) / old)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), 3.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_population_variance() {
        // Population variance of [1,2,3,4,5] = 2.0 (sample variance would be 2.5)
        assert_relative_eq!(population_variance(&[1.0, 2.0, 3.0, 4.0, 5.0]), 2.0);
        assert_eq!(population_variance(&[7.0; 10]), 0.0);
    }

    #[test]
    fn test_population_covariance() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 6.0];
        assert_relative_eq!(population_covariance(&x, &y), 4.0 / 3.0);
        assert_eq!(population_covariance(&[], &y), 0.0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min_max(&[5.0, 2.0, 8.0, 1.0, 9.0]), Some((1.0, 9.0)));
        assert_eq!(min_max(&[]), None);
    }

    #[test]
    fn test_simple_return() {
        assert_relative_eq!(simple_return(100.0, 110.0).unwrap(), 0.1);
        assert!(simple_return(0.0, 1.0).is_none());
    }
}

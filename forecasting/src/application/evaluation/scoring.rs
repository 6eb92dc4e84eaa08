use crate::domain::ModelMetrics;

/// Score `predicted` against `actual`
///
/// Direction accuracy compares the sign of consecutive moves in each series,
/// treating a flat step as down, and is zero for fewer than two points.
/// Empty or mismatched inputs log a warning and return the all-zero
/// [`ModelMetrics`] sentinel.
pub fn score(actual: &[f64], predicted: &[f64]) -> ModelMetrics {
    if actual.len() != predicted.len() || actual.is_empty() {
        log::warn!(
            "Cannot score forecasts: {} actual vs {} predicted values",
            actual.len(),
            predicted.len()
        );
        return ModelMetrics::default();
    }

    let n = actual.len() as f64;
    let (squared, absolute) = actual
        .iter()
        .zip(predicted)
        .fold((0.0, 0.0), |(sq, abs), (a, p)| {
            let err = a - p;
            (sq + err * err, abs + err.abs())
        });
    let mse = squared / n;

    ModelMetrics {
        mse,
        rmse: mse.sqrt(),
        mae: absolute / n,
        direction_accuracy: direction_accuracy(actual, predicted),
    }
}

fn direction_accuracy(actual: &[f64], predicted: &[f64]) -> f64 {
    if actual.len() < 2 {
        return 0.0;
    }
    let direction = |w: &[f64]| if w[1] > w[0] { 1 } else { -1 };
    let hits = actual
        .windows(2)
        .zip(predicted.windows(2))
        .filter(|&(a, p)| direction(a) == direction(p))
        .count();
    hits as f64 / (actual.len() - 1) as f64 * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_perfect_forecast() {
        let series = [1.0, 2.0, 1.5, 3.0, 2.5];
        let metrics = score(&series, &series);
        assert_eq!(metrics.mse, 0.0);
        assert_eq!(metrics.rmse, 0.0);
        assert_eq!(metrics.mae, 0.0);
        assert_relative_eq!(metrics.direction_accuracy, 100.0);
    }

    #[test]
    fn test_error_metrics() {
        let metrics = score(&[1.0, 2.0, 3.0], &[2.0, 2.0, 1.0]);
        // errors -1, 0, 2
        assert_relative_eq!(metrics.mse, 5.0 / 3.0);
        assert_relative_eq!(metrics.rmse, (5.0_f64 / 3.0).sqrt());
        assert_relative_eq!(metrics.mae, 1.0);
        // actual: up, up; predicted: flat(down), down
        assert_relative_eq!(metrics.direction_accuracy, 0.0);
    }

    #[test]
    fn test_flat_counts_as_down() {
        // actual moves: flat, down; predicted: down, down
        let metrics = score(&[1.0, 1.0, 0.5], &[2.0, 1.0, 0.0]);
        assert_relative_eq!(metrics.direction_accuracy, 100.0);
    }

    #[test]
    fn test_single_point_has_zero_direction_accuracy() {
        let metrics = score(&[1.0], &[1.5]);
        assert_relative_eq!(metrics.mae, 0.5);
        assert_eq!(metrics.direction_accuracy, 0.0);
    }

    #[test]
    fn test_unscoreable_inputs_return_sentinel() {
        assert!(score(&[], &[]).is_empty());
        assert!(score(&[1.0, 2.0], &[1.0]).is_empty());
    }
}

use crate::domain::Forecast;
use crate::domain::differencing::difference;
use crate::error::{ModelError, Result};
use lob_core::RingBuffer;
use lob_core::stats::{population_covariance, population_variance};

/// Shrinkage applied to every estimated coefficient
pub const COEFFICIENT_DAMPING: f64 = 0.5;

/// Observations beyond `p + d` required by [`ArPredictor::fit`]
const FIT_MARGIN: usize = 10;

/// Observations beyond `p + d` retained from the fit series
const SEED_MARGIN: usize = 5;

/// AR(p) forecaster on a d-times differenced series
///
/// Keeps a bounded window of recent levels (`p + d + 10`). Each step adds the
/// weighted sum of the latest `p` differences to the last level. Forecasts are
/// chained: each step's prediction is appended to a scratch copy of the
/// window before the next step is computed.
#[derive(Debug, Clone)]
pub struct ArPredictor {
    p: usize,
    d: usize,
    coefficients: Option<Vec<f64>>,
    history: RingBuffer<f64>,
}

impl ArPredictor {
    /// Create an unfitted predictor of order `p` with differencing order `d`
    pub fn new(p: usize, d: usize) -> Result<Self> {
        if p == 0 {
            return Err(ModelError::InvalidParameters(
                "autoregressive order p must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            p,
            d,
            coefficients: None,
            history: RingBuffer::with_capacity(p + d + FIT_MARGIN),
        })
    }

    pub fn order(&self) -> (usize, usize) {
        (self.p, self.d)
    }

    /// Minimum series length accepted by [`fit`](Self::fit)
    pub fn min_fit_len(&self) -> usize {
        self.p + self.d + FIT_MARGIN
    }

    pub fn is_fitted(&self) -> bool {
        self.coefficients.is_some()
    }

    /// Damped coefficients, lag 1 first
    pub fn coefficients(&self) -> Option<&[f64]> {
        self.coefficients.as_deref()
    }

    /// Retained levels, oldest first
    pub fn history(&self) -> impl Iterator<Item = f64> + '_ {
        self.history.iter().copied()
    }

    /// Estimate coefficients from `series` and reseed the history window with
    /// its last `p + d + 5` values
    ///
    /// On error the predictor is left unchanged.
    pub fn fit(&mut self, series: &[f64]) -> Result<()> {
        let required = self.min_fit_len();
        if series.len() < required {
            return Err(ModelError::InsufficientHistory {
                required,
                actual: series.len(),
            });
        }

        let diffs = difference(series, self.d);
        let mut coefficients = Vec::with_capacity(self.p);
        for lag in 1..=self.p {
            if diffs.len() <= lag {
                break;
            }
            let current = &diffs[lag..];
            let lagged = &diffs[..diffs.len() - lag];
            let variance = population_variance(lagged);
            let coefficient = if variance > 0.0 {
                population_covariance(current, lagged) / variance
            } else {
                0.0
            };
            coefficients.push(coefficient * COEFFICIENT_DAMPING);
        }

        self.history.clear();
        let seed_start = series.len() - (self.p + self.d + SEED_MARGIN);
        self.history.extend(series[seed_start..].iter().copied());

        log::debug!(
            "AR({}) fitted on {} points (d={}): coefficients {:?}",
            self.p,
            series.len(),
            self.d,
            coefficients
        );
        self.coefficients = Some(coefficients);
        Ok(())
    }

    /// Append a realized value, evicting the oldest when the window is full
    pub fn observe(&mut self, value: f64) {
        self.history.push(value);
    }

    /// Forecast the next `steps` levels
    ///
    /// Without a fit, or with fewer than `p + d` retained levels, returns the
    /// last level repeated (zeros for an empty window) as
    /// [`Forecast::Fallback`].
    pub fn predict(&self, steps: usize) -> Forecast {
        let coefficients = match &self.coefficients {
            Some(c) if self.history.len() >= self.p + self.d => c,
            _ => {
                let last = self.history.last().copied().unwrap_or(0.0);
                return Forecast::Fallback(vec![last; steps]);
            }
        };

        let mut levels = self.history.to_vec();
        let mut forecasts = Vec::with_capacity(steps);
        for _ in 0..steps {
            let next = self.next_level(&levels, coefficients);
            forecasts.push(next);
            levels.push(next);
        }
        Forecast::Model(forecasts)
    }

    fn next_level(&self, levels: &[f64], coefficients: &[f64]) -> f64 {
        // `predict` guarantees at least p + d >= 1 levels
        let last = levels[levels.len() - 1];
        let diffs = difference(levels, self.d);
        if diffs.len() < self.p {
            return last;
        }
        let next_diff: f64 = coefficients
            .iter()
            .take(self.p)
            .zip(diffs.iter().rev())
            .map(|(coef, diff)| coef * diff)
            .sum();
        last + next_diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn alternating(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| 100.0 + if i % 2 == 0 { 0.0 } else { 1.0 })
            .collect()
    }

    #[test]
    fn test_rejects_zero_order() {
        assert!(matches!(
            ArPredictor::new(0, 1),
            Err(ModelError::InvalidParameters(_))
        ));
    }

    #[test]
    fn test_unfitted_predicts_fallback() {
        let mut model = ArPredictor::new(2, 1).unwrap();
        assert_eq!(model.predict(3), Forecast::Fallback(vec![0.0; 3]));

        model.observe(101.5);
        assert_eq!(model.predict(2), Forecast::Fallback(vec![101.5, 101.5]));
    }

    #[test]
    fn test_fit_requires_minimum_history() {
        let mut model = ArPredictor::new(2, 1).unwrap();
        let err = model.fit(&alternating(12)).unwrap_err();
        assert_eq!(
            err,
            ModelError::InsufficientHistory {
                required: 13,
                actual: 12
            }
        );
        assert!(!model.is_fitted());
    }

    #[test]
    fn test_fit_seeds_history_window() {
        let series: Vec<f64> = (0..40).map(|i| i as f64).collect();
        let mut model = ArPredictor::new(2, 1).unwrap();
        model.fit(&series).unwrap();

        // p + d + 5 = 8 trailing values
        let history: Vec<f64> = model.history().collect();
        assert_eq!(history, (32..40).map(|i| i as f64).collect::<Vec<_>>());

        // Capacity p + d + 10 = 13
        for i in 0..10 {
            model.observe(100.0 + i as f64);
        }
        assert_eq!(model.history().count(), 13);
        assert_eq!(model.history().last(), Some(109.0));
    }

    #[test]
    fn test_alternating_series_gives_negative_damped_coefficient() {
        // Differences alternate +1/-1: lag-1 correlation is -1
        let mut model = ArPredictor::new(1, 1).unwrap();
        model.fit(&alternating(30)).unwrap();
        let coefficients = model.coefficients().unwrap();
        assert_eq!(coefficients.len(), 1);
        assert_relative_eq!(coefficients[0], -COEFFICIENT_DAMPING, epsilon = 1e-9);
    }

    #[test]
    fn test_constant_differences_give_zero_coefficients() {
        // Linear trend: differences have zero variance
        let series: Vec<f64> = (0..30).map(|i| 50.0 + 0.25 * i as f64).collect();
        let mut model = ArPredictor::new(3, 1).unwrap();
        model.fit(&series).unwrap();
        assert_eq!(model.coefficients().unwrap(), &[0.0, 0.0, 0.0]);

        // Zero predicted difference: forecast holds the last level
        let forecast = model.predict(2);
        assert!(!forecast.is_fallback());
        for value in forecast.values() {
            assert_relative_eq!(*value, 57.25, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_forecasts_are_chained() {
        let mut model = ArPredictor::new(1, 1).unwrap();
        let series = alternating(30);
        model.fit(&series).unwrap();

        // Last diff is +1 (series ends on 101), coefficient -0.5
        let forecast = model.predict(2).into_values();
        assert_relative_eq!(forecast[0], 100.5, epsilon = 1e-9);
        // Next diff is -0.5 from the chained level, so +0.25
        assert_relative_eq!(forecast[1], 100.75, epsilon = 1e-9);
    }

    #[test]
    fn test_second_order_forecast_adds_difference_to_last_level() {
        // Quadratic levels: second differences alternate around a constant
        let series: Vec<f64> = (0..30)
            .map(|i| {
                let t = i as f64;
                t * t + if i % 2 == 0 { 0.0 } else { 0.5 }
            })
            .collect();
        let mut model = ArPredictor::new(1, 2).unwrap();
        model.fit(&series).unwrap();

        let levels: Vec<f64> = model.history().collect();
        let diffs = difference(&levels, 2);
        let coef = model.coefficients().unwrap()[0];
        let last = levels[levels.len() - 1];
        let expected = last + coef * diffs[diffs.len() - 1];

        assert_relative_eq!(model.predict(1).first().unwrap(), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_undifferenced_forecast_adds_weighted_levels_to_last_level() {
        let series: Vec<f64> = (0..30).map(|i| 100.0 + (i % 3) as f64).collect();
        let mut model = ArPredictor::new(2, 0).unwrap();
        model.fit(&series).unwrap();

        let levels: Vec<f64> = model.history().collect();
        let coefficients = model.coefficients().unwrap();
        let n = levels.len();
        let expected =
            levels[n - 1] + coefficients[0] * levels[n - 1] + coefficients[1] * levels[n - 2];

        assert_relative_eq!(model.predict(1).first().unwrap(), expected, epsilon = 1e-9);
    }
}

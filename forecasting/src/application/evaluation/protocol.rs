//! Regime Classification Protocol

use crate::domain::VolatilityRegime;

/// Labels a volatility observation relative to a reference level
pub trait RegimeClassifier {
    /// Classify `volatility` against the mean volatility of its window
    fn classify(&self, volatility: f64, window_mean: f64) -> VolatilityRegime;

    /// Get classifier name
    fn name(&self) -> &str;

    /// Classify every observation of a window against the window's own mean
    fn classify_window(&self, volatilities: &[f64]) -> Vec<VolatilityRegime> {
        let mean = lob_core::stats::mean(volatilities);
        volatilities
            .iter()
            .map(|&v| self.classify(v, mean))
            .collect()
    }
}

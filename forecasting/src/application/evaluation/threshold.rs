use super::protocol::RegimeClassifier;
use crate::domain::VolatilityRegime;

/// Fixed-multiple bands around the window mean
///
/// Bounds are exclusive: a volatility of exactly `high_multiplier × mean`
/// or `low_multiplier × mean` is `Normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdClassifier {
    pub high_multiplier: f64,
    pub low_multiplier: f64,
}

impl Default for ThresholdClassifier {
    fn default() -> Self {
        Self {
            high_multiplier: 1.5,
            low_multiplier: 0.5,
        }
    }
}

impl RegimeClassifier for ThresholdClassifier {
    fn classify(&self, volatility: f64, window_mean: f64) -> VolatilityRegime {
        if volatility > window_mean * self.high_multiplier {
            VolatilityRegime::High
        } else if volatility < window_mean * self.low_multiplier {
            VolatilityRegime::Low
        } else {
            VolatilityRegime::Normal
        }
    }

    fn name(&self) -> &str {
        "Threshold"
    }
}

/// Classify with the default 1.5× / 0.5× bands
pub fn classify_regime(volatility: f64, window_mean: f64) -> VolatilityRegime {
    ThresholdClassifier::default().classify(volatility, window_mean)
}

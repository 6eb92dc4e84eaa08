use serde::{Deserialize, Serialize};

/// Accuracy of a forecast series against the realized series
///
/// The all-zero value doubles as the sentinel for an unscoreable pair of
/// series (empty or mismatched lengths).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ModelMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    /// Percentage (0-100) of steps where forecast and realized moves agree
    pub direction_accuracy: f64,
}

impl ModelMetrics {
    /// True for the sentinel produced by an unscoreable input
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

//! Result Schema
//!
//! Serialized field names are consumed by downstream tooling and must not
//! change.

use forecasting::{ModelMetrics, VolatilityRegime};
use lob_core::stats::{mean, min_max};
use lob_core::{FeatureRecord, Timestamp};
use serde::{Deserialize, Serialize};

/// One-step AR forecast against the realized mid price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArimaPoint {
    pub timestamp: Timestamp,
    pub actual: f64,
    pub predicted: f64,
    /// actual - predicted
    pub error: f64,
}

/// One-step volatility forecast against the absolute realized return
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GarchPoint {
    pub timestamp: Timestamp,
    pub actual_volatility: f64,
    pub forecast_volatility: f64,
    /// σ² after updating with the realized return
    pub conditional_variance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricsReport {
    pub arima: ModelMetrics,
    pub garch: ModelMetrics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimePoint {
    pub timestamp: Timestamp,
    pub volatility: f64,
    pub regime: VolatilityRegime,
}

/// Everything produced by one analysis run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub arima_results: Vec<ArimaPoint>,
    pub garch_results: Vec<GarchPoint>,
    pub metrics: MetricsReport,
    pub volatility_regimes: Vec<RegimePoint>,
}

/// Descriptive statistics of a dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Absent when only a features file was analysed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot_count: Option<usize>,
    pub feature_count: usize,
    pub price_min: f64,
    pub price_max: f64,
    pub average_spread: f64,
    pub average_volatility: f64,
    pub order_flow_imbalance_min: f64,
    pub order_flow_imbalance_max: f64,
}

impl DatasetSummary {
    pub fn from_features(snapshot_count: Option<usize>, features: &[FeatureRecord]) -> Self {
        let (price_min, price_max) =
            min_max(&column(features, |r| r.mid_price)).unwrap_or((0.0, 0.0));
        let (order_flow_imbalance_min, order_flow_imbalance_max) =
            min_max(&column(features, |r| r.order_flow_imbalance)).unwrap_or((0.0, 0.0));

        Self {
            snapshot_count,
            feature_count: features.len(),
            price_min,
            price_max,
            average_spread: mean(&column(features, |r| r.spread)),
            average_volatility: mean(&column(features, |r| r.volatility)),
            order_flow_imbalance_min,
            order_flow_imbalance_max,
        }
    }

    /// Write the summary to the log at info level
    pub fn log(&self) {
        if let Some(count) = self.snapshot_count {
            log::info!("Snapshots: {}", count);
        }
        log::info!("Feature records: {}", self.feature_count);
        log::info!("Price range: {:.2} - {:.2}", self.price_min, self.price_max);
        log::info!("Average spread: {:.4}", self.average_spread);
        log::info!("Average volatility: {:.6}", self.average_volatility);
        log::info!(
            "Order flow imbalance range: {:.3} - {:.3}",
            self.order_flow_imbalance_min,
            self.order_flow_imbalance_max
        );
    }
}

fn column(features: &[FeatureRecord], field: impl Fn(&FeatureRecord) -> f64) -> Vec<f64> {
    features.iter().map(field).collect()
}

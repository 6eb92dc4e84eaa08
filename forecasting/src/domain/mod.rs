//! Forecasting Domain Types
//!
//! Value objects shared by the models and the evaluator.

pub mod differencing;
mod forecast;
mod metrics;
mod regime;

pub use forecast::Forecast;
pub use metrics::ModelMetrics;
pub use regime::VolatilityRegime;

//! Time-series models for order-book analysis
//!
//! # Models
//!
//! - [`ArPredictor`](application::autoregressive::ArPredictor): AR(p) on the
//!   d-times differenced series, damped correlation-ratio coefficients, chained
//!   multi-step forecasts
//! - [`VolatilityFilter`](application::volatility::VolatilityFilter):
//!   GARCH(1,1) recursion with a sample-variance warm start and mean-reverting
//!   multi-step forecasts
//!
//! Neither model is fitted by maximum likelihood; both use closed-form
//! heuristics.
//!
//! # Evaluation
//!
//! - [`score`](application::evaluation::score): MSE, RMSE, MAE and direction accuracy
//! - [`ThresholdClassifier`](application::evaluation::ThresholdClassifier):
//!   low / normal / high volatility regimes relative to a window mean
//!
//! ```text
//! prices ──► ArPredictor ──────► forecasts ─┐
//!                                            ├──► score ──► ModelMetrics
//! returns ─► VolatilityFilter ─► forecasts ─┘
//! ```

pub mod application;
pub mod domain;
pub mod error;

// Re-export commonly used types
pub use application::autoregressive::{ArPredictor, COEFFICIENT_DAMPING};
pub use application::evaluation::{
    RegimeClassifier, ThresholdClassifier, classify_regime, score,
};
pub use application::volatility::{GarchParams, MIN_FIT_RETURNS, VolatilityFilter};
pub use domain::{Forecast, ModelMetrics, VolatilityRegime};
pub use error::{ModelError, Result};

//! Autoregressive Point Forecasting
//!
//! AR(p) fitted to the d-times differenced series. Coefficients are the
//! lag-k covariance over the lagged variance, damped by a fixed factor to
//! keep chained forecasts from diverging.

mod predictor;

pub use predictor::{ArPredictor, COEFFICIENT_DAMPING};

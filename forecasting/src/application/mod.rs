//! Application layer: the estimators and their evaluation

pub mod autoregressive;
pub mod evaluation;
pub mod volatility;

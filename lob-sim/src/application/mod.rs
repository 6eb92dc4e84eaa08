//! Application layer
//!
//! Contains:
//! - **generators**: Snapshot simulator driven by [`MarketDynamics`](crate::domain::MarketDynamics)
//! - **features**: Microstructure feature extraction over a snapshot sequence

pub mod features;
pub mod generators;

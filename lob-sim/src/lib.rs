//! Synthetic limit-order-book data
//!
//! This crate generates tick-level order-book snapshots from a stochastic
//! process (volatility clustering, proportional price shocks, imbalance-driven
//! depth skew) and derives per-tick microstructure features from them.
//!
//! Randomness is always injected: every generating call takes a `rand::Rng`,
//! so a seeded `StdRng` reproduces a run exactly.

pub mod application;
pub mod domain;
pub mod error;

// Re-export key types at crate root
pub use application::features::{FeatureExtractor, LOOKBACK};
pub use application::generators::{SnapshotSimulator, generate};
pub use domain::MarketDynamics;
pub use error::{Result, SimulationError};

//! Analysis pipeline runner
//!
//! Ties the workspace together:
//! - Configuration loading and validation
//! - Dataset generation (simulator driven tick by tick, then feature extraction)
//! - Rolling one-step evaluation of the AR and volatility models
//! - Regime labelling and JSON persistence of every artifact

pub mod config;
pub mod error;
pub mod persistence;
pub mod pipeline;
pub mod report;

pub use config::{
    AnalysisConfig, ArimaConfig, ConfigError, GarchConfig, OutputConfig, SimulationConfig,
};
pub use error::AnalysisError;
pub use persistence::PersistenceError;
pub use pipeline::{Dataset, PROGRESS_INTERVAL, generate_dataset, run_analysis};
pub use report::{
    AnalysisResult, ArimaPoint, DatasetSummary, GarchPoint, MetricsReport, RegimePoint,
};

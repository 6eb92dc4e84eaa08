use crate::config::ConfigError;
use forecasting::ModelError;
use lob_sim::SimulationError;
use thiserror::Error;

/// Failures of dataset generation or model evaluation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnalysisError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Simulation failed: {0}")]
    Simulation(#[from] SimulationError),

    #[error("Model failed: {0}")]
    Model(#[from] ModelError),

    #[error("No feature records to analyze")]
    EmptyDataset,
}

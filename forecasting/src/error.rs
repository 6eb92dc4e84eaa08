use thiserror::Error;

/// Failures of model fitting and forecasting
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Fit attempted with too few observations
    #[error("Insufficient history: need at least {required} observations, got {actual}")]
    InsufficientHistory { required: usize, actual: usize },

    /// alpha + beta >= 1 leaves the long-run variance undefined
    #[error("Degenerate model: alpha ({alpha}) + beta ({beta}) >= 1, long-run variance undefined")]
    DegenerateModel { alpha: f64, beta: f64 },

    #[error("Invalid model parameters: {0}")]
    InvalidParameters(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;

use lob_core::DomainError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimulationError {
    #[error("Invalid market parameter: {0}")]
    InvalidParameter(String),

    #[error("Generated book violates an invariant: {0}")]
    Domain(#[from] DomainError),
}

pub type Result<T> = std::result::Result<T, SimulationError>;

//! Configuration loading for the analysis pipeline
//!
//! Every section is optional in JSON; missing fields take the defaults of a
//! 100 000-tick AAPL session analysed with AR(5, 1) and GARCH(1,1).

use forecasting::GarchParams;
use lob_core::Symbol;
use lob_sim::MarketDynamics;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Root configuration for a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub simulation: SimulationConfig,
    pub arima: ArimaConfig,
    pub garch: GarchConfig,
    /// Share of the series used for fitting; the rest is evaluated
    pub train_fraction: f64,
    pub output: OutputConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig::default(),
            arima: ArimaConfig::default(),
            garch: GarchConfig::default(),
            train_fraction: 0.8,
            output: OutputConfig::default(),
        }
    }
}

impl AnalysisConfig {
    /// Load configuration from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path.as_ref().display().to_string(),
            error: e.to_string(),
        })?;

        Self::from_json(&content)
    }

    /// Parse configuration from JSON string
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check every section, reporting the first invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.simulation.validate()?;

        if !(self.train_fraction > 0.0 && self.train_fraction < 1.0) {
            return Err(ConfigError::Invalid(format!(
                "train_fraction must be in (0, 1), got {}",
                self.train_fraction
            )));
        }
        if self.arima.p < 1 {
            return Err(ConfigError::Invalid("arima.p must be at least 1".to_string()));
        }
        if self.arima.d < 1 {
            return Err(ConfigError::Invalid("arima.d must be at least 1".to_string()));
        }
        self.garch
            .params()
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("garch: {e}")))?;
        if self.garch.history_capacity == 0 {
            return Err(ConfigError::Invalid(
                "garch.history_capacity must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Simulated dataset parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Snapshots to generate
    pub num_records: usize,
    pub symbol: String,
    /// Fixed RNG seed; `None` draws one from the OS
    pub seed: Option<u64>,
    pub market: MarketDynamics,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_records: 100_000,
            symbol: "AAPL".to_string(),
            seed: None,
            market: MarketDynamics::default(),
        }
    }
}

impl SimulationConfig {
    pub fn symbol(&self) -> Result<Symbol, ConfigError> {
        Symbol::new(self.symbol.as_str()).map_err(|e| ConfigError::Invalid(e.to_string()))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.num_records == 0 {
            return Err(ConfigError::Invalid(
                "simulation.num_records must be positive".to_string(),
            ));
        }
        self.symbol()?;
        self.market
            .validate()
            .map_err(|e| ConfigError::Invalid(format!("simulation.market: {e}")))
    }
}

/// AR order and differencing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArimaConfig {
    pub p: usize,
    pub d: usize,
}

impl Default for ArimaConfig {
    fn default() -> Self {
        Self { p: 5, d: 1 }
    }
}

/// Volatility filter coefficients and variance log cap
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GarchConfig {
    pub omega: f64,
    pub alpha: f64,
    pub beta: f64,
    pub history_capacity: usize,
}

impl Default for GarchConfig {
    fn default() -> Self {
        let GarchParams { omega, alpha, beta } = GarchParams::default();
        Self {
            omega,
            alpha,
            beta,
            history_capacity: 100_000,
        }
    }
}

impl GarchConfig {
    pub fn params(&self) -> GarchParams {
        GarchParams {
            omega: self.omega,
            alpha: self.alpha,
            beta: self.beta,
        }
    }
}

/// How much of each artifact is kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Trailing evaluation points kept per model
    pub results_tail: usize,
    /// Trailing records labelled with a regime
    pub regime_window: usize,
    /// Leading snapshots and feature records written to disk
    pub persist_limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            results_tail: 100,
            regime_window: 500,
            persist_limit: 10_000,
        }
    }
}

/// Configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {error}")]
    Io { path: String, error: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

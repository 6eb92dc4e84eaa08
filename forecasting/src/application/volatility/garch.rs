use crate::error::{ModelError, Result};
use lob_core::RingBuffer;
use lob_core::stats::population_variance;
use serde::{Deserialize, Serialize};

/// Returns required by [`VolatilityFilter::fit`]
pub const MIN_FIT_RETURNS: usize = 10;

/// Default cap on the recorded variance path
const DEFAULT_HISTORY_CAPACITY: usize = 100_000;

/// GARCH(1,1) coefficients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GarchParams {
    /// Constant term (ω)
    pub omega: f64,
    /// Weight on the last squared return (α)
    pub alpha: f64,
    /// Weight on the last conditional variance (β)
    pub beta: f64,
}

impl Default for GarchParams {
    fn default() -> Self {
        Self {
            omega: 0.00001,
            alpha: 0.1,
            beta: 0.85,
        }
    }
}

impl GarchParams {
    pub fn validate(&self) -> Result<()> {
        if !self.omega.is_finite() || self.omega <= 0.0 {
            return Err(ModelError::InvalidParameters(format!(
                "omega must be positive, got {}",
                self.omega
            )));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(ModelError::InvalidParameters(format!(
                "alpha must be non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(ModelError::InvalidParameters(format!(
                "beta must be non-negative, got {}",
                self.beta
            )));
        }
        Ok(())
    }

    /// α + β
    pub fn persistence(&self) -> f64 {
        self.alpha + self.beta
    }

    /// ω / (1 − α − β), defined only while α + β < 1
    pub fn long_run_variance(&self) -> Result<f64> {
        let persistence = self.persistence();
        if persistence >= 1.0 {
            return Err(ModelError::DegenerateModel {
                alpha: self.alpha,
                beta: self.beta,
            });
        }
        Ok(self.omega / (1.0 - persistence))
    }
}

/// Fixed-parameter GARCH(1,1) filter over a return stream
///
/// Starts at the long-run variance (or ω when that is undefined). Every
/// [`update`](Self::update) records the new conditional variance in a
/// bounded log that callers can drain.
#[derive(Debug, Clone)]
pub struct VolatilityFilter {
    params: GarchParams,
    conditional_variance: f64,
    last_return: f64,
    variance_history: RingBuffer<f64>,
}

impl VolatilityFilter {
    pub fn new(params: GarchParams) -> Result<Self> {
        Self::with_history_capacity(params, DEFAULT_HISTORY_CAPACITY)
    }

    /// Create a filter whose variance log keeps at most `capacity` entries
    pub fn with_history_capacity(params: GarchParams, capacity: usize) -> Result<Self> {
        params.validate()?;
        let conditional_variance = params.long_run_variance().unwrap_or(params.omega);
        Ok(Self {
            params,
            conditional_variance,
            last_return: 0.0,
            variance_history: RingBuffer::with_capacity(capacity),
        })
    }

    pub fn params(&self) -> &GarchParams {
        &self.params
    }

    /// Current σ²
    pub fn conditional_variance(&self) -> f64 {
        self.conditional_variance
    }

    pub fn last_return(&self) -> f64 {
        self.last_return
    }

    pub fn long_run_variance(&self) -> Result<f64> {
        self.params.long_run_variance()
    }

    /// Warm-start from the sample variance of `returns`, then replay them
    ///
    /// Clears the variance log first, so afterwards it holds exactly one
    /// entry per replayed return (up to capacity).
    pub fn fit(&mut self, returns: &[f64]) -> Result<()> {
        if returns.len() < MIN_FIT_RETURNS {
            return Err(ModelError::InsufficientHistory {
                required: MIN_FIT_RETURNS,
                actual: returns.len(),
            });
        }

        self.conditional_variance = population_variance(returns);
        self.variance_history.clear();
        for &r in returns {
            self.update(r);
        }

        log::debug!(
            "GARCH fitted on {} returns: sigma^2 = {:.3e}",
            returns.len(),
            self.conditional_variance
        );
        Ok(())
    }

    /// Advance the recursion by one observed return
    #[inline]
    pub fn update(&mut self, r: f64) -> f64 {
        let GarchParams { omega, alpha, beta } = self.params;
        self.conditional_variance = omega + alpha * r * r + beta * self.conditional_variance;
        self.last_return = r;
        self.variance_history.push(self.conditional_variance);
        self.conditional_variance
    }

    /// Volatility (σ, not σ²) forecasts for horizons 1..=`steps`
    ///
    /// σ²ₕ = V∞ + (α+β)ʰ · (σ²ₜ − V∞), decaying toward the long-run
    /// variance V∞.
    pub fn forecast(&self, steps: usize) -> Result<Vec<f64>> {
        let long_run = self.params.long_run_variance()?;
        let persistence = self.params.persistence();
        let gap = self.conditional_variance - long_run;

        let mut decay = 1.0;
        Ok((0..steps)
            .map(|_| {
                decay *= persistence;
                (long_run + decay * gap).max(0.0).sqrt()
            })
            .collect())
    }

    /// Recorded variances, oldest first
    pub fn variance_history(&self) -> impl Iterator<Item = f64> + '_ {
        self.variance_history.iter().copied()
    }

    /// Take the recorded variances, leaving the log empty
    pub fn drain_variance_history(&mut self) -> Vec<f64> {
        self.variance_history.drain()
    }
}

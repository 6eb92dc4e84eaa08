//! Parameters describing the simulated market
//!
//! These constants shape the stochastic process without specifying any
//! individual order. Used by the snapshot simulator.

use crate::error::SimulationError;
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Statistical description of the simulated instrument
///
/// Captures everything the simulator needs to evolve one tick:
/// - Volatility clustering (persistence of the latent volatility)
/// - Price process (proportional Gaussian shocks with a hard floor)
/// - Spread widening with volatility
/// - Imbalance cycle plus noise
/// - Depth per level (Gaussian, skewed by imbalance, linear decay)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDynamics {
    // Price process
    /// Starting mid price
    pub base_price: f64,
    /// Long-run tick-level volatility (also the starting volatility)
    pub base_volatility: f64,
    /// Spread at zero volatility, in price units
    pub base_spread: f64,
    /// Weight of the previous volatility in the clustering update
    pub volatility_persistence: f64,
    /// Mid price never falls below this level
    pub price_floor: f64,
    /// Decimal places quoted level prices are rounded to
    pub price_decimals: u8,

    // Imbalance
    /// Ticks per radian of the deterministic imbalance cycle
    pub imbalance_cycle_period: f64,
    /// Amplitude of the deterministic imbalance cycle
    pub imbalance_cycle_amplitude: f64,
    /// Standard deviation of the imbalance noise
    pub imbalance_noise_std: f64,

    // Depth
    /// Level spacing as a fraction of the spread
    pub level_spacing: f64,
    /// Mean size drawn at each level before skew and decay
    pub depth_mean: f64,
    /// Standard deviation of the size draw
    pub depth_std: f64,
    /// How strongly imbalance shifts size between the two sides
    pub depth_imbalance_skew: f64,
    /// Linear size decay per level away from the touch
    pub depth_level_decay: f64,

    // Trades
    /// Buy probability is 0.5 + imbalance * trade_imbalance_bias
    pub trade_imbalance_bias: f64,

    // Clock
    /// Microseconds between consecutive snapshots
    pub tick_interval_us: i64,
    /// Timestamp of the first snapshot
    pub session_start: DateTime<Utc>,
}

impl Default for MarketDynamics {
    fn default() -> Self {
        Self {
            base_price: 150.0,
            base_volatility: 0.0002,
            base_spread: 0.01,
            volatility_persistence: 0.95,
            price_floor: 1.0,
            price_decimals: 2,
            imbalance_cycle_period: 1000.0,
            imbalance_cycle_amplitude: 0.3,
            imbalance_noise_std: 0.2,
            level_spacing: 0.5,
            depth_mean: 500.0,
            depth_std: 200.0,
            depth_imbalance_skew: 0.3,
            depth_level_decay: 0.15,
            trade_imbalance_bias: 0.2,
            tick_interval_us: 500,
            session_start: default_session_start(),
        }
    }
}

/// US cash equity open on the reference session
fn default_session_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 15, 9, 30, 0)
        .single()
        .unwrap_or_default()
}

impl MarketDynamics {
    /// Spread implied by a given latent volatility
    ///
    /// Widens linearly with volatility and never drops below `base_spread`
    /// for non-negative volatility.
    pub fn spread_for(&self, volatility: f64) -> f64 {
        self.base_spread * (1.0 + 2.0 * volatility / self.base_volatility)
    }

    /// Distance of level `level` from the mid
    pub fn level_offset(&self, spread: f64, level: usize) -> f64 {
        spread / 2.0 + level as f64 * spread * self.level_spacing
    }

    /// Size multiplier for a level: imbalance skew times linear decay
    ///
    /// `side_sign` is -1 for bids and +1 for asks.
    pub fn depth_factor(&self, imbalance: f64, side_sign: f64, level: usize) -> f64 {
        (1.0 + side_sign * imbalance * self.depth_imbalance_skew)
            * (1.0 - level as f64 * self.depth_level_decay)
    }

    /// Reject parameter sets the simulator cannot evolve
    pub fn validate(&self) -> Result<(), SimulationError> {
        let positive = [
            ("base_price", self.base_price),
            ("base_volatility", self.base_volatility),
            ("base_spread", self.base_spread),
            ("price_floor", self.price_floor),
            ("imbalance_cycle_period", self.imbalance_cycle_period),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SimulationError::InvalidParameter(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("imbalance_cycle_amplitude", self.imbalance_cycle_amplitude),
            ("imbalance_noise_std", self.imbalance_noise_std),
            ("level_spacing", self.level_spacing),
            ("depth_std", self.depth_std),
            ("depth_imbalance_skew", self.depth_imbalance_skew),
            ("depth_level_decay", self.depth_level_decay),
            ("trade_imbalance_bias", self.trade_imbalance_bias),
        ];
        for (name, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(SimulationError::InvalidParameter(format!(
                    "{name} must be non-negative, got {value}"
                )));
            }
        }

        if !(0.0..1.0).contains(&self.volatility_persistence) {
            return Err(SimulationError::InvalidParameter(format!(
                "volatility_persistence must be in [0, 1), got {}",
                self.volatility_persistence
            )));
        }
        if self.tick_interval_us <= 0 {
            return Err(SimulationError::InvalidParameter(format!(
                "tick_interval_us must be positive, got {}",
                self.tick_interval_us
            )));
        }
        Ok(())
    }
}

//! Per-tick microstructure feature record

use crate::error::DomainError;
use crate::value_objects::Timestamp;
use serde::{Deserialize, Serialize};

/// Sign of the one-tick-ahead mid-price move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum FutureDirection {
    Down,
    #[default]
    Flat,
    Up,
}

impl FutureDirection {
    pub fn from_return(future_return: f64) -> Self {
        if future_return > 0.0 {
            FutureDirection::Up
        } else if future_return < 0.0 {
            FutureDirection::Down
        } else {
            FutureDirection::Flat
        }
    }

    pub fn as_i8(self) -> i8 {
        match self {
            FutureDirection::Down => -1,
            FutureDirection::Flat => 0,
            FutureDirection::Up => 1,
        }
    }
}

impl TryFrom<i8> for FutureDirection {
    type Error = DomainError;
    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(FutureDirection::Down),
            0 => Ok(FutureDirection::Flat),
            1 => Ok(FutureDirection::Up),
            other => Err(DomainError::InvalidDirection(other)),
        }
    }
}

impl From<FutureDirection> for i8 {
    fn from(direction: FutureDirection) -> Self {
        direction.as_i8()
    }
}

/// Features derived from one snapshot plus its lookback and one-tick lookahead
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureRecord {
    pub timestamp: Timestamp,
    pub mid_price: f64,
    pub spread: f64,
    /// Snapshot order imbalance, in [-0.8, 0.8]
    pub order_flow_imbalance: f64,
    /// (bid_vol - ask_vol) / (bid_vol + ask_vol), in [-1, 1]
    pub depth_imbalance: f64,
    /// Relative mid-price change over the lookback
    pub price_momentum: f64,
    /// Population variance of the lookback mid-prices
    pub price_volatility: f64,
    pub spread_change: f64,
    pub vwap_bid: f64,
    pub vwap_ask: f64,
    pub total_bid_volume: u64,
    pub total_ask_volume: u64,
    pub volatility: f64,
    /// Next tick's relative mid-price change (0 for the final tick)
    pub future_return: f64,
    pub future_direction: FutureDirection,
}

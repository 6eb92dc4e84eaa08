//! Order-book snapshot entity
//!
//! One snapshot per simulated tick: five levels per side, the last trade and
//! the latent state (imbalance, volatility) that produced them.

use crate::entities::PriceLevel;
use crate::error::DomainError;
use crate::value_objects::{Imbalance, Price, Size, Symbol, Timestamp, TradeSide};
use serde::{Deserialize, Serialize};

/// Number of price levels on each side of a snapshot
pub const NUM_LEVELS: usize = 5;

/// The most recent simulated print
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastTrade {
    price: Price,
    size: Size,
    side: TradeSide,
}

impl LastTrade {
    /// Trade sizes are whole round lots
    pub fn new(price: Price, size: Size, side: TradeSide) -> Result<Self, DomainError> {
        if size.shares() % Size::MIN != 0 {
            return Err(DomainError::OddLotTrade(size.shares()));
        }
        if !price.is_positive() {
            return Err(DomainError::NonPositivePrice(price.to_f64()));
        }
        Ok(Self { price, size, side })
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn side(&self) -> TradeSide {
        self.side
    }
}

/// Immutable order-book state at one tick
///
/// Bids are ordered best first (non-increasing price), asks best first
/// (non-decreasing price); rounding to the display precision can make
/// adjacent levels share a price. Total volumes are derived from the levels at
/// construction and cannot drift from them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderBookSnapshot {
    timestamp: Timestamp,
    symbol: Symbol,
    mid_price: Price,
    spread: Price,
    bid_levels: Vec<PriceLevel>,
    ask_levels: Vec<PriceLevel>,
    total_bid_volume: u64,
    total_ask_volume: u64,
    order_imbalance: Imbalance,
    volatility: f64,
    last_trade: LastTrade,
}

impl OrderBookSnapshot {
    /// Assemble a snapshot, rejecting crossed or mis-ordered books
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        timestamp: Timestamp,
        symbol: Symbol,
        mid_price: Price,
        spread: Price,
        bid_levels: Vec<PriceLevel>,
        ask_levels: Vec<PriceLevel>,
        order_imbalance: Imbalance,
        volatility: f64,
        last_trade: LastTrade,
    ) -> Result<Self, DomainError> {
        if !mid_price.is_positive() {
            return Err(DomainError::NonPositivePrice(mid_price.to_f64()));
        }
        if !spread.is_positive() {
            return Err(DomainError::NonPositivePrice(spread.to_f64()));
        }
        if !(volatility.is_finite() && volatility > 0.0) {
            return Err(DomainError::NonPositiveVolatility(volatility));
        }

        for levels in [&bid_levels, &ask_levels] {
            if levels.len() != NUM_LEVELS {
                return Err(DomainError::LevelCount {
                    expected: NUM_LEVELS,
                    actual: levels.len(),
                });
            }
        }

        let crossed = || DomainError::CrossedBook {
            best_bid: bid_levels[0].price().to_f64(),
            mid: mid_price.to_f64(),
            best_ask: ask_levels[0].price().to_f64(),
        };

        if bid_levels[0].price() >= mid_price || ask_levels[0].price() <= mid_price {
            return Err(crossed());
        }
        let bids_descending = bid_levels
            .windows(2)
            .all(|w| w[1].price() <= w[0].price());
        let asks_ascending = ask_levels
            .windows(2)
            .all(|w| w[1].price() >= w[0].price());
        if !bids_descending || !asks_ascending {
            return Err(crossed());
        }

        let total_bid_volume = side_volume(&bid_levels);
        let total_ask_volume = side_volume(&ask_levels);

        Ok(Self {
            timestamp,
            symbol,
            mid_price,
            spread,
            bid_levels,
            ask_levels,
            total_bid_volume,
            total_ask_volume,
            order_imbalance,
            volatility,
            last_trade,
        })
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    pub fn mid_price(&self) -> Price {
        self.mid_price
    }

    pub fn spread(&self) -> Price {
        self.spread
    }

    pub fn bid_levels(&self) -> &[PriceLevel] {
        &self.bid_levels
    }

    pub fn ask_levels(&self) -> &[PriceLevel] {
        &self.ask_levels
    }

    /// Best bid price
    pub fn best_bid(&self) -> Price {
        self.bid_levels
            .first()
            .map(|l| l.price())
            .unwrap_or(Price::ZERO)
    }

    /// Best ask price
    pub fn best_ask(&self) -> Price {
        self.ask_levels
            .first()
            .map(|l| l.price())
            .unwrap_or(Price::ZERO)
    }

    pub fn total_bid_volume(&self) -> u64 {
        self.total_bid_volume
    }

    pub fn total_ask_volume(&self) -> u64 {
        self.total_ask_volume
    }

    pub fn order_imbalance(&self) -> Imbalance {
        self.order_imbalance
    }

    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    pub fn last_trade(&self) -> &LastTrade {
        &self.last_trade
    }
}

fn side_volume(levels: &[PriceLevel]) -> u64 {
    levels.iter().map(|l| l.size().shares() as u64).sum()
}

//! Stochastic order-book snapshot simulator
//!
//! Evolves a latent volatility and mid price tick by tick and renders each
//! state as a five-level book with a simulated last trade.

use crate::domain::MarketDynamics;
use crate::error::Result;
use chrono::Duration;
use lob_core::{
    Imbalance, LastTrade, NUM_LEVELS, OrderBookSnapshot, OrderCount, Price, PriceLevel, Size,
    Symbol, TradeSide,
};
use rand::Rng;
use rand_distr::StandardNormal;

/// Snapshot simulator
///
/// Holds only the evolving latent state (tick index, mid price, volatility);
/// the random source is passed into every call.
#[derive(Debug, Clone)]
pub struct SnapshotSimulator {
    /// Parameters of the simulated market
    dynamics: MarketDynamics,
    /// Instrument stamped on every snapshot
    symbol: Symbol,
    /// Index of the next tick to emit
    tick: u64,
    /// Unrounded mid price carried between ticks
    price: f64,
    /// Latent volatility carried between ticks
    volatility: f64,
}

impl SnapshotSimulator {
    /// Create a simulator positioned before the first tick
    pub fn new(dynamics: MarketDynamics, symbol: Symbol) -> Result<Self> {
        dynamics.validate()?;
        Ok(Self {
            price: dynamics.base_price,
            volatility: dynamics.base_volatility,
            dynamics,
            symbol,
            tick: 0,
        })
    }

    /// Current latent volatility
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Generate `count` consecutive snapshots
    pub fn generate<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<OrderBookSnapshot>> {
        let mut snapshots = Vec::with_capacity(count);
        for _ in 0..count {
            snapshots.push(self.next_snapshot(rng)?);
        }
        Ok(snapshots)
    }

    /// Advance one tick and render the resulting book
    pub fn next_snapshot<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<OrderBookSnapshot> {
        let i = self.tick;
        let d = &self.dynamics;

        // 1. Volatility clustering
        let shock: f64 = rng.sample(StandardNormal);
        self.volatility = d.volatility_persistence * self.volatility
            + (1.0 - d.volatility_persistence) * d.base_volatility * shock.abs();

        // 2. Proportional price shock, floored
        let z: f64 = rng.sample(StandardNormal);
        self.price = (self.price + z * self.volatility * self.price).max(d.price_floor);

        // 3. Spread widens with volatility
        let spread = d.spread_for(self.volatility);

        // 4. Cyclical imbalance plus noise, hard-clipped
        let noise: f64 = rng.sample(StandardNormal);
        let cycle = (i as f64 / d.imbalance_cycle_period).sin() * d.imbalance_cycle_amplitude;
        let imbalance = Imbalance::clipped(cycle + noise * d.imbalance_noise_std);

        // 5. Levels
        let mid = self.price;
        let mut bid_levels = Vec::with_capacity(NUM_LEVELS);
        let mut ask_levels = Vec::with_capacity(NUM_LEVELS);
        for level in 0..NUM_LEVELS {
            let offset = d.level_offset(spread, level);
            bid_levels.push(Self::sample_level(d, rng, mid - offset, imbalance, -1.0, level)?);
            ask_levels.push(Self::sample_level(d, rng, mid + offset, imbalance, 1.0, level)?);
        }

        // 6. Trade at the touch
        let buy_probability = 0.5 + imbalance.value() * d.trade_imbalance_bias;
        let side = if rng.r#gen::<f64>() < buy_probability {
            TradeSide::Buy
        } else {
            TradeSide::Sell
        };
        let trade_price = match side {
            TradeSide::Buy => ask_levels[0].price(),
            TradeSide::Sell => bid_levels[0].price(),
        };
        let lots: u32 = rng.gen_range(1..=100);
        let last_trade = LastTrade::new(trade_price, Size::new(lots * Size::MIN)?, side)?;

        let timestamp = d.session_start + Duration::microseconds(i as i64 * d.tick_interval_us);

        let snapshot = OrderBookSnapshot::new(
            timestamp,
            self.symbol.clone(),
            Price::from_f64(mid),
            Price::from_f64(spread),
            bid_levels,
            ask_levels,
            imbalance,
            self.volatility,
            last_trade,
        )?;

        self.tick += 1;
        Ok(snapshot)
    }

    /// Draw size and order count for one level
    ///
    /// Draw order (size then orders) is part of the reproducibility contract.
    fn sample_level<R: Rng + ?Sized>(
        d: &MarketDynamics,
        rng: &mut R,
        raw_price: f64,
        imbalance: Imbalance,
        side_sign: f64,
        level: usize,
    ) -> Result<PriceLevel> {
        let price = Price::from_f64(raw_price).round_dp(d.price_decimals);
        let z: f64 = rng.sample(StandardNormal);
        let draw = d.depth_mean + d.depth_std * z;
        let size = Size::floored(draw * d.depth_factor(imbalance.value(), side_sign, level));
        let orders = OrderCount::new(
            rng.gen_range(OrderCount::MIN as u32..=OrderCount::MAX as u32),
        )?;
        Ok(PriceLevel::new(price, size, orders)?)
    }
}

/// Generate `count` snapshots for `symbol` from a fresh simulator
pub fn generate<R: Rng + ?Sized>(
    count: usize,
    symbol: &Symbol,
    dynamics: &MarketDynamics,
    rng: &mut R,
) -> Result<Vec<OrderBookSnapshot>> {
    let mut simulator = SnapshotSimulator::new(dynamics.clone(), symbol.clone())?;
    let snapshots = simulator.generate(count, rng)?;
    log::debug!(
        "Generated {} snapshots for {} (final volatility {:.6})",
        snapshots.len(),
        symbol,
        simulator.volatility()
    );
    Ok(snapshots)
}

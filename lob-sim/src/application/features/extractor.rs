//! Order book feature extraction
//!
//! Turns a snapshot sequence into per-tick microstructure features with a
//! one-tick-ahead label.

use lob_core::stats::{population_variance, simple_return};
use lob_core::{FeatureRecord, FutureDirection, OrderBookSnapshot, PriceLevel};

/// Snapshots of history required before the first feature record
pub const LOOKBACK: usize = 10;

/// Microstructure feature extractor
///
/// Extracts the following features for every snapshot with a full lookback:
/// - `order_flow_imbalance`: The snapshot's order imbalance
/// - `depth_imbalance`: (bid_vol - ask_vol) / (bid_vol + ask_vol)
/// - `price_momentum`: Relative mid change against `lookback` ticks ago
/// - `price_volatility`: Population variance of the `lookback` preceding mids
/// - `spread_change`: Spread delta against the previous tick
/// - `vwap_bid` / `vwap_ask`: Size-weighted price per side
/// - `future_return` / `future_direction`: One-tick-ahead label
///
/// The first `lookback` snapshots only feed the lookback and produce no record.
#[derive(Debug, Clone)]
pub struct FeatureExtractor {
    lookback: usize,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FeatureExtractor {
    /// Create with the standard 10-tick lookback
    pub fn new() -> Self {
        Self { lookback: LOOKBACK }
    }

    /// Create with a custom lookback
    pub fn with_lookback(lookback: usize) -> Self {
        Self {
            lookback: lookback.max(1),
        }
    }

    pub fn lookback(&self) -> usize {
        self.lookback
    }

    /// Extract one record per snapshot at index >= lookback
    ///
    /// The final record has no following tick; its `future_return` is 0 and
    /// its direction is flat. `spread_change` of the first emitted record is 0.
    pub fn extract(&self, snapshots: &[OrderBookSnapshot]) -> Vec<FeatureRecord> {
        if snapshots.len() <= self.lookback {
            return Vec::new();
        }

        let mids: Vec<f64> = snapshots.iter().map(|s| s.mid_price().to_f64()).collect();
        let mut features = Vec::with_capacity(snapshots.len() - self.lookback);

        for i in self.lookback..snapshots.len() {
            let snapshot = &snapshots[i];
            let mid = mids[i];
            let spread = snapshot.spread().to_f64();

            let window = &mids[i - self.lookback..i];
            let price_momentum = simple_return(window[0], mid).unwrap_or(0.0);
            let price_volatility = population_variance(window);

            let spread_change = if i == self.lookback {
                0.0
            } else {
                spread - snapshots[i - 1].spread().to_f64()
            };

            let future_return = mids
                .get(i + 1)
                .and_then(|&next| simple_return(mid, next))
                .unwrap_or(0.0);

            let total_bid = snapshot.total_bid_volume();
            let total_ask = snapshot.total_ask_volume();

            features.push(FeatureRecord {
                timestamp: snapshot.timestamp(),
                mid_price: mid,
                spread,
                order_flow_imbalance: snapshot.order_imbalance().value(),
                depth_imbalance: Self::depth_imbalance(total_bid, total_ask),
                price_momentum,
                price_volatility,
                spread_change,
                vwap_bid: Self::vwap(snapshot.bid_levels()),
                vwap_ask: Self::vwap(snapshot.ask_levels()),
                total_bid_volume: total_bid,
                total_ask_volume: total_ask,
                volatility: snapshot.volatility(),
                future_return,
                future_direction: FutureDirection::from_return(future_return),
            });
        }

        log::debug!(
            "Extracted {} feature records from {} snapshots",
            features.len(),
            snapshots.len()
        );
        features
    }

    /// Calculate depth imbalance across the visible book
    ///
    /// imbalance = (bid - ask) / (bid + ask), 0 when both sides are empty
    pub fn depth_imbalance(total_bid: u64, total_ask: u64) -> f64 {
        let total = total_bid + total_ask;
        if total == 0 {
            return 0.0;
        }
        (total_bid as f64 - total_ask as f64) / total as f64
    }

    /// Calculate VWAP for one side of the book, 0 when the side is empty
    pub fn vwap(levels: &[PriceLevel]) -> f64 {
        let total_size: u64 = levels.iter().map(|l| l.size().shares() as u64).sum();
        if total_size == 0 {
            return 0.0;
        }
        let total_value: f64 = levels.iter().map(|l| l.notional()).sum();
        total_value / total_size as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::generators::generate;
    use crate::domain::MarketDynamics;
    use approx::assert_relative_eq;
    use lob_core::{OrderCount, Price, Size, Symbol};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn snapshots(count: usize) -> Vec<OrderBookSnapshot> {
        let mut rng = StdRng::seed_from_u64(42);
        generate(
            count,
            &Symbol::new("AAPL").unwrap(),
            &MarketDynamics::default(),
            &mut rng,
        )
        .unwrap()
    }

    #[test]
    fn test_fifteen_snapshots_yield_five_records() {
        let data = snapshots(15);
        let features = FeatureExtractor::new().extract(&data);

        assert_eq!(features.len(), 5);
        assert_eq!(features[0].timestamp, data[10].timestamp());
        assert_eq!(features[4].timestamp, data[14].timestamp());

        let last = features.last().unwrap();
        assert_eq!(last.future_return, 0.0);
        assert_eq!(last.future_direction, FutureDirection::Flat);
    }

    #[test]
    fn test_short_sequences_yield_nothing() {
        assert!(FeatureExtractor::new().extract(&snapshots(10)).is_empty());
        assert!(FeatureExtractor::new().extract(&[]).is_empty());
        assert_eq!(FeatureExtractor::new().extract(&snapshots(11)).len(), 1);
    }

    #[test]
    fn test_lookback_features_match_manual_computation() {
        let data = snapshots(30);
        let features = FeatureExtractor::new().extract(&data);
        let mids: Vec<f64> = data.iter().map(|s| s.mid_price().to_f64()).collect();

        // Record k corresponds to snapshot k + 10
        let k = 7;
        let i = k + LOOKBACK;
        let record = &features[k];

        assert_relative_eq!(
            record.price_momentum,
            (mids[i] - mids[i - 10]) / mids[i - 10]
        );

        let window = &mids[i - 10..i];
        let m = window.iter().sum::<f64>() / 10.0;
        let var = window.iter().map(|p| (p - m).powi(2)).sum::<f64>() / 10.0;
        assert_relative_eq!(record.price_volatility, var);

        assert_relative_eq!(
            record.spread_change,
            data[i].spread().to_f64() - data[i - 1].spread().to_f64()
        );

        let expected_return = (mids[i + 1] - mids[i]) / mids[i];
        assert_relative_eq!(record.future_return, expected_return);
        assert_eq!(
            record.future_direction,
            FutureDirection::from_return(expected_return)
        );
    }

    #[test]
    fn test_first_spread_change_is_zero() {
        let features = FeatureExtractor::new().extract(&snapshots(20));
        assert_eq!(features[0].spread_change, 0.0);
    }

    #[test]
    fn test_custom_lookback() {
        let data = snapshots(20);
        let extractor = FeatureExtractor::with_lookback(4);
        assert_eq!(extractor.lookback(), 4);

        let features = extractor.extract(&data);
        assert_eq!(features.len(), 16);
        assert_eq!(features[0].timestamp, data[4].timestamp());
        assert_eq!(features[0].spread_change, 0.0);
        assert_relative_eq!(
            features[1].spread_change,
            data[5].spread().to_f64() - data[4].spread().to_f64()
        );

        let mids: Vec<f64> = data.iter().map(|s| s.mid_price().to_f64()).collect();
        assert_relative_eq!(features[0].price_momentum, (mids[4] - mids[0]) / mids[0]);
    }

    #[test]
    fn test_zero_lookback_is_raised_to_one() {
        let data = snapshots(5);
        let extractor = FeatureExtractor::with_lookback(0);
        assert_eq!(extractor.lookback(), 1);

        let features = extractor.extract(&data);
        assert_eq!(features.len(), 4);
        assert_eq!(features[0].timestamp, data[1].timestamp());
        assert_eq!(features[0].price_volatility, 0.0);
    }

    #[test]
    fn test_depth_imbalance_bounds_and_guard() {
        assert_eq!(FeatureExtractor::depth_imbalance(0, 0), 0.0);
        assert_relative_eq!(FeatureExtractor::depth_imbalance(300, 100), 0.5);
        assert_relative_eq!(FeatureExtractor::depth_imbalance(0, 100), -1.0);

        for record in FeatureExtractor::new().extract(&snapshots(200)) {
            assert!((-1.0..=1.0).contains(&record.depth_imbalance));
        }
    }

    #[test]
    fn test_vwap() {
        assert_eq!(FeatureExtractor::vwap(&[]), 0.0);

        let level = |price: f64, size: u32| {
            PriceLevel::new(
                Price::from_f64(price),
                Size::new(size).unwrap(),
                OrderCount::new(1).unwrap(),
            )
            .unwrap()
        };
        let levels = [level(100.0, 100), level(99.0, 300)];
        assert_relative_eq!(FeatureExtractor::vwap(&levels), 99.25);
    }

    #[test]
    fn test_vwap_inside_book() {
        for (record, snapshot) in FeatureExtractor::new()
            .extract(&snapshots(100))
            .iter()
            .zip(snapshots(100).iter().skip(LOOKBACK))
        {
            assert!(record.vwap_bid <= snapshot.best_bid().to_f64() + 1e-9);
            assert!(record.vwap_ask >= snapshot.best_ask().to_f64() - 1e-9);
        }
    }
}

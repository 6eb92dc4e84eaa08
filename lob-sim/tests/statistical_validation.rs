//! Statistical validation tests for the snapshot simulator
//!
//! These tests verify that the generated sequence reproduces the intended
//! microstructure dynamics within acceptable tolerances.

use lob_core::{NUM_LEVELS, OrderBookSnapshot, Symbol, TradeSide};
use lob_sim::{FeatureExtractor, MarketDynamics, generate};
use rand::SeedableRng;
use rand::rngs::StdRng;

const N_SAMPLES: usize = 5000;
const SEED: u64 = 42;

/// Compute mean of a slice
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Lag-k autocorrelation
fn autocorrelation(values: &[f64], lag: usize) -> f64 {
    let m = mean(values);
    let var: f64 = values.iter().map(|x| (x - m).powi(2)).sum();
    let cov: f64 = values
        .windows(lag + 1)
        .map(|w| (w[0] - m) * (w[lag] - m))
        .sum();
    cov / var
}

fn simulate() -> Vec<OrderBookSnapshot> {
    let mut rng = StdRng::seed_from_u64(SEED);
    generate(
        N_SAMPLES,
        &Symbol::new("AAPL").unwrap(),
        &MarketDynamics::default(),
        &mut rng,
    )
    .unwrap()
}

#[test]
fn test_volatility_clusters() {
    let snapshots = simulate();
    let vols: Vec<f64> = snapshots.iter().map(|s| s.volatility()).collect();

    let rho = autocorrelation(&vols, 1);
    println!("Volatility lag-1 autocorrelation: {:.3}", rho);
    assert!(rho > 0.8, "volatility should be persistent, got {:.3}", rho);

    // Stationary mean is base_volatility * E|z| = base * sqrt(2/pi)
    let expected = MarketDynamics::default().base_volatility * (2.0 / std::f64::consts::PI).sqrt();
    let actual = mean(&vols[500..]);
    let relative_error = (actual - expected).abs() / expected;
    assert!(
        relative_error < 0.25,
        "mean volatility {:.6} differs from {:.6} by {:.1}%",
        actual,
        expected,
        relative_error * 100.0
    );
}

#[test]
fn test_depth_decay_pattern() {
    let snapshots = simulate();

    let level_means: Vec<f64> = (0..NUM_LEVELS)
        .map(|level| {
            let sizes: Vec<f64> = snapshots
                .iter()
                .map(|s| s.bid_levels()[level].size().shares() as f64)
                .collect();
            mean(&sizes)
        })
        .collect();

    println!("Bid depth per level: {:?}", level_means);
    for i in 1..NUM_LEVELS {
        assert!(
            level_means[i] < level_means[i - 1],
            "Depth should decay: level {} ({:.1}) >= level {} ({:.1})",
            i,
            level_means[i],
            i - 1,
            level_means[i - 1]
        );
    }
}

#[test]
fn test_imbalance_skews_depth_and_trades() {
    let snapshots = simulate();
    let skewed: Vec<&OrderBookSnapshot> = snapshots
        .iter()
        .filter(|s| s.order_imbalance().value() > 0.3)
        .collect();
    assert!(skewed.len() > 100, "need enough skewed ticks, got {}", skewed.len());

    // Positive imbalance thins the bid side and thickens the ask side
    let bid: Vec<f64> = skewed.iter().map(|s| s.total_bid_volume() as f64).collect();
    let ask: Vec<f64> = skewed.iter().map(|s| s.total_ask_volume() as f64).collect();
    assert!(mean(&bid) < mean(&ask));

    // and tilts the aggressor towards buys
    let buys = skewed
        .iter()
        .filter(|s| s.last_trade().side() == TradeSide::Buy)
        .count();
    let buy_fraction = buys as f64 / skewed.len() as f64;
    println!("Buy fraction under positive imbalance: {:.3}", buy_fraction);
    assert!(buy_fraction > 0.5);
}

#[test]
fn test_spread_tracks_volatility() {
    let snapshots = simulate();
    let dynamics = MarketDynamics::default();
    for s in &snapshots {
        let expected = dynamics.spread_for(s.volatility());
        assert!((s.spread().to_f64() - expected).abs() < 1e-8);
    }
}

#[test]
fn test_feature_pipeline_over_long_run() {
    let snapshots = simulate();
    let features = FeatureExtractor::new().extract(&snapshots);
    assert_eq!(features.len(), N_SAMPLES - 10);

    let ups = features
        .iter()
        .filter(|f| f.future_direction.as_i8() == 1)
        .count();
    let downs = features
        .iter()
        .filter(|f| f.future_direction.as_i8() == -1)
        .count();
    // A driftless random walk moves both ways
    assert!(ups > N_SAMPLES / 4);
    assert!(downs > N_SAMPLES / 4);
}

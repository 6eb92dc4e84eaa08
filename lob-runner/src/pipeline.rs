//! Dataset generation and rolling model evaluation

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::report::{AnalysisResult, ArimaPoint, GarchPoint, MetricsReport, RegimePoint};
use forecasting::{ArPredictor, RegimeClassifier, ThresholdClassifier, VolatilityFilter, score};
use lob_core::stats::{mean, simple_return};
use lob_core::{FeatureRecord, OrderBookSnapshot};
use lob_sim::{FeatureExtractor, SnapshotSimulator};
use rand::Rng;

/// Snapshots between progress log lines during generation
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Simulated snapshots and the features derived from them
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub snapshots: Vec<OrderBookSnapshot>,
    pub features: Vec<FeatureRecord>,
}

/// Simulate `simulation.num_records` snapshots and extract their features
pub fn generate_dataset<R: Rng + ?Sized>(
    config: &AnalysisConfig,
    rng: &mut R,
) -> Result<Dataset, AnalysisError> {
    let sim = &config.simulation;
    let mut simulator = SnapshotSimulator::new(sim.market.clone(), sim.symbol()?)?;

    log::info!(
        "Generating {} snapshots for {}",
        sim.num_records,
        sim.symbol
    );
    let mut snapshots = Vec::with_capacity(sim.num_records);
    for i in 1..=sim.num_records {
        snapshots.push(simulator.next_snapshot(rng)?);
        if i % PROGRESS_INTERVAL == 0 {
            log::info!("Generated {}/{} snapshots", i, sim.num_records);
        }
    }

    let features = FeatureExtractor::new().extract(&snapshots);
    log::info!("Extracted {} feature records", features.len());

    Ok(Dataset {
        snapshots,
        features,
    })
}

/// Fit both models on the leading `train_fraction` of `features` and score
/// rolling one-step forecasts over the remainder
///
/// The configuration is validated first, so a `train_fraction` outside
/// (0, 1) is reported as [`AnalysisError::Config`].
pub fn run_analysis(
    features: &[FeatureRecord],
    config: &AnalysisConfig,
) -> Result<AnalysisResult, AnalysisError> {
    config.validate()?;
    if features.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let prices: Vec<f64> = features.iter().map(|f| f.mid_price).collect();
    let returns: Vec<f64> = prices
        .windows(2)
        .map(|w| simple_return(w[0], w[1]).unwrap_or(0.0))
        .collect();
    let train = (prices.len() as f64 * config.train_fraction).floor() as usize;
    log::info!(
        "Analysing {} records: {} for fitting, {} for evaluation",
        prices.len(),
        train,
        prices.len() - train
    );

    let arima_points = evaluate_ar(features, &prices, train, config)?;
    let garch_points = evaluate_volatility(features, &returns, train, config)?;

    let metrics = MetricsReport {
        arima: score(
            &arima_points.iter().map(|p| p.actual).collect::<Vec<_>>(),
            &arima_points.iter().map(|p| p.predicted).collect::<Vec<_>>(),
        ),
        garch: score(
            &garch_points.iter().map(|p| p.actual_volatility).collect::<Vec<_>>(),
            &garch_points.iter().map(|p| p.forecast_volatility).collect::<Vec<_>>(),
        ),
    };
    log::info!(
        "AR: RMSE {:.6}, MAE {:.6}, direction accuracy {:.2}%",
        metrics.arima.rmse,
        metrics.arima.mae,
        metrics.arima.direction_accuracy
    );
    log::info!(
        "Volatility: RMSE {:.6}, MAE {:.6}",
        metrics.garch.rmse,
        metrics.garch.mae
    );

    let volatility_regimes = label_regimes(features, config.output.regime_window);

    Ok(AnalysisResult {
        arima_results: tail(arima_points, config.output.results_tail),
        garch_results: tail(garch_points, config.output.results_tail),
        metrics,
        volatility_regimes,
    })
}

fn evaluate_ar(
    features: &[FeatureRecord],
    prices: &[f64],
    train: usize,
    config: &AnalysisConfig,
) -> Result<Vec<ArimaPoint>, AnalysisError> {
    let mut model = ArPredictor::new(config.arima.p, config.arima.d)?;
    model.fit(&prices[..train])?;

    let mut points = Vec::with_capacity(prices.len() - train);
    for i in train..prices.len() {
        model.observe(prices[i - 1]);
        let predicted = model.predict(1).first().unwrap_or(prices[i - 1]);
        let actual = prices[i];
        points.push(ArimaPoint {
            timestamp: features[i].timestamp,
            actual,
            predicted,
            error: actual - predicted,
        });
    }
    Ok(points)
}

fn evaluate_volatility(
    features: &[FeatureRecord],
    returns: &[f64],
    train: usize,
    config: &AnalysisConfig,
) -> Result<Vec<GarchPoint>, AnalysisError> {
    let mut filter = VolatilityFilter::with_history_capacity(
        config.garch.params(),
        config.garch.history_capacity,
    )?;
    filter.fit(&returns[..train])?;
    log::debug!(
        "Volatility filter long-run variance {:?}",
        filter.long_run_variance()
    );

    let mut points = Vec::with_capacity(returns.len().saturating_sub(train));
    for (i, &r) in returns.iter().enumerate().skip(train) {
        let forecast_volatility = filter.forecast(1)?.first().copied().unwrap_or(0.0);
        let conditional_variance = filter.update(r);
        // returns[i] is realized at record i + 1
        points.push(GarchPoint {
            timestamp: features[i + 1].timestamp,
            actual_volatility: r.abs(),
            forecast_volatility,
            conditional_variance,
        });
    }
    Ok(points)
}

/// Label the trailing `window` records against the mean volatility of the
/// whole sequence
fn label_regimes(features: &[FeatureRecord], window: usize) -> Vec<RegimePoint> {
    let classifier = ThresholdClassifier::default();
    let volatilities: Vec<f64> = features.iter().map(|f| f.volatility).collect();
    let window_mean = mean(&volatilities);
    log::debug!(
        "Labelling regimes with {} classifier, mean volatility {:.6}",
        classifier.name(),
        window_mean
    );

    let start = features.len().saturating_sub(window);
    features[start..]
        .iter()
        .map(|f| RegimePoint {
            timestamp: f.timestamp,
            volatility: f.volatility,
            regime: classifier.classify(f.volatility, window_mean),
        })
        .collect()
}

fn tail<T>(mut points: Vec<T>, keep: usize) -> Vec<T> {
    let start = points.len().saturating_sub(keep);
    points.split_off(start)
}

//! Forecast Evaluation and Regime Labelling

mod protocol;
mod scoring;
mod threshold;

pub use protocol::RegimeClassifier;
pub use scoring::score;
pub use threshold::{ThresholdClassifier, classify_regime};

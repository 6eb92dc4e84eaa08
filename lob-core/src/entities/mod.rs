mod feature;
mod price_level;
mod snapshot;

pub use feature::{FeatureRecord, FutureDirection};
pub use price_level::PriceLevel;
pub use snapshot::{LastTrade, NUM_LEVELS, OrderBookSnapshot};

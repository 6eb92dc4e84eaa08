//! Shared kernel for the limit-order-book synthesis workspace
//!
//! Value objects and entities produced by the simulator, consumed by the
//! feature extractor and the forecasting models. Every constrained field is a
//! validated newtype so an invalid book can never be constructed.

pub mod entities;
pub mod error;
pub mod stats;
pub mod value_objects;

// Re-export value objects at crate root for convenience
pub use value_objects::{
    Imbalance, OrderCount, PRICE_DECIMALS, PRICE_SCALE, Price, Size, Symbol, Timestamp, TradeSide,
};

// Re-export entities at crate root
pub use entities::{
    FeatureRecord, FutureDirection, LastTrade, NUM_LEVELS, OrderBookSnapshot, PriceLevel,
};

pub use error::{DomainError, Result};

// Re-export stats at crate root
pub use stats::RingBuffer;

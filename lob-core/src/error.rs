use thiserror::Error;

/// Violations of the order-book value invariants
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Size {0} is below the minimum lot of {min}", min = crate::Size::MIN)]
    SizeBelowMinimum(u32),

    #[error("Order count {0} outside [1, 10]")]
    OrderCountOutOfRange(u32),

    #[error("Price must be positive: {0}")]
    NonPositivePrice(f64),

    #[error("Crossed book: best bid {best_bid} / mid {mid} / best ask {best_ask}")]
    CrossedBook {
        best_bid: f64,
        mid: f64,
        best_ask: f64,
    },

    #[error("Expected {expected} levels per side, got {actual}")]
    LevelCount { expected: usize, actual: usize },

    #[error("Trade size {0} is not a multiple of {lot}", lot = crate::Size::MIN)]
    OddLotTrade(u32),

    #[error("Volatility must be positive and finite: {0}")]
    NonPositiveVolatility(f64),

    #[error("Invalid symbol: {0}")]
    InvalidSymbol(&'static str),

    #[error("Invalid direction: {0} (must be -1, 0 or 1)")]
    InvalidDirection(i8),
}

pub type Result<T> = std::result::Result<T, DomainError>;

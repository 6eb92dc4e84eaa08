use crate::error::DomainError;
use crate::value_objects::{OrderCount, Price, Size};
use serde::{Deserialize, Serialize};

/// A single resting price level on one side of the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    price: Price,
    size: Size,
    orders: OrderCount,
}

impl PriceLevel {
    pub fn new(price: Price, size: Size, orders: OrderCount) -> Result<Self, DomainError> {
        if !price.is_positive() {
            return Err(DomainError::NonPositivePrice(price.to_f64()));
        }
        Ok(PriceLevel {
            price,
            size,
            orders,
        })
    }

    #[inline]
    pub fn price(&self) -> Price {
        self.price
    }

    #[inline]
    pub fn size(&self) -> Size {
        self.size
    }

    #[inline]
    pub fn orders(&self) -> OrderCount {
        self.orders
    }

    /// Price times size, in quote currency
    #[inline]
    pub fn notional(&self) -> f64 {
        self.price.to_f64() * self.size.shares() as f64
    }
}

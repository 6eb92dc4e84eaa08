//! Integer size and order-count value objects

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resting or traded size in shares, never below one round lot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(transparent)]
pub struct Size(u32);

impl Size {
    /// Minimum displayed size (one round lot)
    pub const MIN: u32 = 100;

    pub fn new(shares: u32) -> Result<Self, DomainError> {
        if shares < Self::MIN {
            return Err(DomainError::SizeBelowMinimum(shares));
        }
        Ok(Self(shares))
    }

    /// Build from a continuous draw, flooring to the minimum lot
    ///
    /// Fractional shares are truncated after the floor is applied.
    pub fn floored(value: f64) -> Self {
        let shares = value.max(Self::MIN as f64);
        Self((shares as u32).max(Self::MIN))
    }

    #[inline(always)]
    pub const fn shares(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Size {
    type Error = DomainError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Size::new(value)
    }
}

impl From<Size> for u32 {
    fn from(size: Size) -> Self {
        size.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of resting orders at a level, in [1, 10]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(transparent)]
pub struct OrderCount(u8);

impl OrderCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn new(count: u32) -> Result<Self, DomainError> {
        if count < Self::MIN as u32 || count > Self::MAX as u32 {
            return Err(DomainError::OrderCountOutOfRange(count));
        }
        Ok(Self(count as u8))
    }

    #[inline(always)]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u32> for OrderCount {
    type Error = DomainError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        OrderCount::new(value)
    }
}

impl From<OrderCount> for u32 {
    fn from(count: OrderCount) -> Self {
        count.0 as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_minimum() {
        assert!(Size::new(100).is_ok());
        assert_eq!(Size::new(99), Err(DomainError::SizeBelowMinimum(99)));
    }

    #[test]
    fn test_size_floored() {
        assert_eq!(Size::floored(-250.0).shares(), 100);
        assert_eq!(Size::floored(99.9).shares(), 100);
        assert_eq!(Size::floored(512.7).shares(), 512);
    }

    #[test]
    fn test_order_count_range() {
        assert!(OrderCount::new(0).is_err());
        assert_eq!(OrderCount::new(1).unwrap().get(), 1);
        assert_eq!(OrderCount::new(10).unwrap().get(), 10);
        assert!(OrderCount::new(11).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        assert!(serde_json::from_str::<Size>("50").is_err());
        assert_eq!(serde_json::from_str::<Size>("300").unwrap().shares(), 300);
        assert!(serde_json::from_str::<OrderCount>("12").is_err());
    }
}

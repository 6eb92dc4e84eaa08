//! Fixed-point price representation
//!
//! Uses i64 with 8 implied decimal places (scale = 100_000_000).
//! Quoted level prices are additionally rounded to the market's display
//! precision with [`Price::round_dp`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Scale factor: 8 decimal places
pub const PRICE_DECIMALS: u8 = 8;
pub const PRICE_SCALE: i64 = 100_000_000;

/// Fixed-point price with 8 decimal places
///
/// Internally stored as i64 where the value represents:
/// actual_price = raw_value / 100_000_000
///
/// Serialized as a plain decimal number so downstream consumers see `149.99`
/// rather than the raw scaled integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", from = "f64")]
#[repr(transparent)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);
    pub const DECIMALS: u8 = PRICE_DECIMALS;
    pub const SCALE: i64 = PRICE_SCALE;

    /// Create from raw scaled value
    #[inline(always)]
    pub const fn from_raw(raw: i64) -> Self {
        Self(raw)
    }

    /// Create from integer (whole number)
    #[inline(always)]
    pub const fn from_int(value: i64) -> Self {
        Self(value * PRICE_SCALE)
    }

    /// Get the raw scaled value
    #[inline(always)]
    pub const fn raw(self) -> i64 {
        self.0
    }

    #[inline(always)]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Round half away from zero to `decimals` places (clamped to 8)
    pub fn round_dp(self, decimals: u8) -> Price {
        let decimals = decimals.min(PRICE_DECIMALS);
        let unit = 10i64.pow((PRICE_DECIMALS - decimals) as u32);
        if unit == 1 {
            return self;
        }
        let half = unit / 2;
        let rounded = if self.0 >= 0 {
            (self.0 + half) / unit
        } else {
            (self.0 - half) / unit
        };
        Price(rounded * unit)
    }

    /// Convert to f64 (for the statistical layers)
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 / PRICE_SCALE as f64
    }

    /// Create from f64, rounding to the nearest raw unit
    #[inline]
    pub fn from_f64(value: f64) -> Self {
        Self((value * PRICE_SCALE as f64).round() as i64)
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let int_part = (self.0 / PRICE_SCALE).abs();
        let frac_part = (self.0 % PRICE_SCALE).abs();
        write!(f, "{}{}.{:08}", sign, int_part, frac_part)
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.to_f64()
    }
}

impl From<f64> for Price {
    fn from(value: f64) -> Self {
        Price::from_f64(value)
    }
}

impl Add for Price {
    type Output = Price;
    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Price(self.0 + rhs.0)
    }
}

impl Sub for Price {
    type Output = Price;
    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Price(self.0 - rhs.0)
    }
}

//! Clipped order-flow imbalance

use serde::{Deserialize, Serialize};

/// Signed buy/sell pressure, always within [-LIMIT, LIMIT]
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
#[repr(transparent)]
pub struct Imbalance(f64);

impl Imbalance {
    pub const LIMIT: f64 = 0.8;
    pub const ZERO: Imbalance = Imbalance(0.0);

    /// Hard-clip a raw imbalance draw into the admissible range
    ///
    /// NaN collapses to zero.
    pub fn clipped(value: f64) -> Self {
        if value.is_nan() {
            return Self::ZERO;
        }
        Self(value.clamp(-Self::LIMIT, Self::LIMIT))
    }

    #[inline(always)]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl From<f64> for Imbalance {
    fn from(value: f64) -> Self {
        Imbalance::clipped(value)
    }
}

impl From<Imbalance> for f64 {
    fn from(imbalance: Imbalance) -> Self {
        imbalance.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clipping() {
        assert_eq!(Imbalance::clipped(1.7).value(), 0.8);
        assert_eq!(Imbalance::clipped(-0.95).value(), -0.8);
        assert_eq!(Imbalance::clipped(0.25).value(), 0.25);
        assert_eq!(Imbalance::clipped(f64::NAN).value(), 0.0);
    }
}

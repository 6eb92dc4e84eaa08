//! Volatility Regime Types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Volatility level of a snapshot relative to the mean of its window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum VolatilityRegime {
    /// Well below the window mean
    Low,
    #[default]
    Normal,
    /// Well above the window mean
    High,
}

impl VolatilityRegime {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolatilityRegime::Low => "low",
            VolatilityRegime::Normal => "normal",
            VolatilityRegime::High => "high",
        }
    }
}

impl fmt::Display for VolatilityRegime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regime_serializes_lowercase() {
        let json = serde_json::to_string(&VolatilityRegime::High).unwrap();
        assert_eq!(json, "\"high\"");

        let parsed: VolatilityRegime = serde_json::from_str("\"low\"").unwrap();
        assert_eq!(parsed, VolatilityRegime::Low);
    }

    #[test]
    fn test_regime_display_matches_wire_name() {
        for regime in [
            VolatilityRegime::Low,
            VolatilityRegime::Normal,
            VolatilityRegime::High,
        ] {
            let json = serde_json::to_string(&regime).unwrap();
            assert_eq!(json, format!("\"{}\"", regime));
        }
    }
}

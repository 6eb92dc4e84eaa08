use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Instrument ticker, uppercase alphanumeric (dots and dashes allowed for share classes)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Symbol(String);

impl Symbol {
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let s: String = value.into();
        if s.is_empty() {
            return Err(DomainError::InvalidSymbol("symbol cannot be empty"));
        }
        if s.len() > 20 {
            return Err(DomainError::InvalidSymbol("symbol too long (max 20 chars)"));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return Err(DomainError::InvalidSymbol("symbol must be alphanumeric"));
        }
        Ok(Symbol(s.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Symbol {
    type Error = DomainError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl TryFrom<String> for Symbol {
    type Error = DomainError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_normalized() {
        assert_eq!(Symbol::new("aapl").unwrap().as_str(), "AAPL");
        assert_eq!(Symbol::new("BRK.B").unwrap().as_str(), "BRK.B");
    }

    #[test]
    fn test_symbol_rejected() {
        assert!(Symbol::new("").is_err());
        assert!(Symbol::new("A APL").is_err());
        assert!(Symbol::new("X".repeat(21)).is_err());
    }
}

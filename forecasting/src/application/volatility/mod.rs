//! Conditional Volatility Filtering
//!
//! GARCH(1,1) variance recursion with fixed parameters:
//!
//! ```text
//! σ²ₜ = ω + α·r²ₜ₋₁ + β·σ²ₜ₋₁
//! ```

mod garch;

pub use garch::{GarchParams, MIN_FIT_RETURNS, VolatilityFilter};

//! Domain layer: parameters of the simulated market

mod market_dynamics;

pub use market_dynamics::MarketDynamics;

mod imbalance;
mod price;
mod side;
mod size;
mod symbol;

pub use imbalance::Imbalance;
pub use price::{PRICE_DECIMALS, PRICE_SCALE, Price};
pub use side::TradeSide;
pub use size::{OrderCount, Size};
pub use symbol::Symbol;

pub type Timestamp = chrono::DateTime<chrono::Utc>;

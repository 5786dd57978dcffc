//! Price Gate (§4.6): per-card and cumulative price ceilings enforced
//! during composition, backed by the `PriceOracle` capability (§6).

pub mod gate;
pub mod oracle;

pub use gate::PriceGate;
pub use oracle::{PriceOracle, PriceLookup, ScryfallPriceOracle};

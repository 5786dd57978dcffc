//! Scryfall HTTP client used by the Price Gate's `PriceOracle`
//! implementation. The crate's only network collaborator (§1 — external
//! price oracle is an out-of-scope collaborator; this is the one
//! concrete implementation we ship for it).

pub mod cache;
pub mod scryfall;
pub mod traits;
pub mod types;

//! `PriceGate` (§4.6): a session-local object that every builder
//! consults between selecting a card and inserting it.
//!
//! Grounded on the teacher's `api/traits.rs::ApiError` retryable split
//! (reused unchanged as the `PriceErrorKind` retry classification) and
//! `api/cache.rs`'s in-memory-then-disk caching shape, here narrowed to
//! a single run's price cache (§5: "local to a single composition run
//! and owned by the composer").

use std::cell::RefCell;
use std::collections::HashMap;

use crate::config::PRICE_TOLERANCE;
use crate::error::{DeckError, DeckResult, PriceErrorKind};

use super::oracle::{PriceLookup, PriceOracle};

/// Enforces `max_card_price` and `max_deck_price` ceilings against a
/// `PriceOracle`. The `unlimited` sentinel bypasses both checks without
/// ever consulting the oracle.
pub struct PriceGate {
    oracle: Option<Box<dyn PriceOracle>>,
    max_card_price: Option<f64>,
    max_deck_price: Option<f64>,
    cache: RefCell<HashMap<String, Option<f64>>>,
    running_total: RefCell<f64>,
}

impl PriceGate {
    pub fn new(oracle: Box<dyn PriceOracle>, max_card_price: Option<f64>, max_deck_price: Option<f64>) -> Self {
        Self {
            oracle: Some(oracle),
            max_card_price,
            max_deck_price,
            cache: RefCell::new(HashMap::new()),
            running_total: RefCell::new(0.0),
        }
    }

    /// The `unlimited` sentinel: no ceilings, no oracle calls.
    pub fn unlimited() -> Self {
        Self {
            oracle: None,
            max_card_price: None,
            max_deck_price: None,
            cache: RefCell::new(HashMap::new()),
            running_total: RefCell::new(0.0),
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.oracle.is_none() && self.max_card_price.is_none() && self.max_deck_price.is_none()
    }

    /// Synchronous-looking lookup from the builder's point of view;
    /// caches the resolved price (or `None` for Unknown) for the life
    /// of this run.
    pub async fn price_of(&self, name: &str) -> DeckResult<Option<f64>> {
        if let Some(cached) = self.cache.borrow().get(name) {
            return Ok(*cached);
        }
        let Some(oracle) = &self.oracle else {
            return Ok(None);
        };
        let price = match oracle.lookup(name).await? {
            PriceLookup::Found(p) => Some(p),
            PriceLookup::Unknown => None,
        };
        self.cache.borrow_mut().insert(name.to_string(), price);
        Ok(price)
    }

    /// Succeeds iff `price <= max_card_price * 1.1`. An Unknown price
    /// (the oracle couldn't resolve one) is accepted — the tolerance in
    /// T10 is deliberate.
    pub fn check_card(&self, name: &str, price: Option<f64>) -> DeckResult<()> {
        let Some(limit) = self.max_card_price else {
            return Ok(());
        };
        match price {
            None => Ok(()),
            Some(p) if p <= limit * PRICE_TOLERANCE => Ok(()),
            Some(p) => Err(DeckError::Price(PriceErrorKind::limit_exceeded(name, p, limit))),
        }
    }

    pub fn accumulate(&self, price: f64) {
        *self.running_total.borrow_mut() += price;
    }

    /// Succeeds iff the running total `<= max_deck_price * 1.1`.
    pub fn check_deck(&self) -> DeckResult<()> {
        let Some(limit) = self.max_deck_price else {
            return Ok(());
        };
        let total = *self.running_total.borrow();
        if total <= limit * PRICE_TOLERANCE {
            Ok(())
        } else {
            Err(DeckError::Price(PriceErrorKind::not_retryable(format!(
                "deck total ${total:.2} exceeds ${limit:.2} limit"
            ))))
        }
    }

    /// Combines the price lookup, the per-card check, and the running
    /// total update into the single operation every builder calls
    /// between selecting a candidate and inserting it. A PriceError
    /// (oracle failure or limit breach) is non-fatal: the card is
    /// skipped and the builder moves to the next candidate (§7).
    pub async fn admit(&self, name: &str) -> bool {
        if self.is_unlimited() {
            return true;
        }
        let price = match self.price_of(name).await {
            Ok(p) => p,
            Err(e) => {
                log::warn!("price lookup failed for {name}: {e}");
                return false;
            }
        };
        if self.check_card(name, price).is_err() {
            return false;
        }
        if let Some(p) = price {
            self.accumulate(p);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct FixedOracle(f64);

    #[async_trait]
    impl PriceOracle for FixedOracle {
        async fn lookup(&self, _name: &str) -> DeckResult<PriceLookup> {
            Ok(PriceLookup::Found(self.0))
        }
    }

    #[tokio::test]
    async fn unlimited_gate_admits_everything() {
        let gate = PriceGate::unlimited();
        assert!(gate.admit("Anything, $1000 or not").await);
    }

    #[tokio::test]
    async fn card_within_tolerance_is_admitted() {
        let gate = PriceGate::new(Box::new(FixedOracle(5.5)), Some(5.0), None);
        assert!(gate.admit("Some Card").await);
    }

    #[tokio::test]
    async fn card_over_tolerance_is_rejected() {
        let gate = PriceGate::new(Box::new(FixedOracle(18.0)), Some(5.0), None);
        assert!(!gate.admit("Expensive Card").await);
    }

    #[tokio::test]
    async fn deck_total_accumulates_and_enforces_ceiling() {
        let gate = PriceGate::new(Box::new(FixedOracle(50.0)), None, Some(90.0));
        assert!(gate.admit("A").await);
        assert!(gate.admit("B").await);
        assert!(gate.check_deck().is_err());
    }
}

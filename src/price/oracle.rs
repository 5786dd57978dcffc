//! The `PriceOracle` capability (§6): `name -> USD price | Unknown`.
//!
//! Grounded on the teacher's `api/scryfall.rs` (cached Scryfall HTTP
//! client) and `api/cache.rs` (disk-backed TTL cache), narrowed from a
//! general card-data API to a single price lookup.

use async_trait::async_trait;
use std::time::Duration;

use crate::api::scryfall::ScryfallClient;
use crate::api::traits::CardApi;
use crate::config::{PRICE_MAX_RETRIES, PRICE_RETRY_DELAY_MS};
use crate::error::{DeckError, DeckResult, PriceErrorKind};

/// The result of a single price lookup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PriceLookup {
    Found(f64),
    Unknown,
}

/// `name -> Money | Unknown | TransientError | PermanentError` (§6).
/// Implementations may cache and rate-limit.
#[async_trait]
pub trait PriceOracle: Send + Sync {
    async fn lookup(&self, name: &str) -> DeckResult<PriceLookup>;
}

/// Scryfall-backed oracle. Bounded retry (≤3) with fixed 100ms backoff
/// on transient errors, per §4.6.
pub struct ScryfallPriceOracle {
    client: ScryfallClient,
}

impl ScryfallPriceOracle {
    pub fn new() -> Self {
        Self {
            client: ScryfallClient::new(),
        }
    }
}

impl Default for ScryfallPriceOracle {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PriceOracle for ScryfallPriceOracle {
    async fn lookup(&self, name: &str) -> DeckResult<PriceLookup> {
        let mut last_message = String::new();
        for attempt in 0..PRICE_MAX_RETRIES {
            match self.client.search_card(name).await {
                Ok(card) => {
                    let usd = card
                        .prices
                        .as_ref()
                        .and_then(|p| p.usd.as_ref())
                        .and_then(|s| s.parse::<f64>().ok());
                    return Ok(match usd {
                        Some(price) => PriceLookup::Found(price),
                        None => PriceLookup::Unknown,
                    });
                }
                Err(e) if e.is_retryable && attempt + 1 < PRICE_MAX_RETRIES => {
                    last_message = e.message;
                    tokio::time::sleep(Duration::from_millis(PRICE_RETRY_DELAY_MS)).await;
                }
                Err(e) => {
                    return Err(DeckError::Price(if e.is_retryable {
                        PriceErrorKind::retryable(e.message)
                    } else {
                        PriceErrorKind::not_retryable(e.message)
                    }));
                }
            }
        }
        Err(DeckError::Price(PriceErrorKind::retryable(format!(
            "gave up after {PRICE_MAX_RETRIES} attempts: {last_message}"
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FlakyOracle {
        calls: std::sync::atomic::AtomicU32,
    }

    #[async_trait]
    impl PriceOracle for FlakyOracle {
        async fn lookup(&self, _name: &str) -> DeckResult<PriceLookup> {
            self.calls.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
            Ok(PriceLookup::Found(4.25))
        }
    }

    #[tokio::test]
    async fn stub_oracle_returns_found() {
        let oracle = FlakyOracle {
            calls: std::sync::atomic::AtomicU32::new(0),
        };
        let result = oracle.lookup("Sol Ring").await.unwrap();
        assert_eq!(result, PriceLookup::Found(4.25));
    }
}

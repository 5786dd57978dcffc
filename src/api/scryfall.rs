#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use serde::Deserialize;

use super::cache::CardCache;
use super::traits::{ApiError, CardApi};
use super::types::Card;

const SCRYFALL_API_BASE: &str = "https://api.scryfall.com";
const APP_USER_AGENT: &str = "commander-forge/0.1.0";

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    code: String,
    details: String,
}

pub struct ScryfallClient {
    client: reqwest::Client,
    cache: CardCache,
}

impl ScryfallClient {
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(APP_USER_AGENT));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            cache: CardCache::new(),
        }
    }

    async fn search_card_impl(&self, query: &str) -> Result<Card, ApiError> {
        if let Some(card) = self.cache.get(query) {
            return Ok(card);
        }

        let url = format!(
            "{}/cards/named?fuzzy={}",
            SCRYFALL_API_BASE,
            urlencoding::encode(query)
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::retryable(e.to_string()))?;

        if response.status().is_success() {
            let card: Card = response
                .json()
                .await
                .map_err(|e| ApiError::not_retryable(format!("Failed to parse response: {e}")))?;
            self.cache.set(&card.name, &card);
            Ok(card)
        } else if response.status().is_server_error() || response.status().as_u16() == 429 {
            Err(ApiError::retryable(format!("Scryfall returned {}", response.status())))
        } else {
            let error: ErrorResponse = response
                .json()
                .await
                .map_err(|e| ApiError::retryable(e.to_string()))?;
            Err(ApiError::not_retryable(format!(
                "{}: {}",
                error.code, error.details
            )))
        }
    }
}

#[async_trait]
impl CardApi for ScryfallClient {
    fn name(&self) -> &'static str {
        "Scryfall"
    }

    async fn search_card(&self, query: &str) -> Result<Card, ApiError> {
        self.search_card_impl(query).await
    }
}

impl Default for ScryfallClient {
    fn default() -> Self {
        Self::new()
    }
}

use async_trait::async_trait;
use std::fmt;

use super::types::Card;

/// Error type for API operations. `is_retryable` distinguishes
/// transient failures (network, rate limit) from permanent ones (card
/// not found, malformed response) — the same split the Price Gate
/// reuses for `PriceErrorKind`.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub message: String,
    pub is_retryable: bool,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_retryable: true,
        }
    }

    pub fn not_retryable(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_retryable: false,
        }
    }
}

/// Trait for MTG card API providers. Narrowed to the one operation the
/// Price Gate needs: a fuzzy name lookup.
#[async_trait]
pub trait CardApi: Send + Sync {
    fn name(&self) -> &'static str;
    async fn search_card(&self, query: &str) -> Result<Card, ApiError>;
}

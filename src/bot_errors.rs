//! # Bot Error Types Module
//!
//! This module defines the error types raised while handling a single update.
//! None of them is fatal: the state dispatcher logs them and drops the update.

use thiserror::Error;

/// Errors produced by the catalog client, the session store and the handlers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BotError {
    /// CMS or image fetch failure (non-2xx, transport error, malformed JSON)
    #[error("Upstream error: {0}")]
    Upstream(String),
    /// A stored state tag that is not one of the known states
    #[error("Unknown state: {0}")]
    UnknownState(String),
    /// Session store read/write failure
    #[error("Store error: {0}")]
    Store(String),
    /// Telegram request failure while replying
    #[error("Telegram error: {0}")]
    Telegram(String),
    /// Menu input that does not name a product
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),
}

impl From<reqwest::Error> for BotError {
    fn from(err: reqwest::Error) -> Self {
        BotError::Upstream(err.to_string())
    }
}

impl From<redis::RedisError> for BotError {
    fn from(err: redis::RedisError) -> Self {
        BotError::Store(err.to_string())
    }
}

impl From<teloxide::RequestError> for BotError {
    fn from(err: teloxide::RequestError) -> Self {
        BotError::Telegram(err.to_string())
    }
}

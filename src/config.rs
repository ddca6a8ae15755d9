//! # Bot Configuration Module
//!
//! This module defines the configuration read from the environment at startup:
//! Telegram credentials, the Strapi endpoint and the session store location.

use anyhow::{anyhow, Context, Result};

// Constants for configuration defaults
pub const DEFAULT_STRAPI_HOST: &str = "http://localhost:1337";
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Strapi endpoint and credentials shared by every catalog request
#[derive(Debug, Clone, PartialEq)]
pub struct StrapiConfig {
    /// Base URL without trailing slash (e.g., "http://localhost:1337")
    pub host: String,
    /// API token sent as a bearer header
    pub token: String,
}

impl StrapiConfig {
    pub fn new(host: &str, token: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            token: token.to_string(),
        }
    }
}

/// Where per-chat conversation state lives
#[derive(Debug, Clone, PartialEq)]
pub enum SessionConfig {
    /// Process-local map, lost on restart
    InMemory,
    /// Redis server
    Redis {
        host: String,
        port: u16,
        password: Option<String>,
    },
}

impl SessionConfig {
    /// Connection URL for the redis client, `None` for in-memory sessions
    pub fn redis_url(&self) -> Option<String> {
        match self {
            SessionConfig::InMemory => None,
            SessionConfig::Redis {
                host,
                port,
                password: Some(password),
            } => Some(format!("redis://:{password}@{host}:{port}/")),
            SessionConfig::Redis {
                host,
                port,
                password: None,
            } => Some(format!("redis://{host}:{port}/")),
        }
    }
}

/// Complete bot configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BotConfig {
    pub telegram_token: String,
    pub strapi: StrapiConfig,
    pub session: SessionConfig,
}

impl BotConfig {
    /// Read configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| anyhow!("{key} must be set"))
        };

        let telegram_token = required("TELEGRAM_TOKEN")?;
        let strapi_token = required("STRAPI_TOKEN")?;
        let strapi_host =
            lookup("STRAPI_HOST").unwrap_or_else(|| DEFAULT_STRAPI_HOST.to_string());

        let session = match lookup("REDIS_HOST").filter(|host| !host.is_empty()) {
            Some(host) => {
                let port = match lookup("REDIS_PORT") {
                    Some(port) => port
                        .parse::<u16>()
                        .with_context(|| format!("REDIS_PORT is not a valid port: {port}"))?,
                    None => DEFAULT_REDIS_PORT,
                };
                SessionConfig::Redis {
                    host,
                    port,
                    password: lookup("REDIS_PASSWORD").filter(|p| !p.is_empty()),
                }
            }
            None => SessionConfig::InMemory,
        };

        Ok(Self {
            telegram_token,
            strapi: StrapiConfig::new(&strapi_host, &strapi_token),
            session,
        })
    }
}

//! # Catalog Client Module
//!
//! Read-only access to the product catalog exposed by the Strapi REST API.
//! Every call is a single GET with the bearer token attached; there are no
//! retries, no pagination and no caching.

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::bot_errors::BotError;
use crate::config::StrapiConfig;

/// Product as listed in the catalog menu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSummary {
    pub id: u64,
    pub title: String,
}

/// Product with the fields needed for the detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub id: u64,
    pub description: String,
    /// Absolute URL of the product picture
    pub image_url: String,
}

/// Source of catalog data used by the handlers
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn list_products(&self) -> Result<Vec<ProductSummary>, BotError>;
    async fn get_product_detail(&self, id: u64) -> Result<ProductDetail, BotError>;
    async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, BotError>;
}

// Strapi v4 response envelopes

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
struct Entry<A> {
    id: u64,
    attributes: A,
}

#[derive(Debug, Deserialize)]
struct SummaryAttributes {
    title: String,
}

#[derive(Debug, Deserialize)]
struct DetailAttributes {
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    picture: Option<Envelope<MediaEntry>>,
}

#[derive(Debug, Deserialize)]
struct MediaEntry {
    attributes: MediaAttributes,
}

#[derive(Debug, Deserialize)]
struct MediaAttributes {
    url: String,
}

/// Strapi-backed catalog client
#[derive(Debug, Clone)]
pub struct StrapiClient {
    http: reqwest::Client,
    config: StrapiConfig,
}

impl StrapiClient {
    pub fn new(config: StrapiConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), config)
    }

    pub fn with_http_client(http: reqwest::Client, config: StrapiConfig) -> Self {
        Self { http, config }
    }

    /// Issue an authorized GET and return the successful response
    async fn get(&self, url: &str) -> Result<reqwest::Response, BotError> {
        debug!(url = %url, "Requesting Strapi resource");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.config.token))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(BotError::Upstream(format!("GET {url} returned {status}")));
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, BotError> {
        let body = self.get(url).await?.bytes().await?;
        serde_json::from_slice(&body)
            .map_err(|e| BotError::Upstream(format!("malformed response from {url}: {e}")))
    }

    /// Strapi returns upload paths relative to its own host
    fn absolute_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}/{}", self.config.host, url.trim_start_matches('/'))
        }
    }
}

#[async_trait]
impl Catalog for StrapiClient {
    async fn list_products(&self) -> Result<Vec<ProductSummary>, BotError> {
        let url = format!("{}/api/products", self.config.host);
        let envelope: Envelope<Vec<Entry<SummaryAttributes>>> = self.get_json(&url).await?;

        let entries = envelope
            .data
            .ok_or_else(|| BotError::Upstream("product list has no data".to_string()))?;

        debug!(products = entries.len(), "Fetched product list");

        Ok(entries
            .into_iter()
            .map(|entry| ProductSummary {
                id: entry.id,
                title: entry.attributes.title,
            })
            .collect())
    }

    async fn get_product_detail(&self, id: u64) -> Result<ProductDetail, BotError> {
        let url = format!("{}/api/products/{}?populate=picture", self.config.host, id);
        let envelope: Envelope<Entry<DetailAttributes>> = self.get_json(&url).await?;

        let entry = envelope
            .data
            .ok_or_else(|| BotError::Upstream(format!("product {id} not found")))?;

        let picture_url = entry
            .attributes
            .picture
            .and_then(|picture| picture.data)
            .map(|media| media.attributes.url)
            .ok_or_else(|| BotError::Upstream(format!("product {id} has no picture")))?;

        Ok(ProductDetail {
            id: entry.id,
            description: entry.attributes.description.unwrap_or_default(),
            image_url: self.absolute_url(&picture_url),
        })
    }

    async fn fetch_image_bytes(&self, url: &str) -> Result<Vec<u8>, BotError> {
        let bytes = self.get(url).await?.bytes().await?;
        debug!(url = %url, size = bytes.len(), "Downloaded product image");
        Ok(bytes.to_vec())
    }
}

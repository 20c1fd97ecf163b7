//! HTTP product catalog client
//!
//! Fetches the full product list from a DummyJSON-style endpoint
//! (`GET <url>` returning `{"products": [...]}`). One request per run; no
//! retries.

use super::parse_catalog;
use crate::types::{AnalyticsError, CatalogProduct};
use std::time::Duration;

const USER_AGENT: &str = concat!("sales-analytics/", env!("CARGO_PKG_VERSION"));

/// Product catalog API client
pub struct CatalogClient {
    http_client: reqwest::Client,
    url: String,
}

impl CatalogClient {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, AnalyticsError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http_client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch every product listed by the catalog
    pub async fn fetch_all_products(&self) -> Result<Vec<CatalogProduct>, AnalyticsError> {
        tracing::debug!(url = %self.url, "Querying product catalog");

        let response = self.http_client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalyticsError::catalog_status(&self.url, status.as_u16()));
        }

        let body = response.text().await?;
        let products = parse_catalog(&body)?;

        tracing::info!(
            url = %self.url,
            products = products.len(),
            "Fetched product catalog"
        );

        Ok(products)
    }
}

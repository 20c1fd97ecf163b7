//! Product catalog module
//!
//! Supplies the product metadata used for enrichment. The catalog can come
//! from the remote API, from a JSON file with the same shape, or be disabled.
//!
//! Catalog problems never stop a run: [`load_product_mapping`] logs the
//! failure and returns an empty mapping, leaving every transaction unenriched.

mod client;

pub use client::CatalogClient;

use crate::types::{
    create_product_mapping, AnalyticsError, CatalogProduct, CatalogResponse, ProductMapping,
};
use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::Duration;

/// Default catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://dummyjson.com/products?limit=100";

/// Default HTTP timeout for catalog requests, in seconds
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;

/// Where product metadata is loaded from
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogSource {
    /// Fetch from an HTTP endpoint
    Remote { url: String, timeout: Duration },
    /// Read a JSON document from disk
    File(PathBuf),
    /// Skip enrichment lookups
    Disabled,
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::Remote {
            url: DEFAULT_CATALOG_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_CATALOG_TIMEOUT_SECS),
        }
    }
}

/// Parse a catalog JSON document
pub fn parse_catalog(json: &str) -> Result<Vec<CatalogProduct>, AnalyticsError> {
    let response: CatalogResponse = serde_json::from_str(json)?;
    Ok(response.products)
}

impl CatalogSource {
    /// Load the product list from this source
    pub async fn load(&self) -> Result<Vec<CatalogProduct>, AnalyticsError> {
        match self {
            CatalogSource::Remote { url, timeout } => {
                CatalogClient::new(url, *timeout)?.fetch_all_products().await
            }
            CatalogSource::File(path) => {
                let contents = tokio::fs::read_to_string(path).await.map_err(|e| match e.kind() {
                    ErrorKind::NotFound => {
                        AnalyticsError::file_not_found(&path.display().to_string())
                    }
                    _ => AnalyticsError::from(e),
                })?;
                let products = parse_catalog(&contents)?;
                tracing::info!(
                    path = %path.display(),
                    products = products.len(),
                    "Loaded product catalog"
                );
                Ok(products)
            }
            CatalogSource::Disabled => Ok(Vec::new()),
        }
    }
}

/// Load the catalog and build the id lookup table
///
/// Any failure is logged at warn level and yields an empty mapping.
pub async fn load_product_mapping(source: &CatalogSource) -> ProductMapping {
    if *source == CatalogSource::Disabled {
        tracing::info!("Product catalog disabled, skipping enrichment lookups");
        return ProductMapping::new();
    }

    match source.load().await {
        Ok(products) => create_product_mapping(products),
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Product catalog unavailable, continuing without enrichment"
            );
            ProductMapping::new()
        }
    }
}

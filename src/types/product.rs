//! Product catalog types
//!
//! The catalog payload is external, so every attribute is optional and
//! unknown fields are ignored.

use serde::Deserialize;
use std::collections::HashMap;

/// Numeric product identifier used by the catalog
pub type CatalogId = u64;

/// One product entry as published by the catalog
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CatalogProduct {
    pub id: Option<CatalogId>,
    pub title: Option<String>,
    pub category: Option<String>,
    pub brand: Option<String>,
    pub price: Option<f64>,
    pub rating: Option<f64>,
}

/// Catalog response envelope (`{"products": [...]}`)
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogResponse {
    pub products: Vec<CatalogProduct>,
}

/// Lookup table from catalog id to product
pub type ProductMapping = HashMap<CatalogId, CatalogProduct>;

/// Build the lookup table, skipping products without an id
///
/// When two entries share an id the later one wins.
pub fn create_product_mapping(products: Vec<CatalogProduct>) -> ProductMapping {
    products
        .into_iter()
        .filter_map(|product| product.id.map(|id| (id, product)))
        .collect()
}

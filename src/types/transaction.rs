//! Transaction-related types for the sales analytics engine
//!
//! This module defines the sales transaction record produced by the parser
//! and the optional product details attached to it during enrichment.

/// Product attributes sourced from the external catalog
///
/// Every field is optional: a catalog entry may omit any of them, and a
/// transaction whose product has no catalog entry keeps the default (all `None`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDetails {
    /// Catalog title of the product
    pub product_title: Option<String>,

    /// Catalog category
    pub category: Option<String>,

    /// Catalog brand
    pub brand: Option<String>,

    /// Price listed in the catalog (independent of the sale's unit price)
    pub api_price: Option<f64>,

    /// Average customer rating
    pub rating: Option<f64>,
}

impl ProductDetails {
    /// Whether any catalog attribute has been attached
    pub fn is_empty(&self) -> bool {
        *self == ProductDetails::default()
    }
}

/// A single sales transaction as read from the feed
///
/// Identifier fields are kept verbatim; prefix and positivity rules are
/// checked by the validator, not at construction time.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Transaction identifier, expected to start with "T"
    pub transaction_id: String,

    /// Sale date as an opaque token (never parsed as a calendar date)
    pub date: String,

    /// Product identifier, expected to start with "P"
    pub product_id: String,

    /// Product display name with commas stripped
    pub product_name: String,

    /// Units sold
    pub quantity: i64,

    /// Price per unit
    pub unit_price: f64,

    /// Customer identifier, expected to start with "C"
    pub customer_id: String,

    /// Sales region
    pub region: String,

    /// Catalog attributes, populated by the enricher
    pub product: ProductDetails,
}

impl Transaction {
    /// Revenue of this transaction (`quantity × unit_price`)
    ///
    /// Always derived from the current field values so it cannot go stale.
    pub fn amount(&self) -> f64 {
        self.quantity as f64 * self.unit_price
    }
}

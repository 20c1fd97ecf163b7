//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `transaction`: The sales transaction record and its catalog attributes
//! - `product`: Product catalog entries and the id lookup table
//! - `error`: Error types for the collaborators around the core

pub mod error;
pub mod product;
pub mod transaction;

pub use error::AnalyticsError;
pub use product::{
    create_product_mapping, CatalogId, CatalogProduct, CatalogResponse, ProductMapping,
};
pub use transaction::{ProductDetails, Transaction};

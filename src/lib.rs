//! Sales Analytics Library
//! # Overview
//!
//! This library turns a pipe-delimited sales feed into a set of business
//! views: regional revenue, top and low-performing products, customer
//! segments, the daily revenue trend and the peak sales day.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, catalog products, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Pure pipeline stages:
//!   - [`core::parser`] - Raw lines to typed transactions
//!   - [`core::validator`] - Validation rules and region/amount filters
//!   - [`core::enricher`] - Product catalog left join
//!   - [`core::aggregator`] - Analytical views
//! - [`catalog`] - Product catalog loading (HTTP API or JSON file)
//! - [`pipeline`] - One-run orchestration of the core stages
//! - [`io`] - Sales file reading, report rendering, enriched CSV export
//!
//! # Sales Feed Format
//!
//! One transaction per line, eight `|`-separated fields after a header line:
//!
//! ```text
//! TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region
//! T001|2024-12-01|P101|Laptop|2|45,000|C001|North
//! ```
//!
//! # Validity
//!
//! A transaction is kept only if its TransactionID, ProductID and CustomerID
//! start with `T`, `P` and `C`, its region is non-empty, and both quantity and
//! unit price are positive. Everything else is counted and skipped.

// Module declarations
pub mod catalog;
pub mod cli;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use self::core::{FilterOptions, FilterSummary};
pub use pipeline::{run_pipeline, PipelineConfig, SalesReport};
pub use types::{AnalyticsError, CatalogProduct, ProductDetails, ProductMapping, Transaction};

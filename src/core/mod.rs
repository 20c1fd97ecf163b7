//! Core business logic module
//!
//! This module contains the pure transformations of the analytics pipeline:
//! - `parser` - Raw pipe-delimited lines to typed transactions
//! - `validator` - Validation rules plus region/amount filtering
//! - `enricher` - Left join with product catalog metadata
//! - `aggregator` - Regional, product, customer and daily views

pub mod aggregator;
pub mod enricher;
pub mod parser;
pub mod validator;

pub use aggregator::{
    customer_analysis, daily_sales_trend, low_performing_products, peak_sales_day,
    region_wise_sales, segment_counts, top_selling_products, CustomerSegment, CustomerSummary,
    DailySales, ProductSales, RegionSales,
};
pub use enricher::{enrich_sales_data, extract_numeric_product_id};
pub use parser::parse_transactions;
pub use validator::{
    validate_and_filter, FilterOptions, FilterOutcome, FilterSummary, ValidationRule,
};

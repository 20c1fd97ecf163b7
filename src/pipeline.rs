//! Analytics pipeline orchestration
//!
//! Runs one batch through the core stages in order:
//! 1. `core::parser` turns the data lines into transactions
//! 2. `core::validator` drops invalid records and applies the filters
//! 3. `core::enricher` joins the survivors with the product catalog
//! 4. `core::aggregator` builds every view the report needs
//!
//! The pipeline is synchronous and takes fully resolved inputs: the caller
//! reads the sales file and loads the catalog beforehand. It never fails;
//! bad data only shrinks the counts recorded in the resulting [`SalesReport`].

use crate::core::aggregator::{
    customer_analysis, daily_sales_trend, low_performing_products, peak_sales_day,
    region_wise_sales, segment_counts, top_selling_products, CustomerSegment, CustomerSummary,
    DailySales, ProductSales, RegionSales, DEFAULT_LOW_PERFORMANCE_THRESHOLD, DEFAULT_TOP_N,
};
use crate::core::enricher::{count_enriched, enrich_sales_data};
use crate::core::parser::parse_transactions;
use crate::core::validator::{
    validate_and_filter, FilterOptions, FilterSummary, ValidationDiagnostics,
};
use crate::types::{AnalyticsError, ProductMapping, Transaction};

/// Settings for one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Region and amount filters
    pub filters: FilterOptions,

    /// Number of products in the top-selling view
    pub top_n: usize,

    /// Quantity below which a product is listed as low-performing
    pub low_threshold: i64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            filters: FilterOptions::default(),
            top_n: DEFAULT_TOP_N,
            low_threshold: DEFAULT_LOW_PERFORMANCE_THRESHOLD,
        }
    }
}

impl PipelineConfig {
    /// Reject non-finite or contradictory amount bounds
    pub fn validate(&self) -> Result<(), AnalyticsError> {
        let bounds = [
            ("minimum", self.filters.min_amount),
            ("maximum", self.filters.max_amount),
        ];
        for (bound, value) in bounds {
            if let Some(value) = value.filter(|value| !value.is_finite()) {
                return Err(AnalyticsError::non_finite_bound(bound, value));
            }
        }

        match (self.filters.min_amount, self.filters.max_amount) {
            (Some(min), Some(max)) if min > max => Err(AnalyticsError::invalid_filter(min, max)),
            _ => Ok(()),
        }
    }
}

/// Everything produced by one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct SalesReport {
    /// Data lines handed to the parser
    pub line_count: usize,

    /// Lines that parsed into transactions
    pub parsed_count: usize,

    /// Validation and filter counts
    pub summary: FilterSummary,

    /// Regions and amount range among valid records
    pub diagnostics: ValidationDiagnostics,

    /// Final working set, enriched
    pub transactions: Vec<Transaction>,

    /// Products available in the catalog
    pub catalog_size: usize,

    /// Transactions that matched a catalog product
    pub enriched_count: usize,

    pub regions: Vec<RegionSales>,
    pub top_products: Vec<ProductSales>,
    pub low_performers: Vec<ProductSales>,
    pub low_threshold: i64,
    pub customers: Vec<CustomerSummary>,
    pub segments: Vec<(CustomerSegment, usize)>,
    pub daily_trend: Vec<DailySales>,
    pub peak_day: Option<(String, f64)>,
}

/// Run the full analytics pipeline over data lines (header removed)
///
/// # Arguments
///
/// * `lines` - Raw pipe-delimited sales lines
/// * `mapping` - Product catalog lookup table (may be empty)
/// * `config` - Filters and view sizes
pub fn run_pipeline<S: AsRef<str>>(
    lines: &[S],
    mapping: &ProductMapping,
    config: &PipelineConfig,
) -> SalesReport {
    let parsed = parse_transactions(lines);
    tracing::info!(lines = lines.len(), parsed = parsed.len(), "Parsed transactions");

    let outcome = validate_and_filter(&parsed, &config.filters);
    tracing::info!(
        invalid = outcome.invalid_count,
        filtered_by_region = outcome.summary.filtered_by_region,
        filtered_by_amount = outcome.summary.filtered_by_amount,
        valid = outcome.summary.final_count,
        "Validated and filtered transactions"
    );

    let transactions = enrich_sales_data(&outcome.transactions, mapping);
    let enriched_count = count_enriched(&transactions);
    tracing::info!(
        enriched = enriched_count,
        total = transactions.len(),
        catalog_size = mapping.len(),
        "Enriched transactions"
    );

    let customers = customer_analysis(&transactions);
    let segments = segment_counts(&customers);

    SalesReport {
        line_count: lines.len(),
        parsed_count: parsed.len(),
        summary: outcome.summary,
        diagnostics: outcome.diagnostics,
        catalog_size: mapping.len(),
        enriched_count,
        regions: region_wise_sales(&transactions),
        top_products: top_selling_products(&transactions, config.top_n),
        low_performers: low_performing_products(&transactions, config.low_threshold),
        low_threshold: config.low_threshold,
        customers,
        segments,
        daily_trend: daily_sales_trend(&transactions),
        peak_day: peak_sales_day(&transactions),
        transactions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{create_product_mapping, CatalogProduct};
    use rstest::rstest;

    fn lines() -> Vec<&'static str> {
        vec![
            "T001|2024-01-01|P1|Laptop|1|45,000|C001|North",
            "T002|2024-01-01|P2|Mouse|10|500|C002|South",
            "T003|2024-01-02|P1|Laptop|1|45000|C001|North",
            "T004|2024-01-02|P3|Cable|0|100|C003|East",
            "X005|2024-01-02|P3|Cable|5|100|C003|East",
            "T006|2024-01-03|P3|Cable|5|100|C003|East",
            "broken line",
        ]
    }

    fn mapping() -> ProductMapping {
        create_product_mapping(vec![CatalogProduct {
            id: Some(1),
            title: Some("Laptop Pro".to_string()),
            ..CatalogProduct::default()
        }])
    }

    #[test]
    fn test_run_pipeline_counts() {
        let report = run_pipeline(&lines(), &mapping(), &PipelineConfig::default());

        assert_eq!(report.line_count, 7);
        assert_eq!(report.parsed_count, 6);
        assert_eq!(report.summary.total_input, 6);
        assert_eq!(report.summary.invalid, 2);
        assert_eq!(report.summary.final_count, 4);
        assert_eq!(report.transactions.len(), 4);
        assert_eq!(report.catalog_size, 1);
        assert_eq!(report.enriched_count, 2);
    }

    #[test]
    fn test_run_pipeline_views() {
        let report = run_pipeline(&lines(), &mapping(), &PipelineConfig::default());

        assert_eq!(report.regions[0].region, "North");
        assert_eq!(report.regions[0].revenue, 90000.0);
        assert_eq!(report.top_products[0].product_name, "Mouse");
        assert_eq!(report.peak_day, Some(("2024-01-01".to_string(), 50000.0)));
        assert_eq!(
            report.segments,
            vec![
                (CustomerSegment::HighValue, 1),
                (CustomerSegment::MediumValue, 0),
                (CustomerSegment::LowValue, 2),
            ]
        );
        let low: Vec<&str> = report
            .low_performers
            .iter()
            .map(|p| p.product_name.as_str())
            .collect();
        assert_eq!(low, vec!["Laptop", "Cable"]);
    }

    #[test]
    fn test_run_pipeline_with_filters() {
        let config = PipelineConfig {
            filters: FilterOptions {
                region: Some("North".to_string()),
                min_amount: Some(1000.0),
                max_amount: None,
            },
            top_n: 1,
            low_threshold: 2,
        };

        let report = run_pipeline(&lines(), &ProductMapping::new(), &config);

        assert_eq!(report.summary.filtered_by_region, 2);
        assert_eq!(report.summary.filtered_by_amount, 0);
        assert_eq!(report.summary.final_count, 2);
        assert_eq!(report.top_products.len(), 1);
        assert_eq!(report.enriched_count, 0);
        assert_eq!(report.low_threshold, 2);
    }

    #[test]
    fn test_run_pipeline_huge_quantities_do_not_overflow() {
        let lines = [
            "T1|2024-01-01|P1|Widget|9223372036854775807|1|C1|North",
            "T2|2024-01-01|P1|Widget|1|1|C1|North",
        ];

        let report = run_pipeline(&lines, &ProductMapping::new(), &PipelineConfig::default());

        assert_eq!(report.summary.final_count, 2);
        assert_eq!(report.top_products[0].total_quantity, i64::MAX);
        assert!(report.low_performers.is_empty());
    }

    #[test]
    fn test_run_pipeline_empty_input() {
        let empty: Vec<String> = Vec::new();

        let report = run_pipeline(&empty, &ProductMapping::new(), &PipelineConfig::default());

        assert_eq!(report.summary, FilterSummary::default());
        assert!(report.regions.is_empty());
        assert!(report.top_products.is_empty());
        assert!(report.customers.is_empty());
        assert_eq!(report.peak_day, None);
    }

    #[rstest]
    #[case::no_bounds(None, None, true)]
    #[case::min_only(Some(10.0), None, true)]
    #[case::equal_bounds(Some(10.0), Some(10.0), true)]
    #[case::inverted_bounds(Some(20.0), Some(10.0), false)]
    #[case::nan_min(Some(f64::NAN), None, false)]
    #[case::nan_max(None, Some(f64::NAN), false)]
    #[case::infinite_max(Some(10.0), Some(f64::INFINITY), false)]
    fn test_config_validate(#[case] min: Option<f64>, #[case] max: Option<f64>, #[case] ok: bool) {
        let config = PipelineConfig {
            filters: FilterOptions {
                region: None,
                min_amount: min,
                max_amount: max,
            },
            ..PipelineConfig::default()
        };

        assert_eq!(config.validate().is_ok(), ok);
    }
}

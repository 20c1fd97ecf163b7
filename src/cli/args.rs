use crate::catalog::{CatalogSource, DEFAULT_CATALOG_TIMEOUT_SECS, DEFAULT_CATALOG_URL};
use crate::core::aggregator::{DEFAULT_LOW_PERFORMANCE_THRESHOLD, DEFAULT_TOP_N};
use crate::core::validator::FilterOptions;
use crate::pipeline::PipelineConfig;
use crate::types::AnalyticsError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Analyze a pipe-delimited sales feed and produce a sales report
#[derive(Parser, Debug)]
#[command(name = "sales-analytics")]
#[command(
    about = "Analyze a pipe-delimited sales feed and produce a sales report",
    long_about = None
)]
pub struct CliArgs {
    /// Input sales file path (pipe-delimited, first line is the header)
    #[arg(value_name = "INPUT", help = "Path to the sales data file")]
    pub input_file: PathBuf,

    /// Keep only transactions from this region
    #[arg(long = "region", value_name = "REGION", help = "Region to keep (exact, case-sensitive)")]
    pub region: Option<String>,

    /// Minimum transaction amount (inclusive)
    #[arg(
        long = "min-amount",
        value_name = "AMOUNT",
        help = "Minimum transaction amount (inclusive)"
    )]
    pub min_amount: Option<f64>,

    /// Maximum transaction amount (inclusive)
    #[arg(
        long = "max-amount",
        value_name = "AMOUNT",
        help = "Maximum transaction amount (inclusive)"
    )]
    pub max_amount: Option<f64>,

    /// Number of products in the top-selling section
    #[arg(
        long = "top-n",
        value_name = "COUNT",
        default_value_t = DEFAULT_TOP_N,
        help = "Number of top-selling products to report"
    )]
    pub top_n: usize,

    /// Quantity threshold for low-performing products
    #[arg(
        long = "low-threshold",
        value_name = "QUANTITY",
        default_value_t = DEFAULT_LOW_PERFORMANCE_THRESHOLD,
        help = "Products selling fewer units than this are reported as low-performing"
    )]
    pub low_threshold: i64,

    /// Product catalog endpoint
    #[arg(
        long = "catalog-url",
        value_name = "URL",
        env = "SALES_CATALOG_URL",
        default_value = DEFAULT_CATALOG_URL,
        help = "Product catalog API endpoint"
    )]
    pub catalog_url: String,

    /// Read the product catalog from a JSON file instead of the API
    #[arg(
        long = "catalog-file",
        value_name = "PATH",
        conflicts_with = "offline",
        help = "Load the product catalog from a JSON file"
    )]
    pub catalog_file: Option<PathBuf>,

    /// Skip the product catalog entirely
    #[arg(long = "offline", help = "Do not look up product metadata")]
    pub offline: bool,

    /// Catalog request timeout in seconds
    #[arg(
        long = "catalog-timeout",
        value_name = "SECONDS",
        default_value_t = DEFAULT_CATALOG_TIMEOUT_SECS,
        help = "Catalog API request timeout in seconds"
    )]
    pub catalog_timeout: u64,

    /// Report output path (stdout when absent)
    #[arg(
        long = "report",
        value_name = "PATH",
        help = "Write the report to this file instead of stdout"
    )]
    pub report_file: Option<PathBuf>,

    /// Enriched transactions CSV output path
    #[arg(
        long = "enriched-output",
        value_name = "PATH",
        help = "Write enriched transactions as CSV"
    )]
    pub enriched_output: Option<PathBuf>,
}

impl CliArgs {
    /// Create a PipelineConfig from CLI arguments
    ///
    /// Empty region strings are treated as "no region filter".
    ///
    /// # Errors
    ///
    /// Returns `AnalyticsError::InvalidFilter` when `--min-amount` exceeds
    /// `--max-amount`, and `AnalyticsError::NonFiniteBound` when either bound
    /// is NaN or infinite.
    pub fn to_pipeline_config(&self) -> Result<PipelineConfig, AnalyticsError> {
        let region = self
            .region
            .as_deref()
            .map(str::trim)
            .filter(|region| !region.is_empty())
            .map(str::to_string);

        let config = PipelineConfig {
            filters: FilterOptions {
                region,
                min_amount: self.min_amount,
                max_amount: self.max_amount,
            },
            top_n: self.top_n,
            low_threshold: self.low_threshold,
        };
        config.validate()?;

        Ok(config)
    }

    /// Select the catalog source from CLI arguments
    ///
    /// `--offline` wins, then `--catalog-file`, then the remote endpoint.
    pub fn catalog_source(&self) -> CatalogSource {
        if self.offline {
            CatalogSource::Disabled
        } else if let Some(path) = &self.catalog_file {
            CatalogSource::File(path.clone())
        } else {
            CatalogSource::Remote {
                url: self.catalog_url.clone(),
                timeout: Duration::from_secs(self.catalog_timeout),
            }
        }
    }
}

//! Sales Analytics CLI
//!
//! Command-line interface for analyzing pipe-delimited sales feeds.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- data/sales_data.txt
//! cargo run -- --region North --min-amount 1000 data/sales_data.txt
//! cargo run -- --offline --report output/sales_report.txt data/sales_data.txt
//! cargo run -- --catalog-file products.json --enriched-output enriched.csv data/sales_data.txt
//! ```
//!
//! The program reads the sales file, validates and filters the transactions,
//! enriches them with product catalog data, and writes the analytics report
//! to stdout (or `--report`). Logs go to stderr; set `RUST_LOG` to adjust
//! verbosity.
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing sales file, invalid filter bounds, unwritable output, etc.)
//!
//! An unreachable product catalog is not an error: the report is produced
//! without enrichment.

use chrono::Local;
use sales_analytics::catalog::load_product_mapping;
use sales_analytics::cli::{self, CliArgs};
use sales_analytics::io::{read_sales_lines, render_report, split_header, write_enriched_csv};
use sales_analytics::pipeline::run_pipeline;
use sales_analytics::AnalyticsError;
use std::fs::File;
use std::io::BufWriter;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = cli::parse_args();

    if let Err(e) = run(&args).await {
        tracing::error!(error = %e, "Sales analytics run failed");
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run(args: &CliArgs) -> Result<(), AnalyticsError> {
    let config = args.to_pipeline_config()?;

    let lines = read_sales_lines(&args.input_file)?;
    let (header, data_lines) = split_header(&lines);
    if let Some(header) = header {
        tracing::debug!(%header, "Skipping header line");
    }

    let mapping = load_product_mapping(&args.catalog_source()).await;

    let report = run_pipeline(data_lines, &mapping, &config);

    if let Some(path) = &args.enriched_output {
        let mut file = BufWriter::new(File::create(path)?);
        write_enriched_csv(&report.transactions, &mut file)?;
        tracing::info!(
            path = %path.display(),
            rows = report.transactions.len(),
            "Saved enriched data"
        );
    }

    let generated_on = Local::now().naive_local();
    match &args.report_file {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            render_report(&report, generated_on, &mut file)?;
            tracing::info!(path = %path.display(), "Saved sales report");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            render_report(&report, generated_on, &mut stdout)?;
        }
    }

    Ok(())
}

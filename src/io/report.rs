//! Text report rendering
//!
//! Renders a [`SalesReport`] as a plain-text document with one section per
//! view. Monetary values are printed with two decimals.

use crate::pipeline::SalesReport;
use crate::types::AnalyticsError;
use chrono::NaiveDateTime;
use std::io::Write;

const RULE_WIDTH: usize = 30;

fn section(output: &mut dyn Write, title: &str) -> std::io::Result<()> {
    writeln!(output, "{}", title)?;
    writeln!(output, "{}", "-".repeat(RULE_WIDTH))
}

/// Write the report to `output`
///
/// # Arguments
///
/// * `report` - Views produced by the pipeline
/// * `generated_on` - Timestamp printed in the header
/// * `output` - Mutable reference to a writer for the report text
pub fn render_report(
    report: &SalesReport,
    generated_on: NaiveDateTime,
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    writeln!(output, "SALES ANALYTICS REPORT")?;
    writeln!(output, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(output, "Generated On: {}", generated_on.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(output, "Total Transactions Processed: {}", report.transactions.len())?;
    writeln!(output)?;

    let summary = &report.summary;
    section(output, "VALIDATION SUMMARY")?;
    writeln!(output, "Lines Read: {}", report.line_count)?;
    writeln!(output, "Parsed Records: {}", report.parsed_count)?;
    writeln!(output, "Invalid Records: {}", summary.invalid)?;
    for (rule, count) in &report.diagnostics.rejections {
        writeln!(output, "  - {}: {}", rule, count)?;
    }
    writeln!(output, "Filtered by Region: {}", summary.filtered_by_region)?;
    writeln!(output, "Filtered by Amount: {}", summary.filtered_by_amount)?;
    writeln!(output, "Final Valid Transactions: {}", summary.final_count)?;
    writeln!(output)?;

    section(output, "REGION-WISE SALES SUMMARY")?;
    if report.regions.is_empty() {
        writeln!(output, "No regional sales")?;
    }
    for region in &report.regions {
        writeln!(
            output,
            "Region: {} | Revenue: {:.2} | Transactions: {} | Share: {:.2}%",
            region.region, region.revenue, region.transaction_count, region.percentage
        )?;
    }
    writeln!(output)?;

    section(output, "TOP SELLING PRODUCTS")?;
    if report.top_products.is_empty() {
        writeln!(output, "No products sold")?;
    }
    for (rank, product) in report.top_products.iter().enumerate() {
        writeln!(
            output,
            "{}. {} | Quantity: {} | Revenue: {:.2}",
            rank + 1,
            product.product_name,
            product.total_quantity,
            product.revenue
        )?;
    }
    writeln!(output)?;

    section(output, "CUSTOMER SEGMENTATION SUMMARY")?;
    for (segment, count) in &report.segments {
        writeln!(output, "{}: {} customers", segment, count)?;
    }
    writeln!(output)?;

    section(output, "DAILY SALES TREND")?;
    if report.daily_trend.is_empty() {
        writeln!(output, "No daily sales")?;
    }
    for day in &report.daily_trend {
        writeln!(
            output,
            "{} | Revenue: {:.2} | Transactions: {}",
            day.date, day.revenue, day.transaction_count
        )?;
    }
    writeln!(output)?;

    section(output, "PEAK SALES DAY")?;
    match &report.peak_day {
        Some((date, revenue)) => {
            writeln!(output, "Peak Sales Date: {}", date)?;
            writeln!(output, "Revenue: {:.2}", revenue)?;
        }
        None => writeln!(output, "No sales recorded")?,
    }
    writeln!(output)?;

    section(
        output,
        &format!("LOW PERFORMING PRODUCTS (quantity < {})", report.low_threshold),
    )?;
    if report.low_performers.is_empty() {
        writeln!(output, "None")?;
    }
    for product in &report.low_performers {
        writeln!(
            output,
            "{} | Quantity: {} | Revenue: {:.2}",
            product.product_name, product.total_quantity, product.revenue
        )?;
    }
    writeln!(output)?;

    section(output, "PRODUCT ENRICHMENT")?;
    writeln!(output, "Catalog Products: {}", report.catalog_size)?;
    writeln!(
        output,
        "Enriched Transactions: {} of {}",
        report.enriched_count,
        report.transactions.len()
    )?;
    writeln!(output)?;

    writeln!(output, "{}", "=".repeat(RULE_WIDTH))?;
    writeln!(output, "END OF REPORT")?;
    output.flush()?;

    Ok(())
}

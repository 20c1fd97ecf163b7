//! I/O module
//!
//! Handles the file formats at the edges of the pipeline.
//!
//! # Components
//!
//! - `sales_file` - Reads the pipe-delimited sales feed into lines
//! - `enriched_csv` - Writes enriched transactions as CSV
//! - `report` - Renders the analytics report as text

pub mod enriched_csv;
pub mod report;
pub mod sales_file;

pub use enriched_csv::write_enriched_csv;
pub use report::render_report;
pub use sales_file::{read_sales_lines, split_header};

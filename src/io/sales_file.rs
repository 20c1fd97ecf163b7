//! Sales feed reader
//!
//! Reads the pipe-delimited sales file into memory as a list of lines.
//!
//! # Input Handling
//!
//! - A UTF-8 byte order mark at the start of the file is ignored
//! - Invalid UTF-8 sequences are replaced rather than rejected
//! - Lines are trimmed and blank lines are skipped
//!
//! The first remaining line is the header; [`split_header`] separates it
//! from the data lines the parser consumes.

use crate::types::AnalyticsError;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

const UTF8_BOM: &str = "\u{feff}";

/// Split file contents into trimmed, non-empty lines
pub fn split_lines(contents: &str) -> Vec<String> {
    contents
        .strip_prefix(UTF8_BOM)
        .unwrap_or(contents)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Read the sales file at `path`
///
/// # Returns
///
/// * `Ok(Vec<String>)` with every non-empty line, header included
/// * `Err(AnalyticsError::FileNotFound)` if the file does not exist
/// * `Err(AnalyticsError::IoError)` for any other read failure
pub fn read_sales_lines(path: &Path) -> Result<Vec<String>, AnalyticsError> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AnalyticsError::file_not_found(&path.display().to_string()),
        _ => AnalyticsError::from(e),
    })?;

    let lines = split_lines(&String::from_utf8_lossy(&bytes));
    tracing::info!(path = %path.display(), lines = lines.len(), "Read sales file");

    Ok(lines)
}

/// Separate the header line from the data lines
///
/// Returns `None` for the header when there are no lines at all.
pub fn split_header(lines: &[String]) -> (Option<&str>, &[String]) {
    match lines.split_first() {
        Some((header, rest)) => (Some(header.as_str()), rest),
        None => (None, lines),
    }
}

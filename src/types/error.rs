//! Error types for the sales analytics engine
//!
//! Data-quality problems in the feed (malformed rows, failed validation rules,
//! unknown products) are never errors: they are dropped or counted by the
//! core. This module covers the failures of the surrounding collaborators.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: Sales feed not found, unreadable, output not writable
//! - **Catalog Errors**: Product catalog unreachable, bad status, malformed JSON
//! - **Export Errors**: Enriched CSV could not be serialized
//! - **Configuration Errors**: Contradictory filter bounds

use thiserror::Error;

/// Main error type for the sales analytics engine
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyticsError {
    /// Sales feed or catalog file not found at the specified path
    ///
    /// Fatal for the sales feed; for a catalog file the run degrades
    /// to unenriched output.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Catalog request could not be completed (DNS, connect, timeout, ...)
    #[error("Catalog request to {url} failed: {message}")]
    CatalogRequest {
        /// Endpoint that was queried
        url: String,
        /// Description of the transport failure
        message: String,
    },

    /// Catalog endpoint answered with a non-success status
    #[error("Catalog request to {url} returned HTTP {status}")]
    CatalogStatus {
        /// Endpoint that was queried
        url: String,
        /// HTTP status code
        status: u16,
    },

    /// Catalog payload was not the expected JSON document
    #[error("Catalog parse error: {message}")]
    CatalogParse {
        /// Description of the parse failure
        message: String,
    },

    /// Enriched transactions could not be written as CSV
    #[error("Export error: {message}")]
    ExportError {
        /// Description of the serialization failure
        message: String,
    },

    /// Amount bounds contradict each other
    #[error("Invalid filter: minimum amount {min} exceeds maximum amount {max}")]
    InvalidFilter {
        /// Requested lower bound
        min: f64,
        /// Requested upper bound
        max: f64,
    },

    /// Amount bound is NaN or infinite
    #[error("Invalid filter: {bound} amount must be a finite number, got {value}")]
    NonFiniteBound {
        /// Which bound was given ("minimum" or "maximum")
        bound: String,
        /// Value that was supplied
        value: f64,
    },
}

// Conversion from io::Error to AnalyticsError
impl From<std::io::Error> for AnalyticsError {
    fn from(error: std::io::Error) -> Self {
        AnalyticsError::IoError {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to AnalyticsError
impl From<csv::Error> for AnalyticsError {
    fn from(error: csv::Error) -> Self {
        AnalyticsError::ExportError {
            message: error.to_string(),
        }
    }
}

// Conversion from serde_json::Error to AnalyticsError
impl From<serde_json::Error> for AnalyticsError {
    fn from(error: serde_json::Error) -> Self {
        AnalyticsError::CatalogParse {
            message: error.to_string(),
        }
    }
}

// Conversion from reqwest::Error to AnalyticsError
impl From<reqwest::Error> for AnalyticsError {
    fn from(error: reqwest::Error) -> Self {
        AnalyticsError::CatalogRequest {
            url: error.url().map(|url| url.to_string()).unwrap_or_default(),
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl AnalyticsError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        AnalyticsError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a CatalogRequest error
    pub fn catalog_request(url: &str, message: &str) -> Self {
        AnalyticsError::CatalogRequest {
            url: url.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a CatalogStatus error
    pub fn catalog_status(url: &str, status: u16) -> Self {
        AnalyticsError::CatalogStatus {
            url: url.to_string(),
            status,
        }
    }

    /// Create an InvalidFilter error
    pub fn invalid_filter(min: f64, max: f64) -> Self {
        AnalyticsError::InvalidFilter { min, max }
    }

    /// Create a NonFiniteBound error
    pub fn non_finite_bound(bound: &str, value: f64) -> Self {
        AnalyticsError::NonFiniteBound {
            bound: bound.to_string(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        AnalyticsError::FileNotFound { path: "sales.txt".to_string() },
        "File not found: sales.txt"
    )]
    #[case::io_error(
        AnalyticsError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::catalog_request(
        AnalyticsError::CatalogRequest {
            url: "http://localhost".to_string(),
            message: "timed out".to_string(),
        },
        "Catalog request to http://localhost failed: timed out"
    )]
    #[case::catalog_status(
        AnalyticsError::CatalogStatus { url: "http://localhost".to_string(), status: 503 },
        "Catalog request to http://localhost returned HTTP 503"
    )]
    #[case::catalog_parse(
        AnalyticsError::CatalogParse { message: "expected value".to_string() },
        "Catalog parse error: expected value"
    )]
    #[case::export_error(
        AnalyticsError::ExportError { message: "broken pipe".to_string() },
        "Export error: broken pipe"
    )]
    #[case::invalid_filter(
        AnalyticsError::InvalidFilter { min: 500.0, max: 100.0 },
        "Invalid filter: minimum amount 500 exceeds maximum amount 100"
    )]
    #[case::non_finite_bound(
        AnalyticsError::NonFiniteBound { bound: "maximum".to_string(), value: f64::INFINITY },
        "Invalid filter: maximum amount must be a finite number, got inf"
    )]
    fn test_error_display(#[case] error: AnalyticsError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::file_not_found(
        AnalyticsError::file_not_found("sales.txt"),
        AnalyticsError::FileNotFound { path: "sales.txt".to_string() }
    )]
    #[case::catalog_status(
        AnalyticsError::catalog_status("http://localhost", 404),
        AnalyticsError::CatalogStatus { url: "http://localhost".to_string(), status: 404 }
    )]
    #[case::invalid_filter(
        AnalyticsError::invalid_filter(2.0, 1.0),
        AnalyticsError::InvalidFilter { min: 2.0, max: 1.0 }
    )]
    #[case::catalog_request(
        AnalyticsError::catalog_request("http://localhost", "timed out"),
        AnalyticsError::CatalogRequest {
            url: "http://localhost".to_string(),
            message: "timed out".to_string(),
        }
    )]
    #[case::non_finite_bound(
        AnalyticsError::non_finite_bound("minimum", f64::NEG_INFINITY),
        AnalyticsError::NonFiniteBound { bound: "minimum".to_string(), value: f64::NEG_INFINITY }
    )]
    fn test_helper_functions(#[case] result: AnalyticsError, #[case] expected: AnalyticsError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: AnalyticsError = io_error.into();
        assert!(matches!(error, AnalyticsError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: AnalyticsError = json_error.into();
        assert!(matches!(error, AnalyticsError::CatalogParse { .. }));
    }

    #[test]
    fn test_reqwest_error_conversion() {
        let request_error = reqwest::Client::new().get("not a url").build().unwrap_err();
        let error: AnalyticsError = request_error.into();
        assert!(matches!(error, AnalyticsError::CatalogRequest { .. }));
    }
}

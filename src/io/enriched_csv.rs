//! Enriched transaction export
//!
//! Writes enriched transactions as CSV, one row per transaction, with the
//! catalog attributes appended to the original sales columns. Missing catalog
//! values become empty cells.

use crate::types::{AnalyticsError, Transaction};
use serde::Serialize;
use std::io::Write;

/// One CSV row of the enriched export
#[derive(Debug, Serialize)]
struct EnrichedRow<'a> {
    #[serde(rename = "TransactionID")]
    transaction_id: &'a str,
    #[serde(rename = "Date")]
    date: &'a str,
    #[serde(rename = "ProductID")]
    product_id: &'a str,
    #[serde(rename = "ProductName")]
    product_name: &'a str,
    #[serde(rename = "Quantity")]
    quantity: i64,
    #[serde(rename = "UnitPrice")]
    unit_price: f64,
    #[serde(rename = "CustomerID")]
    customer_id: &'a str,
    #[serde(rename = "Region")]
    region: &'a str,
    #[serde(rename = "ProductTitle")]
    product_title: Option<&'a str>,
    #[serde(rename = "Category")]
    category: Option<&'a str>,
    #[serde(rename = "Brand")]
    brand: Option<&'a str>,
    #[serde(rename = "API_Price")]
    api_price: Option<f64>,
    #[serde(rename = "Rating")]
    rating: Option<f64>,
}

impl<'a> From<&'a Transaction> for EnrichedRow<'a> {
    fn from(tx: &'a Transaction) -> Self {
        EnrichedRow {
            transaction_id: &tx.transaction_id,
            date: &tx.date,
            product_id: &tx.product_id,
            product_name: &tx.product_name,
            quantity: tx.quantity,
            unit_price: tx.unit_price,
            customer_id: &tx.customer_id,
            region: &tx.region,
            product_title: tx.product.product_title.as_deref(),
            category: tx.product.category.as_deref(),
            brand: tx.product.brand.as_deref(),
            api_price: tx.product.api_price,
            rating: tx.product.rating,
        }
    }
}

/// Column names of the enriched export, in order
pub const ENRICHED_HEADER: [&str; 13] = [
    "TransactionID",
    "Date",
    "ProductID",
    "ProductName",
    "Quantity",
    "UnitPrice",
    "CustomerID",
    "Region",
    "ProductTitle",
    "Category",
    "Brand",
    "API_Price",
    "Rating",
];

/// Write enriched transactions as CSV
///
/// The header row is always written, even when there are no transactions.
///
/// # Arguments
///
/// * `transactions` - Enriched transactions, written in the given order
/// * `output` - Mutable reference to a writer for the CSV text
pub fn write_enriched_csv(
    transactions: &[Transaction],
    output: &mut dyn Write,
) -> Result<(), AnalyticsError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(output);

    writer.write_record(ENRICHED_HEADER)?;
    for tx in transactions {
        writer.serialize(EnrichedRow::from(tx))?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductDetails;

    fn tx(id: &str, product: ProductDetails) -> Transaction {
        Transaction {
            transaction_id: id.to_string(),
            date: "2024-01-01".to_string(),
            product_id: "P1".to_string(),
            product_name: "Mascara".to_string(),
            quantity: 2,
            unit_price: 9.5,
            customer_id: "C001".to_string(),
            region: "North".to_string(),
            product,
        }
    }

    fn render(transactions: &[Transaction]) -> String {
        let mut output = Vec::new();
        write_enriched_csv(transactions, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_header_only_for_empty_input() {
        assert_eq!(
            render(&[]),
            "TransactionID,Date,ProductID,ProductName,Quantity,UnitPrice,CustomerID,Region,\
             ProductTitle,Category,Brand,API_Price,Rating\n"
        );
    }

    #[test]
    fn test_enriched_and_unenriched_rows() {
        let enriched = tx(
            "T1",
            ProductDetails {
                product_title: Some("Essence Mascara".to_string()),
                category: Some("beauty".to_string()),
                brand: Some("Essence".to_string()),
                api_price: Some(9.99),
                rating: Some(4.94),
            },
        );
        let plain = tx("T2", ProductDetails::default());

        let output = render(&[enriched, plain]);
        let rows: Vec<&str> = output.lines().skip(1).collect();

        assert_eq!(
            rows,
            vec![
                "T1,2024-01-01,P1,Mascara,2,9.5,C001,North,Essence Mascara,beauty,Essence,9.99,4.94",
                "T2,2024-01-01,P1,Mascara,2,9.5,C001,North,,,,,",
            ]
        );
    }

    #[test]
    fn test_values_with_commas_are_quoted() {
        let row = tx(
            "T1",
            ProductDetails {
                product_title: Some("Lamp, Desk".to_string()),
                ..ProductDetails::default()
            },
        );

        let output = render(&[row]);

        assert!(output.contains("\"Lamp, Desk\""));
    }
}

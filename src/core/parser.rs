//! Sales line parser
//!
//! Turns raw pipe-delimited lines into `Transaction` records. The parser only
//! guarantees structural well-formedness: exactly eight fields and parseable
//! numbers. Prefix and positivity rules are left to the validator.
//!
//! Malformed lines are tolerated, not reported as errors: they are dropped and
//! only show up as a lower parsed count (plus a debug log event).

use crate::types::{ProductDetails, Transaction};

/// Field delimiter of the sales feed
pub const FIELD_DELIMITER: char = '|';

/// Number of fields in a well-formed line
pub const FIELD_COUNT: usize = 8;

/// Parse a single sales line
///
/// Field order: TransactionID, Date, ProductID, ProductName, Quantity,
/// UnitPrice, CustomerID, Region.
///
/// - Commas are removed from ProductName, then it is trimmed
/// - Quantity must parse as an integer (surrounding whitespace tolerated)
/// - Commas are removed from UnitPrice, which must parse as a finite float
///
/// # Returns
///
/// * `Ok(Transaction)` for a well-formed line
/// * `Err(String)` describing why the line was rejected
pub fn parse_line(line: &str) -> Result<Transaction, String> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() != FIELD_COUNT {
        return Err(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        ));
    }

    let product_name = fields[3].replace(',', "").trim().to_string();

    let quantity = fields[4]
        .trim()
        .parse::<i64>()
        .map_err(|_| format!("invalid quantity '{}'", fields[4]))?;

    let unit_price = fields[5]
        .replace(',', "")
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| format!("invalid unit price '{}'", fields[5]))?;

    Ok(Transaction {
        transaction_id: fields[0].to_string(),
        date: fields[1].to_string(),
        product_id: fields[2].to_string(),
        product_name,
        quantity,
        unit_price,
        customer_id: fields[6].to_string(),
        region: fields[7].to_string(),
        product: ProductDetails::default(),
    })
}

/// Parse a sequence of sales lines (header already removed)
///
/// Lines that fail [`parse_line`] are skipped; the output preserves the
/// input order of the lines that survive.
pub fn parse_transactions<S: AsRef<str>>(lines: &[S]) -> Vec<Transaction> {
    let mut transactions = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        match parse_line(line.as_ref()) {
            Ok(transaction) => transactions.push(transaction),
            Err(reason) => {
                tracing::debug!(line = index + 1, %reason, "Dropping malformed sales line");
            }
        }
    }

    transactions
}

//! Product enrichment
//!
//! Left-joins transactions with catalog products. The join key is the numeric
//! part of the ProductID (`"P107"` → `107`); transactions whose id has no
//! numeric form or no catalog entry are kept with empty [`ProductDetails`].

use crate::types::{CatalogId, CatalogProduct, ProductDetails, ProductMapping, Transaction};

/// Extract the catalog id from a sales ProductID
///
/// Returns `None` unless the id is `"P"` followed by one or more ASCII digits.
pub fn extract_numeric_product_id(product_id: &str) -> Option<CatalogId> {
    let digits = product_id.strip_prefix('P')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

impl From<&CatalogProduct> for ProductDetails {
    fn from(product: &CatalogProduct) -> Self {
        ProductDetails {
            product_title: product.title.clone(),
            category: product.category.clone(),
            brand: product.brand.clone(),
            api_price: product.price,
            rating: product.rating,
        }
    }
}

/// Attach catalog attributes to each transaction
///
/// Returns new records in input order; the input slice is left untouched.
/// An empty mapping yields unenriched copies of every transaction.
pub fn enrich_sales_data(
    transactions: &[Transaction],
    mapping: &ProductMapping,
) -> Vec<Transaction> {
    transactions
        .iter()
        .map(|tx| {
            let product = extract_numeric_product_id(&tx.product_id)
                .and_then(|id| mapping.get(&id))
                .map(ProductDetails::from)
                .unwrap_or_default();

            Transaction {
                product,
                ..tx.clone()
            }
        })
        .collect()
}

/// Number of transactions that received a catalog match
pub fn count_enriched(transactions: &[Transaction]) -> usize {
    transactions.iter().filter(|tx| !tx.product.is_empty()).count()
}

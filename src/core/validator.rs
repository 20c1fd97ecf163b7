//! Transaction validation and filtering
//!
//! Validation runs an ordered list of [`ValidationRule`]s over every parsed
//! transaction and stops at the first failure, so each rejected record is
//! counted exactly once. Records that pass are then narrowed by the optional
//! region and amount filters, always in the order region, minimum, maximum.
//!
//! Nothing here fails: bad records are counted in the [`FilterSummary`] and
//! omitted from the returned working set. The caller's slice is never mutated.

use crate::types::Transaction;
use std::collections::BTreeSet;
use std::fmt;

/// A single validity rule for a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationRule {
    /// TransactionID must start with "T"
    TransactionIdPrefix,
    /// ProductID must start with "P"
    ProductIdPrefix,
    /// CustomerID must start with "C"
    CustomerIdPrefix,
    /// Region must be non-empty
    RegionPresent,
    /// Quantity must be strictly positive
    PositiveQuantity,
    /// UnitPrice must be strictly positive
    PositiveUnitPrice,
}

/// Rules in evaluation order
pub const VALIDATION_RULES: [ValidationRule; 6] = [
    ValidationRule::TransactionIdPrefix,
    ValidationRule::ProductIdPrefix,
    ValidationRule::CustomerIdPrefix,
    ValidationRule::RegionPresent,
    ValidationRule::PositiveQuantity,
    ValidationRule::PositiveUnitPrice,
];

impl ValidationRule {
    /// Whether the transaction satisfies this rule
    pub fn check(&self, tx: &Transaction) -> bool {
        match self {
            ValidationRule::TransactionIdPrefix => tx.transaction_id.starts_with('T'),
            ValidationRule::ProductIdPrefix => tx.product_id.starts_with('P'),
            ValidationRule::CustomerIdPrefix => tx.customer_id.starts_with('C'),
            ValidationRule::RegionPresent => !tx.region.is_empty(),
            ValidationRule::PositiveQuantity => tx.quantity > 0,
            ValidationRule::PositiveUnitPrice => tx.unit_price > 0.0,
        }
    }
}

impl fmt::Display for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            ValidationRule::TransactionIdPrefix => "transaction id must start with 'T'",
            ValidationRule::ProductIdPrefix => "product id must start with 'P'",
            ValidationRule::CustomerIdPrefix => "customer id must start with 'C'",
            ValidationRule::RegionPresent => "region must not be empty",
            ValidationRule::PositiveQuantity => "quantity must be positive",
            ValidationRule::PositiveUnitPrice => "unit price must be positive",
        };
        f.write_str(description)
    }
}

/// First rule the transaction violates, or `None` if it is valid
pub fn first_violation(tx: &Transaction) -> Option<ValidationRule> {
    VALIDATION_RULES.into_iter().find(|rule| !rule.check(tx))
}

/// Whether the transaction satisfies every validation rule
pub fn is_valid(tx: &Transaction) -> bool {
    first_violation(tx).is_none()
}

/// Optional narrowing applied to valid transactions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOptions {
    /// Keep only this region (exact, case-sensitive match)
    pub region: Option<String>,

    /// Keep only transactions with amount >= this bound
    pub min_amount: Option<f64>,

    /// Keep only transactions with amount <= this bound
    pub max_amount: Option<f64>,
}

/// Record counts for one validation/filter run
///
/// `invalid + filtered_by_region + filtered_by_amount + final_count`
/// always equals `total_input`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSummary {
    /// Records received
    pub total_input: usize,

    /// Records failing a validation rule
    pub invalid: usize,

    /// Valid records removed by the region filter
    pub filtered_by_region: usize,

    /// Valid records removed by the min and max amount filters combined
    pub filtered_by_amount: usize,

    /// Records in the final working set
    pub final_count: usize,
}

/// Inclusive range of transaction amounts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

/// Diagnostics gathered over the valid records before filtering
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationDiagnostics {
    /// Distinct regions, sorted lexicographically
    pub regions: Vec<String>,

    /// Smallest and largest amount, `None` when there were no valid records
    pub amount_range: Option<AmountRange>,

    /// Rejection count per rule, in rule evaluation order (zero counts omitted)
    pub rejections: Vec<(ValidationRule, usize)>,
}

/// Result of [`validate_and_filter`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterOutcome {
    /// Valid transactions that passed every filter, in input order
    pub transactions: Vec<Transaction>,

    /// Number of records failing validation
    pub invalid_count: usize,

    /// Counts per stage
    pub summary: FilterSummary,

    /// Regions and amount range seen among valid records
    pub diagnostics: ValidationDiagnostics,
}

/// Validate transactions and apply the optional filters
///
/// # Arguments
///
/// * `transactions` - Parsed transactions (not modified)
/// * `options` - Region and amount filters; `None` fields are skipped
///
/// # Returns
///
/// A [`FilterOutcome`] holding clones of the surviving transactions, the
/// invalid count, the per-stage summary and the validation diagnostics.
pub fn validate_and_filter(transactions: &[Transaction], options: &FilterOptions) -> FilterOutcome {
    let mut valid: Vec<Transaction> = Vec::with_capacity(transactions.len());
    let mut invalid_count = 0;
    let mut rejections = [0usize; VALIDATION_RULES.len()];
    let mut regions = BTreeSet::new();
    let mut amount_range: Option<AmountRange> = None;

    // Validation pass
    for tx in transactions {
        if let Some(rule) = first_violation(tx) {
            invalid_count += 1;
            if let Some(position) = VALIDATION_RULES.iter().position(|r| *r == rule) {
                rejections[position] += 1;
            }
            continue;
        }

        regions.insert(tx.region.clone());
        let amount = tx.amount();
        amount_range = Some(match amount_range {
            Some(range) => AmountRange {
                min: range.min.min(amount),
                max: range.max.max(amount),
            },
            None => AmountRange {
                min: amount,
                max: amount,
            },
        });
        valid.push(tx.clone());
    }

    let diagnostics = ValidationDiagnostics {
        regions: regions.into_iter().collect(),
        amount_range,
        rejections: VALIDATION_RULES
            .into_iter()
            .zip(rejections)
            .filter(|(_, count)| *count > 0)
            .collect(),
    };

    tracing::debug!(regions = ?diagnostics.regions, "Regions available");
    if let Some(range) = diagnostics.amount_range {
        tracing::debug!(min = range.min, max = range.max, "Transaction amount range");
    }

    // Filter pass
    let mut filtered_by_region = 0;
    if let Some(region) = &options.region {
        let before = valid.len();
        valid.retain(|tx| tx.region == *region);
        filtered_by_region = before - valid.len();
        tracing::debug!(%region, removed = filtered_by_region, "Applied region filter");
    }

    let mut filtered_by_amount = 0;
    if let Some(min_amount) = options.min_amount {
        let before = valid.len();
        valid.retain(|tx| tx.amount() >= min_amount);
        filtered_by_amount += before - valid.len();
        tracing::debug!(
            min_amount,
            removed = before - valid.len(),
            "Applied minimum amount filter"
        );
    }
    if let Some(max_amount) = options.max_amount {
        let before = valid.len();
        valid.retain(|tx| tx.amount() <= max_amount);
        filtered_by_amount += before - valid.len();
        tracing::debug!(
            max_amount,
            removed = before - valid.len(),
            "Applied maximum amount filter"
        );
    }

    let summary = FilterSummary {
        total_input: transactions.len(),
        invalid: invalid_count,
        filtered_by_region,
        filtered_by_amount,
        final_count: valid.len(),
    };

    FilterOutcome {
        transactions: valid,
        invalid_count,
        summary,
        diagnostics,
    }
}

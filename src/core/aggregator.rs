//! Sales aggregations
//!
//! Every function takes the filtered, valid transaction list and returns a
//! freshly built view. Grouping uses a map local to the call plus a `Vec` that
//! remembers first-encounter order, so ties in the sorted views are resolved
//! deterministically by which group appeared first in the input.

use crate::types::Transaction;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Number of products returned by [`top_selling_products`] by default
pub const DEFAULT_TOP_N: usize = 5;

/// Quantity below which a product is considered low-performing by default
pub const DEFAULT_LOW_PERFORMANCE_THRESHOLD: i64 = 10;

/// Total spend at or above which a customer is "High Value"
pub const HIGH_VALUE_THRESHOLD: f64 = 50_000.0;

/// Total spend at or above which a customer is "Medium Value"
pub const MEDIUM_VALUE_THRESHOLD: f64 = 10_000.0;

/// Revenue summary for one region
#[derive(Debug, Clone, PartialEq)]
pub struct RegionSales {
    pub region: String,
    pub revenue: f64,
    pub transaction_count: usize,
    /// Share of total revenue across all regions, in percent
    pub percentage: f64,
}

/// Quantity and revenue summary for one product name
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSales {
    pub product_name: String,
    pub total_quantity: i64,
    pub revenue: f64,
}

/// Customer classification by cumulative spend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerSegment {
    HighValue,
    MediumValue,
    LowValue,
}

impl CustomerSegment {
    /// All segments, from highest to lowest spend
    pub const ALL: [CustomerSegment; 3] = [
        CustomerSegment::HighValue,
        CustomerSegment::MediumValue,
        CustomerSegment::LowValue,
    ];

    /// Segment for a given total spend (lower bounds inclusive)
    pub fn from_total_spend(total_spend: f64) -> Self {
        if total_spend >= HIGH_VALUE_THRESHOLD {
            CustomerSegment::HighValue
        } else if total_spend >= MEDIUM_VALUE_THRESHOLD {
            CustomerSegment::MediumValue
        } else {
            CustomerSegment::LowValue
        }
    }
}

impl fmt::Display for CustomerSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CustomerSegment::HighValue => "High Value",
            CustomerSegment::MediumValue => "Medium Value",
            CustomerSegment::LowValue => "Low Value",
        };
        f.write_str(label)
    }
}

/// Spend summary for one customer
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerSummary {
    pub customer_id: String,
    pub total_spend: f64,
    pub transaction_count: usize,
    pub segment: CustomerSegment,
}

/// Revenue for one date
#[derive(Debug, Clone, PartialEq)]
pub struct DailySales {
    pub date: String,
    pub revenue: f64,
    pub transaction_count: usize,
}

/// Group transactions by a string key, preserving first-encounter order
///
/// `fold` is applied to each group's accumulator, created with `init`.
fn group_in_encounter_order<'a, A, K, I, F>(
    transactions: &'a [Transaction],
    key: K,
    init: I,
    mut fold: F,
) -> Vec<(&'a str, A)>
where
    K: Fn(&'a Transaction) -> &'a str,
    I: Fn() -> A,
    F: FnMut(&mut A, &Transaction),
{
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, A)> = Vec::new();

    for tx in transactions {
        let name = key(tx);
        let position = *index.entry(name).or_insert_with(|| {
            groups.push((name, init()));
            groups.len() - 1
        });
        fold(&mut groups[position].1, tx);
    }

    groups
}

/// Revenue, transaction count and revenue share per region
///
/// Sorted by revenue descending; equal revenues keep first-encounter order.
/// When total revenue is zero every percentage is zero.
pub fn region_wise_sales(transactions: &[Transaction]) -> Vec<RegionSales> {
    let groups = group_in_encounter_order(
        transactions,
        |tx| tx.region.as_str(),
        || (0.0_f64, 0_usize),
        |(revenue, count): &mut (f64, usize), tx| {
            *revenue += tx.amount();
            *count += 1;
        },
    );

    let total_revenue: f64 = groups.iter().map(|(_, (revenue, _))| revenue).sum();

    let mut regions: Vec<RegionSales> = groups
        .into_iter()
        .map(|(region, (revenue, transaction_count))| RegionSales {
            region: region.to_string(),
            revenue,
            transaction_count,
            percentage: if total_revenue == 0.0 {
                0.0
            } else {
                revenue / total_revenue * 100.0
            },
        })
        .collect();

    regions.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    regions
}

/// Total quantity and revenue per product name, in first-encounter order
///
/// Quantities saturate at `i64::MAX` instead of overflowing.
pub fn product_sales(transactions: &[Transaction]) -> Vec<ProductSales> {
    group_in_encounter_order(
        transactions,
        |tx| tx.product_name.as_str(),
        || (0_i64, 0.0_f64),
        |(quantity, revenue): &mut (i64, f64), tx| {
            *quantity = quantity.saturating_add(tx.quantity);
            *revenue += tx.amount();
        },
    )
    .into_iter()
    .map(|(name, (total_quantity, revenue))| ProductSales {
        product_name: name.to_string(),
        total_quantity,
        revenue,
    })
    .collect()
}

/// The `n` products with the highest total quantity
///
/// Sorted by quantity descending; equal quantities keep first-encounter order.
pub fn top_selling_products(transactions: &[Transaction], n: usize) -> Vec<ProductSales> {
    let mut products = product_sales(transactions);
    products.sort_by(|a, b| b.total_quantity.cmp(&a.total_quantity));
    products.truncate(n);
    products
}

/// Products whose total quantity is strictly below `threshold`
///
/// Returned in first-encounter order.
pub fn low_performing_products(transactions: &[Transaction], threshold: i64) -> Vec<ProductSales> {
    product_sales(transactions)
        .into_iter()
        .filter(|product| product.total_quantity < threshold)
        .collect()
}

/// Total spend, transaction count and segment per customer
///
/// Sorted by total spend descending; equal spends keep first-encounter order.
pub fn customer_analysis(transactions: &[Transaction]) -> Vec<CustomerSummary> {
    let mut customers: Vec<CustomerSummary> = group_in_encounter_order(
        transactions,
        |tx| tx.customer_id.as_str(),
        || (0.0_f64, 0_usize),
        |(spend, count): &mut (f64, usize), tx| {
            *spend += tx.amount();
            *count += 1;
        },
    )
    .into_iter()
    .map(|(customer_id, (total_spend, transaction_count))| CustomerSummary {
        customer_id: customer_id.to_string(),
        total_spend,
        transaction_count,
        segment: CustomerSegment::from_total_spend(total_spend),
    })
    .collect();

    customers.sort_by(|a, b| b.total_spend.total_cmp(&a.total_spend));
    customers
}

/// Number of customers per segment, highest segment first
///
/// Every segment is listed, including those with no customers.
pub fn segment_counts(customers: &[CustomerSummary]) -> Vec<(CustomerSegment, usize)> {
    CustomerSegment::ALL
        .into_iter()
        .map(|segment| {
            let count = customers.iter().filter(|c| c.segment == segment).count();
            (segment, count)
        })
        .collect()
}

/// Revenue and transaction count per date, ordered by date string
pub fn daily_sales_trend(transactions: &[Transaction]) -> Vec<DailySales> {
    let mut days: BTreeMap<&str, (f64, usize)> = BTreeMap::new();

    for tx in transactions {
        let (revenue, count) = days.entry(tx.date.as_str()).or_insert((0.0, 0));
        *revenue += tx.amount();
        *count += 1;
    }

    days.into_iter()
        .map(|(date, (revenue, transaction_count))| DailySales {
            date: date.to_string(),
            revenue,
            transaction_count,
        })
        .collect()
}

/// Date with the highest accumulated revenue
///
/// Ties go to the lexicographically smallest date. Returns `None` when there
/// are no transactions.
pub fn peak_sales_day(transactions: &[Transaction]) -> Option<(String, f64)> {
    let mut peak: Option<DailySales> = None;

    // Trend is date-ordered, so keeping the first strict maximum picks the smallest date on ties
    for day in daily_sales_trend(transactions) {
        if peak.as_ref().map_or(true, |best| day.revenue > best.revenue) {
            peak = Some(day);
        }
    }

    peak.map(|day| (day.date, day.revenue))
}

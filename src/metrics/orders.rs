//! Order-level metrics. Grouping is by `order_id`, never by line item.

use std::collections::HashSet;

use crate::model::SalesRow;

use super::revenue::calculate_total_revenue;

/// Number of distinct orders.
pub fn calculate_order_count(rows: &[SalesRow]) -> usize {
    rows.iter()
        .map(|row| row.order_id.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Total revenue divided by the number of distinct orders.
pub fn calculate_average_order_value(rows: &[SalesRow]) -> Option<f64> {
    super::mean(calculate_total_revenue(rows), calculate_order_count(rows))
}

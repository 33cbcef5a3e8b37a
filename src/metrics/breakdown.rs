//! Revenue broken down by product category and customer state.

use std::collections::HashMap;

use serde::Serialize;

use crate::model::SalesRow;

/// Revenue for one group key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupRevenue {
    pub key: String,
    pub revenue: f64,
}

/// Revenue per product category, highest first.
///
/// Rows without a category are skipped.
pub fn calculate_category_revenue(rows: &[SalesRow]) -> Vec<GroupRevenue> {
    group_revenue(rows, |row| row.category.as_deref())
}

/// Revenue per customer state, highest first.
///
/// Rows without a state are skipped.
pub fn calculate_state_revenue(rows: &[SalesRow]) -> Vec<GroupRevenue> {
    group_revenue(rows, |row| row.state.as_deref())
}

fn group_revenue<'a, F>(rows: &'a [SalesRow], key: F) -> Vec<GroupRevenue>
where
    F: Fn(&'a SalesRow) -> Option<&'a str>,
{
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for row in rows {
        if let Some(k) = key(row) {
            *totals.entry(k).or_default() += row.price;
        }
    }

    let mut groups: Vec<GroupRevenue> = totals
        .into_iter()
        .map(|(key, revenue)| GroupRevenue {
            key: key.to_string(),
            revenue,
        })
        .collect();
    // Ties break on key so output is deterministic.
    groups.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.key.cmp(&b.key))
    });
    groups
}

//! Revenue totals, growth and the monthly trend.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{OrderRecord, SalesRow, YearMonth};

/// Revenue for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyRevenue {
    pub month: YearMonth,
    pub revenue: f64,
}

/// Month-over-month change. `growth` is `None` for the first month and when
/// the previous month had no revenue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyGrowth {
    pub month: YearMonth,
    pub growth: Option<f64>,
}

/// Sum of item prices. `0.0` for no rows.
pub fn calculate_total_revenue(rows: &[SalesRow]) -> f64 {
    rows.iter().fold(0.0, |total, row| total + row.price)
}

/// Percent change from `prior` to `current`.
///
/// `None` when `prior` is zero or either input is not finite.
pub fn calculate_revenue_growth(current: f64, prior: f64) -> Option<f64> {
    if prior == 0.0 || !prior.is_finite() || !current.is_finite() {
        return None;
    }
    Some((current - prior) / prior * 100.0)
}

/// Revenue per calendar month of purchase, oldest first.
pub fn calculate_monthly_revenue(rows: &[SalesRow]) -> Vec<MonthlyRevenue> {
    let mut by_month: BTreeMap<YearMonth, f64> = BTreeMap::new();
    for row in rows {
        *by_month.entry(YearMonth::of(row.purchased_at())).or_default() += row.price;
    }
    by_month
        .into_iter()
        .map(|(month, revenue)| MonthlyRevenue { month, revenue })
        .collect()
}

/// Month-over-month growth for a chronological monthly series.
pub fn calculate_monthly_growth(monthly: &[MonthlyRevenue]) -> Vec<MonthlyGrowth> {
    let mut previous: Option<f64> = None;
    monthly
        .iter()
        .map(|entry| {
            let growth =
                previous.and_then(|prior| calculate_revenue_growth(entry.revenue, prior));
            previous = Some(entry.revenue);
            MonthlyGrowth {
                month: entry.month,
                growth,
            }
        })
        .collect()
}

/// Mean of the defined month-over-month growth values.
pub fn calculate_mean_monthly_growth(monthly: &[MonthlyRevenue]) -> Option<f64> {
    let defined: Vec<f64> = calculate_monthly_growth(monthly)
        .into_iter()
        .filter_map(|entry| entry.growth)
        .collect();
    super::mean(defined.iter().sum(), defined.len())
}

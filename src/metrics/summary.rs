//! Headline KPIs for one period.

use serde::Serialize;

use crate::filters::{filter_by_period, FilterError};
use crate::model::SalesRow;

use super::experience::calculate_average_delivery_time;
use super::orders::{calculate_average_order_value, calculate_order_count};
use super::revenue::{calculate_monthly_revenue, calculate_total_revenue, MonthlyRevenue};

/// Top-level KPIs for a year or a single month.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeriodSummary {
    /// `"2023"` or `"2023-03"`.
    pub period: String,
    pub total_revenue: f64,
    pub order_count: usize,
    pub average_order_value: Option<f64>,
    pub average_delivery_days: Option<f64>,
    pub monthly_revenue: Vec<MonthlyRevenue>,
}

/// Label for a period: `"2023"` for a year, `"2023-03"` for a month.
pub fn period_label(year: i32, month: Option<u32>) -> String {
    match month {
        Some(month) => format!("{}-{:02}", year, month),
        None => year.to_string(),
    }
}

/// Restrict `rows` to the period and compute its headline KPIs.
pub fn summarize_period_metrics(
    rows: &[SalesRow],
    year: i32,
    month: Option<u32>,
) -> Result<PeriodSummary, FilterError> {
    let scoped = filter_by_period(rows, year, month)?;
    Ok(PeriodSummary {
        period: period_label(year, month),
        total_revenue: calculate_total_revenue(&scoped),
        order_count: calculate_order_count(&scoped),
        average_order_value: calculate_average_order_value(&scoped),
        average_delivery_days: calculate_average_delivery_time(&scoped),
        monthly_revenue: calculate_monthly_revenue(&scoped),
    })
}

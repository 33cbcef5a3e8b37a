//! KPI calculations over sales row-sets.
//!
//! Callers filter rows to the scope they want (period, delivered) and pass
//! the result in. All functions are pure. Over an empty row-set they return
//! `0`, an empty collection or `None`, never a panic or NaN. Growth values
//! are percentages (`100.0` means doubled).

mod breakdown;
mod experience;
mod orders;
mod revenue;
mod summary;


pub use breakdown::{calculate_category_revenue, calculate_state_revenue, GroupRevenue};
pub use experience::{
    calculate_average_delivery_time, calculate_average_review_score,
    calculate_delivery_review_correlation, calculate_order_status_distribution,
    calculate_order_status_shares, calculate_payment_total, calculate_review_score_distribution,
    calculate_review_score_shares,
};
pub use orders::{calculate_average_order_value, calculate_order_count};
pub use revenue::{
    calculate_mean_monthly_growth, calculate_monthly_growth, calculate_monthly_revenue,
    calculate_revenue_growth, calculate_total_revenue, MonthlyGrowth, MonthlyRevenue,
};
pub use summary::{period_label, summarize_period_metrics, PeriodSummary};

/// Arithmetic mean, `None` for no values.
fn mean(sum: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

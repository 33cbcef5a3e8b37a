//! Row-set filters and the delivery-speed augmentation.
//!
//! Every function borrows its input and returns a new row-set; kept rows
//! stay in input order.

pub mod speed;


use chrono::{Datelike, NaiveDateTime};

use crate::model::{OrderRecord, OrderStatus, SalesRow};

pub use speed::{
    categorize_delivery_speed, DeliveryBands, SpeedBand, DASHBOARD_SPEED_BANDS,
    DEFAULT_SPEED_BANDS,
};

const SECONDS_PER_DAY: i64 = 86_400;

/// Errors reported by filters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("Invalid month {0}: expected 1-12")]
    InvalidMonth(u32),

    #[error("Invalid delivery bands: {0}")]
    InvalidBands(String),
}

/// Check that an optional month is within 1-12.
pub fn validate_month(month: Option<u32>) -> Result<(), FilterError> {
    match month {
        Some(m) if !(1..=12).contains(&m) => Err(FilterError::InvalidMonth(m)),
        _ => Ok(()),
    }
}

/// Keep rows whose order status is delivered.
pub fn filter_delivered_orders<R>(rows: &[R]) -> Vec<R>
where
    R: OrderRecord + Clone,
{
    rows.iter()
        .filter(|row| row.order_status() == OrderStatus::Delivered)
        .cloned()
        .collect()
}

/// Keep rows purchased in `year` and, when given, in `month`.
pub fn filter_by_period<R>(rows: &[R], year: i32, month: Option<u32>) -> Result<Vec<R>, FilterError>
where
    R: OrderRecord + Clone,
{
    validate_month(month)?;
    Ok(rows
        .iter()
        .filter(|row| {
            let purchased = row.purchased_at();
            purchased.year() == year && month.map_or(true, |m| purchased.month() == m)
        })
        .cloned()
        .collect())
}

/// Whole days from purchase to delivery, rounded toward negative infinity.
pub fn delivery_days(purchased: NaiveDateTime, delivered: NaiveDateTime) -> i64 {
    (delivered - purchased)
        .num_seconds()
        .div_euclid(SECONDS_PER_DAY)
}

/// Fill `delivery_days` and `delivery_speed` for rows with a delivery date.
///
/// Rows without one come back with both fields `None`.
pub fn add_delivery_speed(rows: &[SalesRow], bands: &DeliveryBands) -> Vec<SalesRow> {
    rows.iter()
        .map(|row| {
            let days = row
                .order_delivered_customer_date
                .map(|delivered| delivery_days(row.order_purchase_timestamp, delivered));
            SalesRow {
                delivery_days: days,
                delivery_speed: days.map(|d| bands.categorize(d).to_string()),
                ..row.clone()
            }
        })
        .collect()
}

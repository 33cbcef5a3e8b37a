//! Sales metric step definitions.

use cucumber::{given, then, when, World};
use shopmetrics::filters::{filter_by_period, filter_delivered_orders, DeliveryBands, FilterError};
use shopmetrics::metrics::{
    calculate_revenue_growth, calculate_total_revenue, summarize_period_metrics, PeriodSummary,
};
use shopmetrics::model::{OrderStatus, SalesRow};

use crate::common::{approx_eq, sales_row};

/// Test context for metric scenarios.
#[derive(Debug, Default, World)]
pub struct MetricsWorld {
    rows: Vec<SalesRow>,
    bands: DeliveryBands,
    summary: Option<Result<PeriodSummary, FilterError>>,
    growth: Option<Option<f64>>,
}

impl MetricsWorld {
    fn push_item(&mut self, order_id: &str, status: OrderStatus, purchased: &str, price: f64) {
        let line = self
            .rows
            .iter()
            .filter(|row| row.order_id == order_id)
            .count() as u32
            + 1;
        let mut row = sales_row(order_id, status, purchased, price);
        row.order_item_id = line;
        self.rows.push(row);
    }

    fn summary(&self) -> &PeriodSummary {
        match self.summary.as_ref().expect("no summary computed") {
            Ok(summary) => summary,
            Err(e) => panic!("summary failed: {}", e),
        }
    }
}

// --- Given steps ---

#[given(expr = "delivered order {string} purchased {string} has an item priced {float}")]
async fn given_delivered_item(
    world: &mut MetricsWorld,
    order_id: String,
    purchased: String,
    price: f64,
) {
    world.push_item(&order_id, OrderStatus::Delivered, &purchased, price);
}

#[given(expr = "canceled order {string} purchased {string} has an item priced {float}")]
async fn given_canceled_item(
    world: &mut MetricsWorld,
    order_id: String,
    purchased: String,
    price: f64,
) {
    world.push_item(&order_id, OrderStatus::Canceled, &purchased, price);
}

#[given("the default delivery bands")]
async fn given_default_bands(world: &mut MetricsWorld) {
    world.bands = DeliveryBands::default();
}

#[given("the dashboard delivery bands")]
async fn given_dashboard_bands(world: &mut MetricsWorld) {
    world.bands = DeliveryBands::dashboard();
}

// --- When steps ---

#[when("I keep delivered orders")]
async fn when_keep_delivered(world: &mut MetricsWorld) {
    world.rows = filter_delivered_orders(&world.rows);
}

#[when(expr = "I summarize year {int}")]
async fn when_summarize_year(world: &mut MetricsWorld, year: i32) {
    world.summary = Some(summarize_period_metrics(&world.rows, year, None));
}

#[when(expr = "I summarize year {int} month {int}")]
async fn when_summarize_month(world: &mut MetricsWorld, year: i32, month: u32) {
    world.summary = Some(summarize_period_metrics(&world.rows, year, Some(month)));
}

#[when(expr = "I compute growth from {float} to {float}")]
async fn when_compute_growth(world: &mut MetricsWorld, prior: f64, current: f64) {
    world.growth = Some(calculate_revenue_growth(current, prior));
}

// --- Then steps ---

#[then(expr = "the total revenue is {float}")]
async fn then_total_revenue(world: &mut MetricsWorld, expected: f64) {
    let actual = world.summary().total_revenue;
    assert!(approx_eq(actual, expected), "revenue {} != {}", actual, expected);
}

#[then(expr = "the order count is {int}")]
async fn then_order_count(world: &mut MetricsWorld, expected: usize) {
    assert_eq!(world.summary().order_count, expected);
}

#[then(expr = "the average order value is {float}")]
async fn then_average_order_value(world: &mut MetricsWorld, expected: f64) {
    let actual = world
        .summary()
        .average_order_value
        .expect("average order value should be defined");
    assert!(approx_eq(actual, expected), "AOV {} != {}", actual, expected);
}

#[then("there is no average order value")]
async fn then_no_average_order_value(world: &mut MetricsWorld) {
    assert_eq!(world.summary().average_order_value, None);
}

#[then(expr = "the summary revenue equals the standalone revenue for year {int}")]
async fn then_summary_matches_standalone(world: &mut MetricsWorld, year: i32) {
    let scoped = filter_by_period(&world.rows, year, None).expect("valid period");
    let standalone = calculate_total_revenue(&scoped);
    assert!(approx_eq(world.summary().total_revenue, standalone));
}

#[then("the period is rejected as an invalid month")]
async fn then_invalid_month(world: &mut MetricsWorld) {
    let result = world.summary.as_ref().expect("no summary computed");
    assert!(
        matches!(result, Err(FilterError::InvalidMonth(_))),
        "expected invalid month, got {:?}",
        result
    );
}

#[then("there is no growth")]
async fn then_no_growth(world: &mut MetricsWorld) {
    assert_eq!(world.growth, Some(None));
}

#[then(expr = "the growth is {float} percent")]
async fn then_growth(world: &mut MetricsWorld, expected: f64) {
    let actual = world
        .growth
        .flatten()
        .expect("growth should be defined");
    assert!(approx_eq(actual, expected), "growth {} != {}", actual, expected);
}

#[then(expr = "a delivery of {int} days is {string}")]
async fn then_delivery_band(world: &mut MetricsWorld, days: i64, band: String) {
    assert_eq!(world.bands.categorize(days), band);
}

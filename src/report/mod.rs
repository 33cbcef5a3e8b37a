//! Analysis pipeline: loader → sales builder → filters → metrics.
//!
//! Produces one [`AnalysisReport`] holding every value the dashboard views
//! render, for the configured period and its comparison period. Values are
//! plain numbers; formatting is left to the consumer.


use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;
use tracing::{info, warn};

use crate::config::{Config, ConfigError};
use crate::filters::{
    add_delivery_speed, filter_by_period, filter_delivered_orders, DeliveryBands, FilterError,
};
use crate::loader::{load_all_datasets, Datasets, LoadError};
use crate::metrics::{
    calculate_average_delivery_time, calculate_average_order_value,
    calculate_average_review_score, calculate_category_revenue,
    calculate_delivery_review_correlation, calculate_mean_monthly_growth,
    calculate_monthly_revenue, calculate_order_count, calculate_order_status_distribution,
    calculate_order_status_shares, calculate_revenue_growth, calculate_review_score_distribution,
    calculate_review_score_shares, calculate_state_revenue, calculate_total_revenue, period_label,
    GroupRevenue,
};
use crate::model::{OrderStatus, SalesRow};
use crate::sales::{attach_dimensions, build_sales_data};

/// Errors that abort an analysis run.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Filter(#[from] FilterError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A value for the analysis period next to the comparison period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Comparison {
    pub current: Option<f64>,
    pub comparison: Option<f64>,
    /// Percent change from comparison to current.
    pub growth: Option<f64>,
}

impl Comparison {
    pub fn new(current: Option<f64>, comparison: Option<f64>) -> Self {
        let growth = match (current, comparison) {
            (Some(current), Some(comparison)) => calculate_revenue_growth(current, comparison),
            _ => None,
        };
        Self {
            current,
            comparison,
            growth,
        }
    }
}

/// A count for the analysis period next to the comparison period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CountComparison {
    pub current: usize,
    pub comparison: usize,
    /// Percent change from comparison to current.
    pub growth: Option<f64>,
}

impl CountComparison {
    pub fn new(current: usize, comparison: usize) -> Self {
        Self {
            current,
            comparison,
            growth: calculate_revenue_growth(current as f64, comparison as f64),
        }
    }
}

/// Headline KPI cards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiBlock {
    pub total_revenue: Comparison,
    /// Mean month-over-month revenue growth within the analysis period.
    pub mean_monthly_growth: Option<f64>,
    pub average_order_value: Comparison,
    pub order_count: CountComparison,
    pub average_delivery_days: Comparison,
    pub average_review_score: Option<f64>,
}

/// Revenue for one calendar month in both periods.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub month: u32,
    pub current: Option<f64>,
    pub comparison: Option<f64>,
}

/// Mean review score for one delivery-speed band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BandScore {
    pub band: String,
    pub average_score: Option<f64>,
}

/// Everything the dashboard and notebook views need.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub period: String,
    pub comparison_period: String,
    pub kpis: KpiBlock,
    pub revenue_trend: Vec<TrendPoint>,
    pub top_categories: Vec<GroupRevenue>,
    pub state_revenue: Vec<GroupRevenue>,
    /// One entry per band, in band order.
    pub delivery_review: Vec<BandScore>,
    pub review_scores: BTreeMap<u8, usize>,
    pub review_score_shares: BTreeMap<u8, f64>,
    /// All orders (any status) purchased in the analysis period.
    pub order_status: BTreeMap<OrderStatus, usize>,
    pub order_status_shares: BTreeMap<OrderStatus, f64>,
}

/// Load datasets from `config.data.dir` and analyze them.
///
/// `config` is validated before any file is read.
pub fn run_analysis(config: &Config) -> Result<AnalysisReport, ReportError> {
    config.validate()?;
    let datasets = load_all_datasets(&config.data.dir)?;
    build_report(&datasets, config)
}

/// Analyze already-loaded datasets.
pub fn analyze(datasets: &Datasets, config: &Config) -> Result<AnalysisReport, ReportError> {
    config.validate()?;
    build_report(datasets, config)
}

/// Compute the report for a validated `config`.
fn build_report(datasets: &Datasets, config: &Config) -> Result<AnalysisReport, ReportError> {
    let analysis = &config.analysis;
    let bands = config.delivery.bands()?;
    let year = analysis.year;
    let comparison_year = analysis.comparison_year();
    let month = analysis.month;

    let period = period_label(year, month);
    let comparison_period = period_label(comparison_year, month);
    info!(period = %period, comparison = %comparison_period, "starting analysis");

    let sales = build_sales_data(&datasets.orders, &datasets.order_items);
    let sales = attach_dimensions(&sales, &datasets.products, &datasets.customers);
    let delivered = add_delivery_speed(&filter_delivered_orders(&sales), &bands);

    let current = filter_by_period(&delivered, year, month)?;
    let comparison = filter_by_period(&delivered, comparison_year, month)?;
    if current.is_empty() {
        warn!(period = %period, "no delivered sales in analysis period");
    }
    if comparison.is_empty() {
        warn!(period = %comparison_period, "no delivered sales in comparison period");
    }

    let kpis = KpiBlock {
        total_revenue: Comparison::new(
            Some(calculate_total_revenue(&current)),
            Some(calculate_total_revenue(&comparison)),
        ),
        mean_monthly_growth: calculate_mean_monthly_growth(&calculate_monthly_revenue(&current)),
        average_order_value: Comparison::new(
            calculate_average_order_value(&current),
            calculate_average_order_value(&comparison),
        ),
        order_count: CountComparison::new(
            calculate_order_count(&current),
            calculate_order_count(&comparison),
        ),
        average_delivery_days: Comparison::new(
            calculate_average_delivery_time(&current),
            calculate_average_delivery_time(&comparison),
        ),
        average_review_score: calculate_average_review_score(&current, &datasets.reviews),
    };

    let mut top_categories = calculate_category_revenue(&current);
    top_categories.truncate(analysis.top_categories);

    let period_orders = filter_by_period(&datasets.orders, year, month)?;

    let report = AnalysisReport {
        period,
        comparison_period,
        kpis,
        revenue_trend: revenue_trend(&current, &comparison),
        top_categories,
        state_revenue: calculate_state_revenue(&current),
        delivery_review: delivery_review(&current, datasets, &bands),
        review_scores: calculate_review_score_distribution(&current, &datasets.reviews),
        review_score_shares: calculate_review_score_shares(&current, &datasets.reviews),
        order_status: calculate_order_status_distribution(&period_orders),
        order_status_shares: calculate_order_status_shares(&period_orders),
    };

    info!(
        period = %report.period,
        sales_rows = current.len(),
        orders = calculate_order_count(&current),
        "analysis complete"
    );
    Ok(report)
}

/// Monthly revenue of both periods aligned on month number.
fn revenue_trend(current: &[SalesRow], comparison: &[SalesRow]) -> Vec<TrendPoint> {
    let by_month = |rows: &[SalesRow]| -> BTreeMap<u32, f64> {
        let mut totals = BTreeMap::new();
        for entry in calculate_monthly_revenue(rows) {
            *totals.entry(entry.month.month).or_default() += entry.revenue;
        }
        totals
    };
    let current = by_month(current);
    let comparison = by_month(comparison);

    let months: BTreeSet<u32> = current.keys().chain(comparison.keys()).copied().collect();
    months
        .into_iter()
        .map(|month| TrendPoint {
            month,
            current: current.get(&month).copied(),
            comparison: comparison.get(&month).copied(),
        })
        .collect()
}

/// Mean review score per band, reindexed to band order.
fn delivery_review(rows: &[SalesRow], datasets: &Datasets, bands: &DeliveryBands) -> Vec<BandScore> {
    let scores = calculate_delivery_review_correlation(rows, &datasets.reviews);
    bands
        .labels()
        .map(|band| BandScore {
            band: band.to_string(),
            average_score: scores.get(band).copied(),
        })
        .collect()
}

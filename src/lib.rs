//! shopmetrics - E-commerce KPI engine
//!
//! Computes business KPIs (revenue, growth, order value, review scores,
//! delivery timing) from flat e-commerce transaction exports.
//!
//! Data flows one way: raw tables ([`loader`]) → joined sales rows
//! ([`sales`]) → filtered subsets ([`filters`]) → KPIs ([`metrics`]) →
//! the combined [`report`].

pub mod config;
pub mod filters;
pub mod loader;
pub mod metrics;
pub mod model;
pub mod report;
pub mod sales;
pub mod utils;

#[cfg(test)]
mod test_utils;

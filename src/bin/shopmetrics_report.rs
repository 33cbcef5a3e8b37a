//! shopmetrics-report: KPI report generator
//!
//! Loads the transaction exports, computes the KPIs for the configured
//! period against its comparison period and prints the report as JSON.
//!
//! ## Usage
//! ```text
//! shopmetrics-report [CONFIG_PATH]
//! ```
//!
//! ## Configuration
//! - shopmetrics.yaml in the working directory (optional)
//! - CONFIG_PATH argument or SHOPMETRICS_CONFIG: YAML config file
//! - SHOPMETRICS__DATA__DIR: dataset directory (default: ecommerce_data)
//! - SHOPMETRICS__ANALYSIS__YEAR / __MONTH / __COMPARISON_YEAR
//! - SHOPMETRICS_LOG: log filter (default: info), written to stderr

use tracing::{error, info};

use shopmetrics::config::Config;
use shopmetrics::report::run_analysis;
use shopmetrics::utils::bootstrap::init_tracing;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let config_path = std::env::args().nth(1);
    let config = Config::load(config_path.as_deref()).inspect_err(|e| {
        error!(error = %e, "failed to load configuration");
    })?;

    info!(data_dir = %config.data.dir, "shopmetrics-report started");

    let report = run_analysis(&config).inspect_err(|e| {
        error!(error = %e, "analysis failed");
    })?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

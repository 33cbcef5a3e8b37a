//! Metric contract tests using Cucumber.
//!
//! ```bash
//! cargo test --test metrics
//! ```

#[path = "../common/mod.rs"]
mod common;

use cucumber::World;
use steps::metrics::MetricsWorld;

#[tokio::main]
async fn main() {
    println!("\n=== Running Sales Metrics Contract Tests ===\n");
    MetricsWorld::cucumber()
        .fail_on_skipped()
        .run("tests/features/metrics.feature")
        .await;
}

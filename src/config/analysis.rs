//! Data source, analysis period and delivery band configuration types.

use serde::Deserialize;

use crate::filters::{DeliveryBands, FilterError, SpeedBand};

/// Where the dataset exports live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Directory holding the six CSV files.
    pub dir: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: "ecommerce_data".to_string(),
        }
    }
}

/// Period under analysis and the period it is compared against.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Year under analysis.
    pub year: i32,
    /// Comparison year. Defaults to the year before `year`.
    pub comparison_year: Option<i32>,
    /// Month (1-12) applied to both periods; `None` for whole years.
    pub month: Option<u32>,
    /// Number of categories kept in the report.
    pub top_categories: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            year: 2023,
            comparison_year: None,
            month: None,
            top_categories: 10,
        }
    }
}

impl AnalysisConfig {
    pub fn comparison_year(&self) -> i32 {
        self.comparison_year.unwrap_or(self.year - 1)
    }
}

/// Delivery-speed band table.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    pub bands: Vec<SpeedBand>,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            bands: DeliveryBands::default().into_bands(),
        }
    }
}

impl DeliveryConfig {
    /// Validated band table.
    pub fn bands(&self) -> Result<DeliveryBands, FilterError> {
        DeliveryBands::new(self.bands.clone())
    }
}

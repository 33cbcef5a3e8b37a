//! Delivery-speed bands.
//!
//! A band table is an ordered list of `(max_days, label)` entries. A row
//! falls in the first band whose `max_days` is at least its delivery days;
//! the last band has no upper bound.

use serde::{Deserialize, Serialize};

use super::FilterError;

/// Default table: `<=3` Fast, `4-7` Moderate, `8-14` Slow, `>14` Very Slow.
pub const DEFAULT_SPEED_BANDS: &[(Option<i64>, &str)] = &[
    (Some(3), "Fast"),
    (Some(7), "Moderate"),
    (Some(14), "Slow"),
    (None, "Very Slow"),
];

/// Three-band table shown on the sales dashboard.
pub const DASHBOARD_SPEED_BANDS: &[(Option<i64>, &str)] = &[
    (Some(3), "1-3 days"),
    (Some(7), "4-7 days"),
    (None, "8+ days"),
];

/// Bucket a delivery duration with the default band table.
pub fn categorize_delivery_speed(days: i64) -> &'static str {
    band_label(DEFAULT_SPEED_BANDS.iter().copied(), days)
}

/// Label of the first band whose bound admits `days`, else the last label.
fn band_label<'a, I>(bands: I, days: i64) -> &'a str
where
    I: IntoIterator<Item = (Option<i64>, &'a str)>,
{
    let mut label = "";
    for (max_days, band) in bands {
        label = band;
        if max_days.map_or(true, |max| days <= max) {
            break;
        }
    }
    label
}

/// One entry of a band table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeedBand {
    /// Inclusive upper bound in days; `None` for the open-ended last band.
    #[serde(default)]
    pub max_days: Option<i64>,
    pub label: String,
}

impl SpeedBand {
    pub fn new(max_days: Option<i64>, label: impl Into<String>) -> Self {
        Self {
            max_days,
            label: label.into(),
        }
    }
}

/// Validated band table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryBands {
    bands: Vec<SpeedBand>,
}

impl DeliveryBands {
    /// Build a table, checking that thresholds strictly increase, labels are
    /// unique and non-empty, and only the last band is open-ended.
    pub fn new(bands: Vec<SpeedBand>) -> Result<Self, FilterError> {
        let Some((last, bounded)) = bands.split_last() else {
            return Err(FilterError::InvalidBands("band table is empty".to_string()));
        };
        if last.max_days.is_some() {
            return Err(FilterError::InvalidBands(format!(
                "last band `{}` must have no upper bound",
                last.label
            )));
        }

        let mut previous: Option<i64> = None;
        for band in bounded {
            let Some(max) = band.max_days else {
                return Err(FilterError::InvalidBands(format!(
                    "only the last band may be open-ended, `{}` is not last",
                    band.label
                )));
            };
            if previous.is_some_and(|prev| max <= prev) {
                return Err(FilterError::InvalidBands(format!(
                    "threshold {} of `{}` does not increase",
                    max, band.label
                )));
            }
            previous = Some(max);
        }

        for (index, band) in bands.iter().enumerate() {
            if band.label.trim().is_empty() {
                return Err(FilterError::InvalidBands("band label is empty".to_string()));
            }
            if bands[..index].iter().any(|b| b.label == band.label) {
                return Err(FilterError::InvalidBands(format!(
                    "duplicate band label `{}`",
                    band.label
                )));
            }
        }

        Ok(Self { bands })
    }

    /// The three-band dashboard table.
    pub fn dashboard() -> Self {
        Self::from_table(DASHBOARD_SPEED_BANDS)
    }

    fn from_table(table: &[(Option<i64>, &str)]) -> Self {
        Self {
            bands: table
                .iter()
                .map(|(max_days, label)| SpeedBand::new(*max_days, *label))
                .collect(),
        }
    }

    /// Label of the band containing `days`.
    pub fn categorize(&self, days: i64) -> &str {
        band_label(
            self.bands
                .iter()
                .map(|band| (band.max_days, band.label.as_str())),
            days,
        )
    }

    /// Labels in band order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.bands.iter().map(|band| band.label.as_str())
    }

    pub fn bands(&self) -> &[SpeedBand] {
        &self.bands
    }

    pub fn into_bands(self) -> Vec<SpeedBand> {
        self.bands
    }
}

impl Default for DeliveryBands {
    fn default() -> Self {
        Self::from_table(DEFAULT_SPEED_BANDS)
    }
}

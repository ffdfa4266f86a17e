use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{config, error::RequestError};

/// The precomputed per-parcel metric columns, in canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    RReuse,         // Residential reuse suitability
    CReuse,         // Commercial reuse suitability
    IReuse,         // Industrial reuse suitability
    LandValueRatio,
    Walkability,
    Drivability,
    ShapeFactor,
}

impl Metric {
    pub const COUNT: usize = 7;

    pub const ALL: [Metric; Metric::COUNT] = [
        Metric::RReuse,
        Metric::CReuse,
        Metric::IReuse,
        Metric::LandValueRatio,
        Metric::Walkability,
        Metric::Drivability,
        Metric::ShapeFactor,
    ];

    /// Column name in the input artifact.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::RReuse => "r_reuse",
            Metric::CReuse => "c_reuse",
            Metric::IReuse => "i_reuse",
            Metric::LandValueRatio => "land_value_ratio",
            Metric::Walkability => "walkability",
            Metric::Drivability => "drivability",
            Metric::ShapeFactor => "shape_factor",
        }
    }

    /// Initial slider value for this metric.
    pub fn default_weight(&self) -> f64 {
        match self {
            Metric::LandValueRatio => config::LAND_VALUE_RATIO_DEFAULT_WEIGHT,
            _ => config::DEFAULT_WEIGHT,
        }
    }

    #[inline] pub(crate) fn index(&self) -> usize { *self as usize }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Metric {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL.into_iter()
            .find(|metric| metric.column().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RequestError::UnknownMetric(s.to_string()))
    }
}

/// Target land-use category; selects which reuse-suitability metric applies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReuseCategory {
    #[default]
    Residential,
    Commercial,
    Industrial,
}

impl ReuseCategory {
    pub const ALL: [ReuseCategory; 3] = [
        ReuseCategory::Residential,
        ReuseCategory::Commercial,
        ReuseCategory::Industrial,
    ];

    /// The two reuse metrics belonging to the other categories.
    pub fn excluded_metrics(&self) -> [Metric; 2] {
        match self {
            ReuseCategory::Residential => [Metric::CReuse, Metric::IReuse],
            ReuseCategory::Commercial => [Metric::RReuse, Metric::IReuse],
            ReuseCategory::Industrial => [Metric::RReuse, Metric::CReuse],
        }
    }

    /// Metrics that contribute to the weighted sum, in canonical order.
    pub fn applicable_metrics(&self) -> Vec<Metric> {
        let excluded = self.excluded_metrics();
        Metric::ALL.into_iter()
            .filter(|metric| !excluded.contains(metric))
            .collect()
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            ReuseCategory::Residential => "Residential",
            ReuseCategory::Commercial => "Commercial",
            ReuseCategory::Industrial => "Industrial",
        }
    }
}

impl fmt::Display for ReuseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for ReuseCategory {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReuseCategory::ALL.into_iter()
            .find(|category| category.to_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RequestError::UnknownCategory(s.to_string()))
    }
}

/// Raw metric values for one parcel. `None` marks a missing value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Metrics([Option<f64>; Metric::COUNT]);

impl Metrics {
    pub fn new(values: [Option<f64>; Metric::COUNT]) -> Self {
        let mut metrics = Self::default();
        for (metric, value) in Metric::ALL.into_iter().zip(values) {
            metrics.set(metric, value);
        }
        metrics
    }

    #[inline] pub fn get(&self, metric: Metric) -> Option<f64> { self.0[metric.index()] }

    /// Store a value; NaN and infinities are normalized to missing.
    #[inline]
    pub fn set(&mut self, metric: Metric, value: Option<f64>) {
        self.0[metric.index()] = value.filter(|v| v.is_finite());
    }
}

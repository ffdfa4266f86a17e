use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{config, error::RequestError, parcel::{Metric, ParcelId, ReuseCategory}, render::Basemap};

/// One weight per metric, each in `[WEIGHT_MIN, WEIGHT_MAX]` on the `WEIGHT_STEP` grid.
///
/// Serialized as a `{ "metric_name": weight }` map; metrics left out of the map keep
/// their default weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Metric, f64>", into = "BTreeMap<Metric, f64>")]
pub struct Weights([f64; Metric::COUNT]);

impl Weights {
    /// Initial slider values: 0.01 for `land_value_ratio`, 1.0 for everything else.
    pub fn defaults() -> Self {
        Self(Metric::ALL.map(|metric| metric.default_weight()))
    }

    /// All weights zero.
    pub fn zero() -> Self {
        Self([0.0; Metric::COUNT])
    }

    #[inline] pub fn get(&self, metric: Metric) -> f64 { self.0[metric.index()] }

    /// Set a weight, snapping it to the nearest step. Out-of-range values are rejected.
    pub fn set(&mut self, metric: Metric, value: f64) -> Result<(), RequestError> {
        check_weight(metric, value)?;
        self.0[metric.index()] = quantize(value);
        Ok(())
    }

    /// Builder-style `set`.
    pub fn with(mut self, metric: Metric, value: f64) -> Result<Self, RequestError> {
        self.set(metric, value)?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), RequestError> {
        Metric::ALL.into_iter()
            .try_for_each(|metric| check_weight(metric, self.get(metric)))
    }
}

impl Default for Weights {
    fn default() -> Self { Self::defaults() }
}

impl TryFrom<BTreeMap<Metric, f64>> for Weights {
    type Error = RequestError;

    fn try_from(map: BTreeMap<Metric, f64>) -> Result<Self, Self::Error> {
        map.into_iter()
            .try_fold(Self::defaults(), |weights, (metric, value)| weights.with(metric, value))
    }
}

impl From<Weights> for BTreeMap<Metric, f64> {
    fn from(weights: Weights) -> Self {
        Metric::ALL.into_iter()
            .map(|metric| (metric, weights.get(metric)))
            .collect()
    }
}

fn check_weight(metric: Metric, value: f64) -> Result<(), RequestError> {
    if !(config::WEIGHT_MIN..=config::WEIGHT_MAX).contains(&value) {
        return Err(RequestError::WeightOutOfRange { metric, value });
    }
    Ok(())
}

/// Snap to the nearest multiple of `WEIGHT_STEP`.
fn quantize(value: f64) -> f64 {
    let steps_per_unit = (1.0 / config::WEIGHT_STEP).round();
    (value * steps_per_unit).round() / steps_per_unit
}

/// The complete set of user controls for one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Request {
    pub reuse_choice: ReuseCategory,
    pub weights: Weights,
    pub min_area: u32,
    pub max_area: u32,
    pub selected_parcel: Option<ParcelId>,
    pub basemap: Basemap,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            reuse_choice: ReuseCategory::default(),
            weights: Weights::defaults(),
            min_area: *config::MIN_AREA_RANGE.start(),
            max_area: *config::MAX_AREA_RANGE.end(),
            selected_parcel: None,
            basemap: Basemap::default(),
        }
    }
}

impl Request {
    /// Check every control against its slider range, for input layers that enforce them.
    /// `min_area >= max_area` is allowed and simply selects nothing. The pipeline itself
    /// only requires valid weights.
    pub fn validate(&self) -> Result<(), RequestError> {
        if !config::MIN_AREA_RANGE.contains(&self.min_area) {
            return Err(RequestError::MinAreaOutOfRange(self.min_area));
        }
        if !config::MAX_AREA_RANGE.contains(&self.max_area) {
            return Err(RequestError::MaxAreaOutOfRange(self.max_area));
        }
        self.weights.validate()
    }

    pub fn with_reuse_choice(self, reuse_choice: ReuseCategory) -> Self {
        Self { reuse_choice, ..self }
    }

    pub fn with_weights(self, weights: Weights) -> Self {
        Self { weights, ..self }
    }

    pub fn with_area_bounds(self, min_area: u32, max_area: u32) -> Self {
        Self { min_area, max_area, ..self }
    }

    pub fn with_selected_parcel(self, selected_parcel: Option<ParcelId>) -> Self {
        Self { selected_parcel, ..self }
    }

    pub fn with_basemap(self, basemap: Basemap) -> Self {
        Self { basemap, ..self }
    }
}

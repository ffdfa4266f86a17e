use crate::parcel::{Metric, Parcel, ReuseCategory};

use super::Weights;

/// A parcel paired with its desirability score for the current request.
#[derive(Debug, Clone, Copy)]
pub struct ScoredParcel<'a> {
    pub parcel: &'a Parcel,
    pub weighted_sum: f64,
}

/// Σ value(m) * weight(m) over `metrics`. Missing values contribute 0.
pub fn weighted_sum(parcel: &Parcel, metrics: &[Metric], weights: &Weights) -> f64 {
    metrics.iter()
        .map(|&metric| match parcel.metric(metric) {
            Some(value) => value * weights.get(metric),
            None => {
                log::debug!("[pipeline::score] parcel {} has no {metric}, counting it as 0", parcel.id());
                0.0
            }
        })
        .sum()
}

/// Score every parcel on the metrics applicable to `category`, preserving order.
pub fn score<'a>(parcels: &[&'a Parcel], category: ReuseCategory, weights: &Weights) -> Vec<ScoredParcel<'a>> {
    let metrics = category.applicable_metrics();
    parcels.iter()
        .map(|&parcel| ScoredParcel { parcel, weighted_sum: weighted_sum(parcel, &metrics, weights) })
        .collect()
}

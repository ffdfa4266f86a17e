use geo::{Area, MultiPolygon};

use super::{Metric, Metrics, ParcelId};

/// A single land parcel: boundary in the projected source CRS plus its metrics.
#[derive(Debug, Clone)]
pub struct Parcel {
    id: ParcelId,
    geometry: MultiPolygon<f64>,
    metrics: Metrics,
    area: f64, // Planar area in source CRS units, fixed at construction
}

impl Parcel {
    pub fn new(id: impl Into<ParcelId>, geometry: MultiPolygon<f64>, metrics: Metrics) -> Self {
        let area = geometry.unsigned_area();
        Self { id: id.into(), geometry, metrics, area }
    }

    #[inline] pub fn id(&self) -> &ParcelId { &self.id }

    #[inline] pub fn geometry(&self) -> &MultiPolygon<f64> { &self.geometry }

    #[inline] pub fn metrics(&self) -> &Metrics { &self.metrics }

    #[inline] pub fn metric(&self, metric: Metric) -> Option<f64> { self.metrics.get(metric) }

    /// Unsigned planar area of the projected geometry.
    #[inline] pub fn area(&self) -> f64 { self.area }
}

use std::cmp::Ordering;

use geo::MultiPolygon;
use serde::Serialize;

use crate::{
    error::{PipelineError, ProjectionError},
    geom::Reprojector,
    parcel::{Metric, ParcelId, ReuseCategory},
};

use super::ScoredParcel;

/// Sort by weighted sum descending and keep the first `k`. Ties keep their input order;
/// `0.0` and `-0.0` compare equal.
pub fn rank<'a>(mut scored: Vec<ScoredParcel<'a>>, k: usize) -> Vec<ScoredParcel<'a>> {
    scored.sort_by(|a, b| b.weighted_sum.partial_cmp(&a.weighted_sum).unwrap_or(Ordering::Equal));
    scored.truncate(k);
    scored
}

/// One row of the candidate table, with its geometry in lon/lat.
#[derive(Debug, Clone, Serialize)]
pub struct RankedParcel {
    pub id: ParcelId,
    /// Values of the applicable metrics, in canonical order.
    pub metrics: Vec<(Metric, Option<f64>)>,
    pub weighted_sum: f64,
    #[serde(skip)]
    pub geometry: MultiPolygon<f64>,
}

/// Highest-scoring parcels for one request, best first.
#[derive(Debug, Clone, Serialize)]
pub struct TopK {
    category: ReuseCategory,
    rows: Vec<RankedParcel>,
}

impl TopK {
    pub fn new(category: ReuseCategory, rows: Vec<RankedParcel>) -> Self {
        Self { category, rows }
    }

    #[inline] pub fn category(&self) -> ReuseCategory { self.category }

    #[inline] pub fn rows(&self) -> &[RankedParcel] { &self.rows }

    #[inline] pub fn len(&self) -> usize { self.rows.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.rows.is_empty() }

    /// Metric columns shown in the table.
    pub fn applicable_metrics(&self) -> Vec<Metric> {
        self.category.applicable_metrics()
    }

    pub fn ids(&self) -> impl Iterator<Item = &ParcelId> {
        self.rows.iter().map(|row| &row.id)
    }

    pub fn get(&self, id: &ParcelId) -> Option<&RankedParcel> {
        self.rows.iter().find(|row| &row.id == id)
    }

    /// Best-ranked row; the initial selection.
    pub fn first(&self) -> Result<&RankedParcel, PipelineError> {
        self.rows.first().ok_or(PipelineError::EmptyResult)
    }
}

/// Rank `scored`, then materialize the top `k` rows with reprojected geometry.
pub fn top_k(scored: Vec<ScoredParcel<'_>>, category: ReuseCategory, k: usize, projection: &Reprojector)
    -> Result<TopK, ProjectionError>
{
    let columns = category.applicable_metrics();

    let rows = rank(scored, k).into_iter()
        .map(|ScoredParcel { parcel, weighted_sum }| {
            Ok(RankedParcel {
                id: parcel.id().clone(),
                metrics: columns.iter().map(|&metric| (metric, parcel.metric(metric))).collect(),
                weighted_sum,
                geometry: projection.transform_multipolygon(parcel.geometry())?,
            })
        })
        .collect::<Result<Vec<_>, ProjectionError>>()?;

    log::info!("[pipeline::rank] top {} of {category} candidates, best score {:?}",
        rows.len(), rows.first().map(|row| row.weighted_sum));

    Ok(TopK::new(category, rows))
}

#[cfg(test)]
mod tests {
    use geo::{Rect, Centroid};

    use super::*;
    use crate::{config, parcel::{Metrics, Parcel}, pipeline::{score, Weights}};

    fn parcel(id: &str) -> Parcel {
        // ~100 m square in central Georgia, EPSG:5070.
        let square = Rect::new((1_070_000.0, 1_240_000.0), (1_070_100.0, 1_240_100.0)).to_polygon();
        Parcel::new(id, MultiPolygon::new(vec![square]), Metrics::new([Some(1.0); Metric::COUNT]))
    }

    fn scored<'a>(parcels: &'a [Parcel], sums: &[f64]) -> Vec<ScoredParcel<'a>> {
        parcels.iter().zip(sums)
            .map(|(parcel, &weighted_sum)| ScoredParcel { parcel, weighted_sum })
            .collect()
    }

    fn ids(ranked: &[ScoredParcel<'_>]) -> Vec<String> {
        ranked.iter().map(|s| s.parcel.id().to_string()).collect()
    }

    #[test]
    fn sorted_descending_and_truncated() {
        let parcels: Vec<Parcel> = (0..15).map(|i| parcel(&i.to_string())).collect();
        let sums: Vec<f64> = (0..15).map(|i| ((i * 7) % 15) as f64).collect();

        let ranked = rank(scored(&parcels, &sums), config::TOP_K);
        assert_eq!(ranked.len(), 10);
        assert!(ranked.windows(2).all(|w| w[0].weighted_sum >= w[1].weighted_sum));
        assert_eq!(ranked[0].weighted_sum, 14.0);
    }

    #[test]
    fn fewer_than_k_keeps_all() {
        let parcels: Vec<Parcel> = ["a", "b", "c"].map(parcel).into();
        let ranked = rank(scored(&parcels, &[1.0, 3.0, 2.0]), config::TOP_K);
        assert_eq!(ids(&ranked), ["b", "c", "a"]);
    }

    #[test]
    fn ties_keep_input_order() {
        let parcels: Vec<Parcel> = ["a", "b", "c", "d"].map(parcel).into();
        let ranked = rank(scored(&parcels, &[2.0, 5.0, 2.0, 5.0]), config::TOP_K);
        assert_eq!(ids(&ranked), ["b", "d", "a", "c"]);
    }

    #[test]
    fn signed_zero_sums_are_ties() {
        let parcels: Vec<Parcel> = ["neg", "pos", "zero"].map(parcel).into();
        let ranked = rank(scored(&parcels, &[-0.0, 0.0, -0.0]), config::TOP_K);
        assert_eq!(ids(&ranked), ["neg", "pos", "zero"]);
    }

    #[test]
    fn zero_weights_keep_input_order() {
        let neg = Parcel::new("neg", parcel("neg").geometry().clone(), Metrics::new([Some(-1.0); Metric::COUNT]));
        let pos = Parcel::new("pos", parcel("pos").geometry().clone(), Metrics::new([Some(1.0); Metric::COUNT]));

        let scored = score(&[&neg, &pos], ReuseCategory::Residential, &Weights::zero());
        let ranked = rank(scored, config::TOP_K);
        assert_eq!(ids(&ranked), ["neg", "pos"]);
    }

    #[test]
    fn ranking_is_idempotent() {
        let parcels: Vec<Parcel> = ["a", "b", "c", "d"].map(parcel).into();
        let once = rank(scored(&parcels, &[0.5, -1.0, 4.0, 0.5]), config::TOP_K);
        let twice = rank(once.clone(), config::TOP_K);
        assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn top_k_reprojects_to_lon_lat() {
        let parcels: Vec<Parcel> = ["a", "b"].map(parcel).into();
        let projection = Reprojector::to_geographic(config::SOURCE_CRS_PROJ4).unwrap();

        let table = top_k(scored(&parcels, &[1.0, 2.0]), ReuseCategory::Commercial, config::TOP_K, &projection).unwrap();
        assert_eq!(table.ids().map(|id| id.as_str()).collect::<Vec<_>>(), ["b", "a"]);

        let centroid = table.first().unwrap().geometry.centroid().unwrap();
        assert!((-90.0..-80.0).contains(&centroid.x()));
        assert!((30.0..36.0).contains(&centroid.y()));

        let columns: Vec<Metric> = table.rows()[0].metrics.iter().map(|(m, _)| *m).collect();
        assert_eq!(columns, ReuseCategory::Commercial.applicable_metrics());
    }

    #[test]
    fn empty_table_has_no_first_row() {
        let projection = Reprojector::to_geographic(config::SOURCE_CRS_PROJ4).unwrap();
        let table = top_k(Vec::new(), ReuseCategory::Residential, config::TOP_K, &projection).unwrap();
        assert!(table.is_empty());
        assert!(matches!(table.first(), Err(PipelineError::EmptyResult)));
    }
}

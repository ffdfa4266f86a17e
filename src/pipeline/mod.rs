//! The interactive ranking pipeline: filter, score, rank, select.
//!
//! Each run is a pure function of the loaded [`ParcelSet`] and a [`Request`];
//! nothing is cached between runs.

mod filter;
mod rank;
mod request;
mod score;
mod select;

pub use filter::{apply as filter_parcels, is_outlier, remove_outliers, within_area_bounds};
pub use rank::{rank, top_k, RankedParcel, TopK};
pub use request::{Request, Weights};
pub use score::{score, weighted_sum, ScoredParcel};
pub use select::{resolve_selection, select};

use serde::Serialize;

use crate::{config, error::PipelineError, parcel::{ParcelId, ParcelSet}, render::MapView};

/// Result of one pipeline run: the candidate table, and the map for the selected row.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    pub table: TopK,
    /// Resolved selection; `None` only when the table is empty.
    pub selected: Option<ParcelId>,
    pub map: Option<MapView>,
}

/// Recompute the full pipeline for `request`.
///
/// Area bounds are applied as given, so inverted or out-of-slider bounds select
/// nothing or everything rather than failing. An empty candidate set is not an
/// error: the output carries an empty table and no map.
pub fn run(parcels: &ParcelSet, request: &Request) -> Result<RenderOutput, PipelineError> {
    request.weights.validate()?;

    let filtered = filter::apply(parcels, request.min_area, request.max_area);
    let scored = score::score(&filtered, request.reuse_choice, &request.weights);
    let table = rank::top_k(scored, request.reuse_choice, config::TOP_K, parcels.projection())?;

    let row = select::resolve_selection(&table, request.selected_parcel.as_ref());
    if row.is_none() {
        log::warn!("[pipeline] no parcels match the current filters");
    }
    let selected = row.map(|row| row.id.clone());
    let map = row.map(|row| MapView::for_parcel(row, request.basemap)).transpose()?;

    Ok(RenderOutput { table, selected, map })
}

#![doc = "Parcelrank public API"]
mod common;
mod io;
mod parcel;
mod pipeline;
mod render;

pub mod config;
pub mod error;
pub mod geom;

#[doc(inline)]
pub use parcel::{LoadOptions, Metric, Metrics, Parcel, ParcelId, ParcelSet, ReuseCategory};

#[doc(inline)]
pub use pipeline::{
    filter_parcels, is_outlier, rank, remove_outliers, resolve_selection, run, score, select, top_k,
    weighted_sum, within_area_bounds, RankedParcel, RenderOutput, Request, ScoredParcel, TopK, Weights,
};

#[doc(inline)]
pub use render::{map_html_string, write_map_html, Basemap, MapView, OverlayStyle, TileLayer};

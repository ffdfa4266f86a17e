//! Output surfaces for a pipeline run: the candidate table and the selected-parcel map.

mod html;
mod map;
mod svg;
mod table;

pub use html::{map_html_string, write_map_html};
pub use map::{Basemap, MapView, OverlayStyle, TileLayer};

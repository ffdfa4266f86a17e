//! Dataset-tuned constants for filtering, scoring, and map rendering.
//!
//! The outlier threshold and area slider ranges were picked empirically for
//! the Fulton County parcel export. Areas are in the squared units of the
//! source CRS.

use std::ops::RangeInclusive;

/// Parcels with `land_value_ratio` at or above this value are dropped on every run.
pub const LAND_VALUE_RATIO_OUTLIER: f64 = 50.0;

/// Allowed values of the `min_area` control.
pub const MIN_AREA_RANGE: RangeInclusive<u32> = 0..=10_000;

/// Allowed values of the `max_area` control.
pub const MAX_AREA_RANGE: RangeInclusive<u32> = 10_000..=1_000_000;

/// Weight bounds (inclusive) and slider resolution.
pub const WEIGHT_MIN: f64 = -5.0;
pub const WEIGHT_MAX: f64 = 5.0;
pub const WEIGHT_STEP: f64 = 0.01;

/// Default weight for `land_value_ratio`; its raw magnitude dwarfs the other metrics.
pub const LAND_VALUE_RATIO_DEFAULT_WEIGHT: f64 = 0.01;

/// Default weight for every other metric.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Number of parcels kept by the ranking stage.
pub const TOP_K: usize = 10;

/// Lot-scale zoom level for single-parcel inspection.
pub const PARCEL_ZOOM: u8 = 18;

/// Overlay style for the selected parcel.
pub const OVERLAY_COLOR: &str = "blue";
pub const OVERLAY_FILL_OPACITY: f64 = 0.5;

/// Standard street-map tiles. Attribution is left to the tile layer default.
pub const NORMAL_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const NORMAL_TILE_ATTRIBUTION: &str = "";

/// Satellite imagery tiles.
pub const SATELLITE_TILE_URL: &str = "https://mt1.google.com/vt/lyrs=s&x={x}&y={y}&z={z}";
pub const SATELLITE_TILE_ATTRIBUTION: &str = "Tiles © Google";

/// Default projected CRS of the input artifact: NAD83 / Conus Albers (EPSG:5070), meters.
pub const SOURCE_CRS_PROJ4: &str =
    "+proj=aea +lat_0=23 +lon_0=-96 +lat_1=29.5 +lat_2=45.5 +x_0=0 +y_0=0 +datum=NAD83 +units=m +no_defs +type=crs";

/// Display CRS: WGS84 longitude/latitude (EPSG:4326).
pub const GEOGRAPHIC_CRS_PROJ4: &str = "+proj=longlat +datum=WGS84 +no_defs +type=crs";

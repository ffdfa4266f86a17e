//! Format-specific readers and writers for parcel data.
//!
//! # Format Modules
//!
//! - `geojson` - GeoJSON FeatureCollections (input artifact, map overlay output)
//! - `csv` - CSV attribute tables with a hex-WKB geometry column
//! - `wkb` - Well-Known Binary decoding for CSV geometries

pub(crate) mod csv;
pub(crate) mod geojson;
pub(crate) mod wkb;

/// Identifier column of the input artifact.
pub(crate) const PARCEL_ID_COLUMN: &str = "ParcelID";

/// Geometry column / field of the input artifact.
pub(crate) const GEOMETRY_COLUMN: &str = "geometry";

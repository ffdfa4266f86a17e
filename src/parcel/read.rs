use std::path::Path;

use crate::{common, config, error::LoadError, io};

use super::ParcelSet;

/// Options for reading the parcel artifact.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// PROJ.4 definition of the projected, area-preserving CRS the geometries are stored in.
    pub source_crs: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self { source_crs: config::SOURCE_CRS_PROJ4.to_string() }
    }
}

impl ParcelSet {
    /// Read the parcel artifact at `path`, dispatching on its extension.
    ///
    /// Supported formats (optionally gzipped, e.g. `result.csv.gz`):
    /// * `.geojson` / `.json`: FeatureCollection with `ParcelID` and metric properties
    /// * `.csv`: attribute table with a hex-encoded WKB `geometry` column
    pub fn read_from_file(path: &Path, options: &LoadOptions) -> Result<Self, LoadError> {
        let ext = common::data_extension(path).unwrap_or_default();

        let parcels = match ext.as_str() {
            "geojson" | "json" => io::geojson::read_parcels_geojson(&common::read_input_bytes(path)?)?,
            "csv" => io::csv::read_parcels_csv(&common::read_input_bytes(path)?)?,
            other => return Err(LoadError::UnsupportedFormat(format!("{} (extension `.{other}`)", path.display()))),
        };

        let set = Self::from_records(parcels, &options.source_crs)?;
        log::info!("[parcel::read] loaded {} parcels from {}", set.len(), path.display());
        Ok(set)
    }
}

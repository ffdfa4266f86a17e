use std::{fmt, str::FromStr};

use geo::{Centroid, MultiPolygon, Point};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::{config, error::{PipelineError, RequestError}, io::geojson, pipeline::RankedParcel};

/// Background tile layer choice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Basemap {
    #[default]
    Normal,
    Satellite,
}

impl Basemap {
    pub fn to_str(&self) -> &'static str {
        match self {
            Basemap::Normal => "Normal",
            Basemap::Satellite => "Satellite",
        }
    }

    /// Tile source for this basemap.
    pub fn tile_layer(&self) -> TileLayer {
        match self {
            Basemap::Normal => TileLayer {
                url: config::NORMAL_TILE_URL.to_string(),
                attribution: config::NORMAL_TILE_ATTRIBUTION.to_string(),
            },
            Basemap::Satellite => TileLayer {
                url: config::SATELLITE_TILE_URL.to_string(),
                attribution: config::SATELLITE_TILE_ATTRIBUTION.to_string(),
            },
        }
    }
}

impl fmt::Display for Basemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

impl FromStr for Basemap {
    type Err = RequestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Basemap::Normal, Basemap::Satellite].into_iter()
            .find(|basemap| basemap.to_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| RequestError::UnknownBasemap(s.to_string()))
    }
}

/// An XYZ tile endpoint and the attribution it must be shown with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileLayer {
    pub url: String,
    pub attribution: String,
}

/// Stroke and fill of the parcel overlay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayStyle {
    pub color: String,
    pub fill_color: String,
    pub fill_opacity: f64,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            color: config::OVERLAY_COLOR.to_string(),
            fill_color: config::OVERLAY_COLOR.to_string(),
            fill_opacity: config::OVERLAY_FILL_OPACITY,
        }
    }
}

/// Everything needed to draw one selected parcel over a basemap.
#[derive(Debug, Clone, Serialize)]
pub struct MapView {
    pub parcel_id: String,
    /// `[lat, lon]`, the order slippy-map libraries expect.
    pub center: [f64; 2],
    pub zoom: u8,
    pub basemap: Basemap,
    pub tiles: TileLayer,
    pub style: OverlayStyle,
    /// GeoJSON Feature of the parcel boundary in lon/lat.
    pub overlay: Value,
    #[serde(skip)]
    geometry: MultiPolygon<f64>,
}

impl MapView {
    /// Center a lot-scale view on the parcel's centroid.
    pub fn for_parcel(parcel: &RankedParcel, basemap: Basemap) -> Result<Self, PipelineError> {
        let centroid: Point<f64> = parcel.geometry.centroid()
            .ok_or_else(|| PipelineError::EmptyGeometry(parcel.id.clone()))?;

        let mut properties = Map::new();
        properties.insert("name".to_string(), json!("Selected Parcel"));
        properties.insert("ParcelID".to_string(), json!(parcel.id.as_str()));
        properties.insert("weighted_sum".to_string(), json!(parcel.weighted_sum));

        Ok(Self {
            parcel_id: parcel.id.to_string(),
            center: [centroid.y(), centroid.x()],
            zoom: config::PARCEL_ZOOM,
            basemap,
            tiles: basemap.tile_layer(),
            style: OverlayStyle::default(),
            overlay: geojson::feature(parcel.id.as_str(), &parcel.geometry, properties),
            geometry: parcel.geometry.clone(),
        })
    }

    /// Parcel boundary in lon/lat.
    #[inline] pub fn geometry(&self) -> &MultiPolygon<f64> { &self.geometry }

    pub fn to_json(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }
}

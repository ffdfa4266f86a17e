//! GeoJSON writing operations.

use geo::MultiPolygon;
use serde_json::{json, Map, Value};

/// Convert a MultiPolygon to a serde_json::Value representing a GeoJSON Geometry.
pub(crate) fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Value> = mp.0.iter()
        .map(|polygon| {
            let rings: Vec<Vec<[f64; 2]>> = std::iter::once(polygon.exterior())
                .chain(polygon.interiors())
                .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
                .collect();
            json!(rings)
        })
        .collect();

    json!({
        "type": "MultiPolygon",
        "coordinates": polygons,
    })
}

/// Build a GeoJSON Feature with the given id and properties.
pub(crate) fn feature(id: &str, geometry: &MultiPolygon<f64>, properties: Map<String, Value>) -> Value {
    json!({
        "type": "Feature",
        "id": id,
        "geometry": multipolygon_to_geojson(geometry),
        "properties": properties,
    })
}

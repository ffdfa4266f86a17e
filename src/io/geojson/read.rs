//! GeoJSON reading operations.

use anyhow::{anyhow, bail, ensure, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{Map, Value};

use crate::{error::LoadError, io::{GEOMETRY_COLUMN, PARCEL_ID_COLUMN}, parcel::{Metric, Metrics, Parcel, ParcelId}};

/// Read parcel records from a GeoJSON FeatureCollection.
///
/// `ParcelID` and the metric columns are taken from each feature's `properties`;
/// the feature-level `id` is used when `ParcelID` is absent.
pub(crate) fn read_parcels_geojson(bytes: &[u8]) -> Result<Vec<Parcel>, LoadError> {
    let root: Value = serde_json::from_slice(bytes)?;

    ensure_feature_collection(&root)
        .map_err(|e| LoadError::Malformed(format!("{e:#}")))?;

    let features = root.get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| LoadError::Malformed("FeatureCollection has no `features` array".to_string()))?;

    features.iter().enumerate()
        .map(|(index, feature)| parse_feature(feature)
            .map_err(|e| match e.downcast::<LoadError>() {
                Ok(load_error) => load_error,
                Err(e) => LoadError::Record { index, message: format!("{e:#}") },
            }))
        .collect()
}

fn ensure_feature_collection(root: &Value) -> Result<()> {
    match root.get("type").and_then(Value::as_str) {
        Some("FeatureCollection") => Ok(()),
        Some(other) => bail!("[io::geojson::read] Expected a FeatureCollection, got {other}"),
        None => bail!("[io::geojson::read] Top-level object has no `type`"),
    }
}

fn parse_feature(feature: &Value) -> Result<Parcel> {
    let object = feature.as_object()
        .ok_or_else(|| anyhow!("[io::geojson::read] Feature is not a JSON object"))?;

    let geometry = object.get(GEOMETRY_COLUMN).ok_or(LoadError::MissingGeometry)?;
    let geometry = geometry_from_geojson(geometry)?;

    let empty = Map::new();
    let properties = match object.get("properties") {
        Some(Value::Object(properties)) => properties,
        Some(Value::Null) | None => &empty,
        Some(_) => bail!("[io::geojson::read] Feature `properties` is not an object"),
    };

    let id = properties.get(PARCEL_ID_COLUMN)
        .or_else(|| object.get("id"))
        .map(id_from_value)
        .transpose()?
        .ok_or_else(|| LoadError::MissingColumn(PARCEL_ID_COLUMN.to_string()))?;

    let mut metrics = Metrics::default();
    for metric in Metric::ALL {
        let value = properties.get(metric.column())
            .ok_or_else(|| LoadError::MissingColumn(metric.column().to_string()))?;
        metrics.set(metric, metric_from_value(metric, value)?);
    }

    Ok(Parcel::new(id, geometry, metrics))
}

fn id_from_value(value: &Value) -> Result<ParcelId> {
    match value {
        Value::String(s) => Ok(ParcelId::new(s)),
        Value::Number(n) => Ok(ParcelId::new(n.to_string())),
        other => bail!("[io::geojson::read] {PARCEL_ID_COLUMN} must be a string or number, got {other}"),
    }
}

fn metric_from_value(metric: Metric, value: &Value) -> Result<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        // Some exporters write NaN as the string "NaN".
        Value::String(s) if s.eq_ignore_ascii_case("nan") => Ok(None),
        other => bail!("[io::geojson::read] {metric} must be numeric or null, got {other}"),
    }
}

/// Parse a GeoJSON Polygon or MultiPolygon geometry object into a MultiPolygon.
pub(crate) fn geometry_from_geojson(geometry: &Value) -> Result<MultiPolygon<f64>> {
    ensure!(!geometry.is_null(), "[io::geojson::read] Feature geometry is null");

    let kind = geometry.get("type").and_then(Value::as_str)
        .ok_or_else(|| anyhow!("[io::geojson::read] Geometry has no `type`"))?;
    let coordinates = geometry.get("coordinates")
        .ok_or_else(|| anyhow!("[io::geojson::read] Geometry has no `coordinates`"))?;

    let shape = match kind {
        "Polygon" => MultiPolygon::new(vec![polygon_from_value(coordinates)?]),
        "MultiPolygon" => MultiPolygon::new(
            as_array(coordinates, "MultiPolygon coordinates")?.iter()
                .map(polygon_from_value)
                .collect::<Result<_>>()?
        ),
        other => bail!("[io::geojson::read] Unsupported geometry type {other}, expected Polygon or MultiPolygon"),
    };

    ensure!(!shape.0.is_empty(), "[io::geojson::read] Geometry has no polygons");
    Ok(shape)
}

fn polygon_from_value(value: &Value) -> Result<Polygon<f64>> {
    let mut rings = as_array(value, "Polygon rings")?.iter().map(ring_from_value);
    let exterior = rings.next()
        .ok_or_else(|| anyhow!("[io::geojson::read] Polygon must have at least one ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

fn ring_from_value(value: &Value) -> Result<LineString<f64>> {
    as_array(value, "ring")?.iter()
        .map(|position| {
            let position = as_array(position, "position")?;
            ensure!(position.len() >= 2, "[io::geojson::read] Position must have at least two values");
            let x = position[0].as_f64().context("[io::geojson::read] Position x is not a number")?;
            let y = position[1].as_f64().context("[io::geojson::read] Position y is not a number")?;
            Ok(Coord { x, y })
        })
        .collect::<Result<Vec<_>>>()
        .map(LineString::from)
}

fn as_array<'a>(value: &'a Value, what: &str) -> Result<&'a Vec<Value>> {
    value.as_array()
        .ok_or_else(|| anyhow!("[io::geojson::read] Expected an array for {what}"))
}

//! CSV reading operations.

use std::{io::Cursor, sync::Arc};

use polars::{frame::DataFrame, io::SerReader, prelude::{CsvReadOptions, CsvReader, DataType, Field, Schema, SchemaRef}};

use crate::{error::LoadError, io::{wkb, GEOMETRY_COLUMN, PARCEL_ID_COLUMN}, parcel::{Metric, Metrics, Parcel, ParcelId}};

/// Read a DataFrame from CSV bytes, keeping identifier and geometry columns as text.
pub(crate) fn read_csv_bytes(bytes: &[u8]) -> Result<DataFrame, LoadError> {
    let options = CsvReadOptions::default()
        .with_has_header(true)
        .with_schema_overwrite(Some(parcel_csv_schema(bytes)));

    Ok(CsvReader::new(Cursor::new(bytes))
        .with_options(options)
        .finish()?)
}

/// Read parcel records from CSV bytes with a hex-WKB `geometry` column.
pub(crate) fn read_parcels_csv(bytes: &[u8]) -> Result<Vec<Parcel>, LoadError> {
    let df = read_csv_bytes(bytes)?;
    parcels_from_dataframe(&df)
}

/// Extract parcel records from a DataFrame with `ParcelID`, `geometry` and metric columns.
pub(crate) fn parcels_from_dataframe(df: &DataFrame) -> Result<Vec<Parcel>, LoadError> {
    let column = |name: &str| df.column(name)
        .map_err(|_| LoadError::MissingColumn(name.to_string()));

    let geometry = df.column(GEOMETRY_COLUMN)
        .map_err(|_| LoadError::MissingGeometry)?
        .cast(&DataType::String)?;
    let ids = column(PARCEL_ID_COLUMN)?.cast(&DataType::String)?;

    let metric_columns = Metric::ALL.iter()
        .map(|metric| Ok(column(metric.column())?.cast(&DataType::Float64)?))
        .collect::<Result<Vec<_>, LoadError>>()?;
    let metric_values = metric_columns.iter()
        .map(|col| Ok(col.f64()?.into_iter().collect::<Vec<_>>()))
        .collect::<Result<Vec<Vec<Option<f64>>>, LoadError>>()?;

    ids.str()?.into_iter()
        .zip(geometry.str()?.into_iter())
        .enumerate()
        .map(|(index, (id, geom))| {
            let record_error = |message: String| LoadError::Record { index, message };

            let id = id.ok_or_else(|| record_error(format!("{PARCEL_ID_COLUMN} is empty")))?;
            let geom = geom.ok_or_else(|| record_error("geometry is empty".to_string()))?;
            let geometry = wkb::multipolygon_from_wkb_hex(geom)
                .map_err(|e| record_error(format!("{e:#}")))?;

            let mut metrics = Metrics::default();
            for (metric, values) in Metric::ALL.into_iter().zip(&metric_values) {
                metrics.set(metric, values[index]);
            }

            Ok(Parcel::new(ParcelId::new(id), geometry, metrics))
        })
        .collect()
}

/// Schema overwrite for parcel CSV files: text columns that appear in the header.
fn parcel_csv_schema(bytes: &[u8]) -> SchemaRef {
    let header = bytes.split(|&b| b == b'\n').next().unwrap_or_default();
    let header = String::from_utf8_lossy(header);
    let names: Vec<&str> = header.trim_start_matches('\u{feff}').split(',')
        .map(|name| name.trim().trim_matches('"'))
        .collect();

    Arc::new([PARCEL_ID_COLUMN, GEOMETRY_COLUMN].into_iter()
        .filter(|column| names.contains(column))
        .map(|column| Field::new(column.into(), DataType::String))
        .collect::<Schema>())
}

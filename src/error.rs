use std::path::PathBuf;

use thiserror::Error;

use crate::parcel::{Metric, ParcelId};

/// Errors raised while reading the parcel artifact. Fatal for the session.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file is missing or could not be read.
    #[error("[io] failed to read {}: {source}", path.display())]
    Io { path: PathBuf, source: std::io::Error },
    /// The file extension does not map to a known reader.
    #[error("[io] unsupported input format: {0}")]
    UnsupportedFormat(String),
    /// The content is structurally invalid for its format.
    #[error("[io] malformed input: {0}")]
    Malformed(String),
    /// No `geometry` field or column is present.
    #[error("[io] input has no `geometry` field")]
    MissingGeometry,
    /// A required attribute column is absent.
    #[error("[io] input has no `{0}` column")]
    MissingColumn(String),
    /// A single record could not be decoded.
    #[error("[io] record {index}: {message}")]
    Record { index: usize, message: String },
    /// Two records share a `ParcelID`.
    #[error("[io] duplicate ParcelID `{0}`")]
    DuplicateId(ParcelId),
    #[error("[io::geojson] {0}")]
    Json(#[from] serde_json::Error),
    #[error("[io::csv] {0}")]
    Csv(#[from] polars::prelude::PolarsError),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
}

/// Errors raised by the PROJ.4 reprojection layer.
#[derive(Debug, Error)]
pub enum ProjectionError {
    #[error("[geom::proj] invalid PROJ.4 definition `{definition}`: {message}")]
    Definition { definition: String, message: String },
    #[error("[geom::proj] failed to transform ({x}, {y}): {message}")]
    Transform { x: f64, y: f64, message: String },
}

/// A user control value outside its allowed domain.
#[derive(Debug, Error, PartialEq)]
pub enum RequestError {
    #[error("weight for {metric} must be within [-5, 5], got {value}")]
    WeightOutOfRange { metric: Metric, value: f64 },
    #[error("min_area must be within [0, 10000], got {0}")]
    MinAreaOutOfRange(u32),
    #[error("max_area must be within [10000, 1000000], got {0}")]
    MaxAreaOutOfRange(u32),
    #[error("unknown metric `{0}`")]
    UnknownMetric(String),
    #[error("unknown reuse category `{0}`")]
    UnknownCategory(String),
    #[error("unknown basemap `{0}`")]
    UnknownBasemap(String),
}

/// The selected parcel is not among the current top-ranked candidates.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("parcel `{id}` is not in the current candidate set")]
    NotInCandidates { id: ParcelId },
}

/// Errors raised by one run of the interactive pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Projection(#[from] ProjectionError),
    #[error(transparent)]
    Selection(#[from] SelectionError),
    /// Filters left no qualifying parcels. Only raised to callers that need a row.
    #[error("no parcels match the current filters")]
    EmptyResult,
    /// The parcel geometry has no coordinates to center on.
    #[error("parcel `{0}` has an empty geometry")]
    EmptyGeometry(ParcelId),
}

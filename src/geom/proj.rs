use std::fmt;

use geo::{Coord, MapCoords, MultiPolygon};
use proj4rs::{proj::Proj as Proj4, transform::transform};

use crate::{config, error::ProjectionError};

/// A coordinate reference system built from a PROJ.4 definition.
pub struct Crs {
    definition: String,
    proj: Proj4,
    geographic: bool, // lon/lat in degrees at the API boundary, radians inside proj4rs
}

impl Crs {
    pub fn from_proj4(definition: &str) -> Result<Self, ProjectionError> {
        let proj = Proj4::from_proj_string(definition)
            .map_err(|e| ProjectionError::Definition {
                definition: definition.to_string(),
                message: e.to_string(),
            })?;

        let geographic = definition.split_whitespace()
            .any(|token| matches!(token, "+proj=longlat" | "+proj=latlong" | "+proj=lonlat" | "+proj=latlon"));

        Ok(Self { definition: definition.to_string(), proj, geographic })
    }

    #[inline] pub fn definition(&self) -> &str { &self.definition }

    #[inline] pub fn is_geographic(&self) -> bool { self.geographic }
}

impl fmt::Debug for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Crs({})", self.definition)
    }
}

/// Source-to-target coordinate transform.
#[derive(Debug)]
pub struct Reprojector {
    source: Crs,
    target: Crs,
}

impl Reprojector {
    pub fn new(source: &str, target: &str) -> Result<Self, ProjectionError> {
        Ok(Self { source: Crs::from_proj4(source)?, target: Crs::from_proj4(target)? })
    }

    /// Transform from `source` to WGS84 longitude/latitude.
    pub fn to_geographic(source: &str) -> Result<Self, ProjectionError> {
        Self::new(source, config::GEOGRAPHIC_CRS_PROJ4)
    }

    /// Build the transform in the opposite direction.
    pub fn inverse(&self) -> Result<Self, ProjectionError> {
        Self::new(self.target.definition(), self.source.definition())
    }

    /// Transform a single coordinate. Geographic coordinates are in degrees.
    pub fn transform_coord(&self, coord: Coord<f64>) -> Result<Coord<f64>, ProjectionError> {
        let mut point = if self.source.is_geographic() {
            (coord.x.to_radians(), coord.y.to_radians(), 0.0)
        } else {
            (coord.x, coord.y, 0.0)
        };

        transform(&self.source.proj, &self.target.proj, &mut point)
            .map_err(|e| ProjectionError::Transform { x: coord.x, y: coord.y, message: e.to_string() })?;

        let (x, y) = if self.target.is_geographic() {
            (point.0.to_degrees(), point.1.to_degrees())
        } else {
            (point.0, point.1)
        };

        if !x.is_finite() || !y.is_finite() {
            return Err(ProjectionError::Transform { x: coord.x, y: coord.y, message: "non-finite result".to_string() });
        }

        Ok(Coord { x, y })
    }

    /// Transform every coordinate of a MultiPolygon, failing on the first bad coordinate.
    pub fn transform_multipolygon(&self, shape: &MultiPolygon<f64>) -> Result<MultiPolygon<f64>, ProjectionError> {
        shape.try_map_coords(|coord| self.transform_coord(coord))
    }
}

//! Minimal WKB codec for parcel boundaries (Polygon / MultiPolygon, 2D).

mod read;
#[cfg(test)]
pub(crate) mod write;

pub(crate) use read::*;

/// WKB geometry type codes
const WKB_POLYGON: u32 = 3;
const WKB_MULTIPOLYGON: u32 = 6;

/// PostGIS EWKB flag: an SRID follows the geometry type.
const EWKB_SRID_FLAG: u32 = 0x2000_0000;

/// WKB byte order markers
const WKB_LE: u8 = 1;
#[cfg(test)]
const WKB_BE: u8 = 0;

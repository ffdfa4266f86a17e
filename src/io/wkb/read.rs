//! WKB reading operations.

use std::io::{Cursor, Read};

use anyhow::{bail, ensure, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};

use super::{EWKB_SRID_FLAG, WKB_LE, WKB_MULTIPOLYGON, WKB_POLYGON};

/// Byte-order-aware reader over one WKB buffer.
struct WkbCursor<'a> {
    cursor: Cursor<&'a [u8]>,
    is_le: bool,
}

impl<'a> WkbCursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { cursor: Cursor::new(bytes), is_le: true }
    }

    fn read_byte_order(&mut self) -> Result<()> {
        let mut byte_order = [0u8; 1];
        self.cursor.read_exact(&mut byte_order)
            .context("[io::wkb::read] Failed to read byte order")?;
        self.is_le = byte_order[0] == WKB_LE;
        Ok(())
    }

    fn read_u32(&mut self) -> Result<u32> {
        let mut bytes = [0u8; 4];
        self.cursor.read_exact(&mut bytes)
            .context("[io::wkb::read] Unexpected end of WKB data")?;
        Ok(if self.is_le { u32::from_le_bytes(bytes) } else { u32::from_be_bytes(bytes) })
    }

    fn read_f64(&mut self) -> Result<f64> {
        let mut bytes = [0u8; 8];
        self.cursor.read_exact(&mut bytes)
            .context("[io::wkb::read] Unexpected end of WKB data")?;
        Ok(if self.is_le { f64::from_le_bytes(bytes) } else { f64::from_be_bytes(bytes) })
    }

    /// Read a geometry header, returning the base geometry type with any EWKB SRID skipped.
    fn read_header(&mut self) -> Result<u32> {
        self.read_byte_order()?;
        let geom_type = self.read_u32()?;
        if geom_type & EWKB_SRID_FLAG != 0 {
            let _srid = self.read_u32()?;
        }
        Ok(geom_type & !EWKB_SRID_FLAG)
    }

    fn read_ring(&mut self) -> Result<LineString<f64>> {
        let len = self.read_u32()? as usize;
        let mut coords = Vec::with_capacity(len.min(1 << 16));
        for _ in 0..len {
            let x = self.read_f64()?;
            let y = self.read_f64()?;
            coords.push(Coord { x, y });
        }
        Ok(LineString::from(coords))
    }

    /// Read polygon body (ring count + rings), header already consumed.
    fn read_polygon_body(&mut self) -> Result<Polygon<f64>> {
        let num_rings = self.read_u32()?;
        ensure!(num_rings > 0, "[io::wkb::read] Polygon must have at least one ring");

        let exterior = self.read_ring()?;
        let interiors = (1..num_rings)
            .map(|_| self.read_ring())
            .collect::<Result<Vec<_>>>()?;

        Ok(Polygon::new(exterior, interiors))
    }
}

/// Read a Polygon or MultiPolygon from WKB/EWKB bytes, promoting Polygons to MultiPolygons.
pub(crate) fn multipolygon_from_wkb(bytes: &[u8]) -> Result<MultiPolygon<f64>> {
    let mut reader = WkbCursor::new(bytes);

    match reader.read_header()? {
        WKB_POLYGON => Ok(MultiPolygon::new(vec![reader.read_polygon_body()?])),
        WKB_MULTIPOLYGON => {
            let count = reader.read_u32()?;
            let mut polygons = Vec::with_capacity((count as usize).min(1 << 10));
            for i in 0..count {
                // Each member carries its own byte order and type.
                let member_type = reader.read_header()?;
                ensure!(member_type == WKB_POLYGON,
                    "[io::wkb::read] MultiPolygon member {} has geometry type {}", i, member_type);
                polygons.push(reader.read_polygon_body()?);
            }
            Ok(MultiPolygon::new(polygons))
        }
        other => bail!("[io::wkb::read] Expected Polygon or MultiPolygon geometry type, got {}", other),
    }
}

/// Decode a hex string (as written by `to_wkb(hex=True)`) and parse it.
pub(crate) fn multipolygon_from_wkb_hex(text: &str) -> Result<MultiPolygon<f64>> {
    let bytes = hex::decode(text.trim())
        .context("[io::wkb::read] Geometry is not valid hex")?;
    multipolygon_from_wkb(&bytes)
}

#[cfg(test)]
mod tests {
    use geo::polygon;

    use super::*;
    use crate::io::wkb::write::{multipolygon_to_wkb, polygon_to_wkb};

    #[test]
    fn polygon_is_promoted() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 5.0), (x: 0.0, y: 0.0)];
        let parsed = multipolygon_from_wkb(&polygon_to_wkb(&poly, true)).unwrap();
        assert_eq!(parsed, MultiPolygon::new(vec![poly]));
    }

    #[test]
    fn big_endian_polygon() {
        let poly = polygon![(x: 1.5, y: -2.0), (x: 3.0, y: 4.0), (x: 0.0, y: 9.0), (x: 1.5, y: -2.0)];
        let parsed = multipolygon_from_wkb(&polygon_to_wkb(&poly, false)).unwrap();
        assert_eq!(parsed.0[0], poly);
    }

    #[test]
    fn multipolygon_with_hole() {
        let a = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0), (x: 0.0, y: 0.0)],
            interiors: [[(x: 2.0, y: 2.0), (x: 3.0, y: 2.0), (x: 3.0, y: 3.0), (x: 2.0, y: 2.0)]],
        );
        let b = polygon![(x: 20.0, y: 0.0), (x: 21.0, y: 0.0), (x: 21.0, y: 1.0), (x: 20.0, y: 0.0)];
        let shape = MultiPolygon::new(vec![a, b]);

        let hex = hex::encode(multipolygon_to_wkb(&shape));
        assert_eq!(multipolygon_from_wkb_hex(&hex).unwrap(), shape);
    }

    #[test]
    fn ewkb_srid_is_skipped() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0)];
        let plain = polygon_to_wkb(&poly, true);

        let mut ewkb = vec![WKB_LE];
        ewkb.extend_from_slice(&(WKB_POLYGON | EWKB_SRID_FLAG).to_le_bytes());
        ewkb.extend_from_slice(&5070u32.to_le_bytes());
        ewkb.extend_from_slice(&plain[5..]);

        assert_eq!(multipolygon_from_wkb(&ewkb).unwrap().0[0], poly);
    }

    #[test]
    fn point_geometry_is_rejected() {
        let mut point = vec![WKB_LE];
        point.extend_from_slice(&1u32.to_le_bytes());
        point.extend_from_slice(&0f64.to_le_bytes());
        point.extend_from_slice(&0f64.to_le_bytes());
        assert!(multipolygon_from_wkb(&point).is_err());
    }

    #[test]
    fn truncated_input_is_rejected() {
        let poly = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0), (x: 0.0, y: 0.0)];
        let bytes = polygon_to_wkb(&poly, true);
        assert!(multipolygon_from_wkb(&bytes[..bytes.len() - 4]).is_err());
    }

    #[test]
    fn corrupt_member_count_is_rejected() {
        let mut bytes = vec![WKB_LE];
        bytes.extend_from_slice(&WKB_MULTIPOLYGON.to_le_bytes());
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        assert!(multipolygon_from_wkb(&bytes).is_err());
    }

    #[test]
    fn corrupt_ring_length_is_rejected() {
        let mut bytes = vec![WKB_LE];
        bytes.extend_from_slice(&WKB_POLYGON.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&u32::MAX.to_le_bytes());
        bytes.extend_from_slice(&0f64.to_le_bytes());
        assert!(multipolygon_from_wkb(&bytes).is_err());
    }

    #[test]
    fn non_hex_is_rejected() {
        assert!(multipolygon_from_wkb_hex("POLYGON ((0 0, 1 0, 1 1, 0 0))").is_err());
    }
}

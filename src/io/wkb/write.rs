//! WKB writing operations, used to build reader fixtures.

use geo::{LineString, MultiPolygon, Polygon};

use super::{WKB_BE, WKB_LE, WKB_MULTIPOLYGON, WKB_POLYGON};

fn push_u32(out: &mut Vec<u8>, value: u32, is_le: bool) {
    out.extend_from_slice(&if is_le { value.to_le_bytes() } else { value.to_be_bytes() });
}

fn push_ring(out: &mut Vec<u8>, ring: &LineString<f64>, is_le: bool) {
    push_u32(out, ring.0.len() as u32, is_le);
    for coord in ring.coords() {
        for value in [coord.x, coord.y] {
            out.extend_from_slice(&if is_le { value.to_le_bytes() } else { value.to_be_bytes() });
        }
    }
}

/// Write a Polygon to WKB in the given byte order.
pub(crate) fn polygon_to_wkb(poly: &Polygon<f64>, is_le: bool) -> Vec<u8> {
    let mut wkb = vec![if is_le { WKB_LE } else { WKB_BE }];
    push_u32(&mut wkb, WKB_POLYGON, is_le);
    push_u32(&mut wkb, (1 + poly.interiors().len()) as u32, is_le);
    push_ring(&mut wkb, poly.exterior(), is_le);
    for interior in poly.interiors() {
        push_ring(&mut wkb, interior, is_le);
    }
    wkb
}

/// Write a MultiPolygon to little-endian WKB.
pub(crate) fn multipolygon_to_wkb(shape: &MultiPolygon<f64>) -> Vec<u8> {
    let mut wkb = vec![WKB_LE];
    push_u32(&mut wkb, WKB_MULTIPOLYGON, true);
    push_u32(&mut wkb, shape.0.len() as u32, true);
    for polygon in &shape.0 {
        wkb.extend(polygon_to_wkb(polygon, true));
    }
    wkb
}

//! Static SVG preview of the selected parcel, for headless use.

use std::{fs::File, io::{BufWriter, Write}, path::Path};

use anyhow::{anyhow, Context, Result};
use geo::{BoundingRect, Coord, CoordsIter, LineString, MultiPolygon};

use super::MapView;

/// Projection function: lon/lat -> SVG coords (x,y)
type Projection = dyn Fn(&Coord<f64>) -> (f64, f64);

/// Build a compact SVG path string for a MultiPolygon (exteriors + holes).
fn multipolygon_to_path(shape: &MultiPolygon<f64>, project: &Projection) -> String {
    let mut out = String::new();

    for polygon in &shape.0 {
        out.push_str(&ring_to_path(polygon.exterior(), project));
        for interior in polygon.interiors() {
            out.push_str(&ring_to_path(interior, project));
        }
    }

    out
}

/// Build a compact SVG path string for a LineString (ring).
fn ring_to_path(ring: &LineString<f64>, project: &Projection) -> String {
    let mut out = String::new();

    let mut coords = ring.coords_iter()
        .map(|coord| project(&coord));
    if let Some((x, y)) = coords.next() {
        out.push_str(&format!(" M{x:.3},{y:.3}"));
        for (x, y) in coords {
            out.push_str(&format!(" L{x:.3},{y:.3}"));
        }
        out.push('Z');
    }

    out
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the view's overlay into `writer`, fitted to `width` pixels.
fn write_view_svg(writer: &mut impl Write, view: &MapView, width: f64, margin: f64) -> Result<()> {
    let bounds = view.geometry().bounding_rect()
        .ok_or_else(|| anyhow!("[render::svg] parcel {} has no coordinates to draw", view.parcel_id))?;

    // Degrees of longitude shrink with latitude; stretch x so the outline keeps its shape.
    let x_stretch = view.center[0].to_radians().cos();
    let extent = (bounds.width() * x_stretch).max(bounds.height()).max(f64::EPSILON);
    let scale = (width - 2.0 * margin) / extent;
    let height = bounds.height() * scale + 2.0 * margin;

    let project = move |coord: &Coord<f64>| -> (f64, f64) {
        let x = margin + (coord.x - bounds.min().x) * x_stretch * scale;
        let y = margin + (bounds.max().y - coord.y) * scale; // invert vertically
        (x, y)
    };

    writeln!(writer, r##"<?xml version="1.0" encoding="UTF-8" standalone="no"?>"##)?;
    writeln!(writer, r##"<svg xmlns="http://www.w3.org/2000/svg"
    width="{width}" height="{height:.3}"
    viewBox="0 0 {width} {height:.3}"
    data-lon-min="{lon_min}" data-lon-max="{lon_max}"
    data-lat-min="{lat_min}" data-lat-max="{lat_max}"
    data-zoom="{zoom}">"##,
        lon_min = bounds.min().x,
        lon_max = bounds.max().x,
        lat_min = bounds.min().y,
        lat_max = bounds.max().y,
        zoom = view.zoom,
    )?;
    writeln!(writer, r##"<rect width="100%" height="100%" fill="#ffffff"/>"##)?;
    writeln!(writer, r#"<title>Selected Parcel {}</title>"#, escape_xml(&view.parcel_id))?;
    writeln!(writer, r#"<path d="{path}" stroke="{stroke}" fill="{fill}" fill-opacity="{opacity}" fill-rule="evenodd" vector-effect="non-scaling-stroke"/>"#,
        path = multipolygon_to_path(view.geometry(), &project),
        stroke = view.style.color,
        fill = view.style.fill_color,
        opacity = view.style.fill_opacity,
    )?;
    writeln!(writer, "</svg>")?;

    Ok(())
}

impl MapView {
    /// Small wrapper with defaults.
    pub fn to_svg(&self, path: &Path) -> Result<()> {
        self.to_svg_with_size(path, 800, 20)
    }

    /// Write an SVG outline of the selected parcel.
    pub fn to_svg_with_size(&self, path: &Path, width: u32, margin: u32) -> Result<()> {
        let file = File::create(path)
            .with_context(|| format!("[render::svg] Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);

        write_view_svg(&mut writer, self, width as f64, margin as f64)?;
        writer.flush()
            .with_context(|| format!("[render::svg] Failed to write {}", path.display()))
    }

    /// SVG outline as a string.
    pub fn to_svg_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        write_view_svg(&mut buffer, self, 800.0, 20.0)?;
        String::from_utf8(buffer).context("[render::svg] SVG output is not valid UTF-8")
    }
}

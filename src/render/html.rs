use std::{fs, path::Path};

use anyhow::{Context, Result};

use super::MapView;

const LEAFLET_VERSION: &str = "1.9.4";

/// Self-contained Leaflet page showing the view: tiles, attribution, and the parcel overlay.
///
/// Tile fetch failures are left to the browser; the overlay still renders on a blank background.
pub fn map_html_string(view: &MapView) -> Result<String> {
    let view_json = serde_json::to_string(view)
        .context("[render::html] Failed to serialize map view")?
        // Keep the payload from closing the surrounding <script> element.
        .replace("</", "<\\/");

    Ok(format!(r##"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8"/>
<title>Selected Parcel {title}</title>
<meta name="viewport" content="width=device-width, initial-scale=1.0"/>
<link rel="stylesheet" href="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.css"/>
<script src="https://unpkg.com/leaflet@{LEAFLET_VERSION}/dist/leaflet.js"></script>
<style>
    html, body, #map {{ height: 100%; margin: 0; }}
</style>
</head>
<body>
<div id="map"></div>
<script>
    const view = {view_json};
    const map = L.map("map").setView(view.center, view.zoom);
    const tileOptions = {{ maxZoom: 20 }};
    if (view.tiles.attribution) {{ tileOptions.attribution = view.tiles.attribution; }}
    L.tileLayer(view.tiles.url, tileOptions).addTo(map);
    L.geoJSON(view.overlay, {{ style: () => view.style }})
        .bindTooltip(view.overlay.properties.name)
        .addTo(map);
</script>
</body>
</html>
"##,
        title = escape_html(&view.parcel_id),
    ))
}

/// Write the Leaflet page for `view` to `path`.
pub fn write_map_html(view: &MapView, path: &Path) -> Result<()> {
    fs::write(path, map_html_string(view)?)
        .with_context(|| format!("[render::html] Failed to write {}", path.display()))
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

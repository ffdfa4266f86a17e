use std::{fs, path::PathBuf};

use anyhow::{anyhow, Context, Result};
use parcelrank::{Basemap, ParcelId};

use super::{build_request, load_parcels};
use crate::cli::MapFormat;

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::MapArgs) -> Result<()> {
    let parcels = load_parcels(&args.ranking)?;

    let mut request = build_request(&args.ranking)?;
    if let Some(parcel) = &args.parcel {
        request.selected_parcel = Some(ParcelId::new(parcel));
    }
    if let Some(basemap) = &args.basemap {
        request.basemap = basemap.parse::<Basemap>()?;
    }

    let output = parcelrank::run(&parcels, &request)?;
    let view = output.map
        .ok_or_else(|| anyhow!("[map] no {} parcels match the current filters", request.reuse_choice))?;

    let out_path = args.output.clone()
        .unwrap_or_else(|| PathBuf::from(format!("./parcel.{}", args.format.extension())));

    log::info!("[map] writing parcel {} ({} basemap) to {}", view.parcel_id, view.basemap, out_path.display());
    match args.format {
        MapFormat::Html => parcelrank::write_map_html(&view, &out_path)?,
        MapFormat::Svg => view.to_svg(&out_path)?,
        MapFormat::Json => {
            let text = serde_json::to_string_pretty(&view.to_json()?)?;
            fs::write(&out_path, text)
                .with_context(|| format!("[map] failed to write {}", out_path.display()))?;
        }
    }

    Ok(())
}

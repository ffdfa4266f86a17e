use anyhow::Result;

use super::{build_request, load_parcels};

pub fn run(_cli: &crate::cli::Cli, args: &crate::cli::RankArgs) -> Result<()> {
    let parcels = load_parcels(&args.ranking)?;
    let request = build_request(&args.ranking)?;

    log::info!("[rank] ranking {} parcels for {}", parcels.len(), request.reuse_choice);
    let output = parcelrank::run(&parcels, &request)?;

    match &args.output {
        Some(path) => {
            output.table.to_csv(path)?;
            log::info!("[rank] wrote {} rows to {}", output.table.len(), path.display());
        }
        None => print!("{}", output.table.format_table()),
    }

    Ok(())
}

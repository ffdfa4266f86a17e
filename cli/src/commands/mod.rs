pub mod map;
pub mod rank;

use std::fs;

use anyhow::{anyhow, Context, Result};
use parcelrank::{LoadOptions, Metric, ParcelSet, Request, ReuseCategory};

use crate::cli::RankingArgs;

/// Load the parcel artifact named on the command line.
pub(crate) fn load_parcels(args: &RankingArgs) -> Result<ParcelSet> {
    let mut options = LoadOptions::default();
    if let Some(crs) = &args.crs {
        options.source_crs = crs.clone();
    }

    ParcelSet::read_from_file(&args.data, &options)
        .with_context(|| format!("[load] failed to load parcels from {}", args.data.display()))
}

/// Start from `--request` (or defaults) and apply the explicit flags on top.
pub(crate) fn build_request(args: &RankingArgs) -> Result<Request> {
    let mut request = match &args.request {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("[request] failed to read {}", path.display()))?;
            serde_json::from_str::<Request>(&text)
                .with_context(|| format!("[request] invalid request in {}", path.display()))?
        }
        None => Request::default(),
    };

    if let Some(category) = &args.category {
        request.reuse_choice = category.parse::<ReuseCategory>()?;
    }
    for spec in &args.weights {
        let (metric, value) = parse_weight(spec)?;
        request.weights.set(metric, value)?;
    }
    if let Some(min_area) = args.min_area {
        request.min_area = min_area;
    }
    if let Some(max_area) = args.max_area {
        request.max_area = max_area;
    }

    if let Err(err) = request.validate() {
        log::warn!("[request] {err}, applying the area bounds as given");
    }
    Ok(request)
}

/// Parse `METRIC=VALUE`.
fn parse_weight(spec: &str) -> Result<(Metric, f64)> {
    let (metric, value) = spec.split_once('=')
        .ok_or_else(|| anyhow!("[request] expected METRIC=VALUE, got {spec:?}"))?;
    let value = value.trim().parse::<f64>()
        .with_context(|| format!("[request] weight for {metric} is not a number: {value:?}"))?;
    Ok((metric.parse::<Metric>()?, value))
}

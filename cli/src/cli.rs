use std::path::PathBuf;

/// Parcel reuse ranking CLI (argument schema only)
#[derive(clap::Parser, Debug)]
#[command(name = "parcelrank", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Print the top-ranked parcels for a reuse category
    Rank(RankArgs),

    /// Render the selected parcel over a basemap
    Map(MapArgs),
}

#[derive(clap::Args, Debug)]
pub struct RankingArgs {
    /// Parcel artifact (.geojson, .json or .csv, optionally .gz)
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub data: PathBuf,

    /// Base request as JSON; the flags below override its fields
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub request: Option<PathBuf>,

    /// Reuse category: residential, commercial or industrial
    #[arg(short, long)]
    pub category: Option<String>,

    /// Metric weight override, e.g. walkability=2.5 (repeatable)
    #[arg(short, long = "weight", value_name = "METRIC=VALUE")]
    pub weights: Vec<String>,

    /// Minimum parcel area, exclusive
    #[arg(long)]
    pub min_area: Option<u32>,

    /// Maximum parcel area, exclusive
    #[arg(long)]
    pub max_area: Option<u32>,

    /// PROJ.4 definition of the artifact's projected CRS
    #[arg(long, value_name = "PROJ4")]
    pub crs: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct RankArgs {
    #[command(flatten)]
    pub ranking: RankingArgs,

    /// Write the table as CSV instead of printing it
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args, Debug)]
pub struct MapArgs {
    #[command(flatten)]
    pub ranking: RankingArgs,

    /// ParcelID to show, defaults to the best-ranked parcel
    #[arg(short, long)]
    pub parcel: Option<String>,

    /// Basemap: normal or satellite
    #[arg(short, long)]
    pub basemap: Option<String>,

    /// Output file, defaults to "./parcel.<format>"
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = MapFormat::Html)]
    pub format: MapFormat,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapFormat {
    Html,
    Json,
    Svg,
}

impl MapFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            MapFormat::Html => "html",
            MapFormat::Json => "json",
            MapFormat::Svg => "svg",
        }
    }
}

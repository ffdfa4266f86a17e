mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{map, rank};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Rank(args) => rank::run(&cli, args),
        Commands::Map(args) => map::run(&cli, args),
    }
}

/// Warnings by default, `-v` for info, `-vv` for debug. `RUST_LOG` takes precedence.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> anyhow::Result<()> { run() }

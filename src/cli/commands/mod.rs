//! Command implementations for the bikeshare explorer CLI
//!
//! Each command lives in its own module:
//! - `explore`: interactive prompt loop with restart
//! - `stats`: one selection given as arguments, human or JSON output
//! - `inspect`: schema capabilities, row counts and monthly distribution

pub mod explore;
pub mod inspect;
pub mod shared;
pub mod stats;

use crate::cli::args::{Args, Commands};
use anyhow::Context;

/// Main command runner
///
/// Sets up logging, builds the configuration from the config file and
/// overrides, then dispatches to the selected command.
pub fn run(args: Args) -> anyhow::Result<()> {
    shared::setup_logging(&args.common)?;

    let config = args
        .common
        .build_config()
        .context("Failed to build configuration")?;

    match args.command() {
        Commands::Explore => explore::run_explore(&args.common, &config),
        Commands::Stats(stats_args) => stats::run_stats(&args.common, &config, &stats_args),
        Commands::Inspect(inspect_args) => {
            inspect::run_inspect(&args.common, &config, &inspect_args)
        }
    }
}

//! Non-interactive statistics for one selection

use super::shared::run_session;
use crate::cli::args::{CommonArgs, OutputFormat, StatsArgs};
use crate::cli::render::{render_json, render_report};
use crate::config::BikeshareConfig;
use std::io;

/// Compute and print the reports for the selection given on the command line
pub fn run_stats(
    common: &CommonArgs,
    config: &BikeshareConfig,
    args: &StatsArgs,
) -> anyhow::Result<()> {
    let outcome = run_session(common, config, args.selection())?;

    let mut stdout = io::stdout().lock();
    match args.output_format {
        OutputFormat::Human => render_report(&mut stdout, &outcome)?,
        OutputFormat::Json => render_json(&mut stdout, &outcome.report)?,
    }
    Ok(())
}

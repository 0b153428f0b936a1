//! Shared components for CLI commands

use crate::app::models::{City, Selection};
use crate::app::services::session::{ExplorationSession, SessionOutcome};
use crate::app::services::trip_csv_parser::TripLoader;
use crate::cli::args::CommonArgs;
use crate::config::BikeshareConfig;
use crate::{Error, Result};
use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(common: &CommonArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = common.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bikeshare_explorer={}", log_level)));

    let registry = tracing_subscriber::registry().with(filter);
    let result = if common.quiet {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    result.map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Create the row counter shown while a city file loads
pub fn create_loading_spinner(common: &CommonArgs, city: City) -> ProgressBar {
    if !common.show_progress() {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template("{spinner:.green} [{elapsed_precise}] {msg} {pos} rows")
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(format!("Loading {} trips...", city));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Load a selection's city with a spinner and compute its reports
pub fn run_session(
    common: &CommonArgs,
    config: &BikeshareConfig,
    selection: Selection,
) -> anyhow::Result<SessionOutcome> {
    let spinner = create_loading_spinner(common, selection.city);
    let loader = TripLoader::new(config.clone()).with_progress(spinner.clone());
    let session = ExplorationSession::new(loader);

    let outcome = session.run(selection);
    spinner.finish_and_clear();

    outcome.with_context(|| format!("Failed to explore {}", selection))
}

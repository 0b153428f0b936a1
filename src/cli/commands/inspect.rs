//! City file inspection

use super::shared::create_loading_spinner;
use crate::app::models::City;
use crate::app::services::record_processor::{enrich, month_distribution};
use crate::app::services::trip_csv_parser::TripLoader;
use crate::cli::args::{CommonArgs, InspectArgs, OutputFormat};
use crate::cli::render::{Inspection, MonthCount, render_inspection, render_json};
use crate::config::BikeshareConfig;
use anyhow::Context;
use std::io;

/// Load a city file and summarize its schema and contents
pub fn inspect_city(
    common: &CommonArgs,
    config: &BikeshareConfig,
    city: City,
) -> anyhow::Result<Inspection> {
    let spinner = create_loading_spinner(common, city);
    let loader = TripLoader::new(config.clone()).with_progress(spinner.clone());
    let loaded = loader.load(city);
    spinner.finish_and_clear();
    let loaded = loaded.with_context(|| format!("Failed to inspect {}", city))?;

    let capabilities = loaded.dataset.capabilities;
    let dataset = enrich(loaded.dataset);
    let months = month_distribution(&dataset.view())
        .into_iter()
        .map(|(month, trips)| MonthCount { month, trips })
        .collect();

    Ok(Inspection {
        city,
        source_name: loaded.source_name,
        capabilities,
        load: loaded.stats,
        months,
    })
}

pub fn run_inspect(
    common: &CommonArgs,
    config: &BikeshareConfig,
    args: &InspectArgs,
) -> anyhow::Result<()> {
    let inspection = inspect_city(common, config, args.city)?;

    let mut stdout = io::stdout().lock();
    match args.output_format {
        OutputFormat::Human => render_inspection(&mut stdout, &inspection)?,
        OutputFormat::Json => render_json(&mut stdout, &inspection)?,
    }
    Ok(())
}

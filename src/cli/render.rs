//! Console rendering of reports
//!
//! Report bodies come from the statistics types' `Display` impls; this
//! module adds coloured section headers, timings and the JSON form.

use crate::app::models::{City, Month, SchemaCapabilities};
use crate::app::services::session::SessionOutcome;
use crate::app::services::trip_csv_parser::LoadStats;
use crate::{Error, Result};
use colored::*;
use indicatif::HumanDuration;
use serde::Serialize;
use std::fmt::Display;
use std::io::Write;
use std::time::Duration;

const SEPARATOR_WIDTH: usize = 40;

/// Schema and row counts for one city file
#[derive(Debug, Clone, Serialize)]
pub struct Inspection {
    pub city: City,
    pub source_name: String,
    pub capabilities: SchemaCapabilities,
    pub load: LoadStats,
    pub months: Vec<MonthCount>,
}

/// Trips falling in one selectable month
#[derive(Debug, Clone, Serialize)]
pub struct MonthCount {
    pub month: Month,
    pub trips: usize,
}

fn write_err(e: std::io::Error) -> Error {
    Error::io("Failed to write output", e)
}

fn write_section<W: Write>(
    out: &mut W,
    title: &str,
    body: &impl Display,
    elapsed: Duration,
) -> Result<()> {
    writeln!(out, "\n{}\n", title.bright_green().bold()).map_err(write_err)?;
    write!(out, "{}", body).map_err(write_err)?;
    writeln!(
        out,
        "\n{}",
        format!("This took {:.6} seconds.", elapsed.as_secs_f64()).bright_black()
    )
    .map_err(write_err)?;
    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH)).map_err(write_err)
}

/// Print the load summary and the four report sections
pub fn render_report<W: Write>(out: &mut W, outcome: &SessionOutcome) -> Result<()> {
    let report = &outcome.report;

    writeln!(out, "{}", "-".repeat(SEPARATOR_WIDTH)).map_err(write_err)?;
    writeln!(
        out,
        "{} {}",
        "Selection:".bright_cyan(),
        report.selection.to_string().bright_white()
    )
    .map_err(write_err)?;
    writeln!(
        out,
        "{} {} in {}",
        "Source:".bright_cyan(),
        outcome.source_name,
        HumanDuration(outcome.load_elapsed)
    )
    .map_err(write_err)?;
    render_load_stats(out, &outcome.load_stats)?;
    writeln!(
        out,
        "{} {}",
        "Matching trips:".bright_cyan(),
        report.trip_count.to_string().bright_white().bold()
    )
    .map_err(write_err)?;

    for notice in &report.notices {
        writeln!(out, "{} {}", "Note:".bright_yellow(), notice).map_err(write_err)?;
    }

    write_section(
        out,
        "Calculating The Most Frequent Times of Travel...",
        &report.time,
        outcome.timings.time,
    )?;
    write_section(
        out,
        "Calculating The Most Popular Stations and Trip...",
        &report.stations,
        outcome.timings.stations,
    )?;
    write_section(
        out,
        "Calculating Trip Duration...",
        &report.durations,
        outcome.timings.durations,
    )?;
    write_section(
        out,
        "Calculating User Stats...",
        &report.users,
        outcome.timings.users,
    )
}

fn render_load_stats<W: Write>(out: &mut W, stats: &LoadStats) -> Result<()> {
    writeln!(out, "{} {}", "Rows:".bright_cyan(), stats.summary()).map_err(write_err)?;
    if stats.rows_rejected > 0 {
        writeln!(
            out,
            "{} {} rows skipped",
            "Warning:".bright_yellow(),
            stats.rows_rejected.to_string().bright_red().bold()
        )
        .map_err(write_err)?;
        for message in &stats.rejection_messages {
            writeln!(out, "  {}", message.bright_black()).map_err(write_err)?;
        }
    }
    Ok(())
}

/// Print a city file's schema, row counts and monthly distribution
pub fn render_inspection<W: Write>(out: &mut W, inspection: &Inspection) -> Result<()> {
    writeln!(
        out,
        "{}",
        format!("Inspecting {} trips", inspection.city)
            .bright_green()
            .bold()
    )
    .map_err(write_err)?;
    writeln!(out, "{} {}", "Source:".bright_cyan(), inspection.source_name)
        .map_err(write_err)?;
    render_load_stats(out, &inspection.load)?;

    let capabilities = &inspection.capabilities;
    writeln!(out, "\n{}", "Optional columns:".bright_cyan()).map_err(write_err)?;
    for (column, present) in [
        ("End Time", capabilities.has_end_time),
        ("Gender", capabilities.has_gender),
        ("Birth Year", capabilities.has_birth_year),
    ] {
        let status = if present {
            "present".bright_green()
        } else {
            "absent".bright_red()
        };
        writeln!(out, "  {}: {}", column, status).map_err(write_err)?;
    }

    writeln!(out, "\n{}", "Trips per month:".bright_cyan()).map_err(write_err)?;
    for entry in &inspection.months {
        writeln!(out, "  {:<10} {}", entry.month.name(), entry.trips).map_err(write_err)?;
    }
    Ok(())
}

/// Print any serializable value as pretty JSON
pub fn render_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", json).map_err(write_err)
}

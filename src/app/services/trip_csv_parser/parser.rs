//! Core trip file loader
//!
//! This module opens a city's CSV file, validates its header, and converts
//! rows into trip records under the configured bad row policy.

use std::fs::File;
use std::io::Read;
use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::record_parser::parse_trip_record;
use super::stats::{LoadResult, LoadStats};
use crate::app::models::{City, RawDataset};
use crate::config::{BikeshareConfig, TimestampPolicy};
use crate::constants::PROGRESS_TICK_ROWS;
use crate::{Error, Result};
use indicatif::ProgressBar;

/// Loader for city trip files
///
/// Holds the immutable configuration that maps cities to files. Each call
/// to [`TripLoader::load`] reads the source afresh.
#[derive(Debug, Clone)]
pub struct TripLoader {
    config: BikeshareConfig,
    progress: Option<ProgressBar>,
}

impl TripLoader {
    /// Create a loader for the given configuration
    pub fn new(config: BikeshareConfig) -> Self {
        Self {
            config,
            progress: None,
        }
    }

    /// Report row progress on the given bar while loading
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn config(&self) -> &BikeshareConfig {
        &self.config
    }

    /// Load the full, unfiltered trip file for a city
    pub fn load(&self, city: City) -> Result<LoadResult> {
        let path = self.config.source_path(city);
        let source_name = path.display().to_string();
        info!("Loading {} trips from {}", city, source_name);

        if !path.is_file() {
            return Err(Error::data_source(
                &source_name,
                format!("Source file for {} not found", city),
            ));
        }

        let file = File::open(&path).map_err(|e| {
            Error::data_source(&source_name, format!("Failed to open source file: {}", e))
        })?;

        self.load_from_reader(city, file, &source_name)
    }

    /// Load trips for a city from any reader
    ///
    /// Used directly by tests and by callers that already hold the data in
    /// memory; [`TripLoader::load`] delegates here after opening the file.
    pub fn load_from_reader<R: Read>(
        &self,
        city: City,
        reader: R,
        source_name: &str,
    ) -> Result<LoadResult> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| Error::data_source_csv(source_name, "Failed to read CSV header", e))?
            .clone();

        let column_mapping = ColumnMapping::analyze(&headers);
        let missing = column_mapping.missing_required();
        if !missing.is_empty() {
            return Err(Error::data_source(
                source_name,
                format!("Missing required columns: {}", missing.join(", ")),
            ));
        }

        let capabilities = column_mapping.capabilities();
        debug!(
            "Schema for {}: end_time={}, gender={}, birth_year={}, ignored columns={:?}",
            city,
            capabilities.has_end_time,
            capabilities.has_gender,
            capabilities.has_birth_year,
            column_mapping.ignored_columns
        );

        let policy = self.config.timestamp_policy;
        let formats = &self.config.timestamp_formats;
        let mut stats = LoadStats::new();
        let mut records = Vec::new();

        for (row_index, result) in csv_reader.records().enumerate() {
            // Header occupies line 1
            let fallback_line = row_index as u64 + 2;
            let record = result.map_err(|e| {
                Error::data_source_csv(
                    source_name,
                    format!("Malformed CSV near line {}", fallback_line),
                    e,
                )
            })?;
            let line = record
                .position()
                .map(|p| p.line())
                .unwrap_or(fallback_line);

            stats.rows_read += 1;

            match parse_trip_record(&record, &column_mapping, formats) {
                Ok(trip) => {
                    stats.rows_accepted += 1;
                    records.push(trip);
                }
                Err(e) => match policy {
                    TimestampPolicy::Strict => {
                        return Err(Error::data_source(
                            source_name,
                            format!("Line {}: {}", line, e),
                        ));
                    }
                    TimestampPolicy::Lenient => {
                        debug!("Rejected line {} of {}: {}", line, source_name, e);
                        stats.add_rejection(format!("line {}: {}", line, e));
                    }
                },
            }

            if let Some(progress) = &self.progress {
                if stats.rows_read as u64 % PROGRESS_TICK_ROWS == 0 {
                    progress.set_position(stats.rows_read as u64);
                }
            }
        }

        if let Some(progress) = &self.progress {
            progress.set_position(stats.rows_read as u64);
        }

        if stats.rows_rejected > 0 {
            warn!(
                "Dropped {} of {} rows from {} with unparseable required fields",
                stats.rows_rejected, stats.rows_read, source_name
            );
        }
        info!("{}", stats.summary());

        Ok(LoadResult {
            dataset: RawDataset::new(city, capabilities, records),
            stats,
            source_name: source_name.to_string(),
        })
    }
}

//! One exploration session: load, enrich, filter and report
//!
//! Every call to [`ExplorationSession::run`] reads the city file afresh, so a
//! restarted session never sees a previous session's data.

use crate::app::models::{Dataset, Selection};
use crate::app::services::record_processor::{enrich, filter_dataset};
use crate::app::services::statistics::{ReportTimings, SessionReport};
use crate::app::services::trip_csv_parser::{LoadStats, TripLoader};
use crate::Result;
use std::time::{Duration, Instant};
use tracing::info;

/// Everything produced by one session
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub report: SessionReport,
    pub timings: ReportTimings,
    pub load_stats: LoadStats,
    pub source_name: String,
    /// Time spent reading and enriching the file
    pub load_elapsed: Duration,
}

/// Runs the full pipeline for a selection
#[derive(Debug, Clone)]
pub struct ExplorationSession {
    loader: TripLoader,
}

impl ExplorationSession {
    pub fn new(loader: TripLoader) -> Self {
        Self { loader }
    }

    pub fn loader(&self) -> &TripLoader {
        &self.loader
    }

    /// Load the selected city and compute its reports
    pub fn run(&self, selection: Selection) -> Result<SessionOutcome> {
        let start = Instant::now();
        let loaded = self.loader.load(selection.city)?;
        let dataset = enrich(loaded.dataset);
        let load_elapsed = start.elapsed();

        info!(
            "Loaded {} trips for {} in {:?}",
            dataset.len(),
            selection.city,
            load_elapsed
        );

        let (report, timings) =
            run_on_dataset_timed(&dataset, selection, self.loader.config().top_trips);

        Ok(SessionOutcome {
            report,
            timings,
            load_stats: loaded.stats,
            source_name: loaded.source_name,
            load_elapsed,
        })
    }
}

/// Filter an already loaded dataset and compute its reports
pub fn run_on_dataset(dataset: &Dataset, selection: Selection, top_trips: usize) -> SessionReport {
    run_on_dataset_timed(dataset, selection, top_trips).0
}

fn run_on_dataset_timed(
    dataset: &Dataset,
    selection: Selection,
    top_trips: usize,
) -> (SessionReport, ReportTimings) {
    let view = filter_dataset(dataset, &selection.filter);
    SessionReport::compute_timed(selection, &view, top_trips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::{City, Notice};
    use crate::app::services::record_processor::tests::create_scenario_dataset;
    use crate::config::BikeshareConfig;
    use crate::Error;
    use std::fs;
    use tempfile::TempDir;

    const WASHINGTON_CSV: &str = "\
Start Time,End Time,Trip Duration,Start Station,End Station,User Type
2017-01-02 08:00:00,2017-01-02 08:02:00,120,A,B,Subscriber
2017-01-09 09:15:00,2017-01-09 09:20:00,300,A,C,Customer
2017-02-07 08:30:00,2017-02-07 08:31:00,60,B,A,Subscriber
";

    fn session_for(dir: &TempDir) -> ExplorationSession {
        let config = BikeshareConfig::default().with_data_dir(dir.path());
        ExplorationSession::new(TripLoader::new(config))
    }

    #[test]
    fn test_run_from_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("washington.csv"), WASHINGTON_CSV).unwrap();

        let outcome = session_for(&dir)
            .run(Selection::parse("washington", "january", "all").unwrap())
            .unwrap();

        assert_eq!(outcome.load_stats.rows_read, 3);
        assert_eq!(outcome.report.trip_count, 2);
        assert_eq!(outcome.report.durations.total_seconds, 420.0);
        assert!(outcome.report.notices.contains(&Notice::MissingOptionalColumn {
            column: "Gender".to_string()
        }));
    }

    #[test]
    fn test_each_run_reloads() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("washington.csv");
        fs::write(&path, WASHINGTON_CSV).unwrap();
        let session = session_for(&dir);
        let selection = Selection::parse("washington", "all", "all").unwrap();

        assert_eq!(session.run(selection).unwrap().report.trip_count, 3);

        let header_and_one_row = WASHINGTON_CSV
            .lines()
            .take(2)
            .collect::<Vec<_>>()
            .join("\n");
        fs::write(&path, header_and_one_row).unwrap();

        assert_eq!(session.run(selection).unwrap().report.trip_count, 1);
    }

    #[test]
    fn test_missing_file_is_data_source_error() {
        let dir = TempDir::new().unwrap();
        let result = session_for(&dir).run(Selection::parse("chicago", "all", "all").unwrap());

        assert!(matches!(result, Err(Error::DataSource { .. })));
    }

    #[test]
    fn test_run_on_dataset() {
        let dataset = create_scenario_dataset();
        let selection = Selection::parse("chicago", "february", "tuesday").unwrap();

        let report = run_on_dataset(&dataset, selection, 5);

        assert_eq!(report.selection.city, City::Chicago);
        assert_eq!(report.trip_count, 1);
        assert_eq!(report.durations.mean_seconds, Some(60.0));
    }
}

//! Combined report for one exploration session

use super::duration_stats::{DurationStats, trip_duration_stats};
use super::station_stats::{StationStats, station_stats};
use super::time_stats::{TimeStats, time_stats};
use super::user_stats::{UserStats, user_stats};
use crate::app::models::{DatasetView, Notice, Selection};
use crate::app::services::record_processor::matches_filter;
use serde::Serialize;
use std::fmt;
use std::time::{Duration, Instant};
use tracing::debug;

/// All four reports for a selection, plus any non-fatal notices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionReport {
    pub selection: Selection,
    pub trip_count: usize,
    pub notices: Vec<Notice>,
    pub time: TimeStats,
    pub stations: StationStats,
    pub durations: DurationStats,
    pub users: UserStats,
}

/// Wall-clock time spent on each report
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ReportTimings {
    pub time: Duration,
    pub stations: Duration,
    pub durations: Duration,
    pub users: Duration,
}

impl ReportTimings {
    pub fn total(&self) -> Duration {
        self.time + self.stations + self.durations + self.users
    }
}

fn timed<T>(compute: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = compute();
    (value, start.elapsed())
}

impl SessionReport {
    /// Compute every report over the view
    ///
    /// `view` must be the selection's city filtered by the selection's month
    /// and day, as produced by
    /// [`filter_dataset`](crate::app::services::record_processor::filter_dataset);
    /// the selection only labels the report. Use
    /// [`run_on_dataset`](crate::app::services::session::run_on_dataset) to
    /// filter and compute in one step. Debug builds check the pairing.
    pub fn compute(selection: Selection, view: &DatasetView<'_>, top_trips: usize) -> Self {
        Self::compute_timed(selection, view, top_trips).0
    }

    /// Compute every report over the view, timing each one
    pub fn compute_timed(
        selection: Selection,
        view: &DatasetView<'_>,
        top_trips: usize,
    ) -> (Self, ReportTimings) {
        debug_assert!(
            view.city() == selection.city
                && view.iter().all(|t| matches_filter(t, &selection.filter)),
            "view does not match selection {}",
            selection
        );

        let (time, time_elapsed) = timed(|| time_stats(view));
        let (stations, stations_elapsed) = timed(|| station_stats(view, top_trips));
        let (durations, durations_elapsed) = timed(|| trip_duration_stats(view));
        let (users, users_elapsed) = timed(|| user_stats(view));

        let timings = ReportTimings {
            time: time_elapsed,
            stations: stations_elapsed,
            durations: durations_elapsed,
            users: users_elapsed,
        };
        debug!("Computed reports for {} in {:?}", selection, timings.total());

        let report = Self {
            selection,
            trip_count: view.len(),
            notices: collect_notices(view),
            time,
            stations,
            durations,
            users,
        };
        (report, timings)
    }

    pub fn is_empty(&self) -> bool {
        self.trip_count == 0
    }
}

fn collect_notices(view: &DatasetView<'_>) -> Vec<Notice> {
    let mut notices = Vec::new();
    if view.is_empty() {
        notices.push(Notice::EmptyResult);
    }
    notices.extend(
        view.capabilities()
            .missing_demographic_columns()
            .into_iter()
            .map(|column| Notice::MissingOptionalColumn {
                column: column.to_string(),
            }),
    );
    notices
}

impl fmt::Display for SessionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Selection: {}", self.selection)?;
        writeln!(f, "Matching trips: {}", self.trip_count)?;
        for notice in &self.notices {
            writeln!(f, "Note: {}", notice)?;
        }
        writeln!(f)?;
        writeln!(f, "Most Frequent Times of Travel")?;
        write!(f, "{}", self.time)?;
        writeln!(f)?;
        writeln!(f, "Most Popular Stations and Trip")?;
        write!(f, "{}", self.stations)?;
        writeln!(f)?;
        writeln!(f, "Trip Duration")?;
        write!(f, "{}", self.durations)?;
        writeln!(f)?;
        writeln!(f, "User Stats")?;
        write!(f, "{}", self.users)
    }
}

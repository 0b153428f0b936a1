//! Trip statistics
//!
//! Four reports are computed over a filtered [`DatasetView`]:
//!
//! - **Time**: most common month, weekday and start hour
//! - **Stations**: most used start and end stations and station pair
//! - **Durations**: total and mean travel time
//! - **Users**: user type counts, plus gender and birth year where present
//!
//! Every report is a pure function of the view. Modes break ties toward the
//! smallest value (see [`frequency`]), so repeated runs over the same data
//! always agree. An empty view yields `None` for every mode and mean.
//!
//! [`DatasetView`]: crate::app::models::DatasetView

pub mod duration_stats;
pub mod frequency;
pub mod report;
pub mod station_stats;
pub mod time_stats;
pub mod user_stats;

#[cfg(test)]
pub mod tests;

pub use duration_stats::{DurationStats, format_seconds, trip_duration_stats};
pub use frequency::{FrequencyTable, ValueCount};
pub use report::{ReportTimings, SessionReport};
pub use station_stats::{StationPair, StationStats, station_stats};
pub use time_stats::{TimeStats, time_stats};
pub use user_stats::{BirthYearStats, ColumnReport, UserStats, user_stats};

use std::fmt;

/// Placeholder shown for a statistic that has no value
pub(crate) const NO_DATA: &str = "no data";

/// Write a "label: value" line, or the placeholder when there is no value
pub(crate) fn write_metric<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    value: Option<T>,
) -> fmt::Result {
    match value {
        Some(value) => writeln!(f, "{}: {}", label, value),
        None => writeln!(f, "{}: {}", label, NO_DATA),
    }
}

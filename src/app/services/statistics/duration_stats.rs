//! Total and average trip duration

use super::write_metric;
use crate::app::models::DatasetView;
use serde::Serialize;
use std::fmt;

/// Aggregate trip durations, in seconds
///
/// The total of an empty selection is 0; mean, shortest and longest are
/// undefined and reported as `None`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DurationStats {
    pub trip_count: usize,
    pub total_seconds: f64,
    pub mean_seconds: Option<f64>,
    pub shortest_seconds: Option<f64>,
    pub longest_seconds: Option<f64>,
}

/// Compute total, mean and range of trip durations
pub fn trip_duration_stats(view: &DatasetView<'_>) -> DurationStats {
    let trip_count = view.len();
    // f64's Sum starts from -0.0; an empty selection must total +0.0
    let total_seconds = view
        .iter()
        .map(|t| t.trip.trip_duration)
        .fold(0.0, |total, seconds| total + seconds);

    let mean_seconds = (trip_count > 0).then(|| total_seconds / trip_count as f64);
    let shortest_seconds = view
        .iter()
        .map(|t| t.trip.trip_duration)
        .min_by(f64::total_cmp);
    let longest_seconds = view
        .iter()
        .map(|t| t.trip.trip_duration)
        .max_by(f64::total_cmp);

    DurationStats {
        trip_count,
        total_seconds,
        mean_seconds,
        shortest_seconds,
        longest_seconds,
    }
}

/// Render seconds as "1d 2h 3m 4s", omitting leading zero units
pub fn format_seconds(seconds: f64) -> String {
    let whole = seconds.round().max(0.0) as u64;
    let (days, rem) = (whole / 86_400, whole % 86_400);
    let (hours, rem) = (rem / 3_600, rem % 3_600);
    let (minutes, secs) = (rem / 60, rem % 60);

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if days > 0 || hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if days > 0 || hours > 0 || minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", secs));
    parts.join(" ")
}

fn seconds_with_human(seconds: f64) -> String {
    format!("{:.1} s ({})", seconds, format_seconds(seconds))
}

impl fmt::Display for DurationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Trips: {}", self.trip_count)?;
        writeln!(
            f,
            "Total travel time: {}",
            seconds_with_human(self.total_seconds)
        )?;
        write_metric(
            f,
            "Mean travel time",
            self.mean_seconds.map(seconds_with_human),
        )?;
        write_metric(
            f,
            "Shortest trip",
            self.shortest_seconds.map(seconds_with_human),
        )?;
        write_metric(
            f,
            "Longest trip",
            self.longest_seconds.map(seconds_with_human),
        )
    }
}

//! Most popular stations and trips

use super::frequency::{FrequencyTable, ValueCount};
use super::write_metric;
use crate::app::models::DatasetView;
use serde::Serialize;
use std::fmt;

/// A start and end station combination
///
/// Ordered by start station, then end station.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StationPair {
    pub start: String,
    pub end: String,
}

impl fmt::Display for StationPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.end)
    }
}

/// Popular stations and station pairs
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationStats {
    pub most_common_start_station: Option<ValueCount<String>>,
    pub most_common_end_station: Option<ValueCount<String>>,
    pub most_common_trip: Option<ValueCount<StationPair>>,
    /// Most frequent pairs, highest count first
    pub top_trips: Vec<ValueCount<StationPair>>,
}

fn to_pair((start, end): (&str, &str)) -> StationPair {
    StationPair {
        start: start.to_string(),
        end: end.to_string(),
    }
}

/// Compute the most used start station, end station and station pair
///
/// `top_trips` bounds the ranked pair list; the single most common trip is
/// reported regardless.
pub fn station_stats(view: &DatasetView<'_>, top_trips: usize) -> StationStats {
    // Count borrowed names; only the reported winners are copied
    let starts: FrequencyTable<&str> = view.iter().map(|t| t.trip.start_station.as_str()).collect();
    let ends: FrequencyTable<&str> = view.iter().map(|t| t.trip.end_station.as_str()).collect();
    let pairs: FrequencyTable<(&str, &str)> = view
        .iter()
        .map(|t| (t.trip.start_station.as_str(), t.trip.end_station.as_str()))
        .collect();

    StationStats {
        most_common_start_station: starts.mode().map(|m| m.map(str::to_string)),
        most_common_end_station: ends.mode().map(|m| m.map(str::to_string)),
        most_common_trip: pairs.mode().map(|m| m.map(to_pair)),
        top_trips: pairs
            .top(top_trips)
            .into_iter()
            .map(|m| m.map(to_pair))
            .collect(),
    }
}

impl fmt::Display for StationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_metric(
            f,
            "Most commonly used start station",
            self.most_common_start_station.as_ref(),
        )?;
        write_metric(
            f,
            "Most commonly used end station",
            self.most_common_end_station.as_ref(),
        )?;
        write_metric(
            f,
            "Most frequent combination of start and end station",
            self.most_common_trip.as_ref(),
        )?;

        if self.top_trips.len() > 1 {
            writeln!(f, "Top trips:")?;
            for (rank, trip) in self.top_trips.iter().enumerate() {
                writeln!(f, "  {}. {}", rank + 1, trip)?;
            }
        }
        Ok(())
    }
}

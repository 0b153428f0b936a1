//! Most frequent times of travel

use super::frequency::{FrequencyTable, ValueCount};
use super::write_metric;
use crate::app::models::{DatasetView, Weekday, calendar_month_name};
use serde::Serialize;
use std::fmt;

/// Most common month, weekday and start hour
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeStats {
    pub trip_count: usize,
    /// Calendar month number, 1-12
    pub most_common_month: Option<ValueCount<u32>>,
    pub most_common_weekday: Option<ValueCount<Weekday>>,
    /// Hour of day, 0-23
    pub most_common_hour: Option<ValueCount<u32>>,
}

/// Compute the most frequent month, weekday and start hour
pub fn time_stats(view: &DatasetView<'_>) -> TimeStats {
    let months: FrequencyTable<u32> = view.iter().map(|t| t.month).collect();
    let weekdays: FrequencyTable<Weekday> = view.iter().map(|t| t.weekday).collect();
    let hours: FrequencyTable<u32> = view.iter().map(|t| t.hour).collect();

    TimeStats {
        trip_count: view.len(),
        most_common_month: months.mode(),
        most_common_weekday: weekdays.mode(),
        most_common_hour: hours.mode(),
    }
}

impl fmt::Display for TimeStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_metric(
            f,
            "Most common month",
            self.most_common_month
                .clone()
                .map(|m| m.map(calendar_month_name)),
        )?;
        write_metric(f, "Most common day of week", self.most_common_weekday.as_ref())?;
        write_metric(
            f,
            "Most common start hour",
            self.most_common_hour
                .clone()
                .map(|h| h.map(|hour| format!("{:02}:00", hour))),
        )
    }
}

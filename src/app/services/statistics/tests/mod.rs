//! Tests for trip statistics
//!
//! Trip fixtures are shared with the record processor tests.

pub mod time_stats_tests;

pub use crate::app::services::record_processor::tests::{
    at, create_dataset, create_demographic_dataset, create_scenario_dataset, create_trip,
};

use crate::app::models::{Dataset, DatasetView, TripFilter};
use crate::app::services::record_processor::filter_dataset;

/// Filter a fixture dataset by month and day names
pub fn select<'a>(dataset: &'a Dataset, month: &str, day: &str) -> DatasetView<'a> {
    let filter = TripFilter::parse(month, day).unwrap();
    filter_dataset(dataset, &filter)
}

//! Month and weekday filtering of enriched trips
//!
//! Filtering produces a [`DatasetView`] that borrows the matching records in
//! source order. The dataset itself is never modified, and an empty result
//! is a valid outcome rather than an error.

use crate::app::models::{
    Dataset, DatasetView, DaySelector, EnrichedTrip, Month, MonthSelector, TripFilter,
};
use tracing::info;

/// Check if a trip passes both selectors
pub fn matches_filter(trip: &EnrichedTrip, filter: &TripFilter) -> bool {
    let month_matches = match filter.month {
        MonthSelector::All => true,
        MonthSelector::Only(month) => trip.month == month.ordinal(),
    };

    let day_matches = match filter.day {
        DaySelector::All => true,
        DaySelector::Only(weekday) => trip.weekday == weekday,
    };

    month_matches && day_matches
}

/// Select the trips of a dataset that match the filter
pub fn filter_dataset<'a>(dataset: &'a Dataset, filter: &TripFilter) -> DatasetView<'a> {
    let view = filter_view(&dataset.view(), filter);

    info!(
        "Filtered {} trips (month: {}, day: {}): {} -> {} trips",
        dataset.city,
        filter.month,
        filter.day,
        dataset.len(),
        view.len()
    );

    view
}

/// Narrow an existing view further
pub fn filter_view<'a>(view: &DatasetView<'a>, filter: &TripFilter) -> DatasetView<'a> {
    if filter.is_unfiltered() {
        return view.clone();
    }

    let records = view
        .iter()
        .filter(|trip| matches_filter(trip, filter))
        .collect();

    DatasetView::new(view.city(), view.capabilities(), records)
}

/// Count trips per selectable month
pub fn month_distribution(view: &DatasetView<'_>) -> Vec<(Month, usize)> {
    Month::ALL
        .into_iter()
        .map(|month| {
            let count = view.iter().filter(|t| t.month == month.ordinal()).count();
            (month, count)
        })
        .collect()
}

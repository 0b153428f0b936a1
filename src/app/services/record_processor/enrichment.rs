//! Temporal enrichment of trip records
//!
//! Derives the month, weekday and hour of each trip from its start time.
//! Every loaded record already holds a valid timestamp, so enrichment cannot
//! fail; rows with unparseable start times were handled by the loader's
//! bad row policy.

use crate::app::models::{Dataset, EnrichedTrip, RawDataset, TripRecord, Weekday};
use chrono::{Datelike, NaiveDateTime, Timelike};
use tracing::debug;

/// Fields derived from a trip's start time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemporalFields {
    /// Calendar month, 1-12
    pub month: u32,
    pub weekday: Weekday,
    /// Hour of day, 0-23
    pub hour: u32,
}

/// Derive month, weekday and hour from a timestamp
pub fn derive_temporal_fields(start_time: &NaiveDateTime) -> TemporalFields {
    TemporalFields {
        month: start_time.month(),
        weekday: Weekday::from(start_time.weekday()),
        hour: start_time.hour(),
    }
}

/// Attach derived fields to a single trip
pub fn enrich_trip(trip: TripRecord) -> EnrichedTrip {
    let TemporalFields {
        month,
        weekday,
        hour,
    } = derive_temporal_fields(&trip.start_time);

    EnrichedTrip {
        trip,
        month,
        weekday,
        hour,
    }
}

/// Enrich every trip in a freshly loaded dataset
///
/// Record order and all original fields are preserved.
pub fn enrich(raw: RawDataset) -> Dataset {
    let RawDataset {
        city,
        capabilities,
        records,
    } = raw;

    let records: Vec<EnrichedTrip> = records.into_iter().map(enrich_trip).collect();
    debug!("Enriched {} {} trips with temporal fields", records.len(), city);

    Dataset {
        city,
        capabilities,
        records,
    }
}

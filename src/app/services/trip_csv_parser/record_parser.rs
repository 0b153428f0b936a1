//! Trip record parsing from CSV rows
//!
//! Converts a single CSV row into a [`TripRecord`], reading optional columns
//! only when the city's header carries them.

use super::column_mapping::ColumnMapping;
use super::field_parsers::{
    FieldError, parse_optional_string, parse_optional_timestamp, parse_optional_year,
    parse_required_seconds, parse_required_string, parse_required_timestamp,
};
use crate::app::models::TripRecord;
use crate::constants::columns;
use csv::StringRecord;

/// Parse a single trip row
///
/// Fails on the first required field that is missing, blank or unparseable.
/// Problems in optional columns (end time, user type, gender, birth year)
/// leave that field empty instead.
pub fn parse_trip_record(
    record: &StringRecord,
    mapping: &ColumnMapping,
    timestamp_formats: &[String],
) -> Result<TripRecord, FieldError> {
    let start_time =
        parse_required_timestamp(record, mapping, columns::START_TIME, timestamp_formats)?;
    let trip_duration = parse_required_seconds(record, mapping, columns::TRIP_DURATION)?;
    let start_station = parse_required_string(record, mapping, columns::START_STATION)?;
    let end_station = parse_required_string(record, mapping, columns::END_STATION)?;

    Ok(TripRecord {
        start_time,
        end_time: parse_optional_timestamp(record, mapping, columns::END_TIME, timestamp_formats),
        trip_duration,
        start_station,
        end_station,
        user_type: parse_optional_string(record, mapping, columns::USER_TYPE),
        gender: parse_optional_string(record, mapping, columns::GENDER),
        birth_year: parse_optional_year(record, mapping, columns::BIRTH_YEAR),
    })
}

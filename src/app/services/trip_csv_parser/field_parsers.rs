//! Field parsing utilities for trip CSV records
//!
//! This module provides helper functions for parsing the different data
//! types found in city trip files, reporting per-field problems as
//! [`FieldError`] so the loader can apply its bad row policy.

use super::column_mapping::ColumnMapping;
use chrono::NaiveDateTime;
use csv::StringRecord;

/// A single field could not be read from a row
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("no value for required column '{column}'")]
    Missing { column: String },

    #[error("empty value for required column '{column}'")]
    Empty { column: String },

    #[error("invalid {expected} for '{column}': '{value}'")]
    Invalid {
        column: String,
        value: String,
        expected: &'static str,
    },
}

/// Parse a timestamp using the first matching format
pub fn parse_timestamp(value: &str, formats: &[String]) -> Option<NaiveDateTime> {
    let value = value.trim();
    formats
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Parse a required timestamp field from a CSV record
pub fn parse_required_timestamp(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column: &str,
    formats: &[String],
) -> Result<NaiveDateTime, FieldError> {
    let value = get_required_field(record, mapping, column)?;
    parse_timestamp(value, formats).ok_or_else(|| FieldError::Invalid {
        column: column.to_string(),
        value: value.to_string(),
        expected: "timestamp",
    })
}

/// Parse a required non-negative number of seconds
///
/// Accepts integer and float text, as the city files disagree on which
/// they use.
pub fn parse_required_seconds(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column: &str,
) -> Result<f64, FieldError> {
    let value = get_required_field(record, mapping, column)?;
    match value.parse::<f64>() {
        Ok(seconds) if seconds.is_finite() && seconds >= 0.0 => Ok(seconds),
        _ => Err(FieldError::Invalid {
            column: column.to_string(),
            value: value.to_string(),
            expected: "non-negative duration",
        }),
    }
}

/// Parse a required string field from a CSV record
pub fn parse_required_string(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column: &str,
) -> Result<String, FieldError> {
    get_required_field(record, mapping, column).map(str::to_string)
}

/// Parse an optional timestamp field; unparseable values become `None`
pub fn parse_optional_timestamp(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column: &str,
    formats: &[String],
) -> Option<NaiveDateTime> {
    get_optional_field(record, mapping, column).and_then(|s| parse_timestamp(s, formats))
}

/// Parse an optional string field
pub fn parse_optional_string(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column: &str,
) -> Option<String> {
    get_optional_field(record, mapping, column).map(str::to_string)
}

/// Parse an optional year stored as integer or float text (e.g. "1992.0")
pub fn parse_optional_year(
    record: &StringRecord,
    mapping: &ColumnMapping,
    column: &str,
) -> Option<i32> {
    let value = get_optional_field(record, mapping, column)?;
    let year = value.parse::<f64>().ok()?;
    if year.is_finite() && year.fract() == 0.0 && year.abs() <= i32::MAX as f64 {
        Some(year as i32)
    } else {
        None
    }
}

/// Get a required field value from a CSV record
pub fn get_required_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    column: &str,
) -> Result<&'a str, FieldError> {
    let value = mapping
        .get_index(column)
        .and_then(|index| record.get(index))
        .ok_or_else(|| FieldError::Missing {
            column: column.to_string(),
        })?;

    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Empty {
            column: column.to_string(),
        });
    }

    Ok(trimmed)
}

/// Get an optional field value from a CSV record
///
/// Returns `None` when the column is absent, the row is short, or the cell
/// is blank.
pub fn get_optional_field<'a>(
    record: &'a StringRecord,
    mapping: &ColumnMapping,
    column: &str,
) -> Option<&'a str> {
    mapping
        .get_index(column)
        .and_then(|index| record.get(index))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

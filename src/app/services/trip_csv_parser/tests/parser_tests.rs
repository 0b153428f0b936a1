//! Tests for the trip loader

use super::*;
use crate::Error;
use crate::app::models::City;
use crate::app::services::trip_csv_parser::TripLoader;
use crate::config::BikeshareConfig;
use chrono::{Datelike, Timelike};
use indicatif::ProgressBar;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_load_chicago_fixture() {
    let loader = TripLoader::new(lenient_config());
    let result = loader
        .load_from_reader(City::Chicago, CHICAGO_CSV.as_bytes(), "chicago fixture")
        .unwrap();

    assert_eq!(result.record_count(), 4);
    assert_eq!(result.stats.rows_read, 4);
    assert_eq!(result.stats.rows_accepted, 4);
    assert_eq!(result.stats.rows_rejected, 0);
    assert_eq!(result.source_name, "chicago fixture");

    let dataset = &result.dataset;
    assert_eq!(dataset.city, City::Chicago);
    assert!(dataset.capabilities.has_gender);
    assert!(dataset.capabilities.has_birth_year);

    let first = &dataset.records[0];
    assert_eq!(first.start_time.month(), 6);
    assert_eq!(first.start_time.hour(), 15);
    assert_eq!(first.trip_duration, 321.0);
    assert_eq!(first.start_station, "Wood St & Hubbard St");
    assert_eq!(first.gender.as_deref(), Some("Male"));
    assert_eq!(first.birth_year, Some(1992));
    assert!(first.end_time.is_some());

    // Blank demographic cells in a file that has the columns
    let last = &dataset.records[3];
    assert_eq!(last.user_type.as_deref(), Some("Customer"));
    assert_eq!(last.gender, None);
    assert_eq!(last.birth_year, None);
}

#[test]
fn test_load_washington_fixture_detects_missing_columns() {
    let loader = TripLoader::new(lenient_config());
    let result = loader
        .load_from_reader(City::Washington, WASHINGTON_CSV.as_bytes(), "washington")
        .unwrap();

    let capabilities = result.dataset.capabilities;
    assert!(capabilities.has_end_time);
    assert!(!capabilities.has_gender);
    assert!(!capabilities.has_birth_year);

    assert_eq!(result.record_count(), 2);
    assert!((result.dataset.records[0].trip_duration - 489.066).abs() < 1e-9);
    assert!(result.dataset.records.iter().all(|r| r.gender.is_none()));
}

#[test]
fn test_missing_required_column_is_data_source_error() {
    let csv = "Start Time,Start Station,End Station,User Type\n2017-01-01 00:00:00,A,B,Subscriber\n";
    let loader = TripLoader::new(lenient_config());

    let err = loader
        .load_from_reader(City::Chicago, csv.as_bytes(), "no duration")
        .unwrap_err();

    match err {
        Error::DataSource { message, .. } => assert!(message.contains("Trip Duration")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_empty_input_is_data_source_error() {
    let loader = TripLoader::new(lenient_config());
    let result = loader.load_from_reader(City::Chicago, "".as_bytes(), "empty");
    assert!(matches!(result, Err(Error::DataSource { .. })));
}

#[test]
fn test_header_only_file_loads_empty_dataset() {
    let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n";
    let loader = TripLoader::new(lenient_config());

    let result = loader
        .load_from_reader(City::NewYorkCity, csv.as_bytes(), "header only")
        .unwrap();

    assert!(result.dataset.is_empty());
    assert_eq!(result.stats.rows_read, 0);
    assert_eq!(result.stats.acceptance_rate(), 100.0);
}

#[test]
fn test_lenient_policy_drops_bad_rows() {
    let loader = TripLoader::new(lenient_config());
    let result = loader
        .load_from_reader(City::Chicago, BAD_TIMESTAMP_CSV.as_bytes(), "bad ts")
        .unwrap();

    assert_eq!(result.stats.rows_read, 3);
    assert_eq!(result.stats.rows_accepted, 2);
    assert_eq!(result.stats.rows_rejected, 1);
    assert_eq!(result.stats.rejection_messages.len(), 1);
    assert!(result.stats.rejection_messages[0].contains("line 3"));
    assert!(result.stats.rejection_messages[0].contains("not-a-date"));

    // Surviving rows keep their original order
    let durations: Vec<f64> = result
        .dataset
        .records
        .iter()
        .map(|r| r.trip_duration)
        .collect();
    assert_eq!(durations, vec![100.0, 300.0]);
}

#[test]
fn test_strict_policy_aborts_on_bad_row() {
    let loader = TripLoader::new(strict_config());
    let err = loader
        .load_from_reader(City::Chicago, BAD_TIMESTAMP_CSV.as_bytes(), "bad ts")
        .unwrap_err();

    match err {
        Error::DataSource {
            source_name,
            message,
            ..
        } => {
            assert_eq!(source_name, "bad ts");
            assert!(message.contains("Line 3"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_malformed_row_is_fatal_under_either_policy() {
    let csv = "Start Time,Trip Duration,Start Station,End Station,User Type\n\
               2017-01-01 00:00:00,60,A,B,Subscriber\n\
               2017-01-01 00:00:00,60,A\n";

    for config in [lenient_config(), strict_config()] {
        let loader = TripLoader::new(config);
        let result = loader.load_from_reader(City::Chicago, csv.as_bytes(), "ragged");
        assert!(matches!(
            result,
            Err(Error::DataSource {
                source: Some(_),
                ..
            })
        ));
    }
}

#[test]
fn test_load_from_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("chicago.csv"), CHICAGO_CSV).unwrap();

    let loader = TripLoader::new(BikeshareConfig::default().with_data_dir(temp_dir.path()));
    let result = loader.load(City::Chicago).unwrap();

    assert_eq!(result.record_count(), 4);
    assert!(result.source_name.ends_with("chicago.csv"));
}

#[test]
fn test_load_missing_file_is_data_source_error() {
    let temp_dir = TempDir::new().unwrap();
    let loader = TripLoader::new(BikeshareConfig::default().with_data_dir(temp_dir.path()));

    let err = loader.load(City::Washington).unwrap_err();
    match err {
        Error::DataSource { message, .. } => assert!(message.contains("not found")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_progress_reaches_row_count() {
    let progress = ProgressBar::hidden();
    let loader = TripLoader::new(lenient_config()).with_progress(progress.clone());

    loader
        .load_from_reader(City::Chicago, CHICAGO_CSV.as_bytes(), "chicago")
        .unwrap();

    assert_eq!(progress.position(), 4);
}

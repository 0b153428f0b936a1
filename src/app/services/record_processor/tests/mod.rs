//! Tests for record processing
//!
//! Also hosts the trip fixtures shared with the statistics tests.


use crate::app::models::{City, Dataset, RawDataset, SchemaCapabilities, TripRecord};
use crate::app::services::record_processor::enrich;
use chrono::NaiveDateTime;

/// Parse a fixture timestamp
pub fn at(timestamp: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S").unwrap()
}

/// Create a trip with the columns every city carries
pub fn create_trip(
    start_time: &str,
    duration: f64,
    start_station: &str,
    end_station: &str,
    user_type: &str,
) -> TripRecord {
    TripRecord::new(
        at(start_time),
        duration,
        start_station,
        end_station,
        user_type,
    )
}

/// Enrich trips into a dataset with the given capabilities
pub fn create_dataset(capabilities: SchemaCapabilities, trips: Vec<TripRecord>) -> Dataset {
    enrich(RawDataset::new(City::Chicago, capabilities, trips))
}

/// Three trips covering two months and two weekdays
///
/// - 2017-01-02 08:00 Monday, 120s, A -> B, Subscriber
/// - 2017-01-09 09:15 Monday, 300s, A -> C, Customer
/// - 2017-02-07 08:30 Tuesday, 60s, B -> A, Subscriber
pub fn create_scenario_dataset() -> Dataset {
    create_dataset(
        SchemaCapabilities {
            has_end_time: false,
            has_gender: false,
            has_birth_year: false,
        },
        vec![
            create_trip("2017-01-02 08:00:00", 120.0, "A", "B", "Subscriber"),
            create_trip("2017-01-09 09:15:00", 300.0, "A", "C", "Customer"),
            create_trip("2017-02-07 08:30:00", 60.0, "B", "A", "Subscriber"),
        ],
    )
}

/// Trips spread across every selectable month with demographics
pub fn create_demographic_dataset() -> Dataset {
    create_dataset(
        SchemaCapabilities::full(),
        vec![
            create_trip("2017-01-03 07:10:00", 400.0, "Canal St", "Clark St", "Subscriber")
                .with_gender("Male")
                .with_birth_year(1985),
            create_trip("2017-02-14 17:45:00", 900.0, "Clark St", "Canal St", "Customer")
                .with_gender("Female")
                .with_birth_year(1992),
            create_trip("2017-03-18 12:00:00", 250.0, "Canal St", "Clark St", "Subscriber")
                .with_gender("Female")
                .with_birth_year(1992),
            create_trip("2017-04-21 08:05:00", 1300.0, "Lake St", "Clark St", "Subscriber")
                .with_birth_year(1970),
            create_trip("2017-05-05 18:30:00", 610.0, "Canal St", "Lake St", "Customer"),
            create_trip("2017-06-30 23:59:59", 75.0, "Clark St", "Canal St", "Subscriber")
                .with_gender("Male")
                .with_birth_year(2001),
        ],
    )
}

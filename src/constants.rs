//! Application constants for the bikeshare explorer
//!
//! This module contains the recognized selector values, source column names
//! and default settings used throughout the application.

// =============================================================================
// Selector Values
// =============================================================================

/// Recognized city names, in the order they are offered to the user
pub const CITY_NAMES: &[&str] = &["chicago", "new york city", "washington"];

/// Sentinel accepted by the month and day selectors to disable filtering
pub const ALL_SELECTOR: &str = "all";

/// Month names that can be selected, January first
pub const MONTH_NAMES: &[&str] = &["january", "february", "march", "april", "may", "june"];

/// Weekday names, Monday first
pub const WEEKDAY_NAMES: &[&str] = &[
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
    "sunday",
];

// =============================================================================
// Default Source Files
// =============================================================================

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = ".";

pub const DEFAULT_CHICAGO_FILE: &str = "chicago.csv";
pub const DEFAULT_NEW_YORK_CITY_FILE: &str = "new_york_city.csv";
pub const DEFAULT_WASHINGTON_FILE: &str = "washington.csv";

// =============================================================================
// Source Columns
// =============================================================================

/// Column names as they appear in the city files
///
/// Matching is case-insensitive and ignores surrounding whitespace.
pub mod columns {
    pub const START_TIME: &str = "Start Time";
    pub const END_TIME: &str = "End Time";
    pub const TRIP_DURATION: &str = "Trip Duration";
    pub const START_STATION: &str = "Start Station";
    pub const END_STATION: &str = "End Station";
    pub const USER_TYPE: &str = "User Type";
    pub const GENDER: &str = "Gender";
    pub const BIRTH_YEAR: &str = "Birth Year";

    /// Columns every city file must carry
    pub const REQUIRED: &[&str] = &[
        START_TIME,
        TRIP_DURATION,
        START_STATION,
        END_STATION,
        USER_TYPE,
    ];
}

// =============================================================================
// Parsing Defaults
// =============================================================================

/// Timestamp formats tried in order when parsing start and end times
pub const DEFAULT_TIMESTAMP_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Maximum number of rejection messages retained in load statistics
pub const MAX_RETAINED_REJECTIONS: usize = 20;

/// Rows between progress bar updates while loading
pub const PROGRESS_TICK_ROWS: u64 = 10_000;

// =============================================================================
// Reporting Defaults
// =============================================================================

/// Number of start/end station pairs listed in the station report
pub const DEFAULT_TOP_TRIPS: usize = 5;

/// Default log level when no verbosity flags are given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

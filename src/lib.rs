//! Bikeshare Explorer Library
//!
//! A Rust library for exploring US bikeshare trip data for Chicago, New York City
//! and Washington.
//!
//! This library provides tools for:
//! - Loading a city's trip CSV with per-city schema capability detection
//! - Deriving month, weekday and hour fields from trip start times
//! - Filtering trips by month and weekday into borrowed views
//! - Computing travel-time, station, trip-duration and user statistics
//!   with deterministic tie-breaking

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod record_processor;
        pub mod session;
        pub mod statistics;
        pub mod trip_csv_parser;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod input;
    pub mod render;
}

// Re-export commonly used types
pub use app::models::{
    City, DaySelector, Month, MonthSelector, SchemaCapabilities, SelectorKind, TripFilter,
    TripRecord, Weekday,
};
pub use config::BikeshareConfig;

/// Result type alias for the bikeshare explorer
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for loading, selecting and reporting on trip data
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Source file missing, unreadable, malformed or missing required columns
    #[error("Data source error for '{source_name}': {message}")]
    DataSource {
        source_name: String,
        message: String,
        #[source]
        source: Option<csv::Error>,
    },

    /// City, month or day value outside the recognized set
    #[error("Invalid {kind} '{value}'. Expected one of: {expected}")]
    InvalidSelector {
        kind: SelectorKind,
        value: String,
        expected: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failed
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl Error {
    /// Create a data source error without an underlying CSV error
    pub fn data_source(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::DataSource {
            source_name: source_name.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Create a data source error wrapping a CSV error
    pub fn data_source_csv(
        source_name: impl Into<String>,
        message: impl Into<String>,
        source: csv::Error,
    ) -> Self {
        Self::DataSource {
            source_name: source_name.into(),
            message: message.into(),
            source: Some(source),
        }
    }

    /// Create an invalid selector error
    pub fn invalid_selector(
        kind: SelectorKind,
        value: impl Into<String>,
        expected: &[&str],
    ) -> Self {
        Self::InvalidSelector {
            kind,
            value: value.into(),
            expected: expected.join(", "),
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Whether the caller can recover by asking for a different selection
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::InvalidSelector { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        Self::DataSource {
            source_name: "unknown".to_string(),
            message: "CSV parsing failed".to_string(),
            source: Some(error),
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Self::Configuration {
            message: format!("Invalid configuration file: {}", error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}

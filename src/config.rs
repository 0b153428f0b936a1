//! Configuration management and validation.
//!
//! Provides the immutable configuration passed into the loader: where the
//! city files live, how timestamps are parsed, and how bad rows are treated.
//! Defaults reproduce the standard three-city layout, and an optional TOML
//! file can override any of them.

use crate::app::models::City;
use crate::constants::{
    DEFAULT_CHICAGO_FILE, DEFAULT_DATA_DIR, DEFAULT_NEW_YORK_CITY_FILE, DEFAULT_TIMESTAMP_FORMATS,
    DEFAULT_TOP_TRIPS, DEFAULT_WASHINGTON_FILE,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// How the loader treats rows whose required fields fail to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampPolicy {
    /// Drop the row, count it, and keep loading
    #[default]
    Lenient,
    /// Abort the whole load on the first bad row
    Strict,
}

/// Source file name for each city, relative to the data directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CityFiles {
    pub chicago: PathBuf,
    pub new_york_city: PathBuf,
    pub washington: PathBuf,
}

impl Default for CityFiles {
    fn default() -> Self {
        Self {
            chicago: PathBuf::from(DEFAULT_CHICAGO_FILE),
            new_york_city: PathBuf::from(DEFAULT_NEW_YORK_CITY_FILE),
            washington: PathBuf::from(DEFAULT_WASHINGTON_FILE),
        }
    }
}

impl CityFiles {
    /// Get the configured file for a city
    pub fn get(&self, city: City) -> &Path {
        match city {
            City::Chicago => &self.chicago,
            City::NewYorkCity => &self.new_york_city,
            City::Washington => &self.washington,
        }
    }
}

/// Global configuration for bikeshare exploration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BikeshareConfig {
    /// Directory containing the city files
    pub data_dir: PathBuf,

    /// City to file mapping
    pub files: CityFiles,

    /// chrono format strings tried in order for start and end times
    pub timestamp_formats: Vec<String>,

    /// Treatment of rows with unparseable required fields
    pub timestamp_policy: TimestampPolicy,

    /// Number of start/end station pairs listed in the station report
    pub top_trips: usize,
}

impl Default for BikeshareConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            files: CityFiles::default(),
            timestamp_formats: DEFAULT_TIMESTAMP_FORMATS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            timestamp_policy: TimestampPolicy::default(),
            top_trips: DEFAULT_TOP_TRIPS,
        }
    }
}

impl BikeshareConfig {
    /// Load configuration from a TOML file, filling unspecified fields with defaults
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration for values the loader cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.timestamp_formats.is_empty() {
            return Err(Error::configuration(
                "At least one timestamp format must be configured",
            ));
        }

        if self.top_trips == 0 {
            return Err(Error::configuration("top_trips must be greater than 0"));
        }

        for city in City::ALL {
            if self.files.get(city).as_os_str().is_empty() {
                return Err(Error::configuration(format!(
                    "No source file configured for {}",
                    city
                )));
            }
        }

        Ok(())
    }

    /// Full path of the source file for a city
    pub fn source_path(&self, city: City) -> PathBuf {
        self.data_dir.join(self.files.get(city))
    }

    /// Override the data directory
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Override the bad row policy
    pub fn with_timestamp_policy(mut self, policy: TimestampPolicy) -> Self {
        self.timestamp_policy = policy;
        self
    }

    /// Override the number of listed station pairs
    pub fn with_top_trips(mut self, top_trips: usize) -> Self {
        self.top_trips = top_trips;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_source_paths() {
        let config = BikeshareConfig::default().with_data_dir("/data");

        assert_eq!(
            config.source_path(City::Chicago),
            PathBuf::from("/data/chicago.csv")
        );
        assert_eq!(
            config.source_path(City::NewYorkCity),
            PathBuf::from("/data/new_york_city.csv")
        );
        assert_eq!(
            config.source_path(City::Washington),
            PathBuf::from("/data/washington.csv")
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = BikeshareConfig::from_toml_str(
            r#"
            data_dir = "/srv/bikeshare"
            timestamp_policy = "strict"

            [files]
            washington = "dc_trips.csv"
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/srv/bikeshare"));
        assert_eq!(config.timestamp_policy, TimestampPolicy::Strict);
        assert_eq!(config.files.washington, PathBuf::from("dc_trips.csv"));
        assert_eq!(config.files.chicago, PathBuf::from("chicago.csv"));
        assert_eq!(config.top_trips, DEFAULT_TOP_TRIPS);
        assert_eq!(config.timestamp_formats.len(), DEFAULT_TIMESTAMP_FORMATS.len());
    }

    #[test]
    fn test_rejects_empty_timestamp_formats() {
        let result = BikeshareConfig::from_toml_str("timestamp_formats = []");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_rejects_zero_top_trips() {
        let result = BikeshareConfig::from_toml_str("top_trips = 0");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let result = BikeshareConfig::from_toml_str("data_dir = [");
        assert!(matches!(result, Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_missing_config_file() {
        let result = BikeshareConfig::from_toml_file(Path::new("/nonexistent/bikeshare.toml"));
        assert!(result.is_err());
    }
}

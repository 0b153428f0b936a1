//! CSV loader for city bikeshare trip files
//!
//! This module reads one city's trip file into memory. Column presence is
//! detected from the header, so the same loader handles cities with and
//! without demographic columns.
//!
//! ## Architecture
//!
//! The loader is organized into logical components:
//! - [`parser`] - File opening, header validation and row loop
//! - [`column_mapping`] - Header analysis and schema capability detection
//! - [`record_parser`] - Individual CSV row processing
//! - [`field_parsers`] - Utility functions for field parsing and validation
//! - [`stats`] - Loading statistics and result structures
//!
//! ## Usage
//!
//! ```rust,no_run
//! use bikeshare_explorer::app::services::trip_csv_parser::TripLoader;
//! use bikeshare_explorer::{BikeshareConfig, City};
//!
//! # fn example() -> bikeshare_explorer::Result<()> {
//! let loader = TripLoader::new(BikeshareConfig::default().with_data_dir("data"));
//! let result = loader.load(City::Chicago)?;
//!
//! println!("{}", result.stats.summary());
//! # Ok(())
//! # }
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod parser;
pub mod record_parser;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use column_mapping::ColumnMapping;
pub use field_parsers::FieldError;
pub use parser::TripLoader;
pub use stats::{LoadResult, LoadStats};

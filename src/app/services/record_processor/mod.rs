//! Record processing for loaded trip data
//!
//! This module turns a freshly loaded city file into the views the statistics
//! engine reads.
//!
//! # Processing Pipeline
//!
//! 1. **Temporal Enrichment**: derive month, weekday and hour from each trip's start time
//! 2. **Filtering**: keep trips matching the selected month and weekday
//!
//! Enrichment consumes the [`RawDataset`](crate::app::models::RawDataset) and
//! yields an owned [`Dataset`](crate::app::models::Dataset). Filtering only
//! borrows it, returning a [`DatasetView`](crate::app::models::DatasetView)
//! in source order.
//!
//! # Example Usage
//!
//! ```rust
//! use bikeshare_explorer::app::models::{City, RawDataset, SchemaCapabilities, TripFilter};
//! use bikeshare_explorer::app::services::record_processor::{enrich, filter_dataset};
//!
//! let raw = RawDataset::new(City::Chicago, SchemaCapabilities::default(), Vec::new());
//! let dataset = enrich(raw);
//! let view = filter_dataset(&dataset, &TripFilter::parse("january", "all").unwrap());
//! assert!(view.is_empty());
//! ```

pub mod enrichment;
pub mod filter;

#[cfg(test)]
pub mod tests;

// Re-export main functions for easy access
pub use enrichment::{TemporalFields, derive_temporal_fields, enrich, enrich_trip};
pub use filter::{filter_dataset, filter_view, matches_filter, month_distribution};

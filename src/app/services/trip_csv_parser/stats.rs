//! Loading statistics and result structures
//!
//! This module provides types for tracking how many rows a city file
//! contained and how many survived parsing.

use crate::app::models::RawDataset;
use crate::constants::MAX_RETAINED_REJECTIONS;
use serde::Serialize;

/// Statistics for loading a single city file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadStats {
    /// Total number of data rows read
    pub rows_read: usize,
    /// Rows converted into trip records
    pub rows_accepted: usize,
    /// Rows dropped under the lenient policy
    pub rows_rejected: usize,
    /// First rejection messages, for diagnostics
    pub rejection_messages: Vec<String>,
}

impl LoadStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected row, retaining a bounded number of messages
    pub fn add_rejection(&mut self, message: String) {
        self.rows_rejected += 1;
        if self.rejection_messages.len() < MAX_RETAINED_REJECTIONS {
            self.rejection_messages.push(message);
        }
    }

    /// Calculate acceptance rate as a percentage
    pub fn acceptance_rate(&self) -> f64 {
        if self.rows_read == 0 {
            100.0
        } else {
            (self.rows_accepted as f64 / self.rows_read as f64) * 100.0
        }
    }

    /// One-line summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Loaded {} of {} rows ({:.1}% accepted, {} rejected)",
            self.rows_accepted,
            self.rows_read,
            self.acceptance_rate(),
            self.rows_rejected
        )
    }
}

/// Result of loading a city file
#[derive(Debug, Clone)]
pub struct LoadResult {
    /// Parsed trips and the city's schema capabilities
    pub dataset: RawDataset,
    /// Row counts and rejection details
    pub stats: LoadStats,
    /// Path or label the rows were read from
    pub source_name: String,
}

impl LoadResult {
    pub fn record_count(&self) -> usize {
        self.dataset.len()
    }
}

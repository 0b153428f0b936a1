//! Column mapping and capability detection for city trip files
//!
//! This module analyzes CSV headers to locate the trip columns and to decide
//! which optional columns a city's file carries.

use crate::app::models::SchemaCapabilities;
use crate::constants::columns;
use csv::StringRecord;
use std::collections::HashMap;

/// Column mapping for one city file
#[derive(Debug, Clone)]
pub struct ColumnMapping {
    /// Normalized column name to index mapping
    pub name_to_index: HashMap<String, usize>,

    /// Columns present in the header that the loader does not use
    pub ignored_columns: Vec<String>,
}

/// Lowercase, trimmed form used for header comparison
fn normalize_column_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl ColumnMapping {
    /// Analyze column headers
    ///
    /// Blank header cells (the unnamed index column in the published files)
    /// are skipped. When a name repeats, the first occurrence wins.
    pub fn analyze(headers: &StringRecord) -> Self {
        let known: Vec<String> = [
            columns::START_TIME,
            columns::END_TIME,
            columns::TRIP_DURATION,
            columns::START_STATION,
            columns::END_STATION,
            columns::USER_TYPE,
            columns::GENDER,
            columns::BIRTH_YEAR,
        ]
        .iter()
        .map(|name| normalize_column_name(name))
        .collect();

        let mut name_to_index = HashMap::new();
        let mut ignored_columns = Vec::new();

        for (index, header) in headers.iter().enumerate() {
            let column_name = normalize_column_name(header);
            if column_name.is_empty() {
                continue;
            }

            if known.contains(&column_name) {
                name_to_index.entry(column_name).or_insert(index);
            } else {
                ignored_columns.push(header.trim().to_string());
            }
        }

        ColumnMapping {
            name_to_index,
            ignored_columns,
        }
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index
            .get(&normalize_column_name(column_name))
            .copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.get_index(column_name).is_some()
    }

    /// Required columns absent from the header
    pub fn missing_required(&self) -> Vec<&'static str> {
        columns::REQUIRED
            .iter()
            .copied()
            .filter(|column| !self.has_column(column))
            .collect()
    }

    /// Optional column flags for this file
    pub fn capabilities(&self) -> SchemaCapabilities {
        SchemaCapabilities {
            has_end_time: self.has_column(columns::END_TIME),
            has_gender: self.has_column(columns::GENDER),
            has_birth_year: self.has_column(columns::BIRTH_YEAR),
        }
    }
}

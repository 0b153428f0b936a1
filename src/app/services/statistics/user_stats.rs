//! User type and demographic statistics
//!
//! Gender and birth year are only read when the city's schema capabilities
//! say the columns exist. Absent columns are reported explicitly as
//! [`ColumnReport::NotAvailable`].

use super::frequency::{FrequencyTable, ValueCount};
use super::{NO_DATA, write_metric};
use crate::app::models::DatasetView;
use serde::Serialize;
use std::fmt;

/// Result for a statistic that depends on an optional column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "snake_case")]
pub enum ColumnReport<T> {
    Available(T),
    NotAvailable,
}

impl<T> ColumnReport<T> {
    pub fn is_available(&self) -> bool {
        matches!(self, ColumnReport::Available(_))
    }

    pub fn as_available(&self) -> Option<&T> {
        match self {
            ColumnReport::Available(value) => Some(value),
            ColumnReport::NotAvailable => None,
        }
    }
}

/// Earliest, most recent and most common birth year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthYearStats {
    pub earliest: Option<i32>,
    pub most_recent: Option<i32>,
    pub most_common: Option<ValueCount<i32>>,
}

/// Counts of user types and, where available, gender and birth year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserStats {
    /// Every user type, most frequent first
    pub user_types: Vec<ValueCount<String>>,
    pub gender: ColumnReport<Vec<ValueCount<String>>>,
    pub birth_year: ColumnReport<BirthYearStats>,
}

/// Compute user type counts and the demographics the city supports
///
/// Blank cells within a present column are skipped.
pub fn user_stats(view: &DatasetView<'_>) -> UserStats {
    let capabilities = view.capabilities();

    let user_types: FrequencyTable<&str> =
        view.iter().filter_map(|t| t.trip.user_type.as_deref()).collect();

    let gender = if capabilities.has_gender {
        let genders: FrequencyTable<&str> =
            view.iter().filter_map(|t| t.trip.gender.as_deref()).collect();
        ColumnReport::Available(
            genders
                .ranked()
                .into_iter()
                .map(|c| c.map(str::to_string))
                .collect(),
        )
    } else {
        ColumnReport::NotAvailable
    };

    let birth_year = if capabilities.has_birth_year {
        let years: FrequencyTable<i32> = view.iter().filter_map(|t| t.trip.birth_year).collect();
        ColumnReport::Available(BirthYearStats {
            earliest: years.min_key(),
            most_recent: years.max_key(),
            most_common: years.mode(),
        })
    } else {
        ColumnReport::NotAvailable
    };

    UserStats {
        user_types: user_types
            .ranked()
            .into_iter()
            .map(|c| c.map(str::to_string))
            .collect(),
        gender,
        birth_year,
    }
}

const NOT_AVAILABLE: &str = "not available for this city";

fn write_counts(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    counts: &[ValueCount<String>],
) -> fmt::Result {
    if counts.is_empty() {
        return writeln!(f, "{}: {}", label, NO_DATA);
    }
    writeln!(f, "{}:", label)?;
    for entry in counts {
        writeln!(f, "  {}: {}", entry.value, entry.count)?;
    }
    Ok(())
}

impl fmt::Display for UserStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_counts(f, "User types", &self.user_types)?;

        match &self.gender {
            ColumnReport::Available(counts) => write_counts(f, "Gender", counts)?,
            ColumnReport::NotAvailable => writeln!(f, "Gender: {}", NOT_AVAILABLE)?,
        }

        match &self.birth_year {
            ColumnReport::Available(years) => {
                write_metric(f, "Earliest year of birth", years.earliest)?;
                write_metric(f, "Most recent year of birth", years.most_recent)?;
                write_metric(f, "Most common year of birth", years.most_common.as_ref())
            }
            ColumnReport::NotAvailable => writeln!(f, "Year of birth: {}", NOT_AVAILABLE),
        }
    }
}

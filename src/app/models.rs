//! Data models for bikeshare trip exploration
//!
//! This module contains the selector types used to choose a city, month and
//! weekday, the trip record read from a city file, and the dataset types that
//! carry records through the enrich and filter stages.

use crate::constants::{ALL_SELECTOR, CITY_NAMES, MONTH_NAMES, WEEKDAY_NAMES};
use crate::{Error, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Selectors
// =============================================================================

/// Which selector a value was supplied for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectorKind {
    City,
    Month,
    Day,
}

impl fmt::Display for SelectorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectorKind::City => "city",
            SelectorKind::Month => "month",
            SelectorKind::Day => "day",
        };
        write!(f, "{}", name)
    }
}

/// Normalize user input for case-insensitive comparison
fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Selectable bikeshare cities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum City {
    Chicago,
    NewYorkCity,
    Washington,
}

impl City {
    /// All cities in presentation order
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Lowercase display name, as accepted by the selector
    pub fn name(&self) -> &'static str {
        match self {
            City::Chicago => CITY_NAMES[0],
            City::NewYorkCity => CITY_NAMES[1],
            City::Washington => CITY_NAMES[2],
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for City {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s);
        City::ALL
            .into_iter()
            .find(|city| city.name() == normalized)
            .ok_or_else(|| Error::invalid_selector(SelectorKind::City, s.trim(), CITY_NAMES))
    }
}

/// Months covered by the trip data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
}

impl Month {
    /// All selectable months, January first
    pub const ALL: [Month; 6] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
    ];

    /// 1-based calendar month number
    pub fn ordinal(&self) -> u32 {
        *self as u32 + 1
    }

    /// Lowercase name, as accepted by the selector
    pub fn name(&self) -> &'static str {
        MONTH_NAMES[*self as usize]
    }
}

impl FromStr for Month {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s);
        Month::ALL
            .into_iter()
            .find(|month| month.name() == normalized)
            .ok_or_else(|| Error::invalid_selector(SelectorKind::Month, s.trim(), MONTH_NAMES))
    }
}

/// Calendar month name for a derived month number (1-12)
pub fn calendar_month_name(month: u32) -> &'static str {
    const NAMES: [&str; 12] = [
        "January",
        "February",
        "March",
        "April",
        "May",
        "June",
        "July",
        "August",
        "September",
        "October",
        "November",
        "December",
    ];
    month
        .checked_sub(1)
        .and_then(|index| NAMES.get(index as usize))
        .copied()
        .unwrap_or("Unknown")
}

/// Day of week, Monday first
///
/// The derived ordering (Monday < Tuesday < ... < Sunday) is the single
/// day-of-week convention used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All weekdays, Monday first
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Monday = 0 ... Sunday = 6
    pub fn index(&self) -> u32 {
        *self as u32
    }

    /// Title-case name
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(weekday: chrono::Weekday) -> Self {
        Weekday::ALL[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = normalize(s);
        WEEKDAY_NAMES
            .iter()
            .position(|name| *name == normalized)
            .map(|index| Weekday::ALL[index])
            .ok_or_else(|| Error::invalid_selector(SelectorKind::Day, s.trim(), WEEKDAY_NAMES))
    }
}

/// Month filter: everything, or a single month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthSelector {
    #[default]
    All,
    Only(Month),
}

impl FromStr for MonthSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if normalize(s) == ALL_SELECTOR {
            return Ok(MonthSelector::All);
        }
        s.parse::<Month>().map(MonthSelector::Only).map_err(|_| {
            let mut expected = vec![ALL_SELECTOR];
            expected.extend_from_slice(MONTH_NAMES);
            Error::invalid_selector(SelectorKind::Month, s.trim(), &expected)
        })
    }
}

impl fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthSelector::All => write!(f, "{}", ALL_SELECTOR),
            MonthSelector::Only(month) => write!(f, "{}", month.name()),
        }
    }
}

/// Day filter: everything, or a single weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DaySelector {
    #[default]
    All,
    Only(Weekday),
}

impl FromStr for DaySelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if normalize(s) == ALL_SELECTOR {
            return Ok(DaySelector::All);
        }
        s.parse::<Weekday>().map(DaySelector::Only).map_err(|_| {
            let mut expected = vec![ALL_SELECTOR];
            expected.extend_from_slice(WEEKDAY_NAMES);
            Error::invalid_selector(SelectorKind::Day, s.trim(), &expected)
        })
    }
}

impl fmt::Display for DaySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DaySelector::All => write!(f, "{}", ALL_SELECTOR),
            DaySelector::Only(weekday) => write!(f, "{}", weekday.name().to_lowercase()),
        }
    }
}

/// Combined month and day filter; both must match for a trip to be kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TripFilter {
    pub month: MonthSelector,
    pub day: DaySelector,
}

impl TripFilter {
    pub fn new(month: MonthSelector, day: DaySelector) -> Self {
        Self { month, day }
    }

    /// Filter that keeps every trip
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse month and day selector strings
    pub fn parse(month: &str, day: &str) -> Result<Self> {
        Ok(Self {
            month: month.parse()?,
            day: day.parse()?,
        })
    }

    /// True when neither selector restricts anything
    pub fn is_unfiltered(&self) -> bool {
        self.month == MonthSelector::All && self.day == DaySelector::All
    }
}

/// One session's choice of city and filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub city: City,
    pub filter: TripFilter,
}

impl Selection {
    pub fn new(city: City, filter: TripFilter) -> Self {
        Self { city, filter }
    }

    /// Validate city, month and day strings against the recognized sets
    pub fn parse(city: &str, month: &str, day: &str) -> Result<Self> {
        Ok(Self {
            city: city.parse()?,
            filter: TripFilter::parse(month, day)?,
        })
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "city: {}, month: {}, day: {}",
            self.city, self.filter.month, self.filter.day
        )
    }
}

// =============================================================================
// Trip Records
// =============================================================================

/// One row of a city trip file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripRecord {
    pub start_time: NaiveDateTime,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,

    /// Trip length in seconds
    pub trip_duration: f64,

    pub start_station: String,
    pub end_station: String,

    /// Blank in a handful of rows of the real data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_year: Option<i32>,
}

impl TripRecord {
    /// Create a record with only the columns every city carries
    pub fn new(
        start_time: NaiveDateTime,
        trip_duration: f64,
        start_station: impl Into<String>,
        end_station: impl Into<String>,
        user_type: impl Into<String>,
    ) -> Self {
        Self {
            start_time,
            end_time: None,
            trip_duration,
            start_station: start_station.into(),
            end_station: end_station.into(),
            user_type: Some(user_type.into()),
            gender: None,
            birth_year: None,
        }
    }

    pub fn with_end_time(mut self, end_time: NaiveDateTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = Some(gender.into());
        self
    }

    pub fn with_birth_year(mut self, birth_year: i32) -> Self {
        self.birth_year = Some(birth_year);
        self
    }
}

/// Which optional columns a city's file carries
///
/// Determined once from the CSV header; presence is per city, never per row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SchemaCapabilities {
    pub has_end_time: bool,
    pub has_gender: bool,
    pub has_birth_year: bool,
}

impl SchemaCapabilities {
    /// Capabilities of a file carrying every optional column
    pub fn full() -> Self {
        Self {
            has_end_time: true,
            has_gender: true,
            has_birth_year: true,
        }
    }

    /// Names of the demographic columns this city lacks
    pub fn missing_demographic_columns(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_gender {
            missing.push(crate::constants::columns::GENDER);
        }
        if !self.has_birth_year {
            missing.push(crate::constants::columns::BIRTH_YEAR);
        }
        missing
    }
}

// =============================================================================
// Datasets
// =============================================================================

/// Trips exactly as loaded from a city file
#[derive(Debug, Clone, PartialEq)]
pub struct RawDataset {
    pub city: City,
    pub capabilities: SchemaCapabilities,
    pub records: Vec<TripRecord>,
}

impl RawDataset {
    pub fn new(city: City, capabilities: SchemaCapabilities, records: Vec<TripRecord>) -> Self {
        Self {
            city,
            capabilities,
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// A trip together with the fields derived from its start time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedTrip {
    #[serde(flatten)]
    pub trip: TripRecord,
    /// Calendar month, 1-12
    pub month: u32,
    pub weekday: Weekday,
    /// Hour of day, 0-23
    pub hour: u32,
}

/// A city's trips after temporal enrichment
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub city: City,
    pub capabilities: SchemaCapabilities,
    pub records: Vec<EnrichedTrip>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Unfiltered view over every trip, in source order
    pub fn view(&self) -> DatasetView<'_> {
        DatasetView::new(self.city, self.capabilities, self.records.iter().collect())
    }
}

/// Read-only subset of a [`Dataset`], in source order
///
/// Views borrow the dataset's records, so filtering never copies or mutates
/// the loaded data.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetView<'a> {
    city: City,
    capabilities: SchemaCapabilities,
    records: Vec<&'a EnrichedTrip>,
}

impl<'a> DatasetView<'a> {
    pub fn new(
        city: City,
        capabilities: SchemaCapabilities,
        records: Vec<&'a EnrichedTrip>,
    ) -> Self {
        Self {
            city,
            capabilities,
            records,
        }
    }

    pub fn city(&self) -> City {
        self.city
    }

    pub fn capabilities(&self) -> SchemaCapabilities {
        self.capabilities
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[&'a EnrichedTrip] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a EnrichedTrip> + '_ {
        self.records.iter().copied()
    }
}

// =============================================================================
// Non-fatal Conditions
// =============================================================================

/// Conditions reported alongside statistics instead of raised as errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// The selection matched no trips
    EmptyResult,
    /// The city's file does not carry an optional column
    MissingOptionalColumn { column: String },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::EmptyResult => write!(f, "No trips match the selected filters"),
            Notice::MissingOptionalColumn { column } => {
                write!(f, "{} data is not available for this city", column)
            }
        }
    }
}

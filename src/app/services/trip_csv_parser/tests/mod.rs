//! Tests for the trip CSV loader
//!
//! Fixtures mirror the published city files: a leading unnamed index
//! column, float-typed durations and birth years, and blank demographic
//! cells in otherwise complete rows.

pub mod parser_tests;

use crate::config::{BikeshareConfig, TimestampPolicy};

/// Chicago-style file with gender and birth year columns
pub const CHICAGO_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type,Gender,Birth Year
1423854,2017-06-23 15:09:32,2017-06-23 15:14:53,321,Wood St & Hubbard St,Damen Ave & Chicago Ave,Subscriber,Male,1992.0
955915,2017-05-25 18:19:03,2017-05-25 18:45:53,1610,Theater on the Lake,Sheffield Ave & Waveland Ave,Subscriber,Female,1992.0
9031,2017-01-04 08:27:49,2017-01-04 08:34:45,416,May St & Taylor St,Wood St & Taylor St,Subscriber,Male,1981.0
304487,2017-03-06 13:49:38,2017-03-06 13:55:28,350,Christiana Ave & Lawrence Ave,St. Louis Ave & Balmoral Ave,Customer,,
";

/// Washington-style file without demographic columns
pub const WASHINGTON_CSV: &str = "\
,Start Time,End Time,Trip Duration,Start Station,End Station,User Type
1621326,2017-06-21 08:36:34,2017-06-21 08:44:43,489.066,14th & Belmont St NW,15th & K St NW,Subscriber
482740,2017-03-11 10:40:00,2017-03-11 10:46:00,402.549,Yuma St & Tenley Circle NW,Connecticut Ave & Yuma St NW,Customer
";

/// File with one unparseable start time between two good rows
pub const BAD_TIMESTAMP_CSV: &str = "\
Start Time,Trip Duration,Start Station,End Station,User Type
2017-02-01 07:00:00,100,A,B,Subscriber
not-a-date,200,A,C,Subscriber
2017-02-02 07:30:00,300,B,A,Customer
";

pub fn lenient_config() -> BikeshareConfig {
    BikeshareConfig::default()
}

pub fn strict_config() -> BikeshareConfig {
    BikeshareConfig::default().with_timestamp_policy(TimestampPolicy::Strict)
}

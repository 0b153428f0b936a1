//! Tests for travel time statistics

use super::*;
use crate::app::models::Weekday;
use crate::app::services::statistics::frequency::ValueCount;
use crate::app::services::statistics::time_stats::time_stats;

#[test]
fn test_january_selection() {
    let dataset = create_scenario_dataset();
    let view = select(&dataset, "january", "all");

    let stats = time_stats(&view);

    assert_eq!(stats.trip_count, 2);
    assert_eq!(stats.most_common_month, Some(ValueCount::new(1, 2)));
    assert_eq!(
        stats.most_common_weekday,
        Some(ValueCount::new(Weekday::Monday, 2))
    );
    // 08 and 09 each occur once
    assert_eq!(stats.most_common_hour, Some(ValueCount::new(8, 1)));
}

#[test]
fn test_unfiltered_selection() {
    let dataset = create_scenario_dataset();
    let stats = time_stats(&dataset.view());

    assert_eq!(stats.trip_count, 3);
    assert_eq!(stats.most_common_month.unwrap().value, 1);
    assert_eq!(stats.most_common_hour, Some(ValueCount::new(8, 2)));
}

#[test]
fn test_weekday_mode_across_months() {
    let dataset = create_demographic_dataset();
    let stats = time_stats(&dataset.view());

    assert_eq!(
        stats.most_common_weekday,
        Some(ValueCount::new(Weekday::Friday, 3))
    );
}

#[test]
fn test_empty_view_has_no_modes() {
    let dataset = create_scenario_dataset();
    let view = select(&dataset, "march", "all");

    let stats = time_stats(&view);

    assert_eq!(stats.trip_count, 0);
    assert_eq!(stats.most_common_month, None);
    assert_eq!(stats.most_common_weekday, None);
    assert_eq!(stats.most_common_hour, None);
}

#[test]
fn test_display() {
    let dataset = create_scenario_dataset();
    let rendered = time_stats(&select(&dataset, "january", "all")).to_string();

    assert!(rendered.contains("Most common month: January (2 trips)"));
    assert!(rendered.contains("Most common day of week: Monday (2 trips)"));
    assert!(rendered.contains("Most common start hour: 08:00 (1 trip)"));

    let empty = time_stats(&select(&dataset, "june", "all")).to_string();
    assert!(empty.contains("Most common month: no data"));
}

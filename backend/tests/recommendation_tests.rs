//! Recommendation pipeline tests
//!
//! Covers model output extraction and schedule derivation:
//! - weekly cadence starting today, order preserved
//! - brace-window extraction and its two failure modes

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;

use farmcare_backend::models::RawTreatmentEntry;
use farmcare_backend::services::schedule::{build_schedule, extract_recommendation};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entries(count: usize) -> Vec<RawTreatmentEntry> {
    (0..count)
        .map(|i| RawTreatmentEntry {
            product: Some(format!("Product {}", i)),
            timing: None,
            notes: None,
        })
        .collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// The Nth schedule entry (1-indexed) is dated today + 7*(N-1) days,
    /// never completed, and parallels the pesticide list
    #[test]
    fn prop_weekly_cadence_from_today(count in 0usize..24) {
        let today = day(2024, 1, 15);
        let (schedules, pesticides) = build_schedule(&entries(count), today);

        prop_assert_eq!(schedules.len(), count);
        prop_assert_eq!(pesticides.len(), count);

        for (idx, entry) in schedules.iter().enumerate() {
            prop_assert_eq!(
                entry.scheduled_date,
                today + Duration::days(idx as i64 * 7)
            );
            prop_assert!(!entry.completed);
            prop_assert_eq!(&entry.pesticide_name, &pesticides[idx]);
        }
    }

    /// Text without braces always degrades to an empty recommendation
    #[test]
    fn prop_no_braces_degrades_to_empty(text in "[^{}]*") {
        let parsed = extract_recommendation(&text).unwrap();
        prop_assert!(parsed.treatment_schedule.is_empty());
    }

    /// Brace-free prose around a JSON object does not change the result
    #[test]
    fn prop_prose_wrapping_is_transparent(prefix in "[^{}]*", suffix in "[^{}]*") {
        let json = r#"{"treatment_schedule":[{"product":"A"},{"product":"B"}]}"#;
        let wrapped = format!("{}{}{}", prefix, json, suffix);

        let parsed = extract_recommendation(&wrapped).unwrap();
        prop_assert_eq!(parsed.treatment_schedule.len(), 2);
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

mod unit_tests {
    use super::*;

    /// The documented two-product flow: prose-wrapped model output yields a
    /// schedule dated today and today+7d with both entries open
    #[test]
    fn test_two_product_flow() {
        let reply = "Sure, here is my recommendation: \
                     {\"treatment_schedule\":[{\"product\":\"A\"},{\"product\":\"B\"}]} \
                     Apply carefully.";
        let today = day(2024, 3, 1);

        let parsed = extract_recommendation(reply).unwrap();
        let (schedules, pesticides) = build_schedule(&parsed.treatment_schedule, today);

        assert_eq!(pesticides, vec!["A", "B"]);
        assert_eq!(schedules[0].scheduled_date, day(2024, 3, 1));
        assert_eq!(schedules[1].scheduled_date, day(2024, 3, 8));
        assert!(schedules.iter().all(|s| !s.completed));
    }

    /// A reply with no JSON at all still produces a well-formed empty result
    #[test]
    fn test_braceless_reply_yields_empty_schedule() {
        let parsed = extract_recommendation("I cannot produce a schedule.").unwrap();
        let (schedules, pesticides) = build_schedule(&parsed.treatment_schedule, day(2024, 3, 1));

        assert!(schedules.is_empty());
        assert!(pesticides.is_empty());
    }

    /// Braces with garbage between them must fail, not degrade
    #[test]
    fn test_invalid_json_is_a_hard_error() {
        assert!(extract_recommendation("{not json}").is_err());
    }

    /// Entries without a product keep their slot under the "Unknown" name
    #[test]
    fn test_unknown_product_keeps_position() {
        let reply = r#"{"treatment_schedule":[{"product":"A"},{"timing":"Day 7"}]}"#;

        let parsed = extract_recommendation(reply).unwrap();
        let (schedules, pesticides) = build_schedule(&parsed.treatment_schedule, day(2024, 3, 1));

        assert_eq!(pesticides, vec!["A", "Unknown"]);
        assert_eq!(schedules[1].pesticide_name, "Unknown");
        assert_eq!(schedules[1].scheduled_date, day(2024, 3, 8));
    }

    /// Confidence is parsed but has no effect on the schedule
    #[test]
    fn test_confidence_is_informational() {
        let reply = r#"{"confidence":0.35,"treatment_schedule":[{"product":"A"}]}"#;

        let parsed = extract_recommendation(reply).unwrap();
        assert_eq!(parsed.confidence, Some(0.35));

        let (schedules, _) = build_schedule(&parsed.treatment_schedule, day(2024, 3, 1));
        assert_eq!(schedules.len(), 1);
    }
}

//! Integration tests for the occurrence engine.
//!
//! Covers the reference due-date scenarios end to end, from raw JSON records
//! through the cached schedule service.

use std::sync::Arc;

use chrono::Weekday;
use due_calendar::adapters::LruOccurrenceCache;
use due_calendar::application::{GetScheduleQuery, ScheduleService};
use due_calendar::domain::foundation::{IsoDate, ObligationId};
use due_calendar::domain::obligation::{parse_obligations_json, Cadence, Obligation};
use due_calendar::domain::schedule::{DateRange, OccurrenceEnumerator, ScheduleError};
use due_calendar::ports::OccurrenceCache;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn d(s: &str) -> IsoDate {
    s.parse().unwrap()
}

fn dates(raw: &[&str]) -> Vec<IsoDate> {
    raw.iter().map(|s| d(s)).collect()
}

fn obligation(anchor: &str, cadence: Cadence) -> Obligation {
    Obligation::new(ObligationId::new("ob-1").unwrap(), "Card", d(anchor), cadence).unwrap()
}

fn enumerate(anchor: &str, cadence: Cadence, from: &str, to: &str) -> Vec<IsoDate> {
    let range = DateRange::parse(from, to).unwrap();
    let result = OccurrenceEnumerator::enumerate_in_range(&obligation(anchor, cadence), &range, 400);
    assert!(!result.truncated);
    result.dates
}

// =============================================================================
// Reference scenarios
// =============================================================================

#[test]
fn weekly_january() {
    assert_eq!(
        enumerate("2024-01-01", Cadence::Weekly, "2024-01-01", "2024-01-31"),
        dates(&["2024-01-01", "2024-01-08", "2024-01-15", "2024-01-22", "2024-01-29"])
    );
}

#[test]
fn biweekly_into_february() {
    assert_eq!(
        enumerate("2024-01-01", Cadence::Biweekly, "2024-01-01", "2024-02-01"),
        dates(&["2024-01-01", "2024-01-15", "2024-01-29"])
    );
}

#[test]
fn monthly_mid_month() {
    assert_eq!(
        enumerate("2024-01-15", Cadence::Monthly, "2024-01-01", "2024-04-30"),
        dates(&["2024-01-15", "2024-02-15", "2024-03-15", "2024-04-15"])
    );
}

#[test]
fn one_time_obligation() {
    assert_eq!(
        enumerate("2024-01-10", Cadence::None, "2024-01-01", "2024-01-31"),
        dates(&["2024-01-10"])
    );
}

#[test]
fn weekly_capped_at_three() {
    let range = DateRange::parse("2024-01-01", "2030-12-31").unwrap();
    let result =
        OccurrenceEnumerator::enumerate_in_range(&obligation("2024-01-01", Cadence::Weekly), &range, 3);

    assert_eq!(result.dates, dates(&["2024-01-01", "2024-01-08", "2024-01-15"]));
    assert!(result.truncated);
}

#[test]
fn month_end_anchor_clamps_without_drifting() {
    assert_eq!(
        enumerate("2024-01-31", Cadence::Monthly, "2024-01-01", "2024-05-31"),
        dates(&["2024-01-31", "2024-02-29", "2024-03-31", "2024-04-30", "2024-05-31"])
    );
}

#[test]
fn anchor_after_window_is_empty() {
    assert!(enumerate("2024-03-01", Cadence::Weekly, "2024-01-01", "2024-01-31").is_empty());
}

// =============================================================================
// Records through the service
// =============================================================================

const RECORDS: &str = r#"[
    { "id": "rent", "name": "Rent", "anchorDueDate": "2024-01-01", "cadence": "monthly", "minimumPayment": 1500 },
    { "id": "visa", "name": "Visa", "anchorDueDate": "2024-01-15", "cadence": "monthly",
      "notes": "Travel card", "minimumPayment": 35.5, "paidDates": ["2024-01-15"] },
    { "id": "gym", "name": "Gym", "anchorDueDate": "2024-01-01", "cadence": "weekly", "minimumPayment": 12 },
    { "id": "dentist", "name": "Dentist", "anchorDueDate": "2024-01-15", "cadence": "none", "notes": "Cleaning",
      "minimumPayment": 0 }
]"#;

#[test]
fn records_flow_through_cached_service() {
    let obligations = parse_obligations_json(RECORDS).unwrap();
    let cache = Arc::new(LruOccurrenceCache::new(16));
    let service = ScheduleService::new(cache.clone(), 400, Weekday::Sun);

    let view = service
        .handle(&obligations, GetScheduleQuery::new("2024-01-01", "2024-01-31"))
        .unwrap();

    // rent 1, visa 1, gym 5, dentist 1
    assert_eq!(view.len(), 8);
    let mid_month: Vec<_> = view.grouped[&d("2024-01-15")]
        .iter()
        .map(|o| o.obligation.id().as_str())
        .collect();
    assert_eq!(mid_month, vec!["visa", "gym", "dentist"]);
    assert_eq!(view.total_due_by_day[&d("2024-01-01")], 1512.0);
    assert_eq!(view.total_due_by_day[&d("2024-01-15")], 47.5);
    assert!(view.grouped[&d("2024-01-15")][0].obligation.is_paid_on(&d("2024-01-15")));

    assert_eq!(cache.len(), 4);
    service
        .handle(&obligations, GetScheduleQuery::new("2024-01-01T00:00:00", "2024-01-31"))
        .unwrap();
    let stats = cache.stats();
    assert_eq!((stats.hits, stats.misses), (4, 4));
}

#[test]
fn search_matches_notes_case_insensitively() {
    let obligations = parse_obligations_json(RECORDS).unwrap();
    let service = ScheduleService::new(Arc::new(LruOccurrenceCache::new(16)), 400, Weekday::Sun);

    let view = service
        .handle(
            &obligations,
            GetScheduleQuery::new("2024-01-01", "2024-03-31").with_search("travel"),
        )
        .unwrap();

    assert_eq!(view.len(), 3);
    assert!(view.occurrences.iter().all(|o| o.obligation.id().as_str() == "visa"));
}

#[test]
fn malformed_records_are_rejected() {
    let unknown_cadence = r#"[{ "id": "x", "name": "X", "anchorDueDate": "2024-01-01", "cadence": "yearly", "minimumPayment": 1 }]"#;
    let bad_anchor = r#"[{ "id": "x", "name": "X", "anchorDueDate": "01/02/2024", "cadence": "weekly", "minimumPayment": 1 }]"#;
    let duplicate = r#"[
        { "id": "x", "name": "X", "anchorDueDate": "2024-01-01", "cadence": "weekly", "minimumPayment": 1 },
        { "id": "x", "name": "Y", "anchorDueDate": "2024-01-01", "cadence": "none", "minimumPayment": 1 }
    ]"#;

    assert!(matches!(parse_obligations_json(unknown_cadence), Err(ScheduleError::Validation(_))));
    assert!(matches!(parse_obligations_json(bad_anchor), Err(ScheduleError::Validation(_))));
    assert!(matches!(
        parse_obligations_json(duplicate),
        Err(ScheduleError::DuplicateObligation(_))
    ));
}

#[test]
fn record_without_minimum_payment_is_rejected() {
    let missing = r#"[{ "id": "x", "name": "X", "anchorDueDate": "2024-01-01", "cadence": "weekly" }]"#;

    assert!(matches!(parse_obligations_json(missing), Err(ScheduleError::Validation(_))));
}

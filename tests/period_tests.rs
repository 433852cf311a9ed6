//! Period state machine resolution and validation

use chrono::{DateTime, FixedOffset, Utc};

use shortdash::errors::ShortdashError;
use shortdash::stats::{DateRange, Period};

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

#[test]
fn today_resolves_to_local_midnight_through_now() {
    let now = at("2024-07-10T15:45:00+09:00");
    let range = Period::Today.resolve_at(now);

    assert_eq!(
        range.from.unwrap().to_rfc3339(),
        "2024-07-09T15:00:00+00:00", // midnight July 10 in UTC+9
    );
    assert_eq!(range.to.unwrap(), now.with_timezone(&Utc));
}

#[test]
fn week_and_month_are_anchored_to_now() {
    let now = at("2024-07-10T15:45:00+00:00");

    let week = Period::Week.resolve_at(now);
    assert_eq!(week.from.unwrap().to_rfc3339(), "2024-07-03T15:45:00+00:00");
    assert_eq!(week.to.unwrap(), now.with_timezone(&Utc));

    let month = Period::Month.resolve_at(now);
    assert_eq!(month.from.unwrap().to_rfc3339(), "2024-06-10T15:45:00+00:00");
}

#[test]
fn month_clamps_at_short_month_boundaries() {
    let now = at("2024-07-31T08:00:00+00:00");
    let range = Period::Month.resolve_at(now);
    assert_eq!(range.from.unwrap().to_rfc3339(), "2024-06-30T08:00:00+00:00");
}

#[test]
fn all_carries_no_bounds_at_all() {
    let range = Period::All.resolve_at(at("2024-07-10T15:45:00+09:00"));
    assert!(range.from.is_none());
    assert!(range.to.is_none());
    assert!(range.is_unbounded());
}

#[test]
fn resolution_is_deterministic_from_the_instant() {
    let now = at("2024-07-10T15:45:00+02:00");
    assert_eq!(Period::Week.resolve_at(now), Period::Week.resolve_at(now));
}

#[test]
fn custom_range_requires_at_least_one_bound() {
    let err = DateRange::custom(None, None).unwrap_err();
    assert!(matches!(err, ShortdashError::Validation(_)));
    assert_eq!(err.code(), "E004");

    let only_from = DateRange::custom(Some(Utc::now()), None).unwrap();
    assert!(only_from.to.is_none());
    assert!(!only_from.is_unbounded());
}

#[test]
fn period_labels_and_parsing_round_trip() {
    for period in Period::QUICK {
        let parsed: Period = period.label().parse().unwrap();
        assert_eq!(parsed, period);
    }
}

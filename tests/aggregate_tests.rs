//! Aggregation invariants: gap-free daily series, local-date bucketing,
//! count preservation

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};

use shortdash::stats::{DateRange, bucket_daily_in};

fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn tz_east(hours: i32) -> FixedOffset {
    FixedOffset::east_opt(hours * 3600).unwrap()
}

fn range(from: &str, to: &str) -> DateRange {
    DateRange {
        from: Some(utc(from)),
        to: Some(utc(to)),
    }
}

#[test]
fn d_day_range_produces_exactly_d_buckets_ascending_without_gaps() {
    let tz = tz_east(0);
    // 90-day range, sparse events
    let events = [
        utc("2024-01-05T12:00:00Z"),
        utc("2024-02-14T08:00:00Z"),
        utc("2024-03-30T23:59:00Z"),
    ];
    let buckets = bucket_daily_in(
        &tz,
        date("2024-06-01"),
        &events,
        range("2024-01-01T00:00:00Z", "2024-03-30T00:00:00Z"),
    );

    assert_eq!(buckets.len(), 90);
    for pair in buckets.windows(2) {
        assert_eq!(
            pair[1].date,
            pair[0].date.succ_opt().unwrap(),
            "series must advance one calendar day at a time"
        );
    }
}

#[test]
fn bucket_sum_equals_in_range_event_count_for_arbitrary_multisets() {
    let tz = tz_east(2);
    // Duplicates, boundary times, and strays outside the range
    let mut events = vec![
        utc("2024-05-01T00:00:00Z"),
        utc("2024-05-01T00:00:00Z"),
        utc("2024-05-01T00:00:00Z"),
        utc("2024-05-10T21:59:59Z"), // 23:59 local May 10
        utc("2024-05-10T22:00:01Z"), // 00:00 local May 11, outside
        utc("2024-04-20T10:00:00Z"), // before the range
    ];
    events.extend((0..50i64).map(|i| utc("2024-05-05T06:00:00Z") + Duration::minutes(i)));

    let buckets = bucket_daily_in(
        &tz,
        date("2024-06-01"),
        &events,
        range("2024-04-30T22:00:00Z", "2024-05-10T21:59:59Z"), // May 1 .. May 10 local
    );

    assert_eq!(buckets.len(), 10);
    let total: u64 = buckets.iter().map(|b| b.clicks).sum();
    assert_eq!(total, 3 + 1 + 50);
}

#[test]
fn empty_input_still_materializes_the_whole_range() {
    let tz = tz_east(0);
    let buckets = bucket_daily_in(
        &tz,
        date("2024-06-01"),
        &[],
        range("2024-02-27T00:00:00Z", "2024-03-02T00:00:00Z"),
    );
    // Leap year: Feb 27, 28, 29, Mar 1, Mar 2
    let dates: Vec<NaiveDate> = buckets.iter().map(|b| b.date).collect();
    assert_eq!(
        dates,
        vec![
            date("2024-02-27"),
            date("2024-02-28"),
            date("2024-02-29"),
            date("2024-03-01"),
            date("2024-03-02"),
        ]
    );
    assert!(buckets.iter().all(|b| b.clicks == 0));
}

#[test]
fn events_near_local_midnight_split_by_local_date() {
    // 2024-01-15T23:30:00+05:00 buckets to Jan 15 local even though its
    // UTC instant (18:30Z) shares a UTC date with the next local day's
    // 00:30 event (19:30Z)
    let tz = tz_east(5);
    let late_evening = utc("2024-01-15T18:30:00Z");
    let after_midnight = utc("2024-01-15T19:30:00Z");

    let buckets = bucket_daily_in(
        &tz,
        date("2024-06-01"),
        &[late_evening, after_midnight],
        range("2024-01-14T19:00:00Z", "2024-01-16T18:59:59Z"),
    );

    let jan15 = buckets.iter().find(|b| b.date == date("2024-01-15")).unwrap();
    let jan16 = buckets.iter().find(|b| b.date == date("2024-01-16")).unwrap();
    assert_eq!(jan15.clicks, 1);
    assert_eq!(jan16.clicks, 1);
}

#[test]
fn no_range_covers_today_and_29_preceding_days() {
    let tz = tz_east(0);
    let today = date("2025-08-06");
    let buckets = bucket_daily_in(&tz, today, &[], DateRange::default());

    assert_eq!(buckets.len(), 30);
    assert_eq!(buckets.first().unwrap().date, date("2025-07-08"));
    assert_eq!(buckets.last().unwrap().date, today);
}

#[test]
fn output_length_is_independent_of_event_count() {
    let tz = tz_east(0);
    let r = range("2024-05-01T00:00:00Z", "2024-05-07T00:00:00Z");

    let none = bucket_daily_in(&tz, date("2024-06-01"), &[], r);
    let many: Vec<DateTime<Utc>> = (0..500i64)
        .map(|i| utc("2024-05-03T10:00:00Z") + Duration::seconds(i))
        .collect();
    let some = bucket_daily_in(&tz, date("2024-06-01"), &many, r);

    assert_eq!(none.len(), some.len());
    assert_eq!(some.iter().map(|b| b.clicks).sum::<u64>(), 500);
}

#[test]
fn western_timezone_pulls_utc_morning_events_to_previous_day() {
    let tz = FixedOffset::west_opt(8 * 3600).unwrap();
    // 04:00Z on May 2 is 20:00 on May 1 in UTC-8
    let buckets = bucket_daily_in(
        &tz,
        date("2024-06-01"),
        &[utc("2024-05-02T04:00:00Z")],
        range("2024-05-01T08:00:00Z", "2024-05-03T07:59:59Z"),
    );
    let may1 = buckets.iter().find(|b| b.date == date("2024-05-01")).unwrap();
    assert_eq!(may1.clicks, 1);
}

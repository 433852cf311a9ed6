//! Date-bucketed click aggregation
//!
//! Turns a flat list of click timestamps into a gap-free daily series for
//! the chart: one bucket per calendar day of the active range, zero-filled
//! for days without clicks, bucketed by the *viewer's local* calendar date
//! rather than the UTC date. Two clicks whose UTC timestamps differ merge
//! into one bucket when their local dates coincide, and a click at 23:30
//! local plus one at 00:30 the next local day split even when their UTC
//! dates are equal.
//!
//! The chart snapshot is fetched unpaginated with a fixed cap of
//! [`CHART_FETCH_CAP`] events. That cap is a known scalability ceiling:
//! past it the chart undercounts. The real fix is server-side
//! pre-aggregated daily counts; until that endpoint exists the client
//! keeps the capped snapshot.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};

use crate::client::ClickEvent;

use super::period::DateRange;

/// Page size of the unpaginated chart snapshot fetch
pub const CHART_FETCH_CAP: u32 = 1000;

/// Days covered when no explicit range is active (today inclusive)
pub const DEFAULT_RANGE_DAYS: i64 = 30;

/// One calendar day's aggregated click count. Derived, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBucket {
    pub date: NaiveDate,
    pub clicks: u64,
}

/// Aggregate click timestamps into a daily series in the viewer's local
/// timezone, with "today" taken from the wall clock.
pub fn bucket_daily(timestamps: &[DateTime<Utc>], range: DateRange) -> Vec<DateBucket> {
    bucket_daily_in(&Local, Local::now().date_naive(), timestamps, range)
}

/// Convenience wrapper over [`bucket_daily`] for raw click events
pub fn bucket_clicks(events: &[ClickEvent], range: DateRange) -> Vec<DateBucket> {
    let timestamps: Vec<DateTime<Utc>> = events.iter().map(|e| e.clicked_at).collect();
    bucket_daily(&timestamps, range)
}

/// Aggregation core with the timezone and reference date injected.
///
/// Invariants on the output:
/// - exactly one bucket per calendar day from range start to range end,
///   both inclusive, ascending, no duplicates;
/// - the length depends on the range alone, never on the events;
/// - the sum of all counts equals the number of events whose local
///   calendar date falls inside the range.
///
/// When the range is not fully specified the series covers the trailing
/// [`DEFAULT_RANGE_DAYS`] days ending on `today`. An inverted explicit
/// range is normalized by swapping its endpoints.
pub fn bucket_daily_in<Tz: TimeZone>(
    tz: &Tz,
    today: NaiveDate,
    timestamps: &[DateTime<Utc>],
    range: DateRange,
) -> Vec<DateBucket> {
    // Count every event by its local calendar date. Events outside the
    // materialized range simply never get picked up by the walk below;
    // nothing near the boundary is lost to a UTC-date mismatch.
    let mut counts: HashMap<NaiveDate, u64> = HashMap::with_capacity(timestamps.len());
    for ts in timestamps {
        let local_date = ts.with_timezone(tz).date_naive();
        *counts.entry(local_date).or_insert(0) += 1;
    }

    let (mut start, mut end) = match range.explicit() {
        Some((from, to)) => (
            from.with_timezone(tz).date_naive(),
            to.with_timezone(tz).date_naive(),
        ),
        None => (today - Duration::days(DEFAULT_RANGE_DAYS - 1), today),
    };
    if end < start {
        std::mem::swap(&mut start, &mut end);
    }

    // Walk calendar days, not 24-hour steps: the series stays one bucket
    // per day across DST transitions.
    let mut buckets = Vec::new();
    let mut day = start;
    loop {
        buckets.push(DateBucket {
            date: day,
            clicks: counts.get(&day).copied().unwrap_or(0),
        });
        if day >= end {
            break;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn utc(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn default_range_is_30_days_ending_today() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let today = date("2024-03-15");
        let buckets = bucket_daily_in(&tz, today, &[], DateRange::default());
        assert_eq!(buckets.len(), 30);
        assert_eq!(buckets.first().unwrap().date, date("2024-02-15"));
        assert_eq!(buckets.last().unwrap().date, today);
        assert!(buckets.iter().all(|b| b.clicks == 0));
    }

    #[test]
    fn explicit_range_is_inclusive_both_ends() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let range = DateRange {
            from: Some(utc("2024-01-10T12:00:00Z")),
            to: Some(utc("2024-01-14T01:00:00Z")),
        };
        let buckets = bucket_daily_in(&tz, date("2024-06-01"), &[], range);
        let dates: Vec<NaiveDate> = buckets.iter().map(|b| b.date).collect();
        assert_eq!(
            dates,
            vec![
                date("2024-01-10"),
                date("2024-01-11"),
                date("2024-01-12"),
                date("2024-01-13"),
                date("2024-01-14"),
            ]
        );
    }

    #[test]
    fn events_group_by_local_date_not_utc_date() {
        // UTC+5 viewer: 2024-01-15T18:30Z is already Jan 15 23:30 local,
        // 2024-01-15T19:30Z is Jan 16 00:30 local. Same UTC date, two
        // different buckets.
        let tz = FixedOffset::east_opt(5 * 3600).unwrap();
        let events = [utc("2024-01-15T18:30:00Z"), utc("2024-01-15T19:30:00Z")];
        let range = DateRange {
            from: Some(utc("2024-01-14T19:00:00Z")), // Jan 15 local
            to: Some(utc("2024-01-16T18:59:00Z")),   // Jan 16 local
        };
        let buckets = bucket_daily_in(&tz, date("2024-06-01"), &events, range);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0], DateBucket { date: date("2024-01-15"), clicks: 1 });
        assert_eq!(buckets[1], DateBucket { date: date("2024-01-16"), clicks: 1 });
    }

    #[test]
    fn utc_distinct_events_merge_on_same_local_date() {
        // UTC-3 viewer: 23:30Z Jan 15 and 01:30Z Jan 16 are both Jan 15 local
        let tz = FixedOffset::west_opt(3 * 3600).unwrap();
        let events = [utc("2024-01-15T23:30:00Z"), utc("2024-01-16T01:30:00Z")];
        let range = DateRange {
            from: Some(utc("2024-01-15T12:00:00Z")),
            to: Some(utc("2024-01-16T01:30:00Z")),
        };
        let buckets = bucket_daily_in(&tz, date("2024-06-01"), &events, range);
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0], DateBucket { date: date("2024-01-15"), clicks: 2 });
    }

    #[test]
    fn zero_fills_days_without_clicks_and_preserves_total() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let events = [
            utc("2024-02-01T08:00:00Z"),
            utc("2024-02-01T09:00:00Z"),
            utc("2024-02-04T23:59:59Z"),
        ];
        let range = DateRange {
            from: Some(utc("2024-02-01T00:00:00Z")),
            to: Some(utc("2024-02-05T00:00:00Z")),
        };
        let buckets = bucket_daily_in(&tz, date("2024-06-01"), &events, range);
        let counts: Vec<u64> = buckets.iter().map(|b| b.clicks).collect();
        assert_eq!(counts, vec![2, 0, 0, 1, 0]);
        assert_eq!(counts.iter().sum::<u64>(), events.len() as u64);
    }

    #[test]
    fn out_of_range_events_do_not_appear() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let events = [utc("2023-12-31T10:00:00Z"), utc("2024-01-02T10:00:00Z")];
        let range = DateRange {
            from: Some(utc("2024-01-01T00:00:00Z")),
            to: Some(utc("2024-01-03T00:00:00Z")),
        };
        let buckets = bucket_daily_in(&tz, date("2024-06-01"), &events, range);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.iter().map(|b| b.clicks).sum::<u64>(), 1);
    }

    #[test]
    fn half_specified_range_falls_back_to_default() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let today = date("2024-03-15");
        let range = DateRange {
            from: Some(utc("2024-01-01T00:00:00Z")),
            to: None,
        };
        let buckets = bucket_daily_in(&tz, today, &[], range);
        assert_eq!(buckets.len(), 30);
        assert_eq!(buckets.last().unwrap().date, today);
    }

    #[test]
    fn inverted_range_is_normalized() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let range = DateRange {
            from: Some(utc("2024-01-05T00:00:00Z")),
            to: Some(utc("2024-01-03T00:00:00Z")),
        };
        let buckets = bucket_daily_in(&tz, date("2024-06-01"), &[], range);
        assert_eq!(buckets.len(), 3);
        assert_eq!(buckets.first().unwrap().date, date("2024-01-03"));
    }

    #[test]
    fn single_day_range_yields_one_bucket() {
        let tz = FixedOffset::east_opt(0).unwrap();
        let range = DateRange {
            from: Some(utc("2024-01-05T03:00:00Z")),
            to: Some(utc("2024-01-05T21:00:00Z")),
        };
        let buckets = bucket_daily_in(&tz, date("2024-06-01"), &[], range);
        assert_eq!(buckets.len(), 1);
    }
}

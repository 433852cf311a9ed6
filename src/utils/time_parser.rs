//! Date input parsing for filter fields
//!
//! Accepts either a full RFC3339 timestamp or a bare `YYYY-MM-DD`
//! calendar date. Bare dates are interpreted in the viewer's local
//! timezone: the start of the day for a `from` bound, the end of the day
//! for a `to` bound, so a single-day range covers the whole day.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

use crate::errors::ShortdashError;

/// Parse a filter date entered by the viewer
pub fn parse_filter_date(input: &str, end_of_day: bool) -> Result<DateTime<Utc>, ShortdashError> {
    parse_filter_date_in(&Local, input, end_of_day)
}

/// [`parse_filter_date`] with the timezone injected
pub fn parse_filter_date_in<Tz: TimeZone>(
    tz: &Tz,
    input: &str,
    end_of_day: bool,
) -> Result<DateTime<Utc>, ShortdashError> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Utc));
    }

    let date: NaiveDate = input.parse().map_err(|_| {
        ShortdashError::date_parse(format!(
            "invalid date '{}' (expected YYYY-MM-DD or RFC3339)",
            input
        ))
    })?;

    let (h, m, s) = if end_of_day { (23, 59, 59) } else { (0, 0, 0) };
    date.and_hms_opt(h, m, s)
        .and_then(|naive| naive.and_local_timezone(tz.clone()).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| ShortdashError::date_parse(format!("date '{}' is out of range", input)))
}

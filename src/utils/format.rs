//! Display formatting for timestamps and long URLs
//!
//! Recent timestamps render relatively ("today", "3 days ago"), older
//! ones as absolute local date-times. Day distance is measured between
//! *local calendar dates*, the same convention the chart buckets use, so
//! a click at 00:10 reads "today" even when it happened minutes ago in
//! UTC terms of yesterday.

use chrono::{DateTime, Local, TimeZone, Utc};

/// Relative rendering against the wall clock
pub fn format_relative(ts: &DateTime<Utc>) -> String {
    format_relative_at(ts, &Local::now())
}

/// Relative rendering against an injected instant
pub fn format_relative_at<Tz: TimeZone>(ts: &DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let local = ts.with_timezone(&now.timezone());
    let days = (now.date_naive() - local.date_naive()).num_days();

    match days {
        0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ => local.format("%b %e, %Y %H:%M").to_string(),
    }
}

/// Full local date-time for table cells and the metadata panel
pub fn format_datetime(ts: &DateTime<Utc>) -> String {
    format_datetime_at(ts, &Local)
}

/// Full date-time in an injected timezone
pub fn format_datetime_at<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%B %e, %Y %H:%M:%S").to_string()
}

/// Shorten a URL for a narrow column, ellipsis at the end
pub fn truncate_url(url: &str, max_chars: usize) -> String {
    if url.chars().count() <= max_chars {
        return url.to_string();
    }
    let kept: String = url.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

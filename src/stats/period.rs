//! Quick period state machine for the statistics filter
//!
//! Selecting a named period computes its date bounds deterministically
//! from the current instant; `All` carries no bounds at all, so switching
//! from a bounded period to `All` can never leak a stale bound into the
//! query. Custom ranges require at least one bound and fail validation
//! synchronously otherwise.

use std::str::FromStr;

use chrono::{DateTime, Duration, Months, TimeZone, Utc};

use crate::errors::ShortdashError;

/// Active filter bounds, both optional, always UTC on the wire
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRange {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl DateRange {
    /// Both bounds, when the range is fully specified
    pub fn explicit(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        self.from.zip(self.to)
    }

    pub fn is_unbounded(&self) -> bool {
        self.from.is_none() && self.to.is_none()
    }

    /// Custom range entered by the viewer; at least one bound is required
    pub fn custom(
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Self, ShortdashError> {
        if from.is_none() && to.is_none() {
            return Err(ShortdashError::validation(
                "specify at least one of the start and end dates",
            ));
        }
        Ok(Self { from, to })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    Today,
    Week,
    Month,
    #[default]
    All,
    Custom,
}

impl Period {
    /// Quick periods in display order (Custom is entered via its own form)
    pub const QUICK: [Period; 4] = [Period::Today, Period::Week, Period::Month, Period::All];

    pub fn label(&self) -> &'static str {
        match self {
            Period::Today => "Today",
            Period::Week => "Week",
            Period::Month => "Month",
            Period::All => "All",
            Period::Custom => "Custom",
        }
    }

    /// Resolve a quick period against the wall clock
    pub fn resolve(&self) -> DateRange {
        self.resolve_at(chrono::Local::now())
    }

    /// Resolve a quick period against an injected instant.
    ///
    /// - `Today`: local midnight up to now
    /// - `Week`: seven days back up to now
    /// - `Month`: one calendar month back up to now
    /// - `All`: unbounded
    /// - `Custom`: unbounded here; the caller supplies the bounds via
    ///   [`DateRange::custom`]
    pub fn resolve_at<Tz: TimeZone>(&self, now: DateTime<Tz>) -> DateRange {
        let now_utc = now.with_timezone(&Utc);
        let from = match self {
            Period::Today => local_midnight(&now),
            Period::Week => Some(now_utc - Duration::days(7)),
            Period::Month => now_utc
                .checked_sub_months(Months::new(1))
                .or(Some(now_utc - Duration::days(30))),
            Period::All | Period::Custom => None,
        };
        match from {
            Some(from) => DateRange {
                from: Some(from),
                to: Some(now_utc),
            },
            None => DateRange::default(),
        }
    }
}

/// Start of the current local calendar day, in UTC.
/// Falls back to the instant itself when midnight does not exist in the
/// zone (DST spring-forward).
fn local_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Option<DateTime<Utc>> {
    now.date_naive()
        .and_hms_opt(0, 0, 0)
        .and_then(|naive| naive.and_local_timezone(now.timezone()).earliest())
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|| Some(now.with_timezone(&Utc)))
}

impl FromStr for Period {
    type Err = ShortdashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "today" => Ok(Period::Today),
            "week" => Ok(Period::Week),
            "month" => Ok(Period::Month),
            "all" => Ok(Period::All),
            "custom" => Ok(Period::Custom),
            other => Err(ShortdashError::validation(format!(
                "unknown period '{}' (expected today, week, month or all)",
                other
            ))),
        }
    }
}

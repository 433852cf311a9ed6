//! Per-link statistics view: click table, metadata panel and daily chart
//!
//! The click *table* shows one server-paginated page of events; the
//! *chart* always reflects the full (capped) unpaginated snapshot for the
//! same filter. The two targets share the filter state but are fetched
//! and rendered independently: a period change refreshes both, a page
//! change refreshes the table only, and each target has its own error
//! slot and sequence guard so neither can clobber the other.

use chrono::{DateTime, Local, TimeZone, Utc};
use tracing::debug;

use crate::client::{ClickEvent, ClickQuery, LinkStatsResponse, PaginationMeta};
use crate::errors::ShortdashError;
use crate::stats::{CHART_FETCH_CAP, DateBucket, DateRange, Period, bucket_daily_in};

use super::RequestSeq;

/// Link metadata shown in the header panel
#[derive(Debug, Clone)]
pub struct LinkMeta {
    pub code: String,
    pub domain: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub total_clicks: i64,
}

impl LinkMeta {
    pub fn short_url(&self) -> String {
        format!("https://{}/{}", self.domain, self.code)
    }
}

/// Fetch descriptor for one statistics request
#[derive(Debug, Clone, PartialEq)]
pub enum StatsFetch {
    /// Paginated click-table page (also carries the metadata)
    Table { seq: u64, query: ClickQuery },
    /// Unpaginated capped snapshot for the chart
    Chart { seq: u64, query: ClickQuery },
}

/// State of the statistics screen for one short code
#[derive(Debug)]
pub struct StatsView {
    pub code: String,
    pub period: Period,
    pub page: u32,
    pub page_size: u32,

    pub meta: Option<LinkMeta>,
    pub clicks: Vec<ClickEvent>,
    pub pagination: Option<PaginationMeta>,
    pub chart: Vec<DateBucket>,

    pub table_error: Option<String>,
    pub chart_error: Option<String>,
    pub table_loading: bool,
    pub chart_loading: bool,

    range: DateRange,
    table_seq: RequestSeq,
    chart_seq: RequestSeq,
}

impl StatsView {
    pub fn new(code: impl Into<String>, page_size: u32) -> Self {
        Self {
            code: code.into(),
            period: Period::default(),
            page: 1,
            page_size,
            meta: None,
            clicks: Vec::new(),
            pagination: None,
            chart: Vec::new(),
            table_error: None,
            chart_error: None,
            table_loading: false,
            chart_loading: false,
            range: DateRange::default(),
            table_seq: RequestSeq::new(),
            chart_seq: RequestSeq::new(),
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.map(|p| p.total_pages.max(1)).unwrap_or(1)
    }

    /// Initial load: table page 1 plus the chart snapshot
    pub fn open(&mut self) -> Vec<StatsFetch> {
        vec![self.table_fetch(), self.chart_fetch()]
    }

    /// Select a quick period. Resets to page 1 and refreshes both the
    /// table and the chart.
    pub fn set_period(&mut self, period: Period) -> Vec<StatsFetch> {
        self.set_period_at(period, Local::now())
    }

    /// [`set_period`](Self::set_period) with the instant injected
    pub fn set_period_at<Tz: TimeZone>(&mut self, period: Period, now: DateTime<Tz>) -> Vec<StatsFetch> {
        self.period = period;
        self.range = period.resolve_at(now);
        self.page = 1;
        vec![self.table_fetch(), self.chart_fetch()]
    }

    /// Apply a custom range. At least one bound is required; on
    /// validation failure nothing changes and no fetch is issued.
    pub fn set_custom_range(
        &mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<StatsFetch>, ShortdashError> {
        let range = DateRange::custom(from, to)?;
        self.period = Period::Custom;
        self.range = range;
        self.page = 1;
        Ok(vec![self.table_fetch(), self.chart_fetch()])
    }

    /// Jump to a table page. The chart is untouched: same filter, same
    /// snapshot, no refetch.
    pub fn set_page(&mut self, page: u32) -> StatsFetch {
        self.page = page.clamp(1, self.total_pages());
        self.table_fetch()
    }

    pub fn next_page(&mut self) -> Option<StatsFetch> {
        if self.page < self.total_pages() {
            Some(self.set_page(self.page + 1))
        } else {
            None
        }
    }

    pub fn prev_page(&mut self) -> Option<StatsFetch> {
        if self.page > 1 {
            Some(self.set_page(self.page - 1))
        } else {
            None
        }
    }

    fn table_fetch(&mut self) -> StatsFetch {
        self.table_loading = true;
        StatsFetch::Table {
            seq: self.table_seq.issue(),
            query: ClickQuery {
                page: self.page,
                page_size: self.page_size,
                from: self.range.from,
                to: self.range.to,
            },
        }
    }

    fn chart_fetch(&mut self) -> StatsFetch {
        self.chart_loading = true;
        StatsFetch::Chart {
            seq: self.chart_seq.issue(),
            query: ClickQuery {
                page: 1,
                page_size: CHART_FETCH_CAP,
                from: self.range.from,
                to: self.range.to,
            },
        }
    }

    /// Fold a table-page response in. A failure lands in the table's
    /// error slot only; the chart keeps rendering.
    pub fn apply_table_response(
        &mut self,
        seq: u64,
        result: Result<LinkStatsResponse, ShortdashError>,
    ) -> bool {
        if !self.table_seq.is_current(seq) {
            debug!("stats table response {} superseded, dropped", seq);
            return false;
        }
        self.table_loading = false;
        match result {
            Ok(response) => {
                self.meta = Some(LinkMeta {
                    code: response.code,
                    domain: response.domain,
                    long_url: response.long_url,
                    created_at: response.created_at,
                    total_clicks: response.total_clicks,
                });
                self.clicks = response.items;
                self.pagination = Some(response.pagination);
                self.table_error = None;
            }
            Err(e) => {
                self.table_error = Some(e.format_simple());
            }
        }
        true
    }

    /// Fold the chart snapshot in and rebuild the daily series
    pub fn apply_chart_response(
        &mut self,
        seq: u64,
        result: Result<LinkStatsResponse, ShortdashError>,
    ) -> bool {
        self.apply_chart_response_in(&Local, Local::now().date_naive(), seq, result)
    }

    /// [`apply_chart_response`](Self::apply_chart_response) with the
    /// viewer's timezone and reference date injected
    pub fn apply_chart_response_in<Tz: TimeZone>(
        &mut self,
        tz: &Tz,
        today: chrono::NaiveDate,
        seq: u64,
        result: Result<LinkStatsResponse, ShortdashError>,
    ) -> bool {
        if !self.chart_seq.is_current(seq) {
            debug!("stats chart response {} superseded, dropped", seq);
            return false;
        }
        self.chart_loading = false;
        match result {
            Ok(response) => {
                let timestamps: Vec<DateTime<Utc>> =
                    response.items.iter().map(|c| c.clicked_at).collect();
                self.chart = bucket_daily_in(tz, today, &timestamps, self.range);
                self.chart_error = None;
            }
            Err(e) => {
                self.chart_error = Some(e.format_simple());
            }
        }
        true
    }
}

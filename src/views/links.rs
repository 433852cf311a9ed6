//! Link listing view: paginated, filterable table of short links

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::client::{DomainItem, LinkSummary, LinksQuery, PaginationMeta, StatsListResponse};
use crate::errors::ShortdashError;

use super::RequestSeq;

/// Fetch descriptor for one links-table request
#[derive(Debug, Clone)]
pub struct LinksFetch {
    pub seq: u64,
    pub query: LinksQuery,
}

/// State of the links screen.
///
/// Owned by the screen, created on entry, dropped on exit. Filter changes
/// reset pagination to page 1; page changes keep the filter untouched.
#[derive(Debug)]
pub struct LinksView {
    pub page: u32,
    pub page_size: u32,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub domain: Option<String>,

    pub rows: Vec<LinkSummary>,
    pub pagination: Option<PaginationMeta>,
    pub domains: Vec<DomainItem>,
    pub error: Option<String>,
    pub loading: bool,

    seq: RequestSeq,
}

impl LinksView {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size,
            from: None,
            to: None,
            domain: None,
            rows: Vec::new(),
            pagination: None,
            domains: Vec::new(),
            error: None,
            loading: false,
            seq: RequestSeq::new(),
        }
    }

    pub fn total_pages(&self) -> u32 {
        self.pagination.map(|p| p.total_pages.max(1)).unwrap_or(1)
    }

    pub fn total_items(&self) -> i64 {
        self.pagination.map(|p| p.total_items).unwrap_or(0)
    }

    /// Issue a fetch for the current filter and page
    pub fn start_fetch(&mut self) -> LinksFetch {
        self.loading = true;
        LinksFetch {
            seq: self.seq.issue(),
            query: LinksQuery {
                page: self.page,
                page_size: self.page_size,
                from: self.from,
                to: self.to,
                domain: self.domain.clone(),
            },
        }
    }

    /// Jump to a page, clamped to the known page count. Filter is kept.
    pub fn set_page(&mut self, page: u32) -> LinksFetch {
        self.page = page.clamp(1, self.total_pages());
        self.start_fetch()
    }

    pub fn next_page(&mut self) -> Option<LinksFetch> {
        if self.page < self.total_pages() {
            Some(self.set_page(self.page + 1))
        } else {
            None
        }
    }

    pub fn prev_page(&mut self) -> Option<LinksFetch> {
        if self.page > 1 {
            Some(self.set_page(self.page - 1))
        } else {
            None
        }
    }

    /// Apply a new filter; always resets to the first page
    pub fn apply_filters(
        &mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
        domain: Option<String>,
        page_size: u32,
    ) -> LinksFetch {
        self.from = from;
        self.to = to;
        self.domain = domain.filter(|d| !d.is_empty());
        self.page_size = page_size;
        self.page = 1;
        self.start_fetch()
    }

    /// Clear every filter field and reload from page 1
    pub fn reset_filters(&mut self) -> LinksFetch {
        let page_size = self.page_size;
        self.apply_filters(None, None, None, page_size)
    }

    /// Fold a table response in. Returns false when the response was
    /// superseded by a later request and therefore dropped.
    pub fn apply_response(
        &mut self,
        seq: u64,
        result: Result<StatsListResponse, ShortdashError>,
    ) -> bool {
        if !self.seq.is_current(seq) {
            debug!("links response {} superseded, dropped", seq);
            return false;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                self.rows = response.items;
                self.pagination = Some(response.pagination);
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.format_simple());
            }
        }
        true
    }

    pub fn set_domains(&mut self, domains: Vec<DomainItem>) {
        self.domains = domains;
    }

    /// Active domain names for the filter selector
    pub fn active_domains(&self) -> impl Iterator<Item = &str> {
        self.domains
            .iter()
            .filter(|d| d.is_active)
            .map(|d| d.domain.as_str())
    }

    /// Cycle the domain filter through none → each active domain → none
    pub fn cycle_domain(&mut self) -> LinksFetch {
        let names: Vec<String> = self.active_domains().map(String::from).collect();
        let next = match &self.domain {
            None => names.first().cloned(),
            Some(current) => names
                .iter()
                .position(|d| d == current)
                .and_then(|i| names.get(i + 1).cloned()),
        };
        let (from, to, page_size) = (self.from, self.to, self.page_size);
        self.apply_filters(from, to, next, page_size)
    }
}

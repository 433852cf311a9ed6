//! Batch link creation view: dynamic entry form and per-item results

use tracing::debug;

use crate::client::{
    DomainItem, LinkSummary, LinksQuery, ShortenRequest, ShortenResponse, StatsListResponse,
    UrlSpec,
};
use crate::errors::ShortdashError;
use crate::utils::{validate_custom_code, validate_long_url};

use super::RequestSeq;

/// Field under the cursor in one form row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryField {
    #[default]
    Url,
    Domain,
    CustomCode,
}

impl EntryField {
    const ALL: [Self; 3] = [Self::Url, Self::Domain, Self::CustomCode];

    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|f| f == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    fn is_last(&self) -> bool {
        matches!(self, Self::CustomCode)
    }
}

/// One user-entered link specification
#[derive(Debug, Clone, Default)]
pub struct LinkEntry {
    pub url: String,
    pub domain: String,
    pub custom_code: String,
}

impl LinkEntry {
    pub fn is_blank(&self) -> bool {
        self.url.trim().is_empty()
    }
}

/// Fetch descriptor for the recent-links panel
#[derive(Debug, Clone)]
pub struct RecentFetch {
    pub seq: u64,
    pub query: LinksQuery,
}

/// State of the create screen: N entry rows (N ≥ 1), the domain list for
/// the selector, submission results and the recent-links panel.
#[derive(Debug)]
pub struct CreateView {
    pub entries: Vec<LinkEntry>,
    pub cursor: usize,
    pub field: EntryField,

    pub domains: Vec<DomainItem>,
    pub results: Option<ShortenResponse>,
    pub error: Option<String>,
    pub submitting: bool,

    pub recent: Vec<LinkSummary>,
    pub recent_error: Option<String>,
    recent_page_size: u32,
    recent_seq: RequestSeq,
}

impl CreateView {
    pub fn new(recent_page_size: u32) -> Self {
        Self {
            entries: vec![LinkEntry::default()],
            cursor: 0,
            field: EntryField::Url,
            domains: Vec::new(),
            results: None,
            error: None,
            submitting: false,
            recent: Vec::new(),
            recent_error: None,
            recent_page_size,
            recent_seq: RequestSeq::new(),
        }
    }

    pub fn set_domains(&mut self, domains: Vec<DomainItem>) {
        self.domains = domains;
    }

    pub fn default_domain(&self) -> Option<&str> {
        self.domains
            .iter()
            .find(|d| d.is_default)
            .map(|d| d.domain.as_str())
    }

    pub fn active_domains(&self) -> impl Iterator<Item = &str> {
        self.domains
            .iter()
            .filter(|d| d.is_active)
            .map(|d| d.domain.as_str())
    }

    // ============ Form mechanics ============

    pub fn add_entry(&mut self) {
        self.entries.push(LinkEntry::default());
        self.cursor = self.entries.len() - 1;
        self.field = EntryField::Url;
    }

    /// Remove the row under the cursor; the form always keeps one row
    pub fn remove_entry(&mut self) {
        if self.entries.len() > 1 {
            self.entries.remove(self.cursor);
            self.cursor = self.cursor.min(self.entries.len() - 1);
            self.field = EntryField::Url;
        }
    }

    /// Advance the cursor one field, wrapping across rows
    pub fn next_field(&mut self) {
        if self.field.is_last() {
            self.cursor = (self.cursor + 1) % self.entries.len();
        }
        self.field = self.field.next();
    }

    pub fn current_input_mut(&mut self) -> &mut String {
        let entry = &mut self.entries[self.cursor];
        match self.field {
            EntryField::Url => &mut entry.url,
            EntryField::Domain => &mut entry.domain,
            EntryField::CustomCode => &mut entry.custom_code,
        }
    }

    pub fn push_char(&mut self, c: char) {
        self.current_input_mut().push(c);
    }

    pub fn pop_char(&mut self) {
        self.current_input_mut().pop();
    }

    /// Cycle the domain selector of the current row through the active
    /// domains (empty means the server default)
    pub fn cycle_entry_domain(&mut self) {
        let names: Vec<String> = self.active_domains().map(String::from).collect();
        let entry = &mut self.entries[self.cursor];
        entry.domain = match names.iter().position(|d| *d == entry.domain) {
            None => names.first().cloned().unwrap_or_default(),
            Some(i) => names.get(i + 1).cloned().unwrap_or_default(),
        };
    }

    // ============ Submission ============

    /// Build the batch request from the form.
    ///
    /// Blank rows are skipped; an all-blank form is a validation failure
    /// and no request is issued. The domain field is omitted when it
    /// matches the server default, so the server applies its own default.
    pub fn build_request(&self) -> Result<ShortenRequest, ShortdashError> {
        let default_domain = self.default_domain();
        let mut urls = Vec::new();

        for (index, entry) in self.entries.iter().enumerate() {
            if entry.is_blank() {
                continue;
            }
            let url = entry.url.trim();
            validate_long_url(url)
                .map_err(|e| ShortdashError::validation(format!("link #{}: {}", index + 1, e)))?;

            let custom_code = entry.custom_code.trim();
            if !custom_code.is_empty() {
                validate_custom_code(custom_code).map_err(|e| {
                    ShortdashError::validation(format!("link #{}: {}", index + 1, e))
                })?;
            }

            let domain = Some(entry.domain.trim())
                .filter(|d| !d.is_empty() && Some(*d) != default_domain)
                .map(String::from);

            urls.push(UrlSpec {
                url: url.to_string(),
                domain,
                custom_code: (!custom_code.is_empty()).then(|| custom_code.to_string()),
            });
        }

        if urls.is_empty() {
            return Err(ShortdashError::validation("add at least one link"));
        }
        Ok(ShortenRequest { urls })
    }

    /// Fold the batch response in. Items keep their input order; a mix of
    /// successes and failures is a normal outcome. Returns true when the
    /// recent-links panel should refresh (at least one item succeeded).
    pub fn apply_response(&mut self, response: ShortenResponse) -> bool {
        self.submitting = false;
        self.error = None;
        let should_refresh = response.summary.successful > 0;
        self.results = Some(response);
        should_refresh
    }

    /// A transport-level submit failure (the batch itself never made it)
    pub fn apply_submit_error(&mut self, error: &ShortdashError) {
        self.submitting = false;
        self.error = Some(error.format_simple());
    }

    // ============ Recent-links panel ============

    pub fn start_recent_fetch(&mut self) -> RecentFetch {
        RecentFetch {
            seq: self.recent_seq.issue(),
            query: LinksQuery {
                page: 1,
                page_size: self.recent_page_size,
                ..LinksQuery::default()
            },
        }
    }

    pub fn apply_recent_response(
        &mut self,
        seq: u64,
        result: Result<StatsListResponse, ShortdashError>,
    ) -> bool {
        if !self.recent_seq.is_current(seq) {
            debug!("recent-links response {} superseded, dropped", seq);
            return false;
        }
        match result {
            Ok(response) => {
                self.recent = response.items;
                self.recent_error = None;
            }
            Err(e) => {
                self.recent_error = Some(e.format_simple());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn domains() -> Vec<DomainItem> {
        let json = serde_json::json!({"items": [
            {"domain": "sho.rt", "is_default": true, "is_active": true},
            {"domain": "example.to", "is_default": false, "is_active": true},
            {"domain": "old.example", "is_default": false, "is_active": false}
        ]});
        serde_json::from_value::<crate::client::DomainListResponse>(json)
            .unwrap()
            .items
    }

    #[test]
    fn test_field_cycle_wraps_to_next_row() {
        let mut view = CreateView::new(20);
        view.add_entry();
        view.cursor = 0;
        view.field = EntryField::Url;

        view.next_field();
        assert_eq!(view.field, EntryField::Domain);
        view.next_field();
        assert_eq!(view.field, EntryField::CustomCode);
        view.next_field();
        assert_eq!(view.field, EntryField::Url);
        assert_eq!(view.cursor, 1);
    }

    #[test]
    fn test_remove_keeps_one_row() {
        let mut view = CreateView::new(20);
        view.remove_entry();
        assert_eq!(view.entries.len(), 1);

        view.add_entry();
        view.remove_entry();
        assert_eq!(view.entries.len(), 1);
    }

    #[test]
    fn test_empty_form_is_validation_failure() {
        let view = CreateView::new(20);
        let err = view.build_request().unwrap_err();
        assert!(matches!(err, ShortdashError::Validation(_)));
    }

    #[test]
    fn test_default_domain_is_omitted() {
        let mut view = CreateView::new(20);
        view.set_domains(domains());
        view.entries[0].url = "https://example.com/a".into();
        view.entries[0].domain = "sho.rt".into();

        let request = view.build_request().unwrap();
        assert_eq!(request.urls.len(), 1);
        assert!(request.urls[0].domain.is_none());
    }

    #[test]
    fn test_non_default_domain_is_sent() {
        let mut view = CreateView::new(20);
        view.set_domains(domains());
        view.entries[0].url = "https://example.com/a".into();
        view.entries[0].domain = "example.to".into();

        let request = view.build_request().unwrap();
        assert_eq!(request.urls[0].domain.as_deref(), Some("example.to"));
    }

    #[test]
    fn test_blank_rows_are_skipped() {
        let mut view = CreateView::new(20);
        view.entries[0].url = "https://example.com/a".into();
        view.add_entry(); // stays blank
        view.add_entry();
        view.entries[2].url = "https://example.com/b".into();

        let request = view.build_request().unwrap();
        assert_eq!(request.urls.len(), 2);
        assert_eq!(request.urls[0].url, "https://example.com/a");
        assert_eq!(request.urls[1].url, "https://example.com/b");
    }

    #[test]
    fn test_invalid_url_blocks_whole_submission() {
        let mut view = CreateView::new(20);
        view.entries[0].url = "https://example.com/a".into();
        view.add_entry();
        view.entries[1].url = "ftp://example.com/b".into();

        let err = view.build_request().unwrap_err();
        assert!(err.message().contains("link #2"), "got: {}", err.message());
    }

    #[test]
    fn test_bad_custom_code_blocks_submission() {
        let mut view = CreateView::new(20);
        view.entries[0].url = "https://example.com/a".into();
        view.entries[0].custom_code = "bad code!".into();

        assert!(view.build_request().is_err());
    }
}

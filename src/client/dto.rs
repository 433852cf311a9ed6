//! Wire types for the dashboard endpoints
//!
//! Field shapes mirror the server contract. All timestamps travel as
//! RFC3339; optional filter fields are omitted from query strings rather
//! than sent empty.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

// ============ Responses ============

#[derive(Debug, Clone, Deserialize)]
pub struct DomainItem {
    pub domain: String,
    pub is_default: bool,
    pub is_active: bool,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DomainListResponse {
    pub items: Vec<DomainItem>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationMeta {
    pub page: u32,
    pub page_size: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

/// One short link row in the listing table
#[derive(Debug, Clone, Deserialize)]
pub struct LinkSummary {
    pub code: String,
    pub domain: String,
    pub long_url: String,
    pub total_clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkSummary {
    /// Reconstructed short URL for display and clipboard
    pub fn short_url(&self) -> String {
        format!("https://{}/{}", self.domain, self.code)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatsListResponse {
    pub items: Vec<LinkSummary>,
    pub pagination: PaginationMeta,
}

/// One recorded visit to a short link
#[derive(Debug, Clone, Deserialize)]
pub struct ClickEvent {
    pub clicked_at: DateTime<Utc>,
    #[serde(default)]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub referer: Option<String>,
    #[serde(default)]
    pub ip: Option<String>,
}

/// Per-code statistics: link metadata plus one page of click events
#[derive(Debug, Clone, Deserialize)]
pub struct LinkStatsResponse {
    pub code: String,
    pub domain: String,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
    pub total_clicks: i64,
    pub items: Vec<ClickEvent>,
    pub pagination: PaginationMeta,
}

impl LinkStatsResponse {
    pub fn short_url(&self) -> String {
        format!("https://{}/{}", self.domain, self.code)
    }
}

// ============ Batch creation ============

#[derive(Debug, Clone, Serialize)]
pub struct UrlSpec {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_code: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortenRequest {
    pub urls: Vec<UrlSpec>,
}

/// Structured per-item error, also used for non-2xx response bodies
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorInfo {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub details: Option<serde_json::Value>,
}

/// Outcome of one batch entry. Exactly one of `short_url`/`error` is set;
/// a partial-failure batch is a normal response, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct ShortenItem {
    pub long_url: String,
    #[serde(default)]
    pub short_url: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub error: Option<ApiErrorInfo>,
}

impl ShortenItem {
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BatchSummary {
    pub total: u32,
    pub successful: u32,
    #[serde(default)]
    pub failed: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShortenResponse {
    pub summary: BatchSummary,
    pub items: Vec<ShortenItem>,
}

/// Error envelope the server wraps non-2xx bodies in
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: ApiErrorInfo,
}

// ============ Query parameters ============

fn rfc3339(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Query for `GET /api/stats` (link listing)
#[derive(Debug, Clone, Default)]
pub struct LinksQuery {
    pub page: u32,
    pub page_size: u32,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub domain: Option<String>,
}

impl LinksQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(from) = &self.from {
            pairs.push(("from", rfc3339(from)));
        }
        if let Some(to) = &self.to {
            pairs.push(("to", rfc3339(to)));
        }
        if let Some(domain) = &self.domain {
            if !domain.is_empty() {
                pairs.push(("domain", domain.clone()));
            }
        }
        pairs
    }
}

/// Query for `GET /api/stats/{code}` (click events)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClickQuery {
    pub page: u32,
    pub page_size: u32,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}

impl ClickQuery {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("page", self.page.to_string()),
            ("page_size", self.page_size.to_string()),
        ];
        if let Some(from) = &self.from {
            pairs.push(("from", rfc3339(from)));
        }
        if let Some(to) = &self.to {
            pairs.push(("to", rfc3339(to)));
        }
        pairs
    }
}

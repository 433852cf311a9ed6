//! API client layer for the CLI/TUI interfaces
//!
//! Wraps the four dashboard endpoints of the shortener's REST API and
//! normalizes transport, status and decoding failures into
//! [`ShortdashError`](crate::errors::ShortdashError).
//!
//! # Architecture
//!
//! ```text
//! CLI/TUI → view state → ApiClient ──→ GET  /api/domains/
//!                                    ├→ GET  /api/stats
//!                                    ├→ GET  /api/stats/{code}
//!                                    └→ POST /api/shorten
//! ```
//!
//! Requests run on the blocking thread pool (`spawn_blocking`) so callers
//! stay async and the UI never stalls on a slow server. Per-item batch
//! errors from `/api/shorten` are data, not failures: the call succeeds
//! and each item carries its own outcome.

mod dto;
mod http;

pub use dto::{
    ApiErrorInfo, BatchSummary, ClickEvent, ClickQuery, DomainItem, DomainListResponse,
    LinkStatsResponse, LinkSummary, LinksQuery, PaginationMeta, ShortenItem, ShortenRequest,
    ShortenResponse, StatsListResponse, UrlSpec,
};
pub use http::ApiClient;

//! Fetch spawning and response routing
//!
//! Every network call runs as a spawned task and reports back through
//! the app's channel. Responses carry the sequence number of the request
//! that produced them; the view layer drops the superseded ones.

use tracing::warn;

use super::App;
use crate::client::{
    DomainListResponse, LinkStatsResponse, ShortenRequest, ShortenResponse, StatsListResponse,
};
use crate::errors::ShortdashError;
use crate::views::{LinksFetch, RecentFetch, StatsFetch};

/// A completed fetch, delivered to the event loop
pub enum ApiEvent {
    Domains(Result<DomainListResponse, ShortdashError>),
    Links {
        seq: u64,
        result: Result<StatsListResponse, ShortdashError>,
    },
    StatsTable {
        seq: u64,
        result: Result<LinkStatsResponse, ShortdashError>,
    },
    StatsChart {
        seq: u64,
        result: Result<LinkStatsResponse, ShortdashError>,
    },
    Shorten(Result<ShortenResponse, ShortdashError>),
    Recent {
        seq: u64,
        result: Result<StatsListResponse, ShortdashError>,
    },
}

impl App {
    pub fn spawn_domains(&self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.list_domains().await;
            let _ = tx.send(ApiEvent::Domains(result));
        });
    }

    pub fn spawn_links(&self, fetch: LinksFetch) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.list_links(&fetch.query).await;
            let _ = tx.send(ApiEvent::Links {
                seq: fetch.seq,
                result,
            });
        });
    }

    /// Dispatch statistics fetch descriptors for the open link. The table
    /// and chart requests are independent and may complete in any order.
    pub fn spawn_stats(&self, code: String, fetches: Vec<StatsFetch>) {
        for fetch in fetches {
            let client = self.client.clone();
            let tx = self.tx.clone();
            let code = code.clone();
            tokio::spawn(async move {
                match fetch {
                    StatsFetch::Table { seq, query } => {
                        let result = client.link_stats(&code, &query).await;
                        let _ = tx.send(ApiEvent::StatsTable { seq, result });
                    }
                    StatsFetch::Chart { seq, query } => {
                        let result = client.link_stats(&code, &query).await;
                        let _ = tx.send(ApiEvent::StatsChart { seq, result });
                    }
                }
            });
        }
    }

    pub fn spawn_shorten(&self, request: ShortenRequest) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.shorten(&request).await;
            let _ = tx.send(ApiEvent::Shorten(result));
        });
    }

    pub fn spawn_recent(&self, fetch: RecentFetch) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = client.list_links(&fetch.query).await;
            let _ = tx.send(ApiEvent::Recent {
                seq: fetch.seq,
                result,
            });
        });
    }

    /// Fold in every fetch that completed since the last frame
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.rx.try_recv() {
            self.on_api_event(event);
        }
    }

    fn on_api_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Domains(Ok(response)) => {
                self.links.set_domains(response.items.clone());
                self.create.set_domains(response.items);
            }
            ApiEvent::Domains(Err(e)) => {
                // The dashboard works without the domain list; the
                // selectors just stay empty
                warn!("domain list fetch failed: {}", e);
            }
            ApiEvent::Links { seq, result } => {
                if self.links.apply_response(seq, result) {
                    let row_count = self.links.rows.len();
                    if row_count == 0 {
                        self.selected_index = 0;
                    } else if self.selected_index >= row_count {
                        self.selected_index = row_count - 1;
                    }
                }
            }
            ApiEvent::StatsTable { seq, result } => {
                if let Some(stats) = &mut self.stats {
                    stats.apply_table_response(seq, result);
                }
            }
            ApiEvent::StatsChart { seq, result } => {
                if let Some(stats) = &mut self.stats {
                    stats.apply_chart_response(seq, result);
                }
            }
            ApiEvent::Shorten(Ok(response)) => {
                let successful = response.summary.successful;
                let total = response.summary.total;
                if self.create.apply_response(response) {
                    let fetch = self.create.start_recent_fetch();
                    self.spawn_recent(fetch);
                }
                self.set_status(format!("Created {} of {} links", successful, total));
            }
            ApiEvent::Shorten(Err(e)) => {
                self.create.apply_submit_error(&e);
                self.set_error(e.format_simple());
            }
            ApiEvent::Recent { seq, result } => {
                self.create.apply_recent_response(seq, result);
            }
        }
    }
}

//! HTTP plumbing for the API client
//!
//! A single process-wide `ureq` agent handles all outbound requests.
//! Calls are synchronous and run inside `tokio::task::spawn_blocking`,
//! so the async wrappers never block the runtime.

use std::sync::OnceLock;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;
use ureq::Agent;

use crate::errors::ShortdashError;

use super::dto::{
    ClickQuery, DomainListResponse, ErrorBody, LinkStatsResponse, LinksQuery, ShortenRequest,
    ShortenResponse, StatsListResponse,
};

/// Global HTTP agent (ureq's Agent is Send + Sync).
/// The timeout is fixed on first use.
static HTTP_AGENT: OnceLock<Agent> = OnceLock::new();

fn get_agent(timeout_secs: u64) -> &'static Agent {
    HTTP_AGENT.get_or_init(|| {
        Agent::config_builder()
            .timeout_global(Some(Duration::from_secs(timeout_secs)))
            // non-2xx carries a structured error body we want to read
            .http_status_as_error(false)
            .build()
            .into()
    })
}

/// Client for the dashboard endpoints.
///
/// Cheap to clone; holds only the base URL and the bearer token.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    token: String,
    timeout_secs: u64,
}

impl ApiClient {
    pub fn new(base_url: &str, token: &str, timeout_secs: u64) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            timeout_secs,
        }
    }

    /// Build a client from the global configuration
    pub fn from_config() -> Self {
        let config = crate::config::get_config();
        Self::new(
            &config.api.base_url,
            &config.api.token,
            config.api.timeout_secs,
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ============ Endpoints ============

    /// `GET /api/domains/`
    pub async fn list_domains(&self) -> Result<DomainListResponse, ShortdashError> {
        let url = format!("{}/api/domains/", self.base_url);
        self.get_json(url, Vec::new()).await
    }

    /// `GET /api/stats` — paginated link listing
    pub async fn list_links(&self, query: &LinksQuery) -> Result<StatsListResponse, ShortdashError> {
        let url = format!("{}/api/stats", self.base_url);
        let pairs = query.to_query_pairs();
        self.get_json(url, pairs).await
    }

    /// `GET /api/stats/{code}` — link metadata plus one page of clicks
    pub async fn link_stats(
        &self,
        code: &str,
        query: &ClickQuery,
    ) -> Result<LinkStatsResponse, ShortdashError> {
        let url = format!("{}/api/stats/{}", self.base_url, code);
        let pairs = query.to_query_pairs();
        self.get_json(url, pairs).await
    }

    /// `POST /api/shorten` — batch link creation.
    /// Per-item failures are part of the response, never an `Err`.
    pub async fn shorten(
        &self,
        request: &ShortenRequest,
    ) -> Result<ShortenResponse, ShortdashError> {
        let url = format!("{}/api/shorten", self.base_url);
        let client = self.clone();
        let body = serde_json::to_value(request)
            .map_err(|e| ShortdashError::validation(format!("unserializable request: {}", e)))?;
        run_blocking(move || client.post_json_sync(&url, &body)).await
    }

    // ============ Transport ============

    async fn get_json<T: DeserializeOwned + Send + 'static>(
        &self,
        url: String,
        pairs: Vec<(&'static str, String)>,
    ) -> Result<T, ShortdashError> {
        let client = self.clone();
        run_blocking(move || client.get_json_sync(&url, &pairs)).await
    }

    fn get_json_sync<T: DeserializeOwned>(
        &self,
        url: &str,
        pairs: &[(&'static str, String)],
    ) -> Result<T, ShortdashError> {
        debug!("GET {} ({} params)", url, pairs.len());
        let agent = get_agent(self.timeout_secs);

        let mut request = agent
            .get(url)
            .header("Authorization", &format!("Bearer {}", self.token));
        for (key, value) in pairs {
            request = request.query(*key, value);
        }

        let response = request
            .call()
            .map_err(|e| ShortdashError::network(e.to_string()))?;

        decode_response(response)
    }

    fn post_json_sync<T: DeserializeOwned>(
        &self,
        url: &str,
        body: &serde_json::Value,
    ) -> Result<T, ShortdashError> {
        debug!("POST {}", url);
        let agent = get_agent(self.timeout_secs);

        let response = agent
            .post(url)
            .header("Authorization", &format!("Bearer {}", self.token))
            .send_json(body)
            .map_err(|e| ShortdashError::network(e.to_string()))?;

        decode_response(response)
    }
}

/// Run a blocking HTTP call on the worker pool
async fn run_blocking<T, F>(call: F) -> Result<T, ShortdashError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, ShortdashError> + Send + 'static,
{
    tokio::task::spawn_blocking(call)
        .await
        .map_err(|e| ShortdashError::io(format!("request worker failed: {}", e)))?
}

/// Map status + body into the caller's type or a normalized error
fn decode_response<T: DeserializeOwned>(
    response: ureq::http::Response<ureq::Body>,
) -> Result<T, ShortdashError> {
    let status = response.status().as_u16();
    let body = response
        .into_body()
        .read_to_string()
        .map_err(|e| ShortdashError::network(format!("failed to read body: {}", e)))?;

    if !(200..300).contains(&status) {
        // Prefer the server's structured message over the raw body
        let message = match serde_json::from_str::<ErrorBody>(&body) {
            Ok(parsed) => parsed.error.message,
            Err(_) if body.trim().is_empty() => "no response body".to_string(),
            Err(_) => truncate_body(&body),
        };
        return Err(ShortdashError::api_status(status, message));
    }

    if body.trim().is_empty() {
        return Err(ShortdashError::malformed_response("empty response body"));
    }

    serde_json::from_str(&body)
        .map_err(|e| ShortdashError::malformed_response(format!("invalid JSON: {}", e)))
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = body
            .char_indices()
            .take_while(|(i, _)| *i < MAX)
            .last()
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);
        format!("{}…", &body[..cut])
    } else {
        body.to_string()
    }
}

//! Wire DTO shapes and query-string assembly

use chrono::{DateTime, Utc};
use serde_json::json;

use shortdash::client::{
    ClickQuery, DomainListResponse, LinkStatsResponse, LinksQuery, ShortenRequest,
    ShortenResponse, StatsListResponse, UrlSpec,
};

fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

#[test]
fn stats_list_response_parses() {
    let response: StatsListResponse = serde_json::from_value(json!({
        "items": [
            {
                "code": "promo",
                "domain": "sho.rt",
                "long_url": "https://example.com/campaign",
                "total_clicks": 128,
                "created_at": "2024-03-01T10:15:00Z"
            }
        ],
        "pagination": {"page": 2, "page_size": 25, "total_items": 31, "total_pages": 2}
    }))
    .unwrap();

    assert_eq!(response.items.len(), 1);
    let link = &response.items[0];
    assert_eq!(link.code, "promo");
    assert_eq!(link.total_clicks, 128);
    assert_eq!(link.short_url(), "https://sho.rt/promo");
    assert_eq!(response.pagination.total_pages, 2);
}

#[test]
fn link_stats_response_parses_with_optional_click_fields() {
    let response: LinkStatsResponse = serde_json::from_value(json!({
        "code": "promo",
        "domain": "sho.rt",
        "long_url": "https://example.com/campaign",
        "created_at": "2024-03-01T10:15:00Z",
        "total_clicks": 2,
        "items": [
            {"clicked_at": "2024-03-02T11:00:00Z", "user_agent": "Mozilla/5.0", "referer": "https://news.site/", "ip": "203.0.113.9"},
            {"clicked_at": "2024-03-02T12:00:00Z"}
        ],
        "pagination": {"page": 1, "page_size": 25, "total_items": 2, "total_pages": 1}
    }))
    .unwrap();

    assert_eq!(response.items.len(), 2);
    assert_eq!(response.items[0].ip.as_deref(), Some("203.0.113.9"));
    assert!(response.items[1].user_agent.is_none());
    assert!(response.items[1].referer.is_none());
    assert_eq!(response.short_url(), "https://sho.rt/promo");
}

#[test]
fn domain_list_parses_without_optional_description() {
    let response: DomainListResponse = serde_json::from_value(json!({
        "items": [
            {"domain": "sho.rt", "is_default": true, "is_active": true},
            {"domain": "alt.example", "is_default": false, "is_active": false, "description": "legacy"}
        ]
    }))
    .unwrap();

    assert!(response.items[0].is_default);
    assert!(response.items[0].description.is_none());
    assert_eq!(response.items[1].description.as_deref(), Some("legacy"));
}

#[test]
fn shorten_response_parses_mixed_outcomes() {
    let response: ShortenResponse = serde_json::from_value(json!({
        "summary": {"total": 2, "successful": 1, "failed": 1},
        "items": [
            {"long_url": "https://example.com/a", "code": "abc", "short_url": "https://sho.rt/abc"},
            {"long_url": "https://example.com/b", "error": {"code": "conflict", "message": "code already taken", "details": {"requested": "abc"}}}
        ]
    }))
    .unwrap();

    assert_eq!(response.summary.successful, 1);
    assert!(response.items[0].is_success());
    assert_eq!(response.items[0].code.as_deref(), Some("abc"));
    let error = response.items[1].error.as_ref().unwrap();
    assert_eq!(error.code, "conflict");
    assert!(error.details.is_some());
}

#[test]
fn shorten_request_omits_unset_fields() {
    let request = ShortenRequest {
        urls: vec![
            UrlSpec {
                url: "https://example.com/a".into(),
                domain: None,
                custom_code: None,
            },
            UrlSpec {
                url: "https://example.com/b".into(),
                domain: Some("alt.example".into()),
                custom_code: Some("promo".into()),
            },
        ],
    };

    let body = serde_json::to_value(&request).unwrap();
    assert_eq!(
        body,
        json!({
            "urls": [
                {"url": "https://example.com/a"},
                {"url": "https://example.com/b", "domain": "alt.example", "custom_code": "promo"}
            ]
        })
    );
}

#[test]
fn links_query_serializes_set_fields_only() {
    let full = LinksQuery {
        page: 2,
        page_size: 50,
        from: Some(utc("2024-03-01T00:00:00Z")),
        to: Some(utc("2024-03-31T23:59:59Z")),
        domain: Some("sho.rt".into()),
    };
    let pairs = full.to_query_pairs();
    assert_eq!(
        pairs,
        vec![
            ("page", "2".to_string()),
            ("page_size", "50".to_string()),
            ("from", "2024-03-01T00:00:00Z".to_string()),
            ("to", "2024-03-31T23:59:59Z".to_string()),
            ("domain", "sho.rt".to_string()),
        ]
    );

    let minimal = LinksQuery {
        page: 1,
        page_size: 25,
        ..LinksQuery::default()
    };
    let pairs = minimal.to_query_pairs();
    assert_eq!(
        pairs,
        vec![("page", "1".to_string()), ("page_size", "25".to_string())]
    );
}

#[test]
fn click_query_empty_domain_never_appears() {
    let query = ClickQuery {
        page: 1,
        page_size: 1000,
        from: None,
        to: None,
    };
    let pairs = query.to_query_pairs();
    assert!(pairs.iter().all(|(key, _)| *key != "from" && *key != "to"));
    assert_eq!(pairs[1], ("page_size", "1000".to_string()));
}

//! View-state behavior: filter/page transitions, table-chart decoupling,
//! stale-response handling and batch result folding

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde_json::json;

use shortdash::client::{LinkStatsResponse, ShortenResponse, StatsListResponse};
use shortdash::errors::ShortdashError;
use shortdash::stats::{CHART_FETCH_CAP, Period};
use shortdash::views::{LinksView, StatsFetch, StatsView};

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

fn link_stats_response(total_pages: u32, clicked_at: &[&str]) -> LinkStatsResponse {
    let items: Vec<serde_json::Value> = clicked_at
        .iter()
        .map(|ts| json!({"clicked_at": ts, "user_agent": "curl/8", "referer": null, "ip": "203.0.113.9"}))
        .collect();
    serde_json::from_value(json!({
        "code": "promo",
        "domain": "sho.rt",
        "long_url": "https://example.com/campaign",
        "created_at": "2024-01-01T09:00:00Z",
        "total_clicks": 40,
        "items": items,
        "pagination": {"page": 1, "page_size": 25, "total_items": 40, "total_pages": total_pages}
    }))
    .unwrap()
}

fn links_response(codes: &[&str], total_pages: u32) -> StatsListResponse {
    let items: Vec<serde_json::Value> = codes
        .iter()
        .map(|code| {
            json!({
                "code": code,
                "domain": "sho.rt",
                "long_url": format!("https://example.com/{}", code),
                "total_clicks": 3,
                "created_at": "2024-01-01T09:00:00Z"
            })
        })
        .collect();
    serde_json::from_value(json!({
        "items": items,
        "pagination": {"page": 1, "page_size": 25, "total_items": codes.len(), "total_pages": total_pages}
    }))
    .unwrap()
}

fn table_query(fetch: &StatsFetch) -> &shortdash::client::ClickQuery {
    match fetch {
        StatsFetch::Table { query, .. } | StatsFetch::Chart { query, .. } => query,
    }
}

fn seq_of(fetch: &StatsFetch) -> u64 {
    match fetch {
        StatsFetch::Table { seq, .. } | StatsFetch::Chart { seq, .. } => *seq,
    }
}

// ---- Period transitions (the today → all staleness property) ----

#[test]
fn switching_today_to_all_resets_page_and_drops_every_bound() {
    let mut view = StatsView::new("promo", 25);
    let now = at("2024-07-10T15:45:00+00:00");

    // Open, learn the page count, move off page 1
    let open = view.open();
    let table_seq = seq_of(&open[0]);
    view.apply_table_response(table_seq, Ok(link_stats_response(5, &[])));
    view.set_page(3);
    assert_eq!(view.page, 3);

    // Bounded period
    let today_fetches = view.set_period_at(Period::Today, now);
    assert_eq!(view.page, 1);
    for fetch in &today_fetches {
        assert!(table_query(fetch).from.is_some());
        assert!(table_query(fetch).to.is_some());
    }

    // Page off 1 again, then go unbounded
    view.apply_table_response(
        match &today_fetches[0] {
            StatsFetch::Table { seq, .. } => *seq,
            StatsFetch::Chart { seq, .. } => *seq,
        },
        Ok(link_stats_response(5, &[])),
    );
    view.set_page(2);

    let all_fetches = view.set_period_at(Period::All, now);
    assert_eq!(view.page, 1, "period change must reset the table to page 1");
    for fetch in &all_fetches {
        let query = table_query(fetch);
        assert!(query.from.is_none(), "no stale bound may leak into 'all'");
        assert!(query.to.is_none(), "no stale bound may leak into 'all'");
    }
}

#[test]
fn period_change_refreshes_both_targets() {
    let mut view = StatsView::new("promo", 25);
    let fetches = view.set_period_at(Period::Week, at("2024-07-10T12:00:00+00:00"));
    assert_eq!(fetches.len(), 2);
    assert!(matches!(fetches[0], StatsFetch::Table { .. }));
    assert!(matches!(fetches[1], StatsFetch::Chart { .. }));
}

#[test]
fn custom_range_with_no_bounds_is_rejected_without_a_fetch() {
    let mut view = StatsView::new("promo", 25);
    view.set_period_at(Period::Today, at("2024-07-10T12:00:00+00:00"));
    let before = view.range();

    let err = view.set_custom_range(None, None).unwrap_err();
    assert!(matches!(err, ShortdashError::Validation(_)));
    assert_eq!(view.range(), before, "failed validation must not touch the filter");
}

// ---- Table/chart decoupling ----

#[test]
fn page_change_fetches_the_table_only() {
    let mut view = StatsView::new("promo", 25);
    let open = view.open();
    view.apply_table_response(seq_of(&open[0]), Ok(link_stats_response(4, &[])));

    let fetch = view.set_page(2);
    assert!(matches!(fetch, StatsFetch::Table { .. }));
    assert_eq!(table_query(&fetch).page, 2);
}

#[test]
fn page_change_leaves_the_chart_output_untouched() {
    let tz = FixedOffset::east_opt(0).unwrap();
    let today: NaiveDate = "2024-05-20".parse().unwrap();
    let mut view = StatsView::new("promo", 25);

    let open = view.open();
    let chart_seq = seq_of(&open[1]);
    view.apply_table_response(seq_of(&open[0]), Ok(link_stats_response(4, &[])));
    view.apply_chart_response_in(
        &tz,
        today,
        chart_seq,
        Ok(link_stats_response(1, &["2024-05-18T10:00:00Z", "2024-05-18T11:00:00Z"])),
    );
    let chart_before = view.chart.clone();
    assert!(!chart_before.is_empty());

    view.set_page(2);
    view.set_page(3);
    assert_eq!(view.chart, chart_before);
}

#[test]
fn chart_always_requests_the_capped_unpaginated_snapshot() {
    let mut view = StatsView::new("promo", 25);
    let open = view.open();
    view.apply_table_response(seq_of(&open[0]), Ok(link_stats_response(9, &[])));
    view.set_page(7);

    let fetches = view.set_period_at(Period::Week, at("2024-07-10T12:00:00+00:00"));
    let chart = fetches
        .iter()
        .find(|f| matches!(f, StatsFetch::Chart { .. }))
        .unwrap();
    assert_eq!(table_query(chart).page, 1);
    assert_eq!(table_query(chart).page_size, CHART_FETCH_CAP);
}

// ---- Error isolation between panels ----

#[test]
fn chart_failure_leaves_the_table_alone_and_vice_versa() {
    let mut view = StatsView::new("promo", 25);
    let open = view.open();
    let (table_seq, chart_seq) = (seq_of(&open[0]), seq_of(&open[1]));

    view.apply_table_response(table_seq, Ok(link_stats_response(2, &["2024-05-18T10:00:00Z"])));
    view.apply_chart_response_in(
        &FixedOffset::east_opt(0).unwrap(),
        "2024-05-20".parse().unwrap(),
        chart_seq,
        Err(ShortdashError::network("connection reset")),
    );

    assert!(view.chart_error.is_some());
    assert!(view.table_error.is_none());
    assert_eq!(view.clicks.len(), 1, "table data survives a chart failure");

    // Now the table fails while the chart holds data
    let fetch = view.set_page(1);
    view.apply_table_response(seq_of(&fetch), Err(ShortdashError::api_status(502, "bad gateway")));
    assert!(view.table_error.is_some());
    assert_eq!(view.clicks.len(), 1, "stale rows stay rendered under the error banner");
}

// ---- Stale responses ----

#[test]
fn superseded_table_response_is_discarded() {
    let mut view = StatsView::new("promo", 25);
    let open = view.open();
    let first_seq = seq_of(&open[0]);
    view.apply_table_response(first_seq, Ok(link_stats_response(6, &[])));

    // Two page jumps in quick succession; the first response arrives late
    let slow = view.set_page(2);
    let fast = view.set_page(3);

    let applied_fast = view.apply_table_response(
        seq_of(&fast),
        Ok(link_stats_response(6, &["2024-05-18T10:00:00Z"])),
    );
    assert!(applied_fast);
    assert_eq!(view.clicks.len(), 1);

    let applied_slow = view.apply_table_response(seq_of(&slow), Ok(link_stats_response(6, &[])));
    assert!(!applied_slow, "older response must be dropped");
    assert_eq!(view.clicks.len(), 1, "fresher data must survive");
}

#[test]
fn superseded_links_response_is_discarded() {
    let mut view = LinksView::new(25);
    let slow = view.start_fetch();
    let fast = view.start_fetch();

    assert!(view.apply_response(fast.seq, Ok(links_response(&["a", "b"], 1))));
    assert!(!view.apply_response(slow.seq, Ok(links_response(&["stale"], 1))));
    assert_eq!(view.rows.len(), 2);
}

// ---- Links filter behavior ----

#[test]
fn filter_change_resets_to_page_one_but_page_change_keeps_filter() {
    let mut view = LinksView::new(25);
    let fetch = view.start_fetch();
    view.apply_response(fetch.seq, Ok(links_response(&["a"], 8)));

    view.set_page(5);
    assert_eq!(view.page, 5);

    let fetch = view.apply_filters(None, None, Some("sho.rt".into()), 25);
    assert_eq!(fetch.query.page, 1);
    assert_eq!(fetch.query.domain.as_deref(), Some("sho.rt"));

    view.apply_response(fetch.seq, Ok(links_response(&["a"], 8)));
    let fetch = view.set_page(3);
    assert_eq!(fetch.query.page, 3);
    assert_eq!(fetch.query.domain.as_deref(), Some("sho.rt"), "paging keeps the filter");
}

#[test]
fn reset_filters_clears_every_field() {
    let mut view = LinksView::new(25);
    let fetch = view.apply_filters(
        Some(Utc::now()),
        Some(Utc::now()),
        Some("sho.rt".into()),
        50,
    );
    view.apply_response(fetch.seq, Ok(links_response(&["a"], 1)));

    let fetch = view.reset_filters();
    assert!(fetch.query.from.is_none());
    assert!(fetch.query.to.is_none());
    assert!(fetch.query.domain.is_none());
    assert_eq!(fetch.query.page, 1);
}

// ---- Batch creation results ----

#[test]
fn partial_failure_batch_keeps_three_ordered_rows_and_signals_relist() {
    let mut view = shortdash::views::CreateView::new(20);
    let response: ShortenResponse = serde_json::from_value(json!({
        "summary": {"total": 3, "successful": 2, "failed": 1},
        "items": [
            {"long_url": "https://example.com/1", "code": "one", "short_url": "https://sho.rt/one"},
            {"long_url": "https://example.com/2", "error": {"code": "conflict", "message": "code already taken", "details": {"code": "two"}}},
            {"long_url": "https://example.com/3", "code": "three", "short_url": "https://sho.rt/three"}
        ]
    }))
    .unwrap();

    let should_refresh = view.apply_response(response);
    assert!(should_refresh, "one success is enough to trigger a relist");

    let results = view.results.as_ref().unwrap();
    assert_eq!(results.items.len(), 3, "every item renders, pass or fail");
    assert!(results.items[0].is_success());
    assert!(!results.items[1].is_success());
    assert!(results.items[2].is_success());
    assert_eq!(results.items[1].long_url, "https://example.com/2");
    assert_eq!(
        results.items[1].error.as_ref().unwrap().message,
        "code already taken"
    );
}

#[test]
fn fully_failed_batch_does_not_trigger_a_relist() {
    let mut view = shortdash::views::CreateView::new(20);
    let response: ShortenResponse = serde_json::from_value(json!({
        "summary": {"total": 1, "successful": 0, "failed": 1},
        "items": [
            {"long_url": "https://example.com/1", "error": {"code": "validation_error", "message": "bad url"}}
        ]
    }))
    .unwrap();

    assert!(!view.apply_response(response));
}

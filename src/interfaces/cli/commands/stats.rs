//! Per-link statistics command
//!
//! Prints the metadata panel, a daily click chart and one page of the
//! click table. The table page and the chart snapshot are independent
//! requests over the same filter and run concurrently.

use colored::Colorize;

use crate::client::{ApiClient, ClickQuery};
use crate::interfaces::cli::CliError;
use crate::stats::{CHART_FETCH_CAP, DateBucket, DateRange, Period, bucket_clicks};
use crate::utils::{format_datetime, truncate_url};

use super::parse_date_arg;

const CHART_BAR_WIDTH: usize = 40;

#[allow(clippy::too_many_arguments)]
pub async fn show_stats(
    client: &ApiClient,
    code: &str,
    page: u32,
    page_size: Option<u32>,
    period: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<(), CliError> {
    let range = resolve_range(period, from, to)?;

    let table_query = ClickQuery {
        page,
        page_size: page_size.unwrap_or(crate::config::get_config().ui.page_size),
        from: range.from,
        to: range.to,
    };
    let chart_query = ClickQuery {
        page: 1,
        page_size: CHART_FETCH_CAP,
        from: range.from,
        to: range.to,
    };

    let (table, chart) = tokio::join!(
        client.link_stats(code, &table_query),
        client.link_stats(code, &chart_query),
    );
    let table = table?;

    // Metadata panel
    println!("{}", table.short_url().cyan().bold().underline());
    println!("  {} {}", "→".dimmed(), truncate_url(&table.long_url, 80).blue());
    println!(
        "  {} {}   {} {}",
        "total clicks:".dimmed(),
        table.total_clicks.to_string().green().bold(),
        "created:".dimmed(),
        format_datetime(&table.created_at)
    );
    println!();

    // Chart panel: a chart failure must not take the table down with it
    match chart {
        Ok(snapshot) => print_chart(&bucket_clicks(&snapshot.items, range)),
        Err(e) => println!("{} chart unavailable: {}", "⚠".yellow(), e.format_simple()),
    }
    println!();

    // Click table page
    if table.items.is_empty() {
        println!("{} No clicks in the selected period", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Clicks:".bold().green());
    for click in &table.items {
        let referer = click.referer.as_deref().unwrap_or("—");
        let ip = click.ip.as_deref().unwrap_or("—");
        let agent = click.user_agent.as_deref().unwrap_or("—");
        println!(
            "  {}  {}  {}  {}",
            format_datetime(&click.clicked_at).cyan(),
            ip.yellow(),
            truncate_url(referer, 40).dimmed(),
            truncate_url(agent, 40).dimmed(),
        );
    }
    println!();
    println!(
        "{} Showing {} of {} clicks (page {}/{})",
        "ℹ".bold().blue(),
        table.items.len().to_string().green(),
        table.pagination.total_items,
        table.pagination.page,
        table.pagination.total_pages.max(1)
    );

    Ok(())
}

fn resolve_range(
    period: Option<String>,
    from: Option<String>,
    to: Option<String>,
) -> Result<DateRange, CliError> {
    let from = parse_date_arg(from, false)?;
    let to = parse_date_arg(to, true)?;
    if from.is_some() || to.is_some() {
        return DateRange::custom(from, to).map_err(|e| CliError::ParseError(e.format_simple()));
    }
    let period: Period = period
        .as_deref()
        .unwrap_or("all")
        .parse()
        .map_err(|e: crate::errors::ShortdashError| CliError::ParseError(e.format_simple()))?;
    Ok(period.resolve())
}

/// Horizontal bar chart of the daily series
fn print_chart(buckets: &[DateBucket]) {
    let max = buckets.iter().map(|b| b.clicks).max().unwrap_or(0);
    if max == 0 {
        println!("{} No clicks to chart in this range", "ℹ".bold().blue());
        return;
    }

    println!("{}", "Clicks per day:".bold().green());
    for bucket in buckets {
        let width = ((bucket.clicks as f64 / max as f64) * CHART_BAR_WIDTH as f64).round() as usize;
        let bar: String = "▇".repeat(width);
        println!(
            "  {}  {:>5}  {}",
            bucket.date.format("%Y-%m-%d").to_string().dimmed(),
            bucket.clicks.to_string().green(),
            bar.cyan()
        );
    }
}

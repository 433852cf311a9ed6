//! List links command

use colored::Colorize;

use crate::client::{ApiClient, LinksQuery};
use crate::interfaces::cli::CliError;
use crate::utils::{format_relative, truncate_url};

use super::parse_date_arg;

pub async fn list_links(
    client: &ApiClient,
    page: u32,
    page_size: Option<u32>,
    from: Option<String>,
    to: Option<String>,
    domain: Option<String>,
) -> Result<(), CliError> {
    let query = LinksQuery {
        page,
        page_size: page_size.unwrap_or(crate::config::get_config().ui.page_size),
        from: parse_date_arg(from, false)?,
        to: parse_date_arg(to, true)?,
        domain,
    };

    let response = client.list_links(&query).await?;

    if response.items.is_empty() {
        println!("{} No links found", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Short links:".bold().green());
    println!();
    for link in &response.items {
        println!(
            "  {} {} {} {} {}",
            link.code.cyan().bold(),
            format!("({})", link.domain).dimmed(),
            truncate_url(&link.long_url, 60).blue().underline(),
            format!("clicks: {}", link.total_clicks).green(),
            format_relative(&link.created_at).dimmed(),
        );
    }
    println!();
    println!(
        "{} Showing {} of {} links (page {}/{})",
        "ℹ".bold().blue(),
        response.items.len().to_string().green(),
        response.pagination.total_items,
        response.pagination.page,
        response.pagination.total_pages.max(1)
    );

    Ok(())
}

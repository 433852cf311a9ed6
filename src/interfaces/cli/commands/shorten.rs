//! Batch link creation command

use colored::Colorize;

use crate::client::{ApiClient, LinksQuery, ShortenRequest, UrlSpec};
use crate::interfaces::cli::CliError;
use crate::utils::{validate_custom_code, validate_long_url};

pub async fn shorten_links(
    client: &ApiClient,
    urls: Vec<String>,
    domain: Option<String>,
    code: Option<String>,
) -> Result<(), CliError> {
    if code.is_some() && urls.len() > 1 {
        return Err(CliError::CommandError(
            "--code requires exactly one URL".to_string(),
        ));
    }
    if let Some(code) = &code {
        validate_custom_code(code).map_err(CliError::ParseError)?;
    }
    for (index, url) in urls.iter().enumerate() {
        validate_long_url(url)
            .map_err(|e| CliError::ParseError(format!("link #{}: {}", index + 1, e)))?;
    }

    let request = ShortenRequest {
        urls: urls
            .into_iter()
            .map(|url| UrlSpec {
                url,
                domain: domain.clone(),
                custom_code: code.clone(),
            })
            .collect(),
    };

    let response = client.shorten(&request).await?;

    let mark = if response.summary.successful > 0 {
        "✓".green().bold()
    } else {
        "✗".red().bold()
    };
    println!(
        "{} Created {} of {} links",
        mark,
        response.summary.successful.to_string().green(),
        response.summary.total
    );
    println!();

    // Every item reports independently, in input order
    for item in &response.items {
        match (&item.short_url, &item.error) {
            (Some(short_url), _) => {
                println!(
                    "  {} {} {} {}",
                    "✓".green(),
                    item.long_url.blue(),
                    "→".dimmed(),
                    short_url.cyan().bold()
                );
            }
            (None, Some(error)) => {
                println!("  {} {}", "✗".red(), item.long_url.blue());
                println!("    {}", error.message.red());
                if let Some(details) = &error.details {
                    println!("    {}", details.to_string().dimmed());
                }
            }
            (None, None) => {
                println!("  {} {} (no result)", "?".yellow(), item.long_url.blue());
            }
        }
    }

    // Refresh the recent-links panel only when something was created
    if response.summary.successful > 0 {
        let recent = client
            .list_links(&LinksQuery {
                page: 1,
                page_size: crate::config::get_config().ui.recent_page_size,
                ..LinksQuery::default()
            })
            .await;
        if let Ok(recent) = recent {
            println!();
            println!("{}", "Recent links:".bold().green());
            for link in recent.items.iter().take(5) {
                println!(
                    "  {} {} {}",
                    link.code.cyan(),
                    "→".dimmed(),
                    crate::utils::truncate_url(&link.long_url, 60).blue()
                );
            }
        }
    }

    Ok(())
}

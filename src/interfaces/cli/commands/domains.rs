//! List domains command

use colored::Colorize;

use crate::client::ApiClient;
use crate::interfaces::cli::CliError;

pub async fn list_domains(client: &ApiClient) -> Result<(), CliError> {
    let response = client.list_domains().await?;

    if response.items.is_empty() {
        println!("{} No domains configured", "ℹ".bold().blue());
        return Ok(());
    }

    println!("{}", "Domains:".bold().green());
    for item in &response.items {
        let mut parts = vec![if item.is_active {
            item.domain.cyan().to_string()
        } else {
            format!("{} {}", item.domain.dimmed(), "(inactive)".dimmed())
        }];
        if item.is_default {
            parts.push("★ default".yellow().to_string());
        }
        if let Some(description) = &item.description {
            parts.push(description.dimmed().to_string());
        }
        println!("  {}", parts.join(" "));
    }

    Ok(())
}

//! CLI interface module
//!
//! One-shot commands over the dashboard API. Each command builds its own
//! view of the data and prints it; nothing is cached between runs.

pub mod commands;

use std::fmt;

use crate::cli::{Commands, ConfigCommands};
use crate::client::ApiClient;
use commands::{config_generate, list_domains, list_links, shorten_links, show_stats};

#[derive(Debug)]
pub enum CliError {
    RequestError(String),
    ParseError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::RequestError(msg) => format!("Request error: {}", msg),
            CliError::ParseError(msg) => format!("Parse error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    #[cfg(feature = "cli")]
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::RequestError(msg) => {
                format!("{} {}", "Request error:".red().bold(), msg.white())
            }
            CliError::ParseError(msg) => {
                format!("{} {}", "Parse error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::ShortdashError> for CliError {
    fn from(err: crate::errors::ShortdashError) -> Self {
        use crate::errors::ShortdashError;
        match err {
            ShortdashError::Validation(_) | ShortdashError::DateParse(_) => {
                CliError::ParseError(err.format_simple())
            }
            _ => CliError::RequestError(err.format_simple()),
        }
    }
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // Config generation needs no API access
    if let Commands::Config { action } = cmd {
        let ConfigCommands::Generate { output_path, force } = action;
        return config_generate(output_path, force);
    }

    let client = ApiClient::from_config();

    match cmd {
        Commands::Links {
            page,
            page_size,
            from,
            to,
            domain,
        } => list_links(&client, page, page_size, from, to, domain).await,

        Commands::Stats {
            code,
            page,
            page_size,
            period,
            from,
            to,
        } => show_stats(&client, &code, page, page_size, period, from, to).await,

        Commands::Shorten { urls, domain, code } => {
            shorten_links(&client, urls, domain, code).await
        }

        Commands::Domains => list_domains(&client).await,

        Commands::Config { .. } => unreachable!("handled above"),

        #[cfg(feature = "tui")]
        Commands::Tui => unreachable!("TUI handled in main"),
    }
}

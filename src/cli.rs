//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for shortdash using clap's
//! derive macros.

use clap::{Parser, Subcommand};

/// Shortdash - terminal dashboard for a URL-shortening service
#[derive(Parser)]
#[command(name = "shortdash")]
#[command(version)]
#[command(about = "Terminal dashboard for a URL-shortening service", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive dashboard
    #[cfg(feature = "tui")]
    Tui,

    /// List short links with optional filters
    Links {
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Rows per page (server accepts 10..=50)
        #[arg(long)]
        page_size: Option<u32>,

        /// Only links created after this date (YYYY-MM-DD or RFC3339)
        #[arg(long)]
        from: Option<String>,

        /// Only links created before this date (YYYY-MM-DD or RFC3339)
        #[arg(long)]
        to: Option<String>,

        /// Only links on this domain
        #[arg(long)]
        domain: Option<String>,
    },

    /// Show click statistics for one short code
    Stats {
        /// Short code to inspect
        code: String,

        /// Page number of the click table
        #[arg(long, default_value_t = 1)]
        page: u32,

        /// Rows per page in the click table
        #[arg(long)]
        page_size: Option<u32>,

        /// Quick period: today, week, month or all
        #[arg(long, conflicts_with_all = ["from", "to"])]
        period: Option<String>,

        /// Custom range start (YYYY-MM-DD or RFC3339)
        #[arg(long)]
        from: Option<String>,

        /// Custom range end (YYYY-MM-DD or RFC3339)
        #[arg(long)]
        to: Option<String>,
    },

    /// Create short links in one batch
    Shorten {
        /// Long URLs to shorten
        #[arg(required = true, num_args = 1..)]
        urls: Vec<String>,

        /// Domain for every created link (server default when omitted)
        #[arg(long)]
        domain: Option<String>,

        /// Custom short code (single URL only)
        #[arg(long)]
        code: Option<String>,
    },

    /// List the configured domains
    Domains,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: shortdash.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

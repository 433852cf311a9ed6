use clap::Parser;
use tracing_subscriber::EnvFilter;

use shortdash::cli::{Cli, Commands};
use shortdash::config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    config::init_config();

    match cli.command {
        #[cfg(feature = "tui")]
        Some(Commands::Tui) => run_tui_mode().await?,

        Some(cmd) => run_cli_mode(cmd).await,

        None => {
            #[cfg(feature = "tui")]
            run_tui_mode().await?;

            #[cfg(not(feature = "tui"))]
            {
                use clap::CommandFactory;
                Cli::command().print_help()?;
            }
        }
    }

    Ok(())
}

async fn run_cli_mode(cmd: Commands) {
    init_cli_logging();

    if let Err(e) = shortdash::interfaces::cli::run_cli_command(cmd).await {
        #[cfg(feature = "cli")]
        eprintln!("{}", e.format_colored());
        #[cfg(not(feature = "cli"))]
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(feature = "tui")]
async fn run_tui_mode() -> anyhow::Result<()> {
    // Keep the guard alive for the whole session so buffered log lines
    // are flushed when the TUI exits
    let _guard = init_tui_logging();
    shortdash::interfaces::tui::run_tui()
        .await
        .map_err(|e| anyhow::anyhow!("TUI error: {}", e))
}

fn env_filter() -> EnvFilter {
    let config = config::get_config();
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level))
}

fn init_cli_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();
}

/// Log to a file while the TUI owns the terminal
#[cfg(feature = "tui")]
fn init_tui_logging() -> tracing_appender::non_blocking::WorkerGuard {
    use std::path::Path;

    let config = config::get_config();
    let path = Path::new(&config.logging.file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file = path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("shortdash.log"));

    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(writer)
        .with_ansi(false)
        .init();
    guard
}

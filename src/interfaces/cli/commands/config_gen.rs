//! Generate example configuration file

use std::path::Path;

use colored::Colorize;

use crate::config::Config;
use crate::interfaces::cli::CliError;

pub fn config_generate(output_path: Option<String>, force: bool) -> Result<(), CliError> {
    let path = output_path.unwrap_or_else(|| "shortdash.example.toml".to_string());

    if Path::new(&path).exists() && !force {
        return Err(CliError::CommandError(format!(
            "{} already exists (use --force to overwrite)",
            path
        )));
    }

    std::fs::write(&path, Config::generate_sample_config())
        .map_err(|e| CliError::CommandError(format!("failed to write {}: {}", path, e)))?;

    println!(
        "{} Sample configuration written to {}",
        "✓".green().bold(),
        path.cyan()
    );
    Ok(())
}

//! Configuration loading for CLI commands

use anyhow::{Context, Result};
use freightcast_core::config::{CliConfigOverrides, LayeredConfig};

use crate::cli::Cli;

/// Defaults, then the `--config` file, then the environment, then flags
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    if let Some(path) = &cli.config {
        config = config
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    }

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        records_path: cli.paths.records.clone(),
        history_path: cli.paths.history.clone(),
        cities_path: cli.paths.cities.clone(),
        default_origin: cli.paths.origin.clone(),
    });

    Ok(config)
}

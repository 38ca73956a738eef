//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use pm10dash_core::config::{CliConfigOverrides, LayeredConfig, DEFAULT_CONFIG_FILE};

use crate::cli::Cli;

/// Load layered configuration: file, then environment, then CLI flags
pub fn load_config(cli: &Cli) -> Result<LayeredConfig> {
    let config = match &cli.config {
        Some(path) => LayeredConfig::with_defaults()
            .load_from_file(path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?,
        None => LayeredConfig::with_defaults()
            .load_from_optional_file(DEFAULT_CONFIG_FILE)
            .context("Failed to load configuration file")?,
    };

    let mut config = config.load_from_env();
    config.update_from_cli(CliConfigOverrides {
        stations_url: cli.stations_url.clone(),
        boundaries_url: cli.boundaries_url.clone(),
        boundary_cache: cli.boundary_cache.clone(),
    })?;

    Ok(config)
}

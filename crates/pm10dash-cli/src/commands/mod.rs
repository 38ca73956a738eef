//! Command implementations

mod boundaries;
mod config;
mod show;
mod stations;

use crate::cli::{Cli, Commands};
use crate::config_loader::load_config;
use crate::output::OutputWriter;
use anyhow::Result;
use pm10dash_core::config::LayeredConfig;
use pm10dash_core::DensityPipeline;

/// Execute a CLI command
pub async fn execute(cli: Cli) -> Result<()> {
    let output = OutputWriter::new(cli.json);
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Show => show::execute(&pipeline(&config), &output).await,
        Commands::Stations(args) => stations::execute(args, &pipeline(&config), &output).await,
        Commands::Boundaries(args) => boundaries::execute(args, &pipeline(&config), &output).await,
        Commands::Config => config::execute(&config, &output),
    }
}

fn pipeline(config: &LayeredConfig) -> DensityPipeline {
    let resolved = config.resolve();
    tracing::debug!(
        stations_url = %resolved.stations_url(),
        boundaries_url = %resolved.boundaries_url,
        boundary_cache = %resolved.boundary_cache.display(),
        "Resolved pipeline configuration"
    );
    DensityPipeline::with_reqwest(resolved)
}

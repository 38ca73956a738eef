use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pm10dash - PM10 monitoring station density per country
#[derive(Parser, Debug)]
#[command(name = "pm10dash")]
#[command(about = "PM10 monitoring station density for selected countries", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Output results in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to ./pm10dash.toml when present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Station endpoint, without the query string
    #[arg(long, global = true, value_name = "URL")]
    pub stations_url: Option<String>,

    /// Country boundary GeoJSON URL
    #[arg(long, global = true, value_name = "URL")]
    pub boundaries_url: Option<String>,

    /// Local boundary cache file
    #[arg(long, global = true, value_name = "FILE")]
    pub boundary_cache: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch data and show the station density table
    Show,

    /// Show raw station counts per country_id
    Stations(StationsArgs),

    /// Load country boundaries and summarize them
    Boundaries(BoundariesArgs),

    /// Show resolved configuration and where each value came from
    Config,
}

#[derive(Parser, Debug)]
pub struct StationsArgs {
    /// Only list codes present in the country table
    #[arg(long)]
    pub configured_only: bool,
}

#[derive(Parser, Debug)]
pub struct BoundariesArgs {
    /// List every boundary feature
    #[arg(long)]
    pub verbose: bool,
}

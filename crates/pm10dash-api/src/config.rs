use std::env;
use std::path::PathBuf;

use pm10dash_core::config::{LayeredConfig, PipelineConfig, DEFAULT_CONFIG_FILE};

/// API server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub config_file: Option<PathBuf>,
}

impl ApiConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = env::var("PM10DASH_PORT").ok().and_then(|p| p.parse().ok()).unwrap_or(8501);

        let config_file = env::var("PM10DASH_CONFIG").ok().map(PathBuf::from);

        Self { port, config_file }
    }

    /// Get the server bind address
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }

    /// Resolve pipeline settings: an explicit `PM10DASH_CONFIG` file must exist,
    /// otherwise `pm10dash.toml` is used when present. Environment overrides follow.
    pub fn pipeline_config(&self) -> pm10dash_core::Result<PipelineConfig> {
        let layered = match &self.config_file {
            Some(path) => LayeredConfig::with_defaults().load_from_file(path)?,
            None => LayeredConfig::with_defaults().load_from_optional_file(DEFAULT_CONFIG_FILE)?,
        };
        Ok(layered.load_from_env().resolve())
    }
}

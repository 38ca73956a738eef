use crate::error::{DensityError, Result};
use crate::models::{CountryRecord, CountryTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_STATIONS_ENDPOINT: &str = "https://api.energyandcleanair.org/stations";
pub const DEFAULT_BOUNDARIES_URL: &str =
    "https://r2.datahub.io/clvyjaryy0000la0cxieg4o8o/main/raw/data/countries.geojson";
pub const DEFAULT_BOUNDARY_CACHE: &str = "countries.geojson";

/// Config file picked up from the working directory when present
pub const DEFAULT_CONFIG_FILE: &str = "pm10dash.toml";

pub const ENV_STATIONS_URL: &str = "PM10DASH_STATIONS_URL";
pub const ENV_BOUNDARIES_URL: &str = "PM10DASH_BOUNDARIES_URL";
pub const ENV_BOUNDARY_CACHE: &str = "PM10DASH_BOUNDARY_CACHE";

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Compiled-in default
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration: defaults < file < environment < CLI
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub stations_url: ConfigValue<String>,
    pub boundaries_url: ConfigValue<String>,
    pub boundary_cache: ConfigValue<PathBuf>,
    pub countries: ConfigValue<CountryTable>,
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            stations_url: ConfigValue::new(
                DEFAULT_STATIONS_ENDPOINT.to_string(),
                ConfigSource::Default,
            ),
            boundaries_url: ConfigValue::new(
                DEFAULT_BOUNDARIES_URL.to_string(),
                ConfigSource::Default,
            ),
            boundary_cache: ConfigValue::new(
                PathBuf::from(DEFAULT_BOUNDARY_CACHE),
                ConfigSource::Default,
            ),
            countries: ConfigValue::new(CountryTable::pm10_defaults(), ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| DensityError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| DensityError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(url) = file_config.stations_url {
            self.stations_url.update(parse_url("stations_url", &url)?, ConfigSource::File);
        }

        if let Some(url) = file_config.boundaries_url {
            self.boundaries_url.update(parse_url("boundaries_url", &url)?, ConfigSource::File);
        }

        if let Some(path) = file_config.boundary_cache {
            self.boundary_cache.update(path, ConfigSource::File);
        }

        if let Some(records) = file_config.countries {
            if records.is_empty() {
                return Err(DensityError::ConfigInvalid {
                    key: "countries".to_string(),
                    reason: "at least one country is required".to_string(),
                });
            }
            self.countries.update(CountryTable::new(records)?, ConfigSource::File);
        }

        tracing::debug!(path = %path.as_ref().display(), "Loaded config file");
        Ok(self)
    }

    /// Load a TOML file only if it exists
    pub fn load_from_optional_file<P: AsRef<Path>>(self, path: P) -> Result<Self> {
        if path.as_ref().is_file() {
            self.load_from_file(path)
        } else {
            Ok(self)
        }
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // PM10DASH_STATIONS_URL
        if let Ok(url) = env::var(ENV_STATIONS_URL) {
            match parse_url("stations_url", &url) {
                Ok(url) => self.stations_url.update(url, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid {} value '{}': expected an http(s) URL",
                    ENV_STATIONS_URL,
                    url
                ),
            }
        }

        // PM10DASH_BOUNDARIES_URL
        if let Ok(url) = env::var(ENV_BOUNDARIES_URL) {
            match parse_url("boundaries_url", &url) {
                Ok(url) => self.boundaries_url.update(url, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid {} value '{}': expected an http(s) URL",
                    ENV_BOUNDARIES_URL,
                    url
                ),
            }
        }

        // PM10DASH_BOUNDARY_CACHE
        if let Ok(path) = env::var(ENV_BOUNDARY_CACHE) {
            if path.trim().is_empty() {
                tracing::warn!("Ignoring empty {}", ENV_BOUNDARY_CACHE);
            } else {
                self.boundary_cache.update(PathBuf::from(path), ConfigSource::Environment);
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) -> Result<()> {
        if let Some(url) = overrides.stations_url {
            self.stations_url.update(parse_url("stations_url", &url)?, ConfigSource::Cli);
        }

        if let Some(url) = overrides.boundaries_url {
            self.boundaries_url.update(parse_url("boundaries_url", &url)?, ConfigSource::Cli);
        }

        if let Some(path) = overrides.boundary_cache {
            self.boundary_cache.update(path, ConfigSource::Cli);
        }

        Ok(())
    }

    /// Freeze into the immutable configuration used by the pipeline
    pub fn resolve(&self) -> PipelineConfig {
        PipelineConfig {
            stations_endpoint: self.stations_url.value.clone(),
            boundaries_url: self.boundaries_url.value.clone(),
            boundary_cache: self.boundary_cache.value.clone(),
            countries: self.countries.value.clone(),
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> BTreeMap<String, (String, ConfigSource)> {
        let mut map = BTreeMap::new();

        map.insert(
            "stations_url".to_string(),
            (self.stations_url.value.clone(), self.stations_url.source),
        );

        map.insert(
            "boundaries_url".to_string(),
            (self.boundaries_url.value.clone(), self.boundaries_url.source),
        );

        map.insert(
            "boundary_cache".to_string(),
            (self.boundary_cache.value.display().to_string(), self.boundary_cache.source),
        );

        map.insert(
            "countries".to_string(),
            (self.countries.value.codes().join(","), self.countries.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
struct FileConfig {
    stations_url: Option<String>,
    boundaries_url: Option<String>,
    boundary_cache: Option<PathBuf>,
    countries: Option<Vec<CountryRecord>>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub stations_url: Option<String>,
    pub boundaries_url: Option<String>,
    pub boundary_cache: Option<PathBuf>,
}

/// Immutable parameters of one pipeline
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Station endpoint without the query string
    pub stations_endpoint: String,
    pub boundaries_url: String,
    pub boundary_cache: PathBuf,
    pub countries: CountryTable,
}

impl PipelineConfig {
    /// Station request URL with the country filter and GeoJSON format selector
    pub fn stations_url(&self) -> String {
        let separator = if self.stations_endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}country={}&format=geojson",
            self.stations_endpoint,
            separator,
            self.countries.codes().join(",")
        )
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        LayeredConfig::with_defaults().resolve()
    }
}

/// Validate an http(s) URL
pub fn parse_url(key: &str, s: &str) -> Result<String> {
    let url = reqwest::Url::parse(s.trim()).map_err(|e| DensityError::ConfigInvalid {
        key: key.to_string(),
        reason: format!("Invalid URL '{}': {}", s, e),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(s.trim().to_string()),
        other => Err(DensityError::ConfigInvalid {
            key: key.to_string(),
            reason: format!("Unsupported URL scheme '{}'. Use http or https", other),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = LayeredConfig::with_defaults();
        assert_eq!(config.stations_url.value, DEFAULT_STATIONS_ENDPOINT);
        assert_eq!(config.stations_url.source, ConfigSource::Default);
        assert_eq!(config.boundary_cache.value, PathBuf::from("countries.geojson"));
        assert_eq!(config.countries.value.len(), 6);
    }

    #[test]
    fn test_default_stations_url() {
        let config = PipelineConfig::default();
        assert_eq!(
            config.stations_url(),
            "https://api.energyandcleanair.org/stations?country=US,GB,TR,PH,IN,TH&format=geojson"
        );
    }

    #[test]
    fn test_stations_url_with_existing_query() {
        let mut config = PipelineConfig::default();
        config.stations_endpoint = "http://localhost:9000/stations?pollutant=pm10".to_string();
        assert!(config
            .stations_url()
            .starts_with("http://localhost:9000/stations?pollutant=pm10&country=US,"));
    }

    #[test]
    fn test_config_precedence() {
        let mut value = ConfigValue::new(100, ConfigSource::Default);

        value.update(200, ConfigSource::File);
        assert_eq!(value.value, 200);

        value.update(300, ConfigSource::Environment);
        assert_eq!(value.value, 300);

        value.update(400, ConfigSource::Cli);
        assert_eq!(value.value, 400);
        assert_eq!(value.source, ConfigSource::Cli);

        // Lower precedence should not override
        value.update(500, ConfigSource::File);
        assert_eq!(value.value, 400);
    }

    #[test]
    fn test_load_from_file_with_countries() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
stations_url = "http://localhost:9000/stations"
boundary_cache = "/tmp/boundaries.geojson"

[[countries]]
code = "FR"
name = "France"
area_km2 = 551695

[[countries]]
code = "DE"
name = "Germany"
area_km2 = 357022
"#
        )
        .unwrap();

        let config = LayeredConfig::with_defaults().load_from_file(file.path()).unwrap();

        assert_eq!(config.stations_url.value, "http://localhost:9000/stations");
        assert_eq!(config.stations_url.source, ConfigSource::File);
        assert_eq!(config.boundaries_url.source, ConfigSource::Default);
        assert_eq!(config.countries.value.codes(), vec!["FR", "DE"]);
        assert_eq!(config.countries.value.area_of("DE"), 357_022.0);
        assert_eq!(config.countries.source, ConfigSource::File);
    }

    #[test]
    fn test_load_from_file_rejects_bad_url() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"boundaries_url = "ftp://example.org/countries.geojson""#).unwrap();

        let result = LayeredConfig::with_defaults().load_from_file(file.path());
        assert!(matches!(result, Err(DensityError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_load_from_file_rejects_empty_countries() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "countries = []").unwrap();

        assert!(LayeredConfig::with_defaults().load_from_file(file.path()).is_err());
    }

    #[test]
    fn test_optional_file_missing_keeps_defaults() {
        let config = LayeredConfig::with_defaults()
            .load_from_optional_file("/nonexistent/pm10dash.toml")
            .unwrap();
        assert_eq!(config.stations_url.source, ConfigSource::Default);
    }

    #[test]
    fn test_cli_overrides() {
        let mut config = LayeredConfig::with_defaults();

        config
            .update_from_cli(CliConfigOverrides {
                stations_url: None,
                boundaries_url: Some("http://localhost:8000/countries.geojson".to_string()),
                boundary_cache: Some(PathBuf::from("cache/countries.geojson")),
            })
            .unwrap();

        assert_eq!(config.boundaries_url.source, ConfigSource::Cli);
        assert_eq!(config.boundary_cache.value, PathBuf::from("cache/countries.geojson"));
        assert_eq!(config.stations_url.source, ConfigSource::Default);
    }

    #[test]
    fn test_parse_url() {
        assert!(parse_url("k", "https://example.org/x").is_ok());
        assert!(parse_url("k", "not a url").is_err());
        assert!(parse_url("k", "file:///etc/passwd").is_err());
    }

    #[test]
    fn test_inspection_map() {
        let map = LayeredConfig::with_defaults().to_inspection_map();

        let (countries, source) = &map["countries"];
        assert_eq!(countries, "US,GB,TR,PH,IN,TH");
        assert_eq!(*source, ConfigSource::Default);
        assert!(map.contains_key("boundary_cache"));
    }
}

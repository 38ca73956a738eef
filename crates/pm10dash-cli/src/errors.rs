use console::style;
use pm10dash_core::config::{ENV_BOUNDARIES_URL, ENV_BOUNDARY_CACHE, ENV_STATIONS_URL};
use pm10dash_core::DensityError;
use std::fmt;

/// Error with context and suggestions, printed to stderr
pub struct CliError {
    pub message: String,
    pub context: Option<String>,
    pub suggestions: Vec<String>,
    pub help_command: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
            suggestions: Vec::new(),
            help_command: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_help(mut self, command: impl Into<String>) -> Self {
        self.help_command = Some(command.into());
        self
    }

    pub fn display(&self) {
        eprintln!("{} {}\n", style("✗").red().bold(), style(&self.message).red().bold());

        if let Some(ref context) = self.context {
            eprintln!("{}", context);
            eprintln!();
        }

        if !self.suggestions.is_empty() {
            eprintln!("{}", style("To fix this:").yellow().bold());
            for (i, suggestion) in self.suggestions.iter().enumerate() {
                eprintln!("  {}. {}", i + 1, suggestion);
            }
            eprintln!();
        }

        if let Some(ref help_cmd) = self.help_command {
            eprintln!("{} {}", style("Need help?").cyan(), style(help_cmd).cyan().bold());
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl fmt::Debug for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// A data source could not be reached or answered with an error status
pub fn upstream_unavailable(error: &DensityError) -> CliError {
    CliError::new("Could not load data")
        .with_context(format!("A data source request failed.\n\nError: {}", error))
        .with_suggestion("Check your network connection and try again")
        .with_suggestion(format!(
            "Point at a reachable endpoint: --stations-url / {} or --boundaries-url / {}",
            ENV_STATIONS_URL, ENV_BOUNDARIES_URL
        ))
        .with_help("Run: pm10dash config")
}

/// A downloaded response body is not usable GeoJSON
pub fn invalid_geojson(error: &DensityError) -> CliError {
    CliError::new("Invalid GeoJSON")
        .with_context(format!("Downloaded data could not be parsed.\n\nError: {}", error))
        .with_suggestion("Check that the endpoint serves GeoJSON: pm10dash config")
        .with_suggestion("If the boundary download was bad, delete the cache file and try again")
        .with_help("Run: pm10dash boundaries --help")
}

/// The boundary file already on disk is not usable GeoJSON
pub fn corrupt_cache(path: &str, error: &DensityError) -> CliError {
    CliError::new("Cached boundary file is corrupt")
        .with_context(format!("The local boundary file could not be parsed.\n\nError: {}", error))
        .with_suggestion(format!("Delete it so it is downloaded again: {}", path))
        .with_suggestion(format!(
            "Or choose another cache location: --boundary-cache / {}",
            ENV_BOUNDARY_CACHE
        ))
        .with_help("Run: pm10dash boundaries --help")
}

/// Create error for invalid configuration
pub fn invalid_config(key: &str, reason: &str) -> CliError {
    CliError::new(format!("Invalid configuration: {}", key))
        .with_context(format!("Configuration value is invalid.\n\nReason: {}", reason))
        .with_suggestion("Check pm10dash.toml (or the file passed with --config) for syntax errors")
        .with_suggestion("Make sure every [[countries]] entry has a unique code and a non-negative area")
        .with_help("Run: pm10dash config")
}

/// Convert anyhow::Error to CliError with context
pub fn from_anyhow(error: anyhow::Error) -> CliError {
    if let Some(density) = error.chain().find_map(|e| e.downcast_ref::<DensityError>()) {
        return match density {
            DensityError::Http { .. } | DensityError::HttpStatus { .. } => {
                upstream_unavailable(density)
            }
            DensityError::InvalidGeoJson { .. } => invalid_geojson(density),
            DensityError::CorruptCache { path, .. } => corrupt_cache(path, density),
            DensityError::ConfigInvalid { key, reason } => invalid_config(key, reason),
            DensityError::Io(_) => {
                CliError::new(error.to_string()).with_context(format!("Error: {}", density))
            }
        };
    }

    let message = error.to_string();
    if message.contains("Permission denied") || message.contains("permission denied") {
        CliError::new("Permission denied")
            .with_context(format!("Error: {}", message))
            .with_suggestion("Check permissions of the boundary cache directory")
    } else {
        CliError::new(message)
    }
}

//! Error types for pm10dash

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DensityError {
    // Fetch errors
    #[error("Request to {url} failed: {reason}")]
    Http { url: String, reason: String },

    #[error("Request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    // Parse errors
    #[error("Invalid GeoJSON in {source_name}: {reason}")]
    InvalidGeoJson { source_name: String, reason: String },

    /// A boundary file already on disk (not freshly downloaded) failed to parse
    #[error("Cached boundary file {path} is not valid GeoJSON: {reason}")]
    CorruptCache { path: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DensityError {
    /// True for failures caused by a remote endpoint rather than local state
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            DensityError::Http { .. }
                | DensityError::HttpStatus { .. }
                | DensityError::InvalidGeoJson { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, DensityError>;

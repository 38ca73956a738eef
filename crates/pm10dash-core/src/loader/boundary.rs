use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::error::{DensityError, Result};
use crate::formats::parse_boundaries;
use crate::models::BoundarySet;
use crate::ports::HttpFetcher;

/// Loads country boundaries from a local GeoJSON file, downloading it on first use
pub struct BoundaryLoader {
    url: String,
    cache_path: PathBuf,
    fetcher: Arc<dyn HttpFetcher>,
}

impl BoundaryLoader {
    pub fn new(
        url: impl Into<String>,
        cache_path: impl Into<PathBuf>,
        fetcher: Arc<dyn HttpFetcher>,
    ) -> Self {
        Self {
            url: url.into(),
            cache_path: cache_path.into(),
            fetcher,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn cache_path(&self) -> &Path {
        &self.cache_path
    }

    /// Whether the local boundary file already exists
    pub fn is_cached(&self) -> bool {
        self.cache_path.is_file()
    }

    /// Read the cache file, or download it, persist it verbatim and read it back.
    ///
    /// Only a missing file triggers the download; any other read error is
    /// returned as is. Nothing is retried. A pre-existing file that does not
    /// parse is reported as [`DensityError::CorruptCache`]; a fresh download
    /// that does not parse stays [`DensityError::InvalidGeoJson`].
    pub async fn load(&self) -> Result<BoundarySet> {
        let (bytes, downloaded) = match fs::read(&self.cache_path) {
            Ok(bytes) => {
                tracing::info!(path = %self.cache_path.display(), "Using cached boundary file");
                (bytes, false)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(
                    url = %self.url,
                    path = %self.cache_path.display(),
                    "Boundary file not found, downloading"
                );
                self.download_to_cache().await?;
                (fs::read(&self.cache_path)?, true)
            }
            Err(e) => return Err(DensityError::Io(e)),
        };

        let source_name = self.cache_path.display().to_string();
        let boundaries = parse_boundaries(&bytes, &source_name).map_err(|e| match e {
            DensityError::InvalidGeoJson { source_name, reason } if !downloaded => {
                DensityError::CorruptCache { path: source_name, reason }
            }
            other => other,
        })?;
        tracing::info!(features = boundaries.len(), "Loaded country boundaries");
        Ok(boundaries)
    }

    async fn download_to_cache(&self) -> Result<()> {
        let body = self.fetcher.get_bytes(&self.url).await?;

        if let Some(parent) = self.cache_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.cache_path, &body)?;

        tracing::debug!(bytes = body.len(), path = %self.cache_path.display(), "Boundary file written");
        Ok(())
    }
}

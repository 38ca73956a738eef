//! The "Show Data" pipeline: boundaries, then stations, then the ranking.

use chrono::Utc;
use std::sync::Arc;

use crate::cache::SessionCache;
use crate::config::PipelineConfig;
use crate::density::DensityCalculator;
use crate::error::Result;
use crate::http::ReqwestFetcher;
use crate::loader::{BoundaryLoader, StationLoader};
use crate::models::{BoundarySet, DensityReport, StationSet};
use crate::ports::HttpFetcher;

/// Owns the loaders, their session caches and the calculator
pub struct DensityPipeline {
    config: PipelineConfig,
    boundary_loader: BoundaryLoader,
    station_loader: StationLoader,
    calculator: DensityCalculator,
    boundaries: SessionCache<BoundarySet>,
    stations: SessionCache<StationSet>,
}

impl DensityPipeline {
    pub fn new(config: PipelineConfig, fetcher: Arc<dyn HttpFetcher>) -> Self {
        let boundary_loader = BoundaryLoader::new(
            config.boundaries_url.clone(),
            config.boundary_cache.clone(),
            Arc::clone(&fetcher),
        );
        let station_loader = StationLoader::new(config.stations_url(), fetcher);
        let calculator = DensityCalculator::new(config.countries.clone());

        Self {
            config,
            boundary_loader,
            station_loader,
            calculator,
            boundaries: SessionCache::new("boundaries"),
            stations: SessionCache::new("stations"),
        }
    }

    /// Pipeline that talks to the real endpoints
    pub fn with_reqwest(config: PipelineConfig) -> Self {
        Self::new(config, Arc::new(ReqwestFetcher::new()))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn boundary_loader(&self) -> &BoundaryLoader {
        &self.boundary_loader
    }

    /// Boundary features, memoized for the life of the pipeline
    pub async fn boundaries(&self) -> Result<Arc<BoundarySet>> {
        self.boundaries.get_or_try_load(|| self.boundary_loader.load()).await
    }

    /// Station features, memoized for the life of the pipeline
    pub async fn stations(&self) -> Result<Arc<StationSet>> {
        self.stations.get_or_try_load(|| self.station_loader.load()).await
    }

    /// Load both datasets in sequence and rank the configured countries.
    ///
    /// Any failure aborts the run; no partial report is produced.
    pub async fn run(&self) -> Result<DensityReport> {
        let boundaries = self.boundaries().await?;
        let stations = self.stations().await?;

        let rows = self.calculator.compute(&stations.features);
        let report = DensityReport {
            generated_at: Utc::now(),
            stations_fetched: stations.len(),
            stations_attributed: self.calculator.attributed_count(&stations.features),
            boundary_features: boundaries.len(),
            rows,
        };

        tracing::info!(
            rows = report.rows.len(),
            stations = report.stations_fetched,
            attributed = report.stations_attributed,
            "Density computed"
        );
        Ok(report)
    }

    /// Forget both memoized datasets. The boundary file on disk is kept.
    pub async fn clear_cache(&self) {
        self.boundaries.clear().await;
        self.stations.clear().await;
    }

    /// (boundaries cached, stations cached)
    pub async fn cache_status(&self) -> (bool, bool) {
        (self.boundaries.is_populated().await, self.stations.is_populated().await)
    }
}

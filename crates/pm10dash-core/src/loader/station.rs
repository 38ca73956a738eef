use std::sync::Arc;

use crate::error::Result;
use crate::formats::parse_stations;
use crate::models::StationSet;
use crate::ports::HttpFetcher;

/// Downloads the current station list in one request
pub struct StationLoader {
    url: String,
    fetcher: Arc<dyn HttpFetcher>,
}

impl StationLoader {
    /// `url` is the fully built request URL, country filter included
    pub fn new(url: impl Into<String>, fetcher: Arc<dyn HttpFetcher>) -> Self {
        Self {
            url: url.into(),
            fetcher,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn load(&self) -> Result<StationSet> {
        tracing::info!(url = %self.url, "Fetching stations");
        let body = self.fetcher.get_bytes(&self.url).await?;
        let stations = parse_stations(&body, "stations response")?;
        tracing::info!(features = stations.len(), "Loaded stations");
        Ok(stations)
    }
}

//! End-to-end pipeline tests against an in-memory fetcher

use pm10dash_core::config::PipelineConfig;
use pm10dash_core::http::MemoryFetcher;
use pm10dash_core::models::{CountryRecord, CountryTable};
use pm10dash_core::{DensityError, DensityPipeline};
use std::fs;
use std::path::Path;
use std::sync::Arc;

const BOUNDARIES_URL: &str = "https://boundaries.test/countries.geojson";
const STATIONS_ENDPOINT: &str = "https://stations.test/stations";

const BOUNDARIES: &str = r#"{"type": "FeatureCollection", "features": [
    {"type": "Feature",
     "geometry": {"type": "Polygon", "coordinates": [[[-8, 50], [2, 50], [2, 59], [-8, 50]]]},
     "properties": {"ADMIN": "United Kingdom", "ISO_A2": "GB", "ISO_A3": "GBR"}},
    {"type": "Feature",
     "geometry": {"type": "Polygon", "coordinates": [[[-125, 25], [-66, 25], [-66, 49], [-125, 25]]]},
     "properties": {"ADMIN": "United States of America", "ISO_A2": "US", "ISO_A3": "USA"}}
]}"#;

fn station(code: &str) -> String {
    format!(
        r#"{{"type": "Feature", "geometry": {{"type": "Point", "coordinates": [0, 0]}},
            "properties": {{"country_id": "{}"}}}}"#,
        code
    )
}

fn stations_body(codes: &[&str]) -> String {
    let features: Vec<String> = codes.iter().map(|c| station(c)).collect();
    format!(r#"{{"type": "FeatureCollection", "features": [{}]}}"#, features.join(","))
}

fn config(cache: &Path, countries: CountryTable) -> PipelineConfig {
    PipelineConfig {
        stations_endpoint: STATIONS_ENDPOINT.to_string(),
        boundaries_url: BOUNDARIES_URL.to_string(),
        boundary_cache: cache.to_path_buf(),
        countries,
    }
}

fn gb_us() -> CountryTable {
    CountryTable::new(vec![
        CountryRecord::new("GB", "United Kingdom", 243_610.0),
        CountryRecord::new("US", "United States", 9_833_517.0),
    ])
    .unwrap()
}

#[tokio::test]
async fn test_end_to_end_ranking() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(&dir.path().join("countries.geojson"), gb_us());
    let fetcher = Arc::new(
        MemoryFetcher::new()
            .with_body(BOUNDARIES_URL, BOUNDARIES)
            .with_body(cfg.stations_url(), stations_body(&["GB", "GB", "US", "FR"])),
    );
    let pipeline = DensityPipeline::new(cfg, fetcher);

    let report = pipeline.run().await.unwrap();

    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].country_name, "United Kingdom");
    assert_eq!(report.rows[0].station_count, 2);
    assert_eq!(report.rows[0].density, 0.01);
    assert_eq!(report.rows[1].country_name, "United States");
    assert_eq!(report.rows[1].density, 0.0);
    assert_eq!(report.stations_fetched, 4);
    assert_eq!(report.stations_attributed, 3);
    assert_eq!(report.boundary_features, 2);
}

#[tokio::test]
async fn test_boundary_fallback_downloads_once_per_session() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("countries.geojson");
    let cfg = config(&cache, gb_us());
    let stations_url = cfg.stations_url();
    let fetcher = Arc::new(
        MemoryFetcher::new()
            .with_body(BOUNDARIES_URL, BOUNDARIES)
            .with_body(stations_url.clone(), stations_body(&["GB"])),
    );
    let pipeline = DensityPipeline::new(cfg, fetcher.clone());

    assert!(!cache.exists());
    let first = pipeline.boundaries().await.unwrap();
    assert_eq!(fetcher.request_count(BOUNDARIES_URL), 1);
    assert_eq!(fs::read_to_string(&cache).unwrap(), BOUNDARIES);

    let second = pipeline.boundaries().await.unwrap();
    assert_eq!(fetcher.request_count(BOUNDARIES_URL), 1);
    assert!(Arc::ptr_eq(&first, &second));

    pipeline.run().await.unwrap();
    pipeline.run().await.unwrap();
    assert_eq!(fetcher.request_count(BOUNDARIES_URL), 1);
    assert_eq!(fetcher.request_count(&stations_url), 1);
}

#[tokio::test]
async fn test_new_session_reuses_file_without_download() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("countries.geojson");
    let cfg = config(&cache, gb_us());
    let fetcher = Arc::new(MemoryFetcher::new().with_body(BOUNDARIES_URL, BOUNDARIES));

    DensityPipeline::new(cfg.clone(), fetcher.clone()).boundaries().await.unwrap();
    DensityPipeline::new(cfg, fetcher.clone()).boundaries().await.unwrap();

    assert_eq!(fetcher.request_count(BOUNDARIES_URL), 1);
}

#[tokio::test]
async fn test_clear_cache_refetches_stations_but_keeps_file() {
    let dir = tempfile::tempdir().unwrap();
    let cache = dir.path().join("countries.geojson");
    let cfg = config(&cache, gb_us());
    let stations_url = cfg.stations_url();
    let fetcher = Arc::new(
        MemoryFetcher::new()
            .with_body(BOUNDARIES_URL, BOUNDARIES)
            .with_body(stations_url.clone(), stations_body(&["US"])),
    );
    let pipeline = DensityPipeline::new(cfg, fetcher.clone());

    pipeline.run().await.unwrap();
    pipeline.clear_cache().await;
    assert_eq!(pipeline.cache_status().await, (false, false));

    pipeline.run().await.unwrap();

    assert_eq!(fetcher.request_count(&stations_url), 2);
    // boundaries are re-read from disk, not downloaded
    assert_eq!(fetcher.request_count(BOUNDARIES_URL), 1);
    assert!(cache.is_file());
}

#[tokio::test]
async fn test_station_failure_aborts_run() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(&dir.path().join("countries.geojson"), gb_us());
    let fetcher = Arc::new(
        MemoryFetcher::new()
            .with_body(BOUNDARIES_URL, BOUNDARIES)
            .with_status(cfg.stations_url(), 502),
    );
    let pipeline = DensityPipeline::new(cfg, fetcher);

    let err = pipeline.run().await.unwrap_err();

    assert!(matches!(err, DensityError::HttpStatus { status: 502, .. }));
    assert!(err.is_upstream());
    // boundaries loaded fine and stay cached; the failed stations load does not
    assert_eq!(pipeline.cache_status().await, (true, false));
}

#[tokio::test]
async fn test_boundary_failure_skips_station_fetch() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(&dir.path().join("countries.geojson"), gb_us());
    let stations_url = cfg.stations_url();
    let fetcher = Arc::new(MemoryFetcher::new().with_body(stations_url.clone(), stations_body(&[])));
    let pipeline = DensityPipeline::new(cfg, fetcher.clone());

    assert!(pipeline.run().await.is_err());
    assert_eq!(fetcher.request_count(&stations_url), 0);
}

#[tokio::test]
async fn test_default_table_with_empty_station_list() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(&dir.path().join("countries.geojson"), CountryTable::pm10_defaults());
    let fetcher = Arc::new(
        MemoryFetcher::new()
            .with_body(BOUNDARIES_URL, BOUNDARIES)
            .with_body(cfg.stations_url(), stations_body(&[])),
    );
    let pipeline = DensityPipeline::new(cfg, fetcher);

    let report = pipeline.run().await.unwrap();

    assert_eq!(report.rows.len(), 6);
    assert!(report.rows.iter().all(|r| r.density == 0.0));
}

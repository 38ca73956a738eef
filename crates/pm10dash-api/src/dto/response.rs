use chrono::{DateTime, Utc};
use pm10dash_core::models::{DensityReport, DensityRow};
use serde::Serialize;

/// Density table response
#[derive(Debug, Serialize)]
pub struct DensityResponse {
    pub title: &'static str,
    pub generated_at: DateTime<Utc>,
    pub stations_fetched: usize,
    pub stations_attributed: usize,
    pub boundary_features: usize,
    pub columns: [&'static str; 4],
    pub rows: Vec<DensityRow>,
}

impl From<DensityReport> for DensityResponse {
    fn from(report: DensityReport) -> Self {
        Self {
            title: "Density of PM10 Monitoring Stations",
            generated_at: report.generated_at,
            stations_fetched: report.stations_fetched,
            stations_attributed: report.stations_attributed,
            boundary_features: report.boundary_features,
            columns: [
                "Country Name",
                "Number of PM10 Stations",
                "Area (sq. km)",
                "Density (per 1,000 sq. km)",
            ],
            rows: report.rows,
        }
    }
}

/// Boundary dataset summary
#[derive(Debug, Serialize)]
pub struct BoundariesResponse {
    pub cache_path: String,
    pub feature_count: usize,
    pub features: Vec<BoundarySummary>,
}

#[derive(Debug, Serialize)]
pub struct BoundarySummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_a2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iso_a3: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub geometry_type: Option<&'static str>,
}

/// Cache clear response
#[derive(Debug, Serialize)]
pub struct CacheClearedResponse {
    pub success: bool,
    pub message: String,
}

impl CacheClearedResponse {
    pub fn cleared() -> Self {
        Self {
            success: true,
            message: "Session cache cleared. The next request fetches fresh data.".to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

impl Default for HealthResponse {
    fn default() -> Self {
        Self { status: "ok", service: "pm10dash-api" }
    }
}

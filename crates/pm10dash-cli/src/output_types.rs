use chrono::{DateTime, Utc};
use pm10dash_core::models::DensityRow;
use serde::Serialize;
use tabled::Tabled;

/// Output for show command
#[derive(Debug, Serialize)]
pub struct ShowOutput {
    pub generated_at: DateTime<Utc>,
    pub stations_fetched: usize,
    pub stations_attributed: usize,
    pub boundary_features: usize,
    pub rows: Vec<DensityRow>,
}

/// Density table row as printed in the terminal
#[derive(Debug, Tabled)]
pub struct DensityTableRow {
    #[tabled(rename = "Country Name")]
    pub country_name: String,
    #[tabled(rename = "Number of PM10 Stations")]
    pub station_count: usize,
    #[tabled(rename = "Area (sq. km)")]
    pub area: String,
    #[tabled(rename = "Density (per 1,000 sq. km)")]
    pub density: String,
}

impl From<&DensityRow> for DensityTableRow {
    fn from(row: &DensityRow) -> Self {
        Self {
            country_name: row.country_name.clone(),
            station_count: row.station_count,
            area: format!("{:.2}", row.area_km2),
            density: format!("{:.2}", row.density),
        }
    }
}

/// Output for stations command
#[derive(Debug, Serialize)]
pub struct StationsOutput {
    pub total: usize,
    pub counts: Vec<StationCount>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct StationCount {
    #[tabled(rename = "country_id")]
    pub country_id: String,
    #[tabled(rename = "Stations")]
    pub stations: usize,
    #[tabled(rename = "Configured")]
    pub configured: bool,
}

/// Output for boundaries command
#[derive(Debug, Serialize)]
pub struct BoundariesOutput {
    pub cache_path: String,
    pub downloaded: bool,
    pub feature_count: usize,
    pub configured_matches: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<BoundaryInfo>>,
}

#[derive(Debug, Serialize, Tabled)]
pub struct BoundaryInfo {
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "ISO A2")]
    pub iso_a2: String,
    #[tabled(rename = "ISO A3")]
    pub iso_a3: String,
    #[tabled(rename = "Geometry")]
    pub geometry_type: String,
}

/// Output for config command
#[derive(Debug, Serialize)]
pub struct ConfigOutput {
    pub stations_url: ConfigValue,
    pub boundaries_url: ConfigValue,
    pub boundary_cache: ConfigValue,
    pub countries: Vec<CountryInfo>,
    pub countries_source: String,
    pub request_url: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct ConfigValue {
    #[tabled(rename = "Value")]
    pub value: String,
    #[tabled(rename = "Source")]
    pub source: String,
}

#[derive(Debug, Serialize, Tabled)]
pub struct CountryInfo {
    #[tabled(rename = "Code")]
    pub code: String,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Area (sq. km)")]
    pub area_km2: f64,
}

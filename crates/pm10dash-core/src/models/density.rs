use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::CountryCode;

/// One ranked row of the density table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DensityRow {
    #[serde(skip)]
    pub code: CountryCode,

    #[serde(rename = "Country Name")]
    pub country_name: String,

    #[serde(rename = "Number of PM10 Stations")]
    pub station_count: usize,

    /// Rounded to 2 decimals
    #[serde(rename = "Area (sq. km)")]
    pub area_km2: f64,

    /// Stations per 1,000 sq. km, rounded to 2 decimals
    #[serde(rename = "Density (per 1,000 sq. km)")]
    pub density: f64,
}

/// Result of one "Show Data" run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DensityReport {
    pub generated_at: DateTime<Utc>,

    /// Stations returned by the endpoint
    pub stations_fetched: usize,

    /// Stations whose `country_id` matched a configured country
    pub stations_attributed: usize,

    /// Boundary features loaded (not used by the ranking)
    pub boundary_features: usize,

    pub rows: Vec<DensityRow>,
}

//! Station density ranking.
//!
//! Stations are attributed to countries by their own `country_id` property.
//! There is no spatial test against boundary geometry: areas come from the
//! configured [`CountryTable`].

use std::collections::HashMap;

use crate::models::{CountryTable, DensityRow, StationFeature};

/// Density is reported per this many square kilometres
pub const DENSITY_UNIT_KM2: f64 = 1_000.0;

/// Round to two decimals, exact halves to even (`0.125` becomes `0.12`)
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Count stations per `country_id`. Stations without one are not counted.
pub fn count_by_country(stations: &[StationFeature]) -> HashMap<&str, usize> {
    let mut counts = HashMap::new();
    let mut unattributed = 0usize;

    for station in stations {
        match station.country_id.as_deref() {
            Some(code) => *counts.entry(code).or_insert(0) += 1,
            None => unattributed += 1,
        }
    }

    if unattributed > 0 {
        tracing::debug!(unattributed, "Stations without country_id left out of counts");
    }
    counts
}

/// Ranks configured countries by stations per 1,000 sq. km
#[derive(Debug, Clone)]
pub struct DensityCalculator {
    countries: CountryTable,
}

impl DensityCalculator {
    pub fn new(countries: CountryTable) -> Self {
        Self { countries }
    }

    pub fn countries(&self) -> &CountryTable {
        &self.countries
    }

    /// One row per configured country with a non-zero area, densest first.
    ///
    /// Countries with no stations get a zero row. Equal densities keep table
    /// order. Codes in `stations` that are not configured are ignored.
    pub fn compute(&self, stations: &[StationFeature]) -> Vec<DensityRow> {
        let counts = count_by_country(stations);
        let mut rows = Vec::with_capacity(self.countries.len());

        for record in self.countries.iter() {
            let station_count = counts.get(record.code.as_str()).copied().unwrap_or(0);
            let area = record.area_km2;

            if area == 0.0 {
                tracing::debug!(code = %record.code, "Skipping country with zero area");
                continue;
            }

            let density = station_count as f64 * DENSITY_UNIT_KM2 / area;
            rows.push(DensityRow {
                code: record.code.clone(),
                country_name: record.name.clone(),
                station_count,
                area_km2: round2(area),
                density: round2(density),
            });
        }

        // sort_by is stable: ties stay in declaration order
        rows.sort_by(|a, b| b.density.total_cmp(&a.density));
        rows
    }

    /// Number of stations whose code is configured
    pub fn attributed_count(&self, stations: &[StationFeature]) -> usize {
        stations
            .iter()
            .filter(|s| s.country_id.as_deref().is_some_and(|c| self.countries.contains(c)))
            .count()
    }
}

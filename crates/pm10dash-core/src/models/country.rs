use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::{DensityError, Result};

/// Two-letter country code as used by the station API's `country_id`
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(pub String);

impl CountryCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A configured country with its reference area
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Country code matched against station `country_id`
    pub code: CountryCode,

    /// Display name shown in the result table
    pub name: String,

    /// Land area in square kilometres; zero means "not configured"
    #[serde(default)]
    pub area_km2: f64,
}

impl CountryRecord {
    pub fn new(code: impl Into<String>, name: impl Into<String>, area_km2: f64) -> Self {
        Self {
            code: CountryCode::new(code),
            name: name.into(),
            area_km2,
        }
    }
}

/// Immutable, ordered set of countries the dashboard reports on.
///
/// Declaration order is preserved and is the tie-break order for equal
/// densities. Codes are unique.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CountryTable {
    records: Vec<CountryRecord>,
}

impl CountryTable {
    /// Build a table, rejecting duplicate codes and negative or non-finite areas
    pub fn new(records: Vec<CountryRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.code.clone()) {
                return Err(DensityError::ConfigInvalid {
                    key: "countries".to_string(),
                    reason: format!("duplicate country code {}", record.code),
                });
            }
            if !record.area_km2.is_finite() || record.area_km2 < 0.0 {
                return Err(DensityError::ConfigInvalid {
                    key: "countries".to_string(),
                    reason: format!(
                        "area for {} must be a non-negative number, got {}",
                        record.code, record.area_km2
                    ),
                });
            }
        }
        Ok(Self { records })
    }

    /// The six countries of the PM10 dashboard
    pub fn pm10_defaults() -> Self {
        Self {
            records: vec![
                CountryRecord::new("US", "United States", 9_833_517.0),
                CountryRecord::new("GB", "United Kingdom", 243_610.0),
                CountryRecord::new("TR", "Turkey", 783_562.0),
                CountryRecord::new("PH", "Philippines", 300_000.0),
                CountryRecord::new("IN", "India", 3_287_263.0),
                CountryRecord::new("TH", "Thailand", 513_120.0),
            ],
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.code.as_str() == code)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// Area for a code, zero when the code is not configured
    pub fn area_of(&self, code: &str) -> f64 {
        self.get(code).map(|r| r.area_km2).unwrap_or(0.0)
    }

    /// Codes in declaration order
    pub fn codes(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.code.as_str()).collect()
    }
}

impl Default for CountryTable {
    fn default() -> Self {
        Self::pm10_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_order() {
        let table = CountryTable::pm10_defaults();
        assert_eq!(table.codes(), vec!["US", "GB", "TR", "PH", "IN", "TH"]);
        assert_eq!(table.area_of("GB"), 243_610.0);
    }

    #[test]
    fn test_area_of_unknown_code_is_zero() {
        let table = CountryTable::pm10_defaults();
        assert_eq!(table.area_of("FR"), 0.0);
        assert!(!table.contains("FR"));
    }

    #[test]
    fn test_duplicate_codes_rejected() {
        let result = CountryTable::new(vec![
            CountryRecord::new("GB", "United Kingdom", 243_610.0),
            CountryRecord::new("GB", "Britain", 1.0),
        ]);
        assert!(matches!(result, Err(DensityError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_negative_area_rejected() {
        let result = CountryTable::new(vec![CountryRecord::new("XX", "Nowhere", -5.0)]);
        assert!(result.is_err());
    }

    #[test]
    fn test_record_area_defaults_to_zero() {
        let record: CountryRecord =
            toml::from_str("code = \"XX\"\nname = \"Nowhere\"").unwrap();
        assert_eq!(record.area_km2, 0.0);
    }
}

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A monitoring station as delivered by the stations endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationFeature {
    /// Feature identifier, if the source provides one
    pub id: Option<String>,

    /// `country_id` property; None when absent or not a string
    pub country_id: Option<String>,

    /// Point geometry (carried through, never used for attribution)
    pub geometry: Option<geojson::Geometry>,

    /// Remaining feature properties
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl StationFeature {
    /// A bare station attributed to `country_id`
    pub fn in_country(country_id: impl Into<String>) -> Self {
        Self {
            id: None,
            country_id: Some(country_id.into()),
            geometry: None,
            properties: serde_json::Map::new(),
        }
    }
}

/// All stations returned by one fetch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StationSet {
    pub features: Vec<StationFeature>,
}

impl StationSet {
    pub fn new(features: Vec<StationFeature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Station counts keyed by raw `country_id`, configured or not.
    /// Stations without a `country_id` are counted under `None`.
    pub fn counts_by_country_id(&self) -> BTreeMap<Option<String>, usize> {
        let mut counts = BTreeMap::new();
        for feature in &self.features {
            *counts.entry(feature.country_id.clone()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_by_country_id() {
        let mut unattributed = StationFeature::in_country("GB");
        unattributed.country_id = None;

        let set = StationSet::new(vec![
            StationFeature::in_country("GB"),
            StationFeature::in_country("FR"),
            StationFeature::in_country("GB"),
            unattributed,
        ]);

        let counts = set.counts_by_country_id();
        assert_eq!(counts[&Some("GB".to_string())], 2);
        assert_eq!(counts[&Some("FR".to_string())], 1);
        assert_eq!(counts[&None], 1);
    }
}

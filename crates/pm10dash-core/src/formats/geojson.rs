//! GeoJSON decoding for the station and boundary payloads

use geojson::{Feature, FeatureCollection, GeoJson};

use crate::error::{DensityError, Result};
use crate::models::{BoundaryFeature, BoundarySet, StationFeature, StationSet};

/// Property carrying the station's country attribution
pub const COUNTRY_ID_PROPERTY: &str = "country_id";

const NAME_KEYS: &[&str] = &["ADMIN", "name", "NAME"];
const ISO_A2_KEYS: &[&str] = &["ISO_A2", "ISO3166-1-Alpha-2", "iso_a2"];
const ISO_A3_KEYS: &[&str] = &["ISO_A3", "ISO3166-1-Alpha-3", "iso_a3"];

/// Parse raw bytes as a GeoJSON document
pub fn parse_document(bytes: &[u8], source_name: &str) -> Result<GeoJson> {
    let text = std::str::from_utf8(bytes).map_err(|e| DensityError::InvalidGeoJson {
        source_name: source_name.to_string(),
        reason: format!("body is not UTF-8: {}", e),
    })?;

    text.parse::<GeoJson>().map_err(|e| DensityError::InvalidGeoJson {
        source_name: source_name.to_string(),
        reason: format!("Failed to parse GeoJSON: {}", e),
    })
}

/// Decode the stations response. Only a FeatureCollection is accepted.
pub fn parse_stations(bytes: &[u8], source_name: &str) -> Result<StationSet> {
    match parse_document(bytes, source_name)? {
        GeoJson::FeatureCollection(fc) => {
            let features = fc.features.iter().enumerate().map(|(idx, f)| convert_station(f, idx)).collect();
            Ok(StationSet::new(features))
        }
        GeoJson::Feature(_) | GeoJson::Geometry(_) => Err(DensityError::InvalidGeoJson {
            source_name: source_name.to_string(),
            reason: "expected a FeatureCollection with a 'features' array".to_string(),
        }),
    }
}

/// Decode the boundary dataset
pub fn parse_boundaries(bytes: &[u8], source_name: &str) -> Result<BoundarySet> {
    let features = match parse_document(bytes, source_name)? {
        GeoJson::FeatureCollection(FeatureCollection { features, .. }) => {
            features.iter().map(convert_boundary).collect()
        }
        GeoJson::Feature(feature) => vec![convert_boundary(&feature)],
        GeoJson::Geometry(geometry) => vec![BoundaryFeature {
            name: None,
            iso_a2: None,
            iso_a3: None,
            geometry: Some(geometry),
        }],
    };

    Ok(BoundarySet::new(features))
}

fn convert_station(feature: &Feature, idx: usize) -> StationFeature {
    let id = feature
        .id
        .as_ref()
        .map(|id| match id {
            geojson::feature::Id::String(s) => s.clone(),
            geojson::feature::Id::Number(n) => n.to_string(),
        })
        .or_else(|| Some(idx.to_string()));

    let mut properties = feature.properties.clone().unwrap_or_default();
    let country_id = match properties.remove(COUNTRY_ID_PROPERTY) {
        Some(serde_json::Value::String(code)) => Some(code),
        Some(other) => {
            tracing::debug!(feature = idx, value = %other, "Ignoring non-string country_id");
            None
        }
        None => None,
    };

    StationFeature {
        id,
        country_id,
        geometry: feature.geometry.clone(),
        properties,
    }
}

fn convert_boundary(feature: &Feature) -> BoundaryFeature {
    BoundaryFeature {
        name: string_property(feature, NAME_KEYS),
        iso_a2: string_property(feature, ISO_A2_KEYS),
        iso_a3: string_property(feature, ISO_A3_KEYS),
        geometry: feature.geometry.clone(),
    }
}

/// First non-empty string value among `keys`
fn string_property(feature: &Feature, keys: &[&str]) -> Option<String> {
    let props = feature.properties.as_ref()?;
    keys.iter()
        .filter_map(|key| props.get(*key).and_then(|v| v.as_str()))
        .find(|s| !s.is_empty() && *s != "-99")
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATIONS: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "type": "Feature",
                "id": "gb-001",
                "geometry": { "type": "Point", "coordinates": [-0.12, 51.5] },
                "properties": { "country_id": "GB", "name": "London Marylebone" }
            },
            {
                "type": "Feature",
                "geometry": { "type": "Point", "coordinates": [77.2, 28.6] },
                "properties": { "country_id": "IN" }
            },
            {
                "type": "Feature",
                "geometry": null,
                "properties": { "name": "unattributed" }
            }
        ]
    }"#;

    #[test]
    fn test_parse_stations_feature_collection() {
        let set = parse_stations(STATIONS.as_bytes(), "stations").unwrap();

        assert_eq!(set.len(), 3);
        assert_eq!(set.features[0].id.as_deref(), Some("gb-001"));
        assert_eq!(set.features[0].country_id.as_deref(), Some("GB"));
        assert!(set.features[0].geometry.is_some());
        assert_eq!(set.features[0].properties["name"], "London Marylebone");
        assert_eq!(set.features[1].id.as_deref(), Some("1"));
        assert_eq!(set.features[2].country_id, None);
    }

    #[test]
    fn test_parse_stations_rejects_single_feature() {
        let body = r#"{"type": "Feature", "geometry": null, "properties": {"country_id": "GB"}}"#;
        let err = parse_stations(body.as_bytes(), "stations").unwrap_err();
        assert!(matches!(err, DensityError::InvalidGeoJson { .. }));
    }

    #[test]
    fn test_parse_stations_rejects_garbage() {
        let err = parse_stations(b"<html>502 Bad Gateway</html>", "stations").unwrap_err();
        assert!(err.to_string().contains("stations"));
    }

    #[test]
    fn test_non_string_country_id_is_dropped() {
        let body = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "geometry": null, "properties": {"country_id": 44}}
        ]}"#;
        let set = parse_stations(body.as_bytes(), "stations").unwrap();
        assert_eq!(set.features[0].country_id, None);
    }

    #[test]
    fn test_parse_boundaries_reads_identifiers() {
        let body = r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature",
             "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]},
             "properties": {"ADMIN": "Thailand", "ISO_A2": "TH", "ISO_A3": "THA"}},
            {"type": "Feature",
             "geometry": null,
             "properties": {"name": "Kosovo", "ISO3166-1-Alpha-2": "-99"}}
        ]}"#;

        let set = parse_boundaries(body.as_bytes(), "countries.geojson").unwrap();

        assert_eq!(set.len(), 2);
        assert_eq!(set.features[0].name.as_deref(), Some("Thailand"));
        assert_eq!(set.features[0].iso_a3.as_deref(), Some("THA"));
        assert_eq!(set.features[0].geometry_type(), Some("Polygon"));
        assert_eq!(set.features[1].name.as_deref(), Some("Kosovo"));
        assert_eq!(set.features[1].iso_a2, None);
        assert!(set.by_iso_a2("th").is_some());
    }

    #[test]
    fn test_parse_boundaries_single_geometry() {
        let body = r#"{"type": "Point", "coordinates": [1.0, 2.0]}"#;
        let set = parse_boundaries(body.as_bytes(), "countries.geojson").unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.features[0].geometry_type(), Some("Point"));
    }
}

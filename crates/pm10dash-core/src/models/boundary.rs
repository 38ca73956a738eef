use serde::{Deserialize, Serialize};

/// A country boundary polygon with its identifying properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryFeature {
    /// Display name (`ADMIN` or `name` property)
    pub name: Option<String>,

    /// ISO 3166-1 alpha-2 code, when the source carries one
    pub iso_a2: Option<String>,

    /// ISO 3166-1 alpha-3 code, when the source carries one
    pub iso_a3: Option<String>,

    /// Boundary geometry
    pub geometry: Option<geojson::Geometry>,
}

impl BoundaryFeature {
    /// GeoJSON geometry type name, e.g. "MultiPolygon"
    pub fn geometry_type(&self) -> Option<&'static str> {
        use geojson::Value;

        self.geometry.as_ref().map(|g| match g.value {
            Value::Point(_) => "Point",
            Value::MultiPoint(_) => "MultiPoint",
            Value::LineString(_) => "LineString",
            Value::MultiLineString(_) => "MultiLineString",
            Value::Polygon(_) => "Polygon",
            Value::MultiPolygon(_) => "MultiPolygon",
            Value::GeometryCollection(_) => "GeometryCollection",
        })
    }
}

/// Parsed contents of the boundary dataset
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BoundarySet {
    pub features: Vec<BoundaryFeature>,
}

impl BoundarySet {
    pub fn new(features: Vec<BoundaryFeature>) -> Self {
        Self { features }
    }

    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Find a boundary by alpha-2 code
    pub fn by_iso_a2(&self, code: &str) -> Option<&BoundaryFeature> {
        self.features
            .iter()
            .find(|f| f.iso_a2.as_deref().is_some_and(|c| c.eq_ignore_ascii_case(code)))
    }
}

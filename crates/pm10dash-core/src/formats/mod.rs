//! Wire formats understood by the loaders
//!
//! Both remote sources speak GeoJSON; this module turns response bodies into
//! the crate's station and boundary models.

pub mod geojson;

pub use self::geojson::{parse_boundaries, parse_document, parse_stations, COUNTRY_ID_PROPERTY};

pub mod boundary;
pub mod country;
pub mod density;
pub mod station;

pub use boundary::{BoundaryFeature, BoundarySet};
pub use country::{CountryCode, CountryRecord, CountryTable};
pub use density::{DensityReport, DensityRow};
pub use station::{StationFeature, StationSet};

//! # Data Loaders
//!
//! Fetch the two remote datasets. Boundaries go through a local file cache;
//! stations are always fetched. Session memoization lives in [`crate::cache`].

mod boundary;
mod station;

pub use boundary::BoundaryLoader;
pub use station::StationLoader;

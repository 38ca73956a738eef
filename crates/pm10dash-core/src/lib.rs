//! pm10dash core - station density pipeline
//!
//! Models, configuration, GeoJSON decoding, loaders and the density
//! calculation shared by the dashboard server and the CLI.

pub mod cache;
pub mod config;
pub mod density;
pub mod error;
pub mod formats;
pub mod http;
pub mod loader;
pub mod models;
pub mod pipeline;
pub mod ports;

pub use error::{DensityError, Result};
pub use pipeline::DensityPipeline;

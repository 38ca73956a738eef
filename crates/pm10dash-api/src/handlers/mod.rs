mod boundaries;
mod cache;
mod dashboard;
mod density;
mod health;

pub use boundaries::get_boundaries;
pub use cache::clear_cache;
pub use dashboard::dashboard;
pub use density::get_density;
pub use health::health_check;

mod request;
mod response;

pub use request::DensityQuery;
pub use response::{
    BoundariesResponse, BoundarySummary, CacheClearedResponse, DensityResponse, HealthResponse,
};

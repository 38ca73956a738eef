use pm10dash_core::DensityPipeline;

/// Shared server state. The pipeline's session caches live as long as the server.
pub struct AppState {
    pub pipeline: DensityPipeline,
}

impl AppState {
    pub fn new(pipeline: DensityPipeline) -> Self {
        Self { pipeline }
    }
}

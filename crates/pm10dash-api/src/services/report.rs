use crate::dto::{BoundariesResponse, BoundarySummary, DensityResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Service turning pipeline results into API responses
pub struct ReportService;

impl ReportService {
    /// Run the pipeline and return the ranked table
    pub async fn density(state: &AppState) -> Result<DensityResponse, ApiError> {
        let report = state.pipeline.run().await.map_err(|e| {
            tracing::error!(error = %e, "Density run failed");
            ApiError::from(e)
        })?;

        Ok(DensityResponse::from(report))
    }

    /// Summarize the (memoized) boundary dataset
    pub async fn boundaries(state: &AppState) -> Result<BoundariesResponse, ApiError> {
        let boundaries = state.pipeline.boundaries().await.map_err(|e| {
            tracing::error!(error = %e, "Boundary load failed");
            ApiError::from(e)
        })?;

        let features = boundaries
            .features
            .iter()
            .map(|f| BoundarySummary {
                name: f.name.clone(),
                iso_a2: f.iso_a2.clone(),
                iso_a3: f.iso_a3.clone(),
                geometry_type: f.geometry_type(),
            })
            .collect();

        Ok(BoundariesResponse {
            cache_path: state.pipeline.boundary_loader().cache_path().display().to_string(),
            feature_count: boundaries.len(),
            features,
        })
    }
}

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::{DensityQuery, DensityResponse};
use crate::error::ApiError;
use crate::services::ReportService;
use crate::state::AppState;

pub async fn get_density(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DensityQuery>,
) -> Result<Json<DensityResponse>, ApiError> {
    tracing::info!(refresh = query.refresh, "Processing density request");

    if query.refresh {
        state.pipeline.clear_cache().await;
    }

    let response = ReportService::density(&state).await?;
    Ok(Json(response))
}

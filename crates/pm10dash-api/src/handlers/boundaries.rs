use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::BoundariesResponse;
use crate::error::ApiError;
use crate::services::ReportService;
use crate::state::AppState;

pub async fn get_boundaries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<BoundariesResponse>, ApiError> {
    tracing::info!("Listing boundaries");

    let response = ReportService::boundaries(&state).await?;
    Ok(Json(response))
}

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::dto::CacheClearedResponse;
use crate::state::AppState;

pub async fn clear_cache(State(state): State<Arc<AppState>>) -> Json<CacheClearedResponse> {
    state.pipeline.clear_cache().await;
    Json(CacheClearedResponse::cleared())
}

use std::sync::Arc;

use axum::{
    routing::{delete, get},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the dashboard router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Dashboard page
        .route("/", get(handlers::dashboard))

        // Health
        .route("/health", get(handlers::health_check))

        // Data
        .route("/api/v1/density", get(handlers::get_density))
        .route("/api/v1/boundaries", get(handlers::get_boundaries))
        .route("/api/v1/cache", delete(handlers::clear_cache))

        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

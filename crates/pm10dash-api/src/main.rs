use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pm10dash_api::{create_router, ApiConfig, AppState};
use pm10dash_core::DensityPipeline;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pm10dash_api=info,pm10dash_core=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = ApiConfig::from_env();
    let pipeline_config = api_config.pipeline_config().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        tracing::error!(
            "Remediation:\n\
            1. Check PM10DASH_CONFIG points at a readable TOML file\n\
            2. Verify stations_url and boundaries_url are http(s) URLs\n\
            3. Make sure every [[countries]] entry has a unique code"
        );
        e
    })?;

    tracing::info!(
        port = api_config.port,
        stations_url = %pipeline_config.stations_url(),
        boundary_cache = %pipeline_config.boundary_cache.display(),
        countries = pipeline_config.countries.len(),
        "Starting PM10 density dashboard"
    );

    let state = Arc::new(AppState::new(DensityPipeline::with_reqwest(pipeline_config)));
    let app = create_router(state);

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

//! Boundaries command implementation

use crate::cli::BoundariesArgs;
use crate::output::OutputWriter;
use crate::output_types::{BoundariesOutput, BoundaryInfo};
use crate::progress::{create_spinner, finish_error, finish_success};
use anyhow::Result;
use pm10dash_core::DensityPipeline;

pub async fn execute(
    args: BoundariesArgs,
    pipeline: &DensityPipeline,
    output: &OutputWriter,
) -> Result<()> {
    let loader = pipeline.boundary_loader();
    let downloaded = !loader.is_cached();

    let message = if downloaded {
        "Downloading country boundaries..."
    } else {
        "Reading cached country boundaries..."
    };
    let spinner = create_spinner(message, output.is_json());

    let boundaries = match pipeline.boundaries().await {
        Ok(boundaries) => boundaries,
        Err(e) => {
            finish_error(&spinner, "Failed to load boundaries");
            return Err(e.into());
        }
    };
    finish_success(&spinner, &format!("Loaded {} boundary features", boundaries.len()));

    let configured_matches: Vec<String> = pipeline
        .config()
        .countries
        .codes()
        .into_iter()
        .filter(|code| boundaries.by_iso_a2(code).is_some())
        .map(str::to_string)
        .collect();

    let features = args.verbose.then(|| {
        boundaries
            .features
            .iter()
            .map(|f| BoundaryInfo {
                name: f.name.clone().unwrap_or_default(),
                iso_a2: f.iso_a2.clone().unwrap_or_default(),
                iso_a3: f.iso_a3.clone().unwrap_or_default(),
                geometry_type: f.geometry_type().unwrap_or("-").to_string(),
            })
            .collect::<Vec<_>>()
    });

    let result = BoundariesOutput {
        cache_path: loader.cache_path().display().to_string(),
        downloaded,
        feature_count: boundaries.len(),
        configured_matches,
        features,
    };

    if output.is_json() {
        output.result(result)?;
    } else {
        output.section("Country Boundaries");
        output.kv("Source", loader.url());
        output.kv("Cache file", &result.cache_path);
        output.kv("Downloaded", if result.downloaded { "yes" } else { "no (cached)" });
        output.kv("Features", result.feature_count);
        output.kv("Configured countries found", result.configured_matches.join(", "));

        if let Some(features) = result.features {
            output.section("Features");
            output.table(features);
        }
    }

    Ok(())
}

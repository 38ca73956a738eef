//! Stations command implementation

use crate::cli::StationsArgs;
use crate::output::OutputWriter;
use crate::output_types::{StationCount, StationsOutput};
use crate::progress::{create_spinner, finish_error, finish_success};
use anyhow::Result;
use pm10dash_core::DensityPipeline;

const MISSING_COUNTRY_ID: &str = "(none)";

pub async fn execute(
    args: StationsArgs,
    pipeline: &DensityPipeline,
    output: &OutputWriter,
) -> Result<()> {
    let spinner = create_spinner("Fetching stations...", output.is_json());

    let stations = match pipeline.stations().await {
        Ok(stations) => stations,
        Err(e) => {
            finish_error(&spinner, "Failed to fetch stations");
            return Err(e.into());
        }
    };
    finish_success(&spinner, &format!("Fetched {} stations", stations.len()));

    let countries = &pipeline.config().countries;
    let counts: Vec<StationCount> = stations
        .counts_by_country_id()
        .into_iter()
        .map(|(code, count)| {
            let configured = code.as_deref().is_some_and(|c| countries.contains(c));
            StationCount {
                country_id: code.unwrap_or_else(|| MISSING_COUNTRY_ID.to_string()),
                stations: count,
                configured,
            }
        })
        .filter(|count| !args.configured_only || count.configured)
        .collect();

    if output.is_json() {
        output.result(StationsOutput {
            total: stations.len(),
            counts,
        })?;
    } else {
        output.section("Stations per country_id");
        output.kv("Request", pipeline.config().stations_url());
        output.kv("Total", stations.len());
        output.table(counts);
    }

    Ok(())
}

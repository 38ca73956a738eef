//! Show command implementation

use crate::output::OutputWriter;
use crate::output_types::{DensityTableRow, ShowOutput};
use crate::progress::{create_spinner, finish_error, finish_success};
use anyhow::Result;
use pm10dash_core::DensityPipeline;

pub async fn execute(pipeline: &DensityPipeline, output: &OutputWriter) -> Result<()> {
    let spinner = create_spinner("Loading data...", output.is_json());

    let report = match pipeline.run().await {
        Ok(report) => report,
        Err(e) => {
            finish_error(&spinner, "Failed to load data");
            return Err(e.into());
        }
    };
    finish_success(&spinner, "Data Loaded!");

    if output.is_json() {
        output.result(ShowOutput {
            generated_at: report.generated_at,
            stations_fetched: report.stations_fetched,
            stations_attributed: report.stations_attributed,
            boundary_features: report.boundary_features,
            rows: report.rows,
        })?;
    } else {
        output.section("Density of PM10 Monitoring Stations");
        output.table(report.rows.iter().map(DensityTableRow::from).collect());

        let unattributed = report.stations_fetched - report.stations_attributed;
        output.info(format!(
            "{} stations fetched, {} counted toward a configured country",
            report.stations_fetched, report.stations_attributed
        ));
        if unattributed > 0 {
            output.warning(format!(
                "{} stations had no country_id matching the country table",
                unattributed
            ));
        }
    }

    Ok(())
}

//! Config command implementation

use crate::output::OutputWriter;
use crate::output_types::{ConfigOutput, ConfigValue, CountryInfo};
use anyhow::Result;
use pm10dash_core::config::{ConfigSource, LayeredConfig};

fn source_label(source: ConfigSource) -> String {
    match source {
        ConfigSource::Default => "default",
        ConfigSource::File => "file",
        ConfigSource::Environment => "env",
        ConfigSource::Cli => "cli",
    }
    .to_string()
}

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let countries: Vec<CountryInfo> = config
        .countries
        .value
        .iter()
        .map(|record| CountryInfo {
            code: record.code.to_string(),
            name: record.name.clone(),
            area_km2: record.area_km2,
        })
        .collect();

    let result = ConfigOutput {
        stations_url: ConfigValue {
            value: config.stations_url.value.clone(),
            source: source_label(config.stations_url.source),
        },
        boundaries_url: ConfigValue {
            value: config.boundaries_url.value.clone(),
            source: source_label(config.boundaries_url.source),
        },
        boundary_cache: ConfigValue {
            value: config.boundary_cache.value.display().to_string(),
            source: source_label(config.boundary_cache.source),
        },
        countries,
        countries_source: source_label(config.countries.source),
        request_url: config.resolve().stations_url(),
    };

    if output.is_json() {
        output.result(result)?;
    } else {
        output.section("Configuration");
        for (key, (value, source)) in config.to_inspection_map() {
            output.kv(key, format!("{} ({})", value, source_label(source)));
        }
        output.kv("Request URL", &result.request_url);

        output.section("Countries");
        output.table(result.countries);
    }

    Ok(())
}

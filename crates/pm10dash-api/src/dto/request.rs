use serde::Deserialize;

/// Query string of `GET /api/v1/density`
#[derive(Debug, Default, Deserialize)]
pub struct DensityQuery {
    /// Drop the session cache before running
    #[serde(default)]
    pub refresh: bool,
}

//! Operator console configuration.
//!
//! Loaded from a JSON file passed on the command line. A missing file
//! falls back to the built-in defaults; a malformed file is an error —
//! running a plant on half-read settings is worse than not starting.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::Deserialize;
use tracing::warn;

use engine::optimizer::ProcessParameters;

/// Top-level console configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct PlantConfig {
    /// RNG seed for the alert evaluator.
    pub seed: u64,
    /// Operating crew headcount; scales the projections.
    pub crew_size: u32,
    /// Number of projected years.
    pub projection_periods: usize,
    /// Number of engine passes to run before printing the report.
    pub cycles: u32,
    /// Operating hours since the last full service.
    pub hours_since_service: f32,
    /// Feedstock batch mass per pass (kg).
    pub batch_mass_kg: f32,
    /// Raw feedstock percentages by category key.
    pub feedstock: BTreeMap<String, f64>,
    /// Chamber parameters for the optimizer.
    pub parameters: ProcessParameters,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            crew_size: 4,
            projection_periods: 3,
            cycles: 1,
            hours_since_service: 30.0,
            batch_mass_kg: 100.0,
            feedstock: default_feedstock(),
            parameters: ProcessParameters::default(),
        }
    }
}

/// Municipal collection stream, the console's out-of-the-box feedstock.
fn default_feedstock() -> BTreeMap<String, f64> {
    [
        ("polymers", 18.0),
        ("packaging", 28.0),
        ("structural-residues", 9.0),
        ("organics", 38.0),
        ("metals", 7.0),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), *v))
    .collect()
}

/// Load the configuration from `path`, or return defaults when no path is
/// given or the file does not exist.
pub fn load(path: Option<&Path>) -> anyhow::Result<PlantConfig> {
    let Some(path) = path else {
        return Ok(PlantConfig::default());
    };
    if !path.exists() {
        warn!("config {} not found, using defaults", path.display());
        return Ok(PlantConfig::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

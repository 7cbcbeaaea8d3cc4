//! Plasma decomposition calculator (PROC-004).
//!
//! Converts a feedstock composition plus a batch mass into the energy the
//! chamber will demand and the product masses it will return.
//!
//! Steps, per category:
//! 1. category_mass = percent / 100 * total_mass
//! 2. decomposed = category_mass * decomposition_rate
//! 3. energy_needs += category_mass * energy_requirement
//!    products += decomposed * yield fraction (40% methane / 15% hydrogen /
//!    30% solid carbon)
//!
//! Cycle efficiency is the recovered fuel energy value over the input
//! energy demand, using relative per-kg energy densities of 50 for methane
//! and 120 for hydrogen. An all-zero batch demands no energy; its
//! efficiency is defined as 0 rather than dividing by zero.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::composition::WasteComposition;
use crate::config::DEFAULT_TOTAL_MASS_KG;
use crate::materials::{
    MaterialCategory, CARBON_YIELD_FRACTION, HYDROGEN_YIELD_FRACTION, METHANE_YIELD_FRACTION,
};

// =============================================================================
// Constants
// =============================================================================

/// Relative fuel energy value per kilogram of methane.
pub const METHANE_ENERGY_VALUE: f32 = 50.0;

/// Relative fuel energy value per kilogram of hydrogen.
pub const HYDROGEN_ENERGY_VALUE: f32 = 120.0;

/// Multiplier mapping cycle efficiency onto the 0-100 sustainability scale.
pub const SUSTAINABILITY_GAIN: f32 = 1.2;

// =============================================================================
// SimulationResult
// =============================================================================

/// Derived metrics for one decomposition pass.
///
/// Immutable once produced; the next pass with the same or an updated
/// composition supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// Total chamber energy demand (MJ).
    pub energy_needs: f32,
    /// Methane recovered (kg).
    pub methane_output: f32,
    /// Solid carbon recovered (kg).
    pub carbon_production: f32,
    /// Hydrogen recovered (kg).
    pub hydrogen_output: f32,
    /// Recovered fuel energy value relative to input energy demand.
    pub cycle_efficiency: f32,
    /// Bounded 0-100 sustainability score.
    pub sustainability_score: f32,
}

// =============================================================================
// Calculation
// =============================================================================

/// Run one decomposition pass over the default batch mass.
pub fn simulate_decomposition(composition: &WasteComposition) -> SimulationResult {
    simulate_decomposition_with_mass(composition, DEFAULT_TOTAL_MASS_KG)
}

/// Run one decomposition pass over an explicit batch mass in kilograms.
///
/// Pure and deterministic: identical inputs always produce bit-identical
/// outputs. Negative masses and percentages are clamped to 0 before they
/// enter the formulas, so no output can go negative.
pub fn simulate_decomposition_with_mass(
    composition: &WasteComposition,
    total_mass_kg: f32,
) -> SimulationResult {
    let total_mass = total_mass_kg.max(0.0);

    let mut energy_needs = 0.0f32;
    let mut methane = 0.0f32;
    let mut carbon = 0.0f32;
    let mut hydrogen = 0.0f32;

    for category in MaterialCategory::ALL {
        let percent = composition.get(category).clamp(0.0, 100.0);
        let category_mass = percent / 100.0 * total_mass;
        let profile = category.profile();
        let decomposed = category_mass * profile.decomposition_rate;

        energy_needs += category_mass * profile.energy_requirement;
        methane += decomposed * METHANE_YIELD_FRACTION;
        carbon += decomposed * CARBON_YIELD_FRACTION;
        hydrogen += decomposed * HYDROGEN_YIELD_FRACTION;
    }

    let recovered_value = methane * METHANE_ENERGY_VALUE + hydrogen * HYDROGEN_ENERGY_VALUE;
    let cycle_efficiency = if energy_needs > 0.0 {
        recovered_value / energy_needs
    } else {
        debug!("zero-energy batch, cycle efficiency defined as 0");
        0.0
    };

    let sustainability_score = (cycle_efficiency * SUSTAINABILITY_GAIN).clamp(0.0, 100.0);

    SimulationResult {
        energy_needs,
        methane_output: methane,
        carbon_production: carbon,
        hydrogen_output: hydrogen,
        cycle_efficiency,
        sustainability_score,
    }
}

// =============================================================================
// Unit tests
// =============================================================================

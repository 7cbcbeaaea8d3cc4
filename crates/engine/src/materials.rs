//! Material coefficient tables (FEED-001).
//!
//! Maps each feedstock category to its conversion behavior inside the
//! plasma chamber: the fraction of fed mass that decomposes per pass and
//! the energy demanded per kilogram fed. The yield split of decomposed
//! mass is fixed across categories — 40% methane, 15% hydrogen, 30% solid
//! carbon, the remainder lost as flue gas.
//!
//! Categories are a closed enum; operator-facing string keys parse through
//! [`MaterialCategory::parse`], and an unknown key is a hard error rather
//! than a silently ignored entry.

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

// =============================================================================
// Yield split constants
// =============================================================================

/// Fraction of decomposed mass recovered as methane.
pub const METHANE_YIELD_FRACTION: f32 = 0.40;

/// Fraction of decomposed mass recovered as hydrogen.
pub const HYDROGEN_YIELD_FRACTION: f32 = 0.15;

/// Fraction of decomposed mass recovered as solid carbon.
pub const CARBON_YIELD_FRACTION: f32 = 0.30;

// =============================================================================
// MaterialCategory
// =============================================================================

/// Feedstock material categories accepted by the conversion process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialCategory {
    Polymers,
    Packaging,
    StructuralResidues,
    Organics,
    Metals,
}

impl MaterialCategory {
    /// All categories, in canonical order.
    pub const ALL: [MaterialCategory; 5] = [
        MaterialCategory::Polymers,
        MaterialCategory::Packaging,
        MaterialCategory::StructuralResidues,
        MaterialCategory::Organics,
        MaterialCategory::Metals,
    ];

    /// Canonical string key for this category, as it appears in operator
    /// input maps and config files.
    pub fn key(self) -> &'static str {
        match self {
            MaterialCategory::Polymers => "polymers",
            MaterialCategory::Packaging => "packaging",
            MaterialCategory::StructuralResidues => "structural-residues",
            MaterialCategory::Organics => "organics",
            MaterialCategory::Metals => "metals",
        }
    }

    /// Parse an operator-supplied category key.
    ///
    /// Unknown keys indicate a caller or config bug, not noisy input, so
    /// they fail hard instead of being clamped away.
    pub fn parse(key: &str) -> Result<MaterialCategory, EngineError> {
        MaterialCategory::ALL
            .into_iter()
            .find(|c| c.key() == key)
            .ok_or_else(|| EngineError::UnknownCategory(key.to_string()))
    }

    /// Conversion profile for this category.
    pub fn profile(self) -> MaterialProfile {
        match self {
            MaterialCategory::Polymers => MaterialProfile {
                decomposition_rate: 0.90,
                energy_requirement: 2.8,
            },
            MaterialCategory::Packaging => MaterialProfile {
                decomposition_rate: 0.85,
                energy_requirement: 1.9,
            },
            MaterialCategory::StructuralResidues => MaterialProfile {
                decomposition_rate: 0.60,
                energy_requirement: 3.5,
            },
            MaterialCategory::Organics => MaterialProfile {
                decomposition_rate: 0.95,
                energy_requirement: 1.2,
            },
            MaterialCategory::Metals => MaterialProfile {
                decomposition_rate: 0.25,
                energy_requirement: 4.2,
            },
        }
    }
}

// =============================================================================
// MaterialProfile
// =============================================================================

/// Per-category conversion constants. Immutable configuration, defined once
/// at process start.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProfile {
    /// Fraction of fed mass converted per pass (0.0-1.0).
    pub decomposition_rate: f32,
    /// Energy demand per kilogram fed (MJ/kg).
    pub energy_requirement: f32,
}

/// Conservative profile for categories without a dedicated entry yet: new
/// feedstock classes are treated as slow and expensive until tuned.
pub const FALLBACK_PROFILE: MaterialProfile = MaterialProfile {
    decomposition_rate: 0.50,
    energy_requirement: 4.0,
};

// =============================================================================
// Unit tests
// =============================================================================

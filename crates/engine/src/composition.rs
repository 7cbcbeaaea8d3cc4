//! Feedstock composition model (FEED-002).
//!
//! Breaks the incoming waste stream into five material categories, each an
//! operator-supplied percentage of the batch. Percentages are clamped to
//! 0-100 on entry. The sum is allowed to differ from 100 — short loads and
//! overbooked hoppers both happen — though a sum above 100 is surfaced as
//! an advisory, never an error.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EngineError;
use crate::materials::MaterialCategory;

/// Percentage breakdown of the feedstock stream by material category.
///
/// Each field is a percentage in 0.0..=100.0. This is a value object with
/// no persisted identity: the operator panel mutates it and the engine
/// recomputes derived metrics wholesale on every change.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct WasteComposition {
    /// Mixed plastics and rubber fraction.
    pub polymers: f32,
    /// Paper, cardboard, and film packaging fraction.
    pub packaging: f32,
    /// Construction and demolition residue fraction.
    pub structural_residues: f32,
    /// Food, garden, and other biodegradable fraction.
    pub organics: f32,
    /// Ferrous and non-ferrous metal fraction.
    pub metals: f32,
}

impl WasteComposition {
    // =========================================================================
    // Preset feedstock streams
    // =========================================================================

    /// Typical municipal collection stream.
    pub fn municipal() -> Self {
        Self {
            polymers: 18.0,
            packaging: 28.0,
            structural_residues: 9.0,
            organics: 38.0,
            metals: 7.0,
        }
    }

    /// Industrial stream: heavier on polymers, residues, and metals.
    pub fn industrial() -> Self {
        Self {
            polymers: 30.0,
            packaging: 14.0,
            structural_residues: 28.0,
            organics: 8.0,
            metals: 20.0,
        }
    }

    /// Construction and demolition stream, dominated by structural residue.
    pub fn construction() -> Self {
        Self {
            polymers: 8.0,
            packaging: 6.0,
            structural_residues: 62.0,
            organics: 4.0,
            metals: 20.0,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Percentage for the given category.
    pub fn get(&self, category: MaterialCategory) -> f32 {
        match category {
            MaterialCategory::Polymers => self.polymers,
            MaterialCategory::Packaging => self.packaging,
            MaterialCategory::StructuralResidues => self.structural_residues,
            MaterialCategory::Organics => self.organics,
            MaterialCategory::Metals => self.metals,
        }
    }

    /// Set the percentage for the given category, clamped to 0-100.
    /// Non-finite input is treated as 0.
    pub fn set(&mut self, category: MaterialCategory, percent: f32) {
        let value = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
        match category {
            MaterialCategory::Polymers => self.polymers = value,
            MaterialCategory::Packaging => self.packaging = value,
            MaterialCategory::StructuralResidues => self.structural_residues = value,
            MaterialCategory::Organics => self.organics = value,
            MaterialCategory::Metals => self.metals = value,
        }
    }

    /// Sum of all category percentages.
    pub fn total_percent(&self) -> f32 {
        MaterialCategory::ALL.into_iter().map(|c| self.get(c)).sum()
    }

    /// Whether the percentages overbook the batch (sum above 100).
    /// Advisory only; the calculators accept such compositions as-is.
    pub fn exceeds_total(&self) -> bool {
        self.total_percent() > 100.0
    }
}

/// Normalize an operator-supplied feedstock map into a composition.
///
/// Unknown category keys are a hard error (they indicate a caller or
/// config bug). Missing categories and non-finite values default to 0;
/// every value is clamped to 0-100. Pure apart from the advisory log line
/// when the percentages overbook the batch.
pub fn normalize(raw: &BTreeMap<String, f64>) -> Result<WasteComposition, EngineError> {
    let mut composition = WasteComposition::default();
    for (key, value) in raw {
        let category = MaterialCategory::parse(key)?;
        composition.set(category, *value as f32);
    }
    if composition.exceeds_total() {
        warn!(
            "feedstock percentages sum to {:.1}, above 100",
            composition.total_percent()
        );
    }
    Ok(composition)
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), *v))
            .collect()
    }

    #[test]
    fn normalize_keeps_in_range_values() {
        let composition = normalize(&raw(&[
            ("polymers", 20.0),
            ("packaging", 25.0),
            ("structural-residues", 10.0),
            ("organics", 35.0),
            ("metals", 10.0),
        ]))
        .expect("known keys should normalize");
        assert_eq!(composition.polymers, 20.0);
        assert_eq!(composition.organics, 35.0);
        assert_eq!(composition.total_percent(), 100.0);
    }

    #[test]
    fn normalize_clamps_out_of_range_values() {
        let composition =
            normalize(&raw(&[("polymers", 250.0), ("metals", -40.0)])).expect("should normalize");
        assert_eq!(composition.polymers, 100.0);
        assert_eq!(composition.metals, 0.0);
    }

    #[test]
    fn normalize_defaults_missing_categories_to_zero() {
        let composition = normalize(&raw(&[("organics", 60.0)])).expect("should normalize");
        assert_eq!(composition.organics, 60.0);
        assert_eq!(composition.polymers, 0.0);
        assert_eq!(composition.packaging, 0.0);
        assert_eq!(composition.structural_residues, 0.0);
        assert_eq!(composition.metals, 0.0);
    }

    #[test]
    fn normalize_defaults_non_finite_to_zero() {
        let composition =
            normalize(&raw(&[("organics", f64::NAN), ("metals", f64::INFINITY)]))
                .expect("should normalize");
        assert_eq!(composition.organics, 0.0);
        // Infinity is non-finite too, not "very large".
        assert_eq!(composition.metals, 0.0);
    }

    #[test]
    fn normalize_rejects_unknown_category() {
        let err = normalize(&raw(&[("glass", 10.0)])).unwrap_err();
        assert_eq!(err, EngineError::UnknownCategory("glass".to_string()));
    }

    #[test]
    fn overbooked_batch_is_advisory_not_error() {
        let composition = normalize(&raw(&[
            ("polymers", 80.0),
            ("organics", 80.0),
        ]))
        .expect("overbooked batches still normalize");
        assert!(composition.exceeds_total());
        assert_eq!(composition.total_percent(), 160.0);
    }

    #[test]
    fn presets_sum_to_one_hundred() {
        for preset in [
            WasteComposition::municipal(),
            WasteComposition::industrial(),
            WasteComposition::construction(),
        ] {
            assert!(
                (preset.total_percent() - 100.0).abs() < 0.001,
                "preset sums to {}, expected 100",
                preset.total_percent()
            );
        }
    }

    #[test]
    fn set_and_get_roundtrip() {
        let mut composition = WasteComposition::default();
        composition.set(MaterialCategory::Packaging, 42.5);
        assert_eq!(composition.get(MaterialCategory::Packaging), 42.5);
    }

    #[test]
    fn serde_rejects_unknown_field() {
        let result: Result<WasteComposition, _> =
            serde_json::from_str(r#"{"polymers": 10.0, "glass": 5.0}"#);
        assert!(result.is_err(), "unknown composition field should not deserialize");
    }

    #[test]
    fn serde_defaults_missing_fields() {
        let composition: WasteComposition =
            serde_json::from_str(r#"{"organics": 55.0}"#).expect("partial record should parse");
        assert_eq!(composition.organics, 55.0);
        assert_eq!(composition.polymers, 0.0);
    }
}

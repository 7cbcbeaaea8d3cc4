//! Multi-year throughput projection (PLAN-003).
//!
//! Extrapolates annual waste tonnage, fuel output, and power draw from a
//! single daily baseline sample. Each call recomputes the whole horizon
//! from the current sample; nothing accumulates between calls and the
//! sequence is not restartable.
//!
//! Growth assumptions per projected year, relative to the first:
//! waste +10% then +20%, methane +15% then +25%, power -10% then -15%
//! (draw falls as the line gets tuned). Efficiency drifts
//! multiplicatively (x0.95, x0.98, x1.02) and compounds year over year.
//! Horizons past the calibrated three years hold the final factor.

use serde::{Deserialize, Serialize};

use crate::config::{DAYS_PER_YEAR, KG_PER_TONNE, KWH_PER_MWH, REFERENCE_CREW_SIZE};

// =============================================================================
// Growth factor tables
// =============================================================================

/// Waste tonnage factors, applied to the first projected year.
const WASTE_GROWTH: [f32; 3] = [1.0, 1.1, 1.2];

/// Methane tonnage factors, same convention.
const METHANE_GROWTH: [f32; 3] = [1.0, 1.15, 1.25];

/// Power draw factors, same convention.
const POWER_GROWTH: [f32; 3] = [1.0, 0.9, 0.85];

/// Multiplicative efficiency drift per year, compounding.
const EFFICIENCY_DRIFT: [f32; 3] = [0.95, 0.98, 1.02];

fn factor(table: &[f32; 3], index: usize) -> f32 {
    if index < table.len() {
        table[index]
    } else {
        table[table.len() - 1]
    }
}

// =============================================================================
// Records
// =============================================================================

/// One day of observed plant throughput, the projection's only input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyBaseline {
    /// Waste processed (kg/day).
    pub waste_kg: f32,
    /// Methane recovered (kg/day).
    pub methane_kg: f32,
    /// Power drawn (kWh/day).
    pub power_kwh: f32,
    /// Conversion efficiency (%).
    pub efficiency: f32,
}

/// Extrapolated throughput for one future year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    /// 1-based index of the projected year.
    pub year: u32,
    /// Annual waste intake (tonnes).
    pub waste_tonnes: f32,
    /// Annual methane output (tonnes).
    pub methane_tonnes: f32,
    /// Annual power draw (MWh).
    pub power_mwh: f32,
    /// Projected conversion efficiency (%), clamped to 0-100.
    pub efficiency_percent: f32,
}

// =============================================================================
// Calculation
// =============================================================================

/// Project `periods` years of throughput from a daily baseline.
///
/// The crew scaling factor is `crew_size / 4` (four is the reference crew
/// the growth tables were calibrated against). Year one annualizes the
/// baseline — `daily * 365 * scaling / 1000` — converting kilograms to
/// tonnes and kilowatt-hours to megawatt-hours; later years apply the
/// factor tables above.
pub fn project(baseline: &DailyBaseline, crew_size: u32, periods: usize) -> Vec<Projection> {
    let scaling_factor = crew_size as f32 / REFERENCE_CREW_SIZE as f32;

    let annual_waste =
        baseline.waste_kg.max(0.0) * DAYS_PER_YEAR * scaling_factor / KG_PER_TONNE;
    let annual_methane =
        baseline.methane_kg.max(0.0) * DAYS_PER_YEAR * scaling_factor / KG_PER_TONNE;
    let annual_power =
        baseline.power_kwh.max(0.0) * DAYS_PER_YEAR * scaling_factor / KWH_PER_MWH;

    let mut projections = Vec::with_capacity(periods);
    let mut efficiency = baseline.efficiency.clamp(0.0, 100.0);

    for period in 0..periods {
        efficiency = (efficiency * factor(&EFFICIENCY_DRIFT, period)).clamp(0.0, 100.0);
        projections.push(Projection {
            year: period as u32 + 1,
            waste_tonnes: annual_waste * factor(&WASTE_GROWTH, period),
            methane_tonnes: annual_methane * factor(&METHANE_GROWTH, period),
            power_mwh: annual_power * factor(&POWER_GROWTH, period),
            efficiency_percent: efficiency,
        });
    }

    projections
}

// =============================================================================
// Unit tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn baseline() -> DailyBaseline {
        DailyBaseline {
            waste_kg: 500.0,
            methane_kg: 120.0,
            power_kwh: 2400.0,
            efficiency: 80.0,
        }
    }

    #[test]
    fn reference_crew_scaling_is_unity() {
        let projections = project(&baseline(), 4, 1);
        let first = &projections[0];
        assert!((first.waste_tonnes - 500.0 * 365.0 / 1000.0).abs() < 1e-3);
        assert!((first.methane_tonnes - 120.0 * 365.0 / 1000.0).abs() < 1e-3);
        assert!((first.power_mwh - 2400.0 * 365.0 / 1000.0).abs() < 1e-3);
    }

    #[test]
    fn double_crew_doubles_first_year() {
        let reference = project(&baseline(), 4, 1);
        let doubled = project(&baseline(), 8, 1);
        assert!((doubled[0].waste_tonnes / reference[0].waste_tonnes - 2.0).abs() < 1e-4);
        assert!((doubled[0].methane_tonnes / reference[0].methane_tonnes - 2.0).abs() < 1e-4);
        assert!((doubled[0].power_mwh / reference[0].power_mwh - 2.0).abs() < 1e-4);
    }

    #[test]
    fn growth_factors_relative_to_first_year() {
        let projections = project(&baseline(), 4, 3);
        let first = &projections[0];
        assert!((projections[1].waste_tonnes - first.waste_tonnes * 1.1).abs() < 1e-3);
        assert!((projections[2].waste_tonnes - first.waste_tonnes * 1.2).abs() < 1e-3);
        assert!((projections[1].methane_tonnes - first.methane_tonnes * 1.15).abs() < 1e-3);
        assert!((projections[2].methane_tonnes - first.methane_tonnes * 1.25).abs() < 1e-3);
        assert!((projections[1].power_mwh - first.power_mwh * 0.9).abs() < 1e-3);
        assert!((projections[2].power_mwh - first.power_mwh * 0.85).abs() < 1e-3);
    }

    #[test]
    fn efficiency_compounds_year_over_year() {
        let projections = project(&baseline(), 4, 3);
        assert!((projections[0].efficiency_percent - 80.0 * 0.95).abs() < 1e-3);
        assert!((projections[1].efficiency_percent - 80.0 * 0.95 * 0.98).abs() < 1e-3);
        assert!(
            (projections[2].efficiency_percent - 80.0 * 0.95 * 0.98 * 1.02).abs() < 1e-3
        );
    }

    #[test]
    fn horizon_past_table_holds_last_factor() {
        let projections = project(&baseline(), 4, 5);
        assert_eq!(projections.len(), 5);
        let first = &projections[0];
        // Years 4 and 5 keep year 3's relative growth.
        assert!((projections[3].waste_tonnes - first.waste_tonnes * 1.2).abs() < 1e-3);
        assert!((projections[4].waste_tonnes - first.waste_tonnes * 1.2).abs() < 1e-3);
        // Efficiency keeps compounding by the final drift factor.
        let expected = 80.0 * 0.95 * 0.98 * 1.02 * 1.02 * 1.02;
        assert!((projections[4].efficiency_percent - expected).abs() < 1e-3);
    }

    #[test]
    fn years_are_one_based_and_ordered() {
        let projections = project(&baseline(), 4, 4);
        let years: Vec<u32> = projections.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![1, 2, 3, 4]);
    }

    #[test]
    fn zero_periods_is_empty() {
        assert!(project(&baseline(), 4, 0).is_empty());
    }

    #[test]
    fn negative_baseline_clamped() {
        let projections = project(
            &DailyBaseline {
                waste_kg: -10.0,
                methane_kg: -5.0,
                power_kwh: -1.0,
                efficiency: 150.0,
            },
            4,
            1,
        );
        let first = &projections[0];
        assert_eq!(first.waste_tonnes, 0.0);
        assert_eq!(first.methane_tonnes, 0.0);
        assert_eq!(first.power_mwh, 0.0);
        assert!(first.efficiency_percent <= 100.0);
    }
}

//! Process parameter optimizer (PROC-006).
//!
//! Converts live chamber parameters into expected methane yield, power
//! draw, and conversion efficiency, then classifies the operating state
//! through an ordered diagnostic rule chain. The chain is data, not
//! control flow: rules are evaluated top to bottom and the first match
//! wins, so the precedence between overlapping conditions is explicit and
//! testable on its own.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::{
    CATALYST_EFFICIENCY_MAX, CATALYST_EFFICIENCY_MIN, ENERGY_INPUT_MAX_KW, ENERGY_INPUT_MIN_KW,
    FLOW_RATE_MAX, FLOW_RATE_MIN, PRESSURE_MAX_ATM, PRESSURE_MIN_ATM, TEMPERATURE_MAX_C,
    TEMPERATURE_MIN_C,
};
use crate::error::EngineError;

// =============================================================================
// Constants
// =============================================================================

/// Reference temperature the yield curve is normalized against (degrees C).
pub const REFERENCE_TEMPERATURE_C: f32 = 1200.0;

/// Methane yield at reference conditions with full flow and catalyst (kg/h).
pub const PEAK_METHANE_YIELD: f32 = 85.0;

/// Largest fraction of the electrical draw the catalyst can offset.
pub const CATALYST_POWER_OFFSET: f32 = 0.3;

/// Temperature above which catalyst fouling becomes imminent (degrees C).
pub const HIGH_TEMP_THRESHOLD_C: f32 = 1300.0;

/// Catalyst efficiency below which a maintenance cycle is recommended (%).
pub const LOW_CATALYST_THRESHOLD: f32 = 85.0;

/// Conversion efficiency above which the state is reported optimal (%).
pub const OPTIMAL_EFFICIENCY_THRESHOLD: f32 = 75.0;

// =============================================================================
// ProcessParameters
// =============================================================================

/// Live chamber parameters, supplied per optimization call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct ProcessParameters {
    /// Arc temperature (degrees C, operating domain 800-1500).
    pub temperature: f32,
    /// Feed rate (% of maximum, 0-100).
    pub flow_rate: f32,
    /// Catalyst efficiency (%, 0-100).
    pub catalyst_efficiency: f32,
    /// Electrical input (kW, operating domain 50-300).
    pub energy_input: f32,
    /// Chamber pressure (atm, operating domain 1.0-5.0). Held for the
    /// operator record; the current yield model does not consume it.
    pub pressure: f32,
}

impl Default for ProcessParameters {
    /// Nominal mid-domain operating point.
    fn default() -> Self {
        Self {
            temperature: 1100.0,
            flow_rate: 75.0,
            catalyst_efficiency: 90.0,
            energy_input: 150.0,
            pressure: 2.5,
        }
    }
}

impl ProcessParameters {
    /// Snap every parameter into its operating domain.
    pub fn clamped(&self) -> Self {
        Self {
            temperature: self.temperature.clamp(TEMPERATURE_MIN_C, TEMPERATURE_MAX_C),
            flow_rate: self.flow_rate.clamp(FLOW_RATE_MIN, FLOW_RATE_MAX),
            catalyst_efficiency: self
                .catalyst_efficiency
                .clamp(CATALYST_EFFICIENCY_MIN, CATALYST_EFFICIENCY_MAX),
            energy_input: self.energy_input.clamp(ENERGY_INPUT_MIN_KW, ENERGY_INPUT_MAX_KW),
            pressure: self.pressure.clamp(PRESSURE_MIN_ATM, PRESSURE_MAX_ATM),
        }
    }

    /// Build a parameter record from an operator-supplied key/value map.
    ///
    /// Unknown keys are a hard error. Missing keys keep the nominal
    /// default; non-finite values are treated the same as missing.
    pub fn from_map(raw: &BTreeMap<String, f64>) -> Result<Self, EngineError> {
        let mut parameters = ProcessParameters::default();
        for (key, value) in raw {
            if !value.is_finite() {
                continue;
            }
            let v = *value as f32;
            match key.as_str() {
                "temperature" => parameters.temperature = v,
                "flow_rate" => parameters.flow_rate = v,
                "catalyst_efficiency" => parameters.catalyst_efficiency = v,
                "energy_input" => parameters.energy_input = v,
                "pressure" => parameters.pressure = v,
                other => return Err(EngineError::UnknownParameter(other.to_string())),
            }
        }
        Ok(parameters)
    }
}

// =============================================================================
// Prediction and diagnostic rule chain
// =============================================================================

/// Operating-state classification returned by the optimizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prediction {
    HighTempWarning,
    LowCatalystAlert,
    Optimal,
    Suboptimal,
}

impl Prediction {
    /// Operator-facing status line for this state.
    pub fn status_label(self) -> &'static str {
        match self {
            Prediction::HighTempWarning => "catalyst fouling likely in 12-15 hours",
            Prediction::LowCatalystAlert => "recommend maintenance cycle",
            Prediction::Optimal => "operating at optimal parameters",
            Prediction::Suboptimal => "efficiency can be increased by ~15%",
        }
    }
}

/// Inputs visible to the diagnostic rules.
#[derive(Debug, Clone, Copy)]
struct Diagnosis {
    temperature: f32,
    catalyst_efficiency: f32,
    efficiency: f32,
}

/// Ordered diagnostic rule chain, first match wins.
///
/// Order is a contract: a chamber that is both over-temperature and short
/// on catalyst reports the temperature warning, never the catalyst alert.
const DIAGNOSTIC_RULES: [(fn(&Diagnosis) -> bool, Prediction); 4] = [
    (
        |d: &Diagnosis| d.temperature > HIGH_TEMP_THRESHOLD_C,
        Prediction::HighTempWarning,
    ),
    (
        |d: &Diagnosis| d.catalyst_efficiency < LOW_CATALYST_THRESHOLD,
        Prediction::LowCatalystAlert,
    ),
    (
        |d: &Diagnosis| d.efficiency > OPTIMAL_EFFICIENCY_THRESHOLD,
        Prediction::Optimal,
    ),
    (|_: &Diagnosis| true, Prediction::Suboptimal),
];

fn classify(diagnosis: &Diagnosis) -> Prediction {
    for (applies, outcome) in &DIAGNOSTIC_RULES {
        if applies(diagnosis) {
            return *outcome;
        }
    }
    Prediction::Suboptimal
}

// =============================================================================
// OptimizationResult
// =============================================================================

/// Derived optimization metrics plus the diagnostic classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OptimizationResult {
    /// Expected methane yield (kg/h).
    pub methane_yield: f32,
    /// Expected electrical draw after catalyst offset (kW).
    pub power_consumption: f32,
    /// Conversion efficiency (%).
    pub efficiency: f32,
    /// Diagnostic classification of the operating state.
    pub prediction: Prediction,
    /// Operator-facing status line for `prediction`.
    pub status_label: &'static str,
}

// =============================================================================
// Calculation
// =============================================================================

/// Derive yield, power draw, and efficiency from the given parameters and
/// classify the operating state.
///
/// Stateless and deterministic: re-invoking with the same parameters
/// yields the same metrics and classification. Percentages are clamped to
/// 0-100 and magnitudes to >= 0 before entering the formulas; full domain
/// snapping is the caller's choice via [`ProcessParameters::clamped`].
pub fn optimize(parameters: &ProcessParameters) -> OptimizationResult {
    let temperature = parameters.temperature.max(0.0);
    let flow_rate = parameters.flow_rate.clamp(0.0, 100.0);
    let catalyst_efficiency = parameters.catalyst_efficiency.clamp(0.0, 100.0);
    let energy_input = parameters.energy_input.max(0.0);

    let methane_yield = (temperature / REFERENCE_TEMPERATURE_C)
        * (flow_rate / 100.0)
        * (catalyst_efficiency / 100.0)
        * PEAK_METHANE_YIELD;

    let power_consumption =
        energy_input * (1.0 - (catalyst_efficiency / 100.0) * CATALYST_POWER_OFFSET);

    let efficiency = if power_consumption > 0.0 {
        methane_yield / power_consumption * 100.0
    } else {
        0.0
    };

    let prediction = classify(&Diagnosis {
        temperature,
        catalyst_efficiency,
        efficiency,
    });

    OptimizationResult {
        methane_yield,
        power_consumption,
        efficiency,
        prediction,
        status_label: prediction.status_label(),
    }
}

// =============================================================================
// Unit tests
// =============================================================================

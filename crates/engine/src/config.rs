//! Cross-cutting process constants shared by the engine modules.

/// Default feedstock batch mass in kilograms when the caller does not
/// specify one.
pub const DEFAULT_TOTAL_MASS_KG: f32 = 100.0;

// Reactor temperature operating domain (degrees Celsius).
pub const TEMPERATURE_MIN_C: f32 = 800.0;
pub const TEMPERATURE_MAX_C: f32 = 1500.0;

// Feed rate domain (% of maximum feed).
pub const FLOW_RATE_MIN: f32 = 0.0;
pub const FLOW_RATE_MAX: f32 = 100.0;

// Catalyst efficiency domain (%).
pub const CATALYST_EFFICIENCY_MIN: f32 = 0.0;
pub const CATALYST_EFFICIENCY_MAX: f32 = 100.0;

// Electrical input domain (kW).
pub const ENERGY_INPUT_MIN_KW: f32 = 50.0;
pub const ENERGY_INPUT_MAX_KW: f32 = 300.0;

// Chamber pressure domain (atm).
pub const PRESSURE_MIN_ATM: f32 = 1.0;
pub const PRESSURE_MAX_ATM: f32 = 5.0;

/// Crew headcount the projection growth factors were calibrated against.
pub const REFERENCE_CREW_SIZE: u32 = 4;

/// Days per projection year (for annualizing daily throughput).
pub const DAYS_PER_YEAR: f32 = 365.0;

/// Kilograms per tonne.
pub const KG_PER_TONNE: f32 = 1000.0;

/// Kilowatt-hours per megawatt-hour.
pub const KWH_PER_MWH: f32 = 1000.0;

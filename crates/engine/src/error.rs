//! Engine error type.
//!
//! Noisy operator input (out-of-domain or non-finite numbers) is clamped or
//! defaulted, never raised. Only configuration mistakes surface as hard
//! errors: an unknown category or parameter key means a caller bug, not a
//! misbehaving sensor.

use thiserror::Error;

/// Hard failures raised by the engine's input boundaries.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// A feedstock map carried a key that is not a known material category.
    #[error("unknown material category: {0:?}")]
    UnknownCategory(String),

    /// A parameter map carried a key that is not a known process parameter.
    #[error("unknown process parameter: {0:?}")]
    UnknownParameter(String),
}

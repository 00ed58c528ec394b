//! Error types for the gradient-noise core.
//!
//! Sampling itself never fails; these errors come from building fields and
//! engines out of user-supplied dimensions and parameters.

use thiserror::Error;

/// Errors produced by engine and field construction.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero, or `width * height` overflowed.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// A parameter was present but unusable (zero octaves, NaN scale, ...).
    #[error("invalid parameter '{name}': {reason}")]
    InvalidParam { name: String, reason: String },

    /// A data buffer did not match the declared field dimensions.
    #[error("dimension mismatch: expected {expected} values for {width}x{height}, got {got}")]
    DimensionMismatch {
        width: usize,
        height: usize,
        expected: usize,
        got: usize,
    },

    /// No engine is registered under this name.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// Writing a snapshot or reading a recipe failed.
    #[error("i/o error: {0}")]
    Io(String),
}

//! The `Engine` trait implemented by every field generator.
//!
//! The trait is object-safe so the registry and CLI can hold `dyn Engine`.

use crate::error::EngineError;
use crate::field::Field;
use serde_json::Value;

/// A step-based generator that exposes its current output as a [`Field`].
pub trait Engine {
    /// Advance by one step.
    fn step(&mut self) -> Result<(), EngineError>;

    /// The current output field.
    fn field(&self) -> &Field;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

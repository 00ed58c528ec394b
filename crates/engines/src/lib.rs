#![deny(unsafe_code)]
//! Engine registry: maps engine names to implementations and turns fields
//! into pixels.
//!
//! Sits between `gradient-noise-core` (the `Engine` trait) and the engine
//! crates, so the CLI never matches on engine names itself.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

pub use pixel::{field_to_rgba, Ramp};

use gradient_noise_core::error::EngineError;
use gradient_noise_core::field::Field;
use gradient_noise_core::Engine;
use gradient_noise_fbm::{NoiseField, NoiseFieldParams};
use serde_json::Value;

const ENGINE_NAMES: &[&str] = &["noise", "fbm"];

/// Every engine the registry can build.
pub enum EngineKind {
    /// Single-octave gradient noise.
    Noise(NoiseField),
    /// Fractal Brownian motion over gradient noise.
    Fbm(NoiseField),
}

impl EngineKind {
    /// Constructs an engine by name.
    ///
    /// Returns `EngineError::UnknownEngine` if the name is not recognized.
    pub fn from_name(
        name: &str,
        width: usize,
        height: usize,
        seed: u64,
        params: &Value,
    ) -> Result<Self, EngineError> {
        match name {
            "noise" => Ok(EngineKind::Noise(NoiseField::from_json(
                width,
                height,
                seed,
                params,
                NoiseFieldParams::noise(),
            )?)),
            "fbm" => Ok(EngineKind::Fbm(NoiseField::from_json(
                width,
                height,
                seed,
                params,
                NoiseFieldParams::fbm(),
            )?)),
            _ => Err(EngineError::UnknownEngine(name.to_string())),
        }
    }

    pub fn list_engines() -> &'static [&'static str] {
        ENGINE_NAMES
    }

    fn inner(&self) -> &NoiseField {
        match self {
            EngineKind::Noise(e) | EngineKind::Fbm(e) => e,
        }
    }
}

impl Engine for EngineKind {
    fn step(&mut self) -> Result<(), EngineError> {
        match self {
            EngineKind::Noise(e) | EngineKind::Fbm(e) => e.step(),
        }
    }

    fn field(&self) -> &Field {
        self.inner().field()
    }

    fn params(&self) -> Value {
        self.inner().params()
    }

    fn param_schema(&self) -> Value {
        self.inner().param_schema()
    }
}

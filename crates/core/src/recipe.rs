//! Reproducible description of a rendered noise field.
//!
//! A [`Recipe`] captures everything needed to recreate a field: engine name,
//! dimensions, parameter overrides, run seed, and step count. Recipes are
//! plain JSON so they can be saved next to the PNG they produced.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};

/// Engine name, size, params, seed, and steps for one run.
///
/// The same recipe fed to the same binary yields a bit-identical field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub engine: String,
    pub width: usize,
    pub height: usize,
    #[serde(default = "empty_params")]
    pub params: serde_json::Value,
    pub seed: u64,
    #[serde(default)]
    pub steps: usize,
}

fn empty_params() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Recipe {
    /// Creates a recipe with empty params and zero steps.
    pub fn new(engine: &str, width: usize, height: usize, seed: u64) -> Self {
        Self {
            engine: engine.to_string(),
            width,
            height,
            params: empty_params(),
            seed,
            steps: 0,
        }
    }

    /// Parses a recipe from JSON text and validates it.
    pub fn from_json_str(text: &str) -> Result<Self, EngineError> {
        let recipe: Recipe = serde_json::from_str(text).map_err(|e| EngineError::InvalidParam {
            name: "recipe".into(),
            reason: e.to_string(),
        })?;
        recipe.validate()?;
        Ok(recipe)
    }

    /// Checks for non-zero dimensions whose product fits in `usize`, and
    /// that `params` is a JSON object.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions);
        }
        self.width
            .checked_mul(self.height)
            .ok_or(EngineError::InvalidDimensions)?;
        if !self.params.is_object() {
            return Err(EngineError::InvalidParam {
                name: "params".into(),
                reason: "must be a JSON object".into(),
            });
        }
        Ok(())
    }
}

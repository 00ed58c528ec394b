#![deny(unsafe_code)]
//! Noise field engine.
//!
//! Samples seeded gradient noise (or its fractal sum) over a width x height
//! grid. Each cell `(x, y)` reads the noise at
//! `(x * scale + offset_x, y * scale + offset_y)`. Every `step()` moves the
//! offsets by the drift vector and resamples, so successive steps scroll
//! through the noise plane.
//!
//! With `radial` enabled each sample is weighted by its normalised distance
//! from the grid centre, darkening the middle and keeping full amplitude in
//! the corners.

use gradient_noise_core::error::EngineError;
use gradient_noise_core::field::Field;
use gradient_noise_core::noise::{FractalParams, NoiseSeed};
use gradient_noise_core::params::{param_bool, param_f64, param_u32};
use gradient_noise_core::prng::Xorshift64;
use gradient_noise_core::remap::{dist, norm};
use gradient_noise_core::Engine;
use serde_json::{json, Value};
use tracing::debug;

/// Noise units per grid cell.
const DEFAULT_SCALE: f64 = 0.03;
/// Octave count for the plain `noise` engine.
const DEFAULT_NOISE_OCTAVES: u32 = 1;
/// Octave count for the `fbm` engine.
const DEFAULT_FBM_OCTAVES: u32 = 4;
/// Amplitude multiplier between octaves.
const DEFAULT_FALLOFF: f64 = 0.5;
/// Horizontal offset change per step, in noise units.
const DEFAULT_DRIFT_X: f64 = 0.03;
/// Vertical offset change per step, in noise units.
const DEFAULT_DRIFT_Y: f64 = 0.002;

/// Tunable parameters for [`NoiseField`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseFieldParams {
    pub scale: f64,
    pub octaves: u32,
    pub falloff: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub drift_x: f64,
    pub drift_y: f64,
    pub radial: bool,
}

impl NoiseFieldParams {
    /// Single-octave defaults.
    pub fn noise() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            octaves: DEFAULT_NOISE_OCTAVES,
            falloff: DEFAULT_FALLOFF,
            offset_x: 0.0,
            offset_y: 0.0,
            drift_x: DEFAULT_DRIFT_X,
            drift_y: DEFAULT_DRIFT_Y,
            radial: false,
        }
    }

    /// Four-octave fBm defaults.
    pub fn fbm() -> Self {
        Self {
            octaves: DEFAULT_FBM_OCTAVES,
            ..Self::noise()
        }
    }

    /// Overlays values from a JSON object onto `defaults`.
    pub fn from_json(params: &Value, defaults: Self) -> Self {
        Self {
            scale: param_f64(params, "scale", defaults.scale),
            octaves: param_u32(params, "octaves", defaults.octaves),
            falloff: param_f64(params, "falloff", defaults.falloff),
            offset_x: param_f64(params, "offset_x", defaults.offset_x),
            offset_y: param_f64(params, "offset_y", defaults.offset_y),
            drift_x: param_f64(params, "drift_x", defaults.drift_x),
            drift_y: param_f64(params, "drift_y", defaults.drift_y),
            radial: param_bool(params, "radial", defaults.radial),
        }
    }

    /// Checks that every numeric parameter is usable and returns the fractal
    /// settings.
    fn validate(&self) -> Result<FractalParams, EngineError> {
        let finite = [
            ("scale", self.scale),
            ("offset_x", self.offset_x),
            ("offset_y", self.offset_y),
            ("drift_x", self.drift_x),
            ("drift_y", self.drift_y),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(EngineError::InvalidParam {
                name: (*name).to_string(),
                reason: format!("must be finite, got {value}"),
            });
        }
        FractalParams::new(self.octaves, self.falloff)
    }
}

impl Default for NoiseFieldParams {
    fn default() -> Self {
        Self::fbm()
    }
}

/// Grid sampler over a single [`NoiseSeed`].
pub struct NoiseField {
    seed: NoiseSeed,
    params: NoiseFieldParams,
    fractal: FractalParams,
    offset_x: f64,
    offset_y: f64,
    field: Field,
}

impl NoiseField {
    /// Creates the engine and samples the initial field.
    ///
    /// The noise tables come from the first draw of `Xorshift64::new(seed)`,
    /// so the run seed alone decides the pattern.
    ///
    /// Returns `EngineError::InvalidDimensions` for a zero dimension and
    /// `EngineError::InvalidParam` for zero octaves or non-finite values.
    pub fn new(
        width: usize,
        height: usize,
        seed: u64,
        params: NoiseFieldParams,
    ) -> Result<Self, EngineError> {
        let fractal = params.validate()?;
        let field = Field::new(width, height)?;
        let noise_seed = Xorshift64::new(seed).next_noise_seed();
        debug!(width, height, seed, ?params, "noise field created");

        let mut engine = Self {
            seed: noise_seed,
            params,
            fractal,
            offset_x: params.offset_x,
            offset_y: params.offset_y,
            field,
        };
        engine.resample();
        Ok(engine)
    }

    /// Creates the engine from a JSON params object, overlaying `defaults`.
    pub fn from_json(
        width: usize,
        height: usize,
        seed: u64,
        json_params: &Value,
        defaults: NoiseFieldParams,
    ) -> Result<Self, EngineError> {
        Self::new(
            width,
            height,
            seed,
            NoiseFieldParams::from_json(json_params, defaults),
        )
    }

    /// The noise tables in use.
    pub fn noise_seed(&self) -> &NoiseSeed {
        &self.seed
    }

    /// Current sampling offset in noise units.
    pub fn offset(&self) -> (f64, f64) {
        (self.offset_x, self.offset_y)
    }

    fn resample(&mut self) {
        let width = self.field.width();
        let cx = width as f64 / 2.0;
        let cy = self.field.height() as f64 / 2.0;
        let max_dist = dist(cx, cy, 0.0, 0.0);

        let NoiseFieldParams { scale, radial, .. } = self.params;
        let (ox, oy) = (self.offset_x, self.offset_y);
        let seed = &self.seed;
        let fractal = &self.fractal;

        for (i, cell) in self.field.data_mut().iter_mut().enumerate() {
            let x = (i % width) as f64;
            let y = (i / width) as f64;
            let v = seed.fractal(x * scale + ox, y * scale + oy, fractal);
            *cell = if radial {
                v * norm(dist(cx, cy, x, y), 0.0, max_dist)
            } else {
                v
            };
        }
    }
}

impl Engine for NoiseField {
    fn step(&mut self) -> Result<(), EngineError> {
        self.offset_x += self.params.drift_x;
        self.offset_y += self.params.drift_y;
        self.resample();
        debug!(
            offset_x = self.offset_x,
            offset_y = self.offset_y,
            "noise field resampled"
        );
        Ok(())
    }

    fn field(&self) -> &Field {
        &self.field
    }

    fn params(&self) -> Value {
        json!({
            "scale": self.params.scale,
            "octaves": self.params.octaves,
            "falloff": self.params.falloff,
            "offset_x": self.params.offset_x,
            "offset_y": self.params.offset_y,
            "drift_x": self.params.drift_x,
            "drift_y": self.params.drift_y,
            "radial": self.params.radial,
        })
    }

    fn param_schema(&self) -> Value {
        json!({
            "scale": {
                "type": "number",
                "default": DEFAULT_SCALE,
                "min": 0.0,
                "max": 1.0,
                "description": "Noise units per grid cell"
            },
            "octaves": {
                "type": "integer",
                "default": self.params.octaves,
                "min": 1,
                "max": 12,
                "description": "Number of fBm layers; 1 is plain gradient noise"
            },
            "falloff": {
                "type": "number",
                "default": DEFAULT_FALLOFF,
                "min": 0.0,
                "max": 1.0,
                "description": "Amplitude multiplier between octaves"
            },
            "offset_x": {
                "type": "number",
                "default": 0.0,
                "description": "Initial horizontal offset in noise units"
            },
            "offset_y": {
                "type": "number",
                "default": 0.0,
                "description": "Initial vertical offset in noise units"
            },
            "drift_x": {
                "type": "number",
                "default": DEFAULT_DRIFT_X,
                "description": "Horizontal offset change per step"
            },
            "drift_y": {
                "type": "number",
                "default": DEFAULT_DRIFT_Y,
                "description": "Vertical offset change per step"
            },
            "radial": {
                "type": "boolean",
                "default": false,
                "description": "Weight samples by distance from the centre"
            }
        })
    }
}

//! Field-to-pixel conversion through a two-colour [`Ramp`].
//!
//! Not feature-gated, so callers that never write PNGs can still build
//! RGBA buffers.

use gradient_noise_core::error::EngineError;
use gradient_noise_core::field::Field;
use gradient_noise_core::remap::{constrain, lerp, map_range};

const RAMP_NAMES: &[&str] = &["gray", "ink", "ember", "tide"];

/// Linear blend between a dark and a light RGB endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ramp {
    pub low: [u8; 3],
    pub high: [u8; 3],
}

impl Ramp {
    pub const fn new(low: [u8; 3], high: [u8; 3]) -> Self {
        Self { low, high }
    }

    /// Black to white.
    pub const fn gray() -> Self {
        Self::new([0x00, 0x00, 0x00], [0xff, 0xff, 0xff])
    }

    /// Blue-black ink on paper.
    pub const fn ink() -> Self {
        Self::new([0x10, 0x18, 0x20], [0xf4, 0xef, 0xe6])
    }

    /// Smouldering red to amber.
    pub const fn ember() -> Self {
        Self::new([0x1a, 0x05, 0x00], [0xff, 0xb3, 0x47])
    }

    /// Deep teal to sea foam.
    pub const fn tide() -> Self {
        Self::new([0x00, 0x2b, 0x36], [0x8f, 0xd3, 0xc8])
    }

    /// Looks up a preset by name.
    ///
    /// Returns `EngineError::InvalidParam` for names not in [`Ramp::list_names`].
    pub fn from_name(name: &str) -> Result<Self, EngineError> {
        match name {
            "gray" => Ok(Self::gray()),
            "ink" => Ok(Self::ink()),
            "ember" => Ok(Self::ember()),
            "tide" => Ok(Self::tide()),
            _ => Err(EngineError::InvalidParam {
                name: "ramp".into(),
                reason: format!("unknown ramp '{name}', expected one of {}", RAMP_NAMES.join(", ")),
            }),
        }
    }

    pub fn list_names() -> &'static [&'static str] {
        RAMP_NAMES
    }

    /// Builds a ramp from two `#rrggbb` (or `rrggbb`) strings.
    pub fn from_hex(low: &str, high: &str) -> Result<Self, EngineError> {
        Ok(Self::new(parse_hex(low)?, parse_hex(high)?))
    }

    /// Colour at `t`, clamped to [0, 1]. NaN maps to the low endpoint.
    pub fn sample(&self, t: f64) -> [u8; 3] {
        let t = if t.is_nan() { 0.0 } else { constrain(t, 0.0, 1.0) };
        let mut rgb = [0u8; 3];
        for (out, (&lo, &hi)) in rgb.iter_mut().zip(self.low.iter().zip(self.high.iter())) {
            *out = lerp(f64::from(lo), f64::from(hi), t).round() as u8;
        }
        rgb
    }
}

impl Default for Ramp {
    fn default() -> Self {
        Self::gray()
    }
}

fn parse_hex(hex: &str) -> Result<[u8; 3], EngineError> {
    let invalid = |reason: String| EngineError::InvalidParam {
        name: "ramp".into(),
        reason,
    };
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid(format!("expected 6 hex digits, got '{hex}'")));
    }
    let mut rgb = [0u8; 3];
    for (i, out) in rgb.iter_mut().enumerate() {
        let pair = &digits[i * 2..i * 2 + 2];
        *out = u8::from_str_radix(pair, 16)
            .map_err(|e| invalid(format!("invalid component '{pair}': {e}")))?;
    }
    Ok(rgb)
}

/// Maps raw samples from [-1, 1] onto the ramp and returns an RGBA8 buffer
/// of length `width * height * 4`.
///
/// Samples outside [-1, 1] saturate at the ramp ends.
pub fn field_to_rgba(field: &Field, ramp: &Ramp) -> Vec<u8> {
    field
        .data()
        .iter()
        .flat_map(|&v| {
            let [r, g, b] = ramp.sample(map_range(v, -1.0, 1.0, 0.0, 1.0));
            [r, g, b, 255u8]
        })
        .collect()
}

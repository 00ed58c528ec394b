//! Seeded 2D gradient noise and fractal Brownian motion.
//!
//! A [`NoiseSeed`] owns a pair of 512-entry lookup tables derived from a
//! numeric seed and the shared [`PERMUTATION`] constant. Sampling is a pure
//! function of the seed tables and the input coordinate: there is no global
//! state, so two seeds never observe each other.
//!
//! Output is nominally in [-1, 1] and is never clamped. Callers that want a
//! display range remap it themselves (see [`crate::remap`]).

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::remap::lerp;

/// Number of distinct lattice cells per axis before the noise repeats.
const TABLE_SIZE: usize = 256;

/// Reference permutation of 0..=255. Every seed is an XOR of this table, so
/// changing a single entry changes every rendered image.
#[rustfmt::skip]
pub const PERMUTATION: [u8; TABLE_SIZE] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225,
    140, 36, 103, 30, 69, 142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148,
    247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219, 203, 117, 35, 11, 32,
    57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122,
    60, 211, 133, 230, 220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54,
    65, 25, 63, 161, 1, 216, 80, 73, 209, 76, 132, 187, 208, 89, 18, 169,
    200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198, 173, 186, 3, 64,
    52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213,
    119, 248, 152, 2, 44, 154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9,
    129, 22, 39, 253, 19, 98, 108, 110, 79, 113, 224, 232, 178, 185, 112, 104,
    218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12, 191, 179, 162, 241,
    81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93,
    222, 114, 67, 29, 24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Gradient palette, indexed by `v % 8` during seeding. Order is significant.
pub const GRADIENTS: [Gradient; 8] = [
    Gradient::new(1, 1),
    Gradient::new(-1, 1),
    Gradient::new(1, -1),
    Gradient::new(-1, -1),
    Gradient::new(1, 0),
    Gradient::new(-1, 0),
    Gradient::new(0, 1),
    Gradient::new(0, -1),
];

/// A lattice gradient with integer components in {-1, 0, 1}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Gradient {
    pub x: i8,
    pub y: i8,
}

impl Gradient {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// Dot product with the offset vector `(x, y)`.
    pub fn dot(self, x: f64, y: f64) -> f64 {
        f64::from(self.x) * x + f64::from(self.y) * y
    }
}

/// Quintic smoothstep `6t^5 - 15t^4 + 10t^3`.
///
/// First and second derivatives vanish at 0 and 1, which keeps the field
/// smooth across lattice cell borders.
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Seed tables for gradient noise.
///
/// Both tables hold 512 entries: the second half mirrors the first so that
/// corner lookups of the form `X + 1 + perm[Y + 1]` never need a modulo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseSeed {
    perm: [u8; TABLE_SIZE * 2],
    grad: [Gradient; TABLE_SIZE * 2],
}

impl NoiseSeed {
    /// Builds the permutation and gradient tables for a numeric seed.
    ///
    /// Seeds strictly between 0 and 1 are treated as fractions of a 16-bit
    /// range and scaled by 65536. The seed is then floored; if the result is
    /// below 256 its low byte is mirrored into the high byte. Even table
    /// slots are XORed with the high byte, odd slots with the low byte.
    ///
    /// The result depends only on `seed`.
    pub fn new(seed: f64) -> Self {
        let bits = normalize_seed(seed);
        let low = (bits & 0xFF) as u8;
        let high = ((bits >> 8) & 0xFF) as u8;

        let mut perm = [0u8; TABLE_SIZE * 2];
        let mut grad = [GRADIENTS[0]; TABLE_SIZE * 2];
        for (i, &p) in PERMUTATION.iter().enumerate() {
            let v = if i & 1 == 1 { p ^ low } else { p ^ high };
            let g = GRADIENTS[usize::from(v) % GRADIENTS.len()];
            perm[i] = v;
            perm[i + TABLE_SIZE] = v;
            grad[i] = g;
            grad[i + TABLE_SIZE] = g;
        }

        Self { perm, grad }
    }

    /// The 512-entry permutation table.
    pub fn perm(&self) -> &[u8; TABLE_SIZE * 2] {
        &self.perm
    }

    /// The 512-entry gradient table.
    pub fn grad(&self) -> &[Gradient; TABLE_SIZE * 2] {
        &self.grad
    }

    /// Gradient noise at `(x, y)`.
    ///
    /// Returns exactly 0 at integer coordinates. The lattice repeats every
    /// 256 units on both axes. Magnitude stays within about 1.0; the value
    /// is not clamped.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let x_floor = x.floor();
        let y_floor = y.floor();
        let cx = lattice_index(x_floor);
        let cy = lattice_index(y_floor);

        let x = x - x_floor;
        let y = y - y_floor;

        let row0 = usize::from(self.perm[cy]);
        let row1 = usize::from(self.perm[cy + 1]);

        let n00 = self.grad[cx + row0].dot(x, y);
        let n01 = self.grad[cx + row1].dot(x, y - 1.0);
        let n10 = self.grad[cx + 1 + row0].dot(x - 1.0, y);
        let n11 = self.grad[cx + 1 + row1].dot(x - 1.0, y - 1.0);

        let u = fade(x);
        lerp(lerp(n00, n10, u), lerp(n01, n11, u), fade(y))
    }

    /// Fractal Brownian motion: `octaves` layers of [`sample`](Self::sample)
    /// at doubling frequency, amplitude multiplied by `falloff` per layer,
    /// divided by the sum of the amplitudes used.
    ///
    /// Expects `octaves > 0` and `falloff` in (0, 1). With `octaves == 0`
    /// the result is NaN (0 / 0). With `falloff == 0` only the first octave
    /// contributes.
    pub fn fractal_sample(&self, x: f64, y: f64, octaves: u32, falloff: f64) -> f64 {
        let (sum, total, _, _) =
            (0..octaves).fold((0.0, 0.0, 1.0, 1.0), |(sum, total, amp, freq), _| {
                (
                    sum + self.sample(x * freq, y * freq) * amp,
                    total + amp,
                    amp * falloff,
                    freq * 2.0,
                )
            });
        sum / total
    }

    /// [`fractal_sample`](Self::fractal_sample) with validated parameters.
    pub fn fractal(&self, x: f64, y: f64, params: &FractalParams) -> f64 {
        self.fractal_sample(x, y, params.octaves, params.falloff)
    }
}

/// Octave count and per-octave amplitude falloff for fBm.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    pub octaves: u32,
    pub falloff: f64,
}

impl Default for FractalParams {
    fn default() -> Self {
        Self {
            octaves: 4,
            falloff: 0.5,
        }
    }
}

impl FractalParams {
    /// Returns `EngineError::InvalidParam` for zero octaves or a negative
    /// or non-finite falloff.
    pub fn new(octaves: u32, falloff: f64) -> Result<Self, EngineError> {
        if octaves == 0 {
            return Err(EngineError::InvalidParam {
                name: "octaves".into(),
                reason: "must be at least 1".into(),
            });
        }
        if !falloff.is_finite() || falloff < 0.0 {
            return Err(EngineError::InvalidParam {
                name: "falloff".into(),
                reason: format!("must be a finite non-negative number, got {falloff}"),
            });
        }
        Ok(Self { octaves, falloff })
    }
}

/// Scales fractional seeds, floors, and mirrors small seeds into the high
/// byte, using 32-bit two's-complement integer semantics.
fn normalize_seed(seed: f64) -> i32 {
    let scaled = if seed > 0.0 && seed < 1.0 {
        seed * 65536.0
    } else {
        seed
    };
    let floored = scaled.floor();
    let bits = to_int32(floored);
    if floored < 256.0 {
        bits | (bits << 8)
    } else {
        bits
    }
}

/// Wraps an integral float into `i32` modulo 2^32. Non-finite values map to 0.
fn to_int32(v: f64) -> i32 {
    if !v.is_finite() {
        return 0;
    }
    v.trunc().rem_euclid(4_294_967_296.0) as u32 as i32
}

/// Wraps a floored coordinate into [0, 256) through the same 32-bit
/// conversion as the seed, so huge coordinates keep their low byte.
fn lattice_index(floored: f64) -> usize {
    (to_int32(floored) & 0xFF) as usize
}

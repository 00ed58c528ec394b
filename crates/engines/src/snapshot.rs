//! PNG output of a [`Field`].
//!
//! Behind the `png` feature (default on); the pixel conversion itself lives
//! in [`crate::pixel`].

use gradient_noise_core::error::EngineError;
use gradient_noise_core::field::Field;
use std::path::Path;

use crate::pixel::{field_to_rgba, Ramp};

/// Writes a field as a PNG image, colouring samples through `ramp`.
///
/// Returns `EngineError::InvalidDimensions` if the field dimensions overflow
/// `u32`, or `EngineError::Io` on write failure.
pub fn write_png(field: &Field, ramp: &Ramp, path: &Path) -> Result<(), EngineError> {
    let w = u32::try_from(field.width()).map_err(|_| EngineError::InvalidDimensions)?;
    let h = u32::try_from(field.height()).map_err(|_| EngineError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, field_to_rgba(field, ramp))
        .ok_or_else(|| EngineError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| EngineError::Io(e.to_string()))
}

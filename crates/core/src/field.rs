//! Two-dimensional grid of raw noise samples.
//!
//! A `Field` stores `width * height` f64 values in row-major order. Values
//! are kept exactly as sampled: noise output is nominally [-1, 1] and may
//! drift slightly past it, so nothing here clamps. Display mapping happens
//! at render time.

use crate::error::EngineError;

/// A row-major 2D scalar grid with toroidal coordinate access.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    width: usize,
    height: usize,
    data: Vec<f64>,
}

/// Validates dimensions and returns the cell count.
fn cell_count(width: usize, height: usize) -> Result<usize, EngineError> {
    if width == 0 || height == 0 {
        return Err(EngineError::InvalidDimensions);
    }
    width
        .checked_mul(height)
        .ok_or(EngineError::InvalidDimensions)
}

impl Field {
    /// Creates a zero-filled field.
    ///
    /// Returns `EngineError::InvalidDimensions` if either dimension is zero
    /// or if `width * height` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0.0; len],
        })
    }

    /// Creates a field by evaluating `f(x, y)` for every cell in row-major
    /// order.
    pub fn from_fn<F>(width: usize, height: usize, mut f: F) -> Result<Self, EngineError>
    where
        F: FnMut(usize, usize) -> f64,
    {
        let len = cell_count(width, height)?;
        let data = (0..len).map(|i| f(i % width, i / width)).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Wraps an existing buffer, checking `data.len() == width * height`.
    pub fn from_data(width: usize, height: usize, data: Vec<f64>) -> Result<Self, EngineError> {
        let expected = cell_count(width, height)?;
        if data.len() != expected {
            return Err(EngineError::DimensionMismatch {
                width,
                height,
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the row-major data.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Mutable access to the row-major data.
    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    fn index(&self, x: isize, y: isize) -> usize {
        let xi = x.rem_euclid(self.width as isize) as usize;
        let yi = y.rem_euclid(self.height as isize) as usize;
        yi * self.width + xi
    }

    /// Value at `(x, y)`, wrapping out-of-range coordinates.
    pub fn get(&self, x: isize, y: isize) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Smallest and largest non-NaN values, or `None` if every value is NaN.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Iterates over all cells yielding `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.data
            .iter()
            .enumerate()
            .map(|(i, &v)| (i % self.width, i / self.width, v))
    }
}

#![deny(unsafe_code)]
//! Core of the gradient-noise workspace.
//!
//! Provides the seeded 2D gradient noise and fBm ([`NoiseSeed`]), linear
//! remap helpers, the `Xorshift64` PRNG, the raw-sample [`Field`], the
//! [`Engine`] trait, JSON parameter helpers, and the reproducible
//! [`Recipe`].

pub mod engine;
pub mod error;
pub mod field;
pub mod noise;
pub mod params;
pub mod prng;
pub mod recipe;
pub mod remap;

pub use engine::Engine;
pub use error::EngineError;
pub use field::Field;
pub use noise::{FractalParams, Gradient, NoiseSeed};
pub use prng::Xorshift64;
pub use recipe::Recipe;

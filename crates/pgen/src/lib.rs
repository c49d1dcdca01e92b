//! Procedural generation primitives: seeded coherent noise and height fields.
//!
//! # Invariants
//! - A `NoiseField` is a pure function of its seed, octaves, exponent and the
//!   sample coordinates. The same inputs always give the same bits.
//! - Noise sources return signed values in `[-1, 1]`. Height fields clamp
//!   negative octave sums to 0 before the exponent, so heights land in
//!   `[0, 1]` when amplitudes sum to at most 1.

mod field;
mod source;

pub use field::{ConstantField, HeightField, NoiseField, Octave};
pub use source::{NoiseSource, SimplexSource};

pub fn crate_info() -> &'static str {
    "tileworld-pgen v0.1.0"
}

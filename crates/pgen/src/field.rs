use serde::{Deserialize, Serialize};

use crate::source::{NoiseSource, SimplexSource};

/// One frequency/amplitude layer of a fractal noise sum.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Octave {
    pub frequency: f64,
    pub amplitude: f64,
}

impl Octave {
    pub const fn new(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
        }
    }
}

/// Anything that yields a scalar height for a world coordinate.
///
/// The world generator consumes this rather than a concrete noise type, so
/// synthetic fields can stand in for noise.
pub trait HeightField {
    fn evaluate(&self, x: f64, y: f64) -> f64;
}

/// Octave-summed noise raised to an exponent.
///
/// Immutable after construction; `evaluate` has no side effects.
#[derive(Debug, Clone)]
pub struct NoiseField<S = SimplexSource> {
    seed: i64,
    source: S,
    octaves: Vec<Octave>,
    exponent: f64,
}

impl NoiseField<SimplexSource> {
    /// Build a field over OpenSimplex noise seeded with `seed`.
    pub fn new(seed: i64, octaves: Vec<Octave>, exponent: f64) -> Self {
        Self::with_source(seed, SimplexSource::new(seed), octaves, exponent)
    }
}

impl<S: NoiseSource> NoiseField<S> {
    /// Build a field over an arbitrary noise primitive. `seed` is recorded for
    /// inspection only; the source is expected to be seeded already.
    pub fn with_source(seed: i64, source: S, octaves: Vec<Octave>, exponent: f64) -> Self {
        tracing::debug!(seed, octaves = octaves.len(), exponent, "noise field created");
        Self {
            seed,
            source,
            octaves,
            exponent,
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }

    pub fn octaves(&self) -> &[Octave] {
        &self.octaves
    }

    pub fn exponent(&self) -> f64 {
        self.exponent
    }

    /// Sum of all octave amplitudes; the upper bound of the pre-exponent sum.
    pub fn total_amplitude(&self) -> f64 {
        self.octaves.iter().map(|o| o.amplitude).sum()
    }
}

impl<S: NoiseSource> HeightField for NoiseField<S> {
    fn evaluate(&self, x: f64, y: f64) -> f64 {
        // Accumulate in octave order; reordering changes float rounding.
        let mut sum = 0.0;
        for octave in &self.octaves {
            sum += octave.amplitude * self.source.sample(octave.frequency * x, octave.frequency * y);
        }
        // Negative bases have no real fractional power; clamp instead of
        // letting NaN reach the classifier.
        sum.max(0.0).powf(self.exponent)
    }
}

/// A height field returning the same value everywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantField(pub f64);

impl HeightField for ConstantField {
    fn evaluate(&self, _x: f64, _y: f64) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Echoes the x coordinate back.
    struct LinearSource;

    impl NoiseSource for LinearSource {
        fn sample(&self, x: f64, _y: f64) -> f64 {
            x
        }
    }

    struct Half;

    impl NoiseSource for Half {
        fn sample(&self, _x: f64, _y: f64) -> f64 {
            0.5
        }
    }

    fn default_octaves() -> Vec<Octave> {
        vec![
            Octave::new(0.01, 0.6),
            Octave::new(0.05, 0.3),
            Octave::new(0.1, 0.07),
            Octave::new(0.2, 0.02),
            Octave::new(0.4, 0.01),
        ]
    }

    #[test]
    fn evaluate_is_deterministic() {
        let a = NoiseField::new(42, default_octaves(), 0.8);
        let b = NoiseField::new(42, default_octaves(), 0.8);
        for x in 0..32 {
            for y in 0..32 {
                let (x, y) = (x as f64, y as f64);
                assert_eq!(a.evaluate(x, y).to_bits(), b.evaluate(x, y).to_bits());
            }
        }
    }

    #[test]
    fn evaluate_stays_within_unit_range() {
        let field = NoiseField::new(-99, default_octaves(), 0.8);
        assert!((field.total_amplitude() - 1.0).abs() < 1e-12);
        let mut zeros = 0;
        for x in (0..1000).step_by(37) {
            for y in (0..1000).step_by(41) {
                let h = field.evaluate(x as f64, y as f64);
                assert!((0.0..=1.0).contains(&h), "height {h} out of range");
                if h == 0.0 {
                    zeros += 1;
                }
            }
        }
        // Signed noise leaves part of the map with a negative sum.
        assert!(zeros > 0);
    }

    #[test]
    fn field_is_near_zero_at_origin() {
        let field = NoiseField::new(42, default_octaves(), 0.8);
        assert!(field.evaluate(0.0, 0.0) < 1e-9);
    }

    #[test]
    fn octaves_scale_and_sum() {
        let field = NoiseField::with_source(
            0,
            Half,
            vec![Octave::new(1.0, 0.5), Octave::new(2.0, 0.25)],
            1.0,
        );
        assert_eq!(field.evaluate(10.0, 3.0), 0.375);
    }

    #[test]
    fn frequency_scales_coordinates() {
        let field = NoiseField::with_source(0, LinearSource, vec![Octave::new(0.5, 1.0)], 1.0);
        assert_eq!(field.evaluate(4.0, 0.0), 2.0);
    }

    #[test]
    fn exponent_applies_to_sum() {
        let field = NoiseField::with_source(0, Half, vec![Octave::new(1.0, 1.0)], 2.0);
        assert_eq!(field.evaluate(0.0, 0.0), 0.25);
    }

    #[test]
    fn negative_sum_clamps_to_zero() {
        let field = NoiseField::with_source(0, LinearSource, vec![Octave::new(1.0, 1.0)], 0.8);
        let h = field.evaluate(-3.0, 0.0);
        assert_eq!(h, 0.0);
        assert!(!h.is_nan());
    }

    #[test]
    fn empty_octaves_yield_zero() {
        let field = NoiseField::with_source(0, Half, Vec::new(), 0.8);
        assert_eq!(field.evaluate(5.0, 5.0), 0.0);
    }

    #[test]
    fn constant_field_ignores_coordinates() {
        let field = ConstantField(0.55);
        assert_eq!(field.evaluate(0.0, 0.0), 0.55);
        assert_eq!(field.evaluate(-1e9, 1e9), 0.55);
    }
}

use noise::{NoiseFn, OpenSimplex};

/// A seeded, continuous 2D noise primitive.
///
/// Implementations must be deterministic for a given seed and return values in
/// `[-1, 1]`.
pub trait NoiseSource {
    fn sample(&self, x: f64, y: f64) -> f64;
}

/// OpenSimplex noise, signed, clamped to `[-1, 1]`.
#[derive(Clone)]
pub struct SimplexSource {
    seed: i64,
    noise: OpenSimplex,
}

impl SimplexSource {
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            noise: OpenSimplex::new(fold_seed(seed)),
        }
    }

    pub fn seed(&self) -> i64 {
        self.seed
    }
}

impl std::fmt::Debug for SimplexSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimplexSource")
            .field("seed", &self.seed)
            .finish()
    }
}

impl NoiseSource for SimplexSource {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.noise.get([x, y]).clamp(-1.0, 1.0)
    }
}

/// Fold a 64-bit world seed into the 32-bit seed the noise permutation table
/// takes. Both halves contribute so seeds differing only in the high word
/// still produce different worlds.
fn fold_seed(seed: i64) -> u32 {
    let bits = seed as u64;
    (bits ^ (bits >> 32)) as u32
}

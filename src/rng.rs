//! Seeded random stream for reproducible generation
//!
//! One `NoiseRng` is scoped to one generation call. It feeds the
//! permutation shuffle (Perlin), the nuclei scatter (Voronoi), and the
//! per-pixel draws of white noise, in that call's draw order. Same seed,
//! same full sequence of draws.
//!
//! Author: Moroya Sakamoto

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic uniform random source.
///
/// Not thread-safe by design: a stream belongs to exactly one generation
/// call, and every draw advances shared state.
pub struct NoiseRng {
    rng: ChaCha8Rng,
}

impl NoiseRng {
    /// Create a stream from a seed.
    pub fn seed(value: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(value),
        }
    }

    /// Uniform f32 in [lo, hi).
    ///
    /// A degenerate range (lo == hi) returns `lo` and still consumes one
    /// draw, so the stream position stays independent of the bounds.
    #[inline]
    pub fn uniform(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.rng.gen::<f32>()
    }

    /// Uniform integer in [0, n). `n` must be at least 1.
    #[inline]
    pub fn uniform_int(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}

//! Gradient (Perlin) noise layer
//!
//! Single-octave 2D gradient noise over a seeded permutation table:
//! each lattice corner gets one of four fixed diagonal gradients, the
//! corner-to-sample offsets are dotted against them, and the four dot
//! products are blended with a quintic ease curve. Output is in [-1, 1]
//! and exactly 0 at integer lattice points.
//!
//! Author: Moroya Sakamoto

use crate::rng::NoiseRng;
use glam::Vec2;

// ── Permutation Table ────────────────────────────────────────

/// A seeded, shuffled permutation of 0..255.
///
/// Built once per generation call and immutable afterwards. Lookup is
/// the classic two-level `table[(table[x] + y) % 256]` indexing, which
/// turns a lattice coordinate pair into a pseudo-random but reproducible
/// byte.
pub struct PermutationTable {
    table: [u8; 256],
}

impl PermutationTable {
    /// Build a table from the stream: identity 0..255, then a
    /// Fisher-Yates shuffle drawing `uniform_int(i + 1)` for i from 255
    /// down to 1.
    pub fn build(rng: &mut NoiseRng) -> Self {
        let mut table = [0u8; 256];
        for (i, slot) in table.iter_mut().enumerate() {
            *slot = i as u8;
        }
        for i in (1..256).rev() {
            let j = rng.uniform_int(i + 1);
            table.swap(i, j);
        }
        Self { table }
    }

    /// Two-level lookup `table[(table[x] + y) % 256]`.
    ///
    /// `x` and `y` are wrapped into [0, 255] first, so the off-by-one
    /// corner indices (x + 1 == 256) wrap instead of overflowing.
    #[inline]
    pub fn lookup(&self, x: usize, y: usize) -> u8 {
        self.table[(self.table[x & 255] as usize + (y & 255)) % 256]
    }

    /// The raw permutation entries, in table order.
    pub fn entries(&self) -> &[u8; 256] {
        &self.table
    }
}

// ── Gradients ────────────────────────────────────────────────

/// Map a permutation value to one of four fixed diagonal gradients,
/// cycling with period 4: 0 → (1, 1), 1 → (-1, 1), 2 → (-1, -1),
/// 3 → (1, -1).
#[inline]
pub fn gradient_for(value: u8) -> Vec2 {
    match value & 3 {
        0 => Vec2::new(1.0, 1.0),
        1 => Vec2::new(-1.0, 1.0),
        2 => Vec2::new(-1.0, -1.0),
        _ => Vec2::new(1.0, -1.0),
    }
}

// ── Interpolation ────────────────────────────────────────────

/// Quintic ease curve `t³(t(6t − 15) + 10)`.
///
/// Zero first and second derivative at t = 0 and t = 1, which keeps the
/// blended noise C²-continuous across cell boundaries.
#[inline]
pub fn smooth(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

// ── Layer evaluation ─────────────────────────────────────────

/// Evaluate one octave of gradient noise at `point`.
///
/// Returns a value in [-1, 1] (practically tighter, not formally
/// clamped).
pub fn perlin_layer(point: Vec2, table: &PermutationTable) -> f32 {
    let ix = (point.x.floor() as i32 & 255) as usize;
    let iy = (point.y.floor() as i32 & 255) as usize;

    let fx = point.x - point.x.floor();
    let fy = point.y - point.y.floor();

    // Corner gradients via double indexing; lookup wraps ix + 1 == 256.
    let grad_bl = gradient_for(table.lookup(ix, iy));
    let grad_br = gradient_for(table.lookup(ix + 1, iy));
    let grad_tl = gradient_for(table.lookup(ix, iy + 1));
    let grad_tr = gradient_for(table.lookup(ix + 1, iy + 1));

    // Offsets from each corner to the sample point
    let dot_bl = Vec2::new(fx, fy).dot(grad_bl);
    let dot_br = Vec2::new(fx - 1.0, fy).dot(grad_br);
    let dot_tl = Vec2::new(fx, fy - 1.0).dot(grad_tl);
    let dot_tr = Vec2::new(fx - 1.0, fy - 1.0).dot(grad_tr);

    let u = smooth(fx);
    let v = smooth(fy);

    let left = lerp(dot_bl, dot_tl, v);
    let right = lerp(dot_br, dot_tr, v);
    lerp(left, right, u)
}

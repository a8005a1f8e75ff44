//! Octave compositor (fractal Brownian motion)
//!
//! Sums a single-octave layer function at rising frequency and falling
//! amplitude, then normalizes by the total amplitude so the result stays
//! in [-1, 1] whenever the layer does.
//!
//! Author: Moroya Sakamoto

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Fractal summation parameters.
///
/// The defaults (persistence 0.5, lacunarity 2.0) reproduce the classic
/// halve-amplitude / double-frequency ladder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FbmParams {
    /// Amplitude multiplier applied after each octave.
    pub persistence: f32,
    /// Frequency multiplier applied after each octave.
    pub lacunarity: f32,
}

impl Default for FbmParams {
    fn default() -> Self {
        Self {
            persistence: 0.5,
            lacunarity: 2.0,
        }
    }
}

/// Composite `octaves` evaluations of `layer` into normalized fractal
/// noise at `point`.
///
/// The first octave already scales the point by the base `frequency`;
/// each following octave multiplies the scale by the lacunarity and the
/// amplitude by the persistence. The amplitude-weighted sum is divided
/// by the accumulated amplitude, which is non-zero for any `octaves >= 1`
/// since the ladder starts at amplitude 1.
pub fn fbm(
    point: Vec2,
    octaves: u32,
    frequency: f32,
    params: FbmParams,
    layer: impl Fn(Vec2) -> f32,
) -> f32 {
    let mut total = 0.0;
    let mut max_amplitude = 0.0;
    let mut amplitude = 1.0_f32;
    let mut scale = frequency;

    for _ in 0..octaves {
        total += layer(point * scale) * amplitude;
        max_amplitude += amplitude;
        amplitude *= params.persistence;
        scale *= params.lacunarity;
    }

    total / max_amplitude
}

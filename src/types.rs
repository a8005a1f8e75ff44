//! Core types for ALICE-Noise
//!
//! Defines the noise field request, the rasterized pixel buffer, and the
//! validation errors that keep bad requests out of the math core.
//!
//! Author: Moroya Sakamoto

use crate::fbm::FbmParams;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Noise kind ───────────────────────────────────────────────

/// Which noise function fills the field.
///
/// A closed set: adding a kind means adding new math, so this is an enum
/// with match-dispatch rather than a trait object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoiseKind {
    /// Uncorrelated per-pixel draws straight from the random stream.
    White,
    /// Multi-octave gradient noise over a seeded permutation table.
    Perlin,
    /// Multi-octave cellular distance-difference noise over scattered
    /// nuclei.
    Voronoi,
}

// ── Field request ────────────────────────────────────────────

/// One noise field generation request.
///
/// Validated before generation; an invalid request never reaches the
/// math core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldRequest {
    /// Output width in pixels. Must be positive.
    pub width: u32,
    /// Output height in pixels. Must be positive.
    pub height: u32,
    /// Seed for the random stream. Same seed, same field.
    pub seed: u64,
    /// Number of fractal octaves. Must be at least 1; ignored by white
    /// noise, which bypasses the compositor.
    pub octaves: u32,
    /// Base frequency (inverse of feature size). Must be non-zero.
    pub frequency: f32,
    /// Which noise function to evaluate.
    pub kind: NoiseKind,
    /// Fractal parameters; the defaults reproduce the classic
    /// 0.5 / 2.0 ladder.
    #[serde(default)]
    pub fbm: FbmParams,
}

impl FieldRequest {
    /// Convenience constructor with default fractal parameters.
    pub fn new(
        width: u32,
        height: u32,
        seed: u64,
        octaves: u32,
        frequency: f32,
        kind: NoiseKind,
    ) -> Self {
        Self {
            width,
            height,
            seed,
            octaves,
            frequency,
            kind,
            fbm: FbmParams::default(),
        }
    }

    /// Check the request before any allocation.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.width == 0 || self.height == 0 {
            return Err(NoiseError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.frequency == 0.0 {
            return Err(NoiseError::InvalidFrequency);
        }
        if self.octaves == 0 {
            return Err(NoiseError::InvalidOctaves);
        }
        Ok(())
    }
}

// ── Pixel buffer ─────────────────────────────────────────────

/// A rasterized noise field: RGBA8 samples, row-major.
///
/// The gray level is replicated into R, G and B; alpha is a constant
/// 255. Produced once per request and handed to the caller (or an
/// [`ImageSink`](crate::io::ImageSink)); the generator keeps no
/// reference afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelBuffer {
    /// RGBA8 bytes, `width * height * 4` long.
    pub data: Vec<u8>,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
}

impl PixelBuffer {
    /// Gray level of the pixel at (x, y).
    ///
    /// Reads the R channel; G and B are identical by construction.
    #[inline]
    pub fn gray(&self, x: u32, y: u32) -> u8 {
        self.data[((y * self.width + x) * 4) as usize]
    }

    /// Alpha of the pixel at (x, y). Always 255 for generated fields.
    #[inline]
    pub fn alpha(&self, x: u32, y: u32) -> u8 {
        self.data[((y * self.width + x) * 4 + 3) as usize]
    }
}

// ── Errors ───────────────────────────────────────────────────

/// Request validation errors.
///
/// All of these fail fast, before any allocation or random draw. The
/// insufficient-nuclei condition is deliberately not here: it degrades
/// per point to a sentinel layer value instead of aborting the buffer.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseError {
    /// Width or height is zero.
    #[error("invalid field dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A frequency of zero would divide the cell-size and octave-scale
    /// math by zero.
    #[error("invalid frequency: must be non-zero")]
    InvalidFrequency,

    /// An octave count of zero would leave the fractal sum with nothing
    /// to normalize by.
    #[error("invalid octave count: must be at least 1")]
    InvalidOctaves,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_request_passes() {
        let req = FieldRequest::new(4, 4, 42, 1, 0.05, NoiseKind::White);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn zero_width_rejected() {
        let req = FieldRequest::new(0, 10, 42, 1, 0.05, NoiseKind::White);
        assert_eq!(
            req.validate(),
            Err(NoiseError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
    }

    #[test]
    fn zero_height_rejected() {
        let req = FieldRequest::new(10, 0, 42, 1, 0.05, NoiseKind::Perlin);
        assert!(matches!(
            req.validate(),
            Err(NoiseError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn zero_frequency_rejected() {
        let req = FieldRequest::new(10, 10, 42, 1, 0.0, NoiseKind::Voronoi);
        assert_eq!(req.validate(), Err(NoiseError::InvalidFrequency));
    }

    #[test]
    fn zero_octaves_rejected() {
        let req = FieldRequest::new(10, 10, 42, 0, 0.05, NoiseKind::Perlin);
        assert_eq!(req.validate(), Err(NoiseError::InvalidOctaves));
    }

    #[test]
    fn negative_frequency_is_allowed() {
        // Only zero is invalid; a negative frequency is degenerate but
        // deterministic (the Voronoi scatter produces no nuclei).
        let req = FieldRequest::new(10, 10, 42, 1, -0.05, NoiseKind::Voronoi);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn request_round_trips_through_serde() {
        let req = FieldRequest::new(64, 32, 7, 4, 0.05, NoiseKind::Voronoi);
        let json = serde_json::to_string(&req).unwrap();
        let back: FieldRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.width, 64);
        assert_eq!(back.kind, NoiseKind::Voronoi);
        assert_eq!(back.fbm, req.fbm);
    }

    #[test]
    fn fbm_params_default_when_missing_from_serde() {
        let json = r#"{"width":4,"height":4,"seed":1,"octaves":1,"frequency":0.05,"kind":"White"}"#;
        let req: FieldRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.fbm, FbmParams::default());
    }
}

//! Common test helpers for ALICE-Noise integration tests
//!
//! Author: Moroya Sakamoto

use alice_noise::prelude::*;

/// Standard small request: 4x4, seed 42, one octave, frequency 0.05.
pub fn small_request(kind: NoiseKind) -> FieldRequest {
    FieldRequest::new(4, 4, 42, 1, 0.05, kind)
}

/// Texture-sized request: 64x64, seed 7, four octaves, frequency 0.05.
pub fn texture_request(kind: NoiseKind) -> FieldRequest {
    FieldRequest::new(64, 64, 7, 4, 0.05, kind)
}

/// Collect the gray channel of a buffer, one byte per pixel.
pub fn gray_plane(buffer: &PixelBuffer) -> Vec<u8> {
    buffer.data.chunks_exact(4).map(|px| px[0]).collect()
}

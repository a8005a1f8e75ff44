//! # ALICE-Noise
//!
//! **A.L.I.C.E. - Adaptive Lightweight Image Computation Engine**
//!
//! Deterministic procedural 2D noise fields for texture generation.
//! Three noise kinds share one seeded random stream, so a field is fully
//! reproducible from its request:
//!
//! - **White**: uncorrelated per-pixel draws from the stream
//! - **Perlin**: multi-octave gradient noise over a shuffled permutation table
//! - **Voronoi**: multi-octave cellular distance-difference noise over
//!   scattered nuclei
//!
//! The output is an RGBA8 pixel buffer (gray replicated into the color
//! channels, opaque alpha) handed to the caller or to an
//! [`ImageSink`](io::ImageSink). Persistence, asset naming and engine
//! integration are deliberately outside this crate.
//!
//! ## Example
//!
//! ```rust
//! use alice_noise::prelude::*;
//!
//! let request = FieldRequest::new(64, 64, 42, 4, 0.05, NoiseKind::Perlin);
//! let field = generate(&request).unwrap();
//!
//! assert_eq!(field.data.len(), 64 * 64 * 4);
//! // Same request, same bytes
//! assert_eq!(generate(&request).unwrap(), field);
//! ```
//!
//! ## Author
//!
//! Moroya Sakamoto

#![warn(missing_docs)]

pub mod fbm;
pub mod io;
pub mod perlin;
pub mod raster;
pub mod rng;
pub mod types;
pub mod voronoi;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude - commonly used types and functions
pub mod prelude {
    pub use crate::fbm::{fbm, FbmParams};
    pub use crate::io::{export_ppm, export_ppm_ascii, ImageSink, PpmFileSink, SinkError};
    pub use crate::perlin::{gradient_for, perlin_layer, smooth, PermutationTable};
    pub use crate::raster::{generate, noise_to_gray};
    pub use crate::rng::NoiseRng;
    pub use crate::types::{FieldRequest, NoiseError, NoiseKind, PixelBuffer};
    pub use crate::voronoi::{build_nuclei, voronoi_layer, NUCLEI_SENTINEL};
    pub use glam::Vec2;
}

// Re-exports for convenience
pub use raster::generate;
pub use types::{FieldRequest, NoiseError, NoiseKind, PixelBuffer};

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_basic_workflow() {
        let request = FieldRequest::new(32, 32, 42, 4, 0.05, NoiseKind::Perlin);
        let field = generate(&request).unwrap();

        assert_eq!(field.width, 32);
        assert_eq!(field.height, 32);
        assert_eq!(field.data.len(), 32 * 32 * 4);

        // The fractal sum is normalized, so every gray level is valid
        // and alpha is opaque everywhere.
        for y in 0..32 {
            assert_eq!(field.alpha(0, y), 255);
        }
    }

    #[test]
    fn test_all_kinds_generate() {
        for kind in [NoiseKind::White, NoiseKind::Perlin, NoiseKind::Voronoi] {
            let request = FieldRequest::new(16, 16, 7, 2, 0.1, kind);
            let field = generate(&request).unwrap();
            assert_eq!(field.data.len(), 16 * 16 * 4);
        }
    }
}

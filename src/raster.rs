//! Field rasterization: request in, RGBA8 pixel buffer out
//!
//! Validates the request, seeds one random stream, builds the
//! per-request noise state (permutation table or nuclei set) once, then
//! walks the grid row by row. Perlin and Voronoi rows are evaluated in
//! parallel: the table and nuclei are read-only after construction and
//! each worker owns a disjoint output row. White noise stays sequential
//! because its per-pixel stream draws are ordered.
//!
//! Author: Moroya Sakamoto

use crate::fbm::fbm;
use crate::perlin::{perlin_layer, PermutationTable};
use crate::rng::NoiseRng;
use crate::types::{FieldRequest, NoiseError, NoiseKind, PixelBuffer};
use crate::voronoi::{build_nuclei, voronoi_layer};
use glam::Vec2;
use rayon::prelude::*;

/// Bytes per RGBA8 pixel.
const BYTES_PER_PIXEL: usize = 4;

/// Convert a noise value in [-1, 1] to an 8-bit gray level.
///
/// −1 maps to 0, 0 to 128, +1 to 255 (nearest-integer rounding).
#[inline]
pub fn noise_to_gray(value: f32) -> u8 {
    (((value + 1.0) / 2.0) * 255.0).round() as u8
}

#[inline]
fn write_pixel(row: &mut [u8], x: usize, gray: u8) {
    let i = x * BYTES_PER_PIXEL;
    row[i] = gray;
    row[i + 1] = gray;
    row[i + 2] = gray;
    row[i + 3] = 255;
}

/// Generate a noise field for `request`.
///
/// Fails fast with a [`NoiseError`] on invalid dimensions, frequency or
/// octave count; otherwise always returns a complete buffer. A Voronoi
/// scatter with fewer than two nuclei degrades every affected pixel to
/// the sentinel gray level instead of failing.
pub fn generate(request: &FieldRequest) -> Result<PixelBuffer, NoiseError> {
    request.validate()?;

    let width = request.width as usize;
    let height = request.height as usize;

    log::debug!(
        "generating {}x{} {:?} field (seed {}, {} octaves, frequency {})",
        width,
        height,
        request.kind,
        request.seed,
        request.octaves,
        request.frequency
    );

    let mut rng = NoiseRng::seed(request.seed);
    let mut data = vec![0u8; width * height * BYTES_PER_PIXEL];

    match request.kind {
        NoiseKind::White => {
            for row in data.chunks_mut(width * BYTES_PER_PIXEL) {
                for x in 0..width {
                    write_pixel(row, x, noise_to_gray(rng.uniform(-1.0, 1.0)));
                }
            }
        }
        NoiseKind::Perlin => {
            let table = PermutationTable::build(&mut rng);
            fill_rows(&mut data, width, request, |p| perlin_layer(p, &table));
        }
        NoiseKind::Voronoi => {
            let nuclei = build_nuclei(request.width, request.height, request.frequency, &mut rng);
            if nuclei.len() < 2 {
                log::warn!(
                    "voronoi scatter produced {} nuclei; field degrades to the sentinel value",
                    nuclei.len()
                );
            }
            fill_rows(&mut data, width, request, |p| voronoi_layer(p, &nuclei));
        }
    }

    Ok(PixelBuffer {
        data,
        width: request.width,
        height: request.height,
    })
}

/// Row-parallel fractal fill.
///
/// The layer only needs shared read access to its table or nuclei, and
/// each rayon worker writes one disjoint row slice, so no locking is
/// involved and the output is identical to a sequential walk.
fn fill_rows(
    data: &mut [u8],
    width: usize,
    request: &FieldRequest,
    layer: impl Fn(Vec2) -> f32 + Sync,
) {
    data.par_chunks_mut(width * BYTES_PER_PIXEL)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let point = Vec2::new(x as f32, y as f32);
                let value = fbm(point, request.octaves, request.frequency, request.fbm, &layer);
                write_pixel(row, x, noise_to_gray(value));
            }
        });
}

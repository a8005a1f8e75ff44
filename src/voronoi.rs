//! Cellular (Voronoi) noise layer
//!
//! Single-octave 2D cellular noise over a seeded scatter of nuclei: one
//! random point per grid cell, and a per-sample value derived from the
//! distances to the two nearest nuclei. The distance-difference ratio
//! makes cell interiors bright near their nucleus and dark along the
//! borders where two nuclei are equidistant.
//!
//! Author: Moroya Sakamoto

use crate::rng::NoiseRng;
use glam::Vec2;

/// Layer value returned when fewer than two nuclei are available.
pub const NUCLEI_SENTINEL: f32 = -1.0;

// ── Nuclei scatter ───────────────────────────────────────────

/// Scatter one nucleus per grid cell, row-major.
///
/// The cell size is `1 / frequency` truncated to an integer, and the
/// grid runs while `row as f32 < frequency * height` (columns likewise).
/// Both truncations are part of the field's numeric contract:
/// non-unit-dividing frequencies can under- or over-cover the image,
/// and a frequency above 1 collapses each row's nuclei onto the cell
/// origin (cell size 0). Callers get the same field for the same seed
/// either way.
///
/// Each nucleus draws its X coordinate before its Y coordinate; the
/// draw order is part of the seed contract.
pub fn build_nuclei(width: u32, height: u32, frequency: f32, rng: &mut NoiseRng) -> Vec<Vec2> {
    let cell_size = (1.0 / frequency) as i32;
    let mut nuclei = Vec::new();

    let mut y = 0;
    while (y as f32) < frequency * height as f32 {
        let mut x = 0;
        while (x as f32) < frequency * width as f32 {
            let cell_x = (x * cell_size) as f32;
            let cell_y = (y * cell_size) as f32;
            let nucleus_x = rng.uniform(cell_x, cell_x + cell_size as f32);
            let nucleus_y = rng.uniform(cell_y, cell_y + cell_size as f32);
            nuclei.push(Vec2::new(nucleus_x, nucleus_y));
            x += 1;
        }
        y += 1;
    }
    nuclei
}

// ── Layer evaluation ─────────────────────────────────────────

/// Squared distances to the two nearest nuclei, or `None` if fewer than
/// two exist.
///
/// Single linear scan keeping best and second-best; comparisons are
/// strict `<`, so ties go to the first nucleus seen.
fn two_closest_sq(point: Vec2, nuclei: &[Vec2]) -> Option<(f32, f32)> {
    if nuclei.len() < 2 {
        return None;
    }

    let mut best = f32::MAX;
    let mut second = f32::MAX;
    for nucleus in nuclei {
        let dist_sq = point.distance_squared(*nucleus);
        if dist_sq < best {
            second = best;
            best = dist_sq;
        } else if dist_sq < second {
            second = dist_sq;
        }
    }
    Some((best, second))
}

/// Evaluate one octave of cellular noise at `point`.
///
/// Returns `((d2 − d1) / (d2 + d1)) · 2 − 1` for the nearest (d1) and
/// second-nearest (d2) nuclei: exactly +1 when the point sits on a
/// nucleus (d1 = 0), approaching −1 where two nuclei are equidistant.
/// The +1-at-nucleus sign is intentional; inverting it would change
/// every existing field.
///
/// Degrades to [`NUCLEI_SENTINEL`] when fewer than two nuclei exist, so
/// rasterization stays total.
pub fn voronoi_layer(point: Vec2, nuclei: &[Vec2]) -> f32 {
    let Some((best, second)) = two_closest_sq(point, nuclei) else {
        return NUCLEI_SENTINEL;
    };

    let dist1 = best.sqrt();
    let dist2 = second.sqrt();

    let ratio = (dist2 - dist1) / (dist2 + dist1);
    ratio * 2.0 - 1.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scatter_is_deterministic() {
        let a = build_nuclei(256, 256, 0.05, &mut NoiseRng::seed(42));
        let b = build_nuclei(256, 256, 0.05, &mut NoiseRng::seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn scatter_grid_dimensions() {
        // frequency 0.05 on 256x256: bound is 12.8, so 13 rows x 13 cols
        let nuclei = build_nuclei(256, 256, 0.05, &mut NoiseRng::seed(1));
        assert_eq!(nuclei.len(), 13 * 13);
    }

    #[test]
    fn scatter_points_stay_in_cells() {
        // cell size trunc(1 / 0.05) = 20
        let nuclei = build_nuclei(256, 256, 0.05, &mut NoiseRng::seed(3));
        for (i, n) in nuclei.iter().enumerate() {
            let col = (i % 13) as f32;
            let row = (i / 13) as f32;
            assert!(n.x >= col * 20.0 && n.x <= col * 20.0 + 20.0);
            assert!(n.y >= row * 20.0 && n.y <= row * 20.0 + 20.0);
        }
    }

    #[test]
    fn scatter_tiny_image_low_frequency() {
        // 4x4 at frequency 0.001: bound is 0.004, one row and one column
        let nuclei = build_nuclei(4, 4, 0.001, &mut NoiseRng::seed(7));
        assert_eq!(nuclei.len(), 1);
    }

    #[test]
    fn layer_sentinel_with_too_few_nuclei() {
        assert_eq!(voronoi_layer(Vec2::new(1.0, 1.0), &[]), NUCLEI_SENTINEL);
        assert_eq!(
            voronoi_layer(Vec2::new(1.0, 1.0), &[Vec2::new(0.0, 0.0)]),
            NUCLEI_SENTINEL
        );
    }

    #[test]
    fn layer_is_plus_one_on_a_nucleus() {
        let nuclei = [Vec2::new(3.0, 4.0), Vec2::new(100.0, 100.0)];
        assert_eq!(voronoi_layer(Vec2::new(3.0, 4.0), &nuclei), 1.0);
    }

    #[test]
    fn layer_approaches_minus_one_at_equidistance() {
        let nuclei = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)];
        let v = voronoi_layer(Vec2::new(5.0, 0.0), &nuclei);
        assert_eq!(v, -1.0);
    }

    #[test]
    fn layer_stays_in_range() {
        let nuclei = build_nuclei(128, 128, 0.1, &mut NoiseRng::seed(11));
        for i in 0..500 {
            let p = Vec2::new((i % 128) as f32, (i / 128) as f32 * 7.0);
            let v = voronoi_layer(p, &nuclei);
            assert!((-1.0..=1.0).contains(&v), "layer value {} out of range", v);
        }
    }

    #[test]
    fn two_closest_ties_go_to_first_seen() {
        // Three nuclei, two of them coincident: the scan must report the
        // coincident pair as best and second-best.
        let nuclei = [
            Vec2::new(1.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(5.0, 0.0),
        ];
        let (best, second) = two_closest_sq(Vec2::ZERO, &nuclei).unwrap();
        assert_eq!(best, 1.0);
        assert_eq!(second, 1.0);
    }

    #[test]
    fn negative_frequency_yields_no_nuclei() {
        let nuclei = build_nuclei(64, 64, -0.05, &mut NoiseRng::seed(1));
        assert!(nuclei.is_empty());
    }
}

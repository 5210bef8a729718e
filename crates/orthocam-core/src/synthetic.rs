//! Deterministic synthetic correspondence data.
//!
//! The helpers here build simple model point sets, project them through an
//! [`OrthographicCamera`] to produce exact correspondences, and optionally
//! perturb the observations with seeded noise. Nothing here depends on an
//! RNG crate: datasets stay stable across versions and platforms.

use crate::{CorrespondenceSet, OrthographicCamera, Pt3, Real, Vec2, Viewport};

/// Generate a planar grid of 3D points (Z=0) with `nx * ny` points.
///
/// Points are ordered deterministically in row-major order (Y major).
pub fn grid_points(nx: usize, ny: usize, spacing: Real) -> Vec<Pt3> {
    let mut points = Vec::with_capacity(nx.saturating_mul(ny));
    for j in 0..ny {
        for i in 0..nx {
            points.push(Pt3::new(i as Real * spacing, j as Real * spacing, 0.0));
        }
    }
    points
}

/// The 8 corners of a cube centered at the model origin.
///
/// A canonical non-degenerate, non-coplanar point cloud for fitting tests.
pub fn cube_points(half_extent: Real) -> Vec<Pt3> {
    let h = half_extent;
    let mut points = Vec::with_capacity(8);
    for &z in &[-h, h] {
        for &y in &[-h, h] {
            for &x in &[-h, h] {
                points.push(Pt3::new(x, y, z));
            }
        }
    }
    points
}

/// Project a model point set through the exact forward model.
///
/// The returned set pairs every model point with its projection, in input
/// order. Orthographic projection has no behind-camera failure mode, so
/// every point is kept.
pub fn project_all(
    camera: &OrthographicCamera,
    viewport: &Viewport,
    model_points: &[Pt3],
) -> CorrespondenceSet {
    let rotation = camera.rotation();
    let image_points = model_points
        .iter()
        .map(|p| camera.project_rotated(&rotation.transform_point(p), viewport))
        .collect();

    CorrespondenceSet {
        model_points: model_points.to_vec(),
        image_points,
    }
}

/// Deterministic uniform pixel noise in `[-max_abs_px, +max_abs_px]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UniformPixelNoise {
    /// Base seed controlling the pseudo-random sequence.
    pub seed: u64,
    /// Maximum absolute per-axis noise (pixels).
    pub max_abs_px: Real,
}

impl UniformPixelNoise {
    /// Sample a deterministic 2D noise vector (pixels) for a point index.
    #[inline]
    pub fn sample(&self, point_idx: usize) -> Vec2 {
        let max_abs = self.max_abs_px.abs();
        if max_abs == 0.0 {
            return Vec2::zeros();
        }

        let key = self.seed ^ (point_idx as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15);
        let u = u64_to_unit_f64(splitmix64(key));
        let v = u64_to_unit_f64(splitmix64(key ^ 0x94D0_49BB_1331_11EB));

        // Map [0, 1) -> [-max_abs, +max_abs].
        Vec2::new((u - 0.5) * 2.0 * max_abs, (v - 0.5) * 2.0 * max_abs)
    }

    /// Perturb every image point of a correspondence set in place.
    pub fn apply(&self, set: &mut CorrespondenceSet) {
        for (idx, uv) in set.image_points.iter_mut().enumerate() {
            let d = self.sample(idx);
            uv.x += d.x;
            uv.y += d.y;
        }
    }
}

#[inline]
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

#[inline]
fn u64_to_unit_f64(x: u64) -> Real {
    // Top 53 bits to a double in [0, 1); deterministic and platform-independent.
    let mantissa = x >> 11;
    (mantissa as Real) * (1.0 / ((1u64 << 53) as Real))
}

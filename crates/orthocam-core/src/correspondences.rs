//! Correspondence containers for camera estimation.
//!
//! A correspondence pairs a 3D model point with its observed 2D image point.
//! The set keeps both sequences in lockstep order; estimation code relies on
//! index `i` of one sequence matching index `i` of the other.

use crate::{Pt2, Pt3, Real};
use anyhow::{ensure, Result};
use serde::{Deserialize, Serialize};

/// An ordered set of paired 2D-3D point correspondences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrespondenceSet {
    /// 3D points in model space.
    pub model_points: Vec<Pt3>,
    /// Corresponding 2D observations in image space.
    pub image_points: Vec<Pt2>,
}

impl CorrespondenceSet {
    /// Construct a correspondence set.
    ///
    /// # Errors
    ///
    /// Returns an error if the model and image point counts don't match.
    pub fn new(model_points: Vec<Pt3>, image_points: Vec<Pt2>) -> Result<Self> {
        ensure!(
            model_points.len() == image_points.len(),
            "model / image point counts must match: {} vs {}",
            model_points.len(),
            image_points.len()
        );
        Ok(Self {
            model_points,
            image_points,
        })
    }

    /// Number of correspondences.
    #[inline]
    pub fn len(&self) -> usize {
        self.model_points.len()
    }

    /// Returns true if the set holds no correspondences.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.model_points.is_empty()
    }

    /// Iterate over (model point, image point) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Pt3, &Pt2)> {
        self.model_points.iter().zip(self.image_points.iter())
    }
}

/// Summary statistics for reprojection errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ReprojectionStats {
    /// Mean reprojection error in pixels.
    pub mean: Real,
    /// Root mean square error in pixels.
    pub rms: Real,
    /// Maximum reprojection error in pixels.
    pub max: Real,
    /// Number of points evaluated.
    pub count: usize,
}

impl ReprojectionStats {
    /// Compute statistics from a collection of per-point errors.
    pub fn from_errors(errors: &[Real]) -> Self {
        if errors.is_empty() {
            return Self {
                mean: 0.0,
                rms: 0.0,
                max: 0.0,
                count: 0,
            };
        }

        let sum: Real = errors.iter().sum();
        let sum_sq: Real = errors.iter().map(|e| e * e).sum();
        let max = errors.iter().cloned().fold(0.0_f64, Real::max);
        let n = errors.len() as Real;

        Self {
            mean: sum / n,
            rms: (sum_sq / n).sqrt(),
            max,
            count: errors.len(),
        }
    }
}

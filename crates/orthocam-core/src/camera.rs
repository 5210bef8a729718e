//! Orthographic camera model.
//!
//! The camera is parameterized by three rotation angles, an in-plane
//! translation and a frustum scale. Rotation uses the RPY convention with
//! yaw applied first to a model-space vertex, then pitch, then roll
//! (`R_z(roll) * R_x(pitch) * R_y(yaw) * vertex`). All angles are radians.

use crate::{Mat4, Pt2, Pt3, Real, Rot3};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Image (or viewport) dimensions in pixels. Both must be non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width / height ratio.
    #[inline]
    pub fn aspect(&self) -> Real {
        self.width as Real / self.height as Real
    }
}

/// Viewing-plane bounds of an orthographic camera.
///
/// The near and far planes are fixed at -1 / +1, matching the 2D overload of
/// `glm::ortho`, so [`Frustum::orthographic_matrix`] can be fed straight into
/// an OpenGL-style pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frustum {
    pub left: Real,
    pub right: Real,
    pub bottom: Real,
    pub top: Real,
}

impl Frustum {
    /// Symmetric bounds `{-aspect*scale, +aspect*scale, -scale, +scale}`.
    pub fn from_scale_aspect(scale: Real, aspect: Real) -> Self {
        Self {
            left: -aspect * scale,
            right: aspect * scale,
            bottom: -scale,
            top: scale,
        }
    }

    /// Half extent along x.
    #[inline]
    pub fn half_width(&self) -> Real {
        0.5 * (self.right - self.left)
    }

    /// Half extent along y.
    #[inline]
    pub fn half_height(&self) -> Real {
        0.5 * (self.top - self.bottom)
    }

    /// OpenGL-conformant orthographic projection matrix (near/far = -1/+1).
    pub fn orthographic_matrix(&self) -> Mat4 {
        let rl = self.right - self.left;
        let tb = self.top - self.bottom;
        Mat4::new(
            2.0 / rl,
            0.0,
            0.0,
            -(self.right + self.left) / rl,
            0.0,
            2.0 / tb,
            0.0,
            -(self.top + self.bottom) / tb,
            0.0,
            0.0,
            -1.0,
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        )
    }
}

/// Six-parameter orthographic camera: model rotation, in-plane translation
/// and frustum scale.
///
/// The rotation and translation transform the model from model space into
/// camera space and can be used to build a model-view matrix; the frustum
/// scale fixes the size of the viewing plane. Positive yaw turns the model
/// to its left, positive roll tilts it clockwise as seen from the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrthographicCamera {
    /// Rotation about the x axis, radians.
    pub pitch: Real,
    /// Rotation about the y axis, radians.
    pub yaw: Real,
    /// Rotation about the z axis, radians.
    pub roll: Real,
    /// Translation along x in the viewing plane.
    pub t_x: Real,
    /// Translation along y in the viewing plane.
    pub t_y: Real,
    /// Half height of the orthographic viewing volume.
    pub frustum_scale: Real,
}

impl OrthographicCamera {
    /// Model-space to camera-space rotation.
    ///
    /// Composition order is `R_z(roll) * R_x(pitch) * R_y(yaw)`: yaw is
    /// applied to the vertex first, then pitch, then roll.
    pub fn rotation(&self) -> Rot3 {
        Rot3::from_axis_angle(&Vector3::z_axis(), self.roll)
            * Rot3::from_axis_angle(&Vector3::x_axis(), self.pitch)
            * Rot3::from_axis_angle(&Vector3::y_axis(), self.yaw)
    }

    /// Model-view matrix `T(t_x, t_y, 0) * R`.
    pub fn modelview_matrix(&self) -> Mat4 {
        let mut m = self.rotation().to_homogeneous();
        m[(0, 3)] = self.t_x;
        m[(1, 3)] = self.t_y;
        m
    }

    /// Viewing-plane bounds for the given viewport aspect ratio.
    pub fn frustum(&self, viewport: &Viewport) -> Frustum {
        Frustum::from_scale_aspect(self.frustum_scale, viewport.aspect())
    }

    /// Project a model-space point to pixel coordinates.
    ///
    /// The point is rotated and translated into camera space, mapped through
    /// the symmetric orthographic frustum to normalized device coordinates,
    /// and then through the viewport transform.
    pub fn project(&self, p: &Pt3, viewport: &Viewport) -> Pt2 {
        self.project_rotated(&self.rotation().transform_point(p), viewport)
    }

    /// Project a point that has already been rotated into camera orientation.
    ///
    /// Callers projecting many points for one parameter set should build
    /// [`OrthographicCamera::rotation`] once and use this entry point.
    pub fn project_rotated(&self, p_rot: &Pt3, viewport: &Viewport) -> Pt2 {
        let frustum = self.frustum(viewport);
        let x_ndc = (p_rot.x + self.t_x) / frustum.half_width();
        let y_ndc = (p_rot.y + self.t_y) / frustum.half_height();
        Pt2::new(
            (x_ndc * 0.5 + 0.5) * viewport.width as Real,
            (y_ndc * 0.5 + 0.5) * viewport.height as Real,
        )
    }
}

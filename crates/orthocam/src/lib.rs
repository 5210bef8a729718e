//! High-level entry crate for `orthocam-rs`.
//!
//! Estimates the pose (three rotation angles, in-plane translation) and
//! viewing frustum of an orthographic camera from 2D-3D point
//! correspondences.
//!
//! ```no_run
//! use orthocam::prelude::*;
//!
//! # fn main() -> Result<(), orthocam::optim::FitError> {
//! let image_points: Vec<Pt2> = /* detected 2D landmarks */
//! # vec![];
//! let model_points: Vec<Pt3> = /* corresponding 3D model vertices */
//! # vec![];
//!
//! let fit = estimate_orthographic_camera(&image_points, &model_points, 1280, 720)?;
//!
//! println!(
//!     "yaw {:.3} rad, rms {:.2}px, converged: {}",
//!     fit.camera.yaw, fit.reprojection.rms, fit.report.converged
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Module organization
//!
//! - [`core`]: math types, the orthographic camera model, correspondence
//!   containers and synthetic-data helpers.
//! - [`optim`]: the non-linear least-squares layer and the estimation driver.
//! - [`prelude`]: convenient re-exports for common use cases.

/// Math types, camera model and correspondence containers.
pub mod core {
    pub use orthocam_core::*;
}

/// Non-linear least-squares problems, backends and the estimation driver.
pub mod optim {
    pub use orthocam_optim::*;
}

/// Convenient re-exports for common use cases.
pub mod prelude {
    pub use crate::core::{
        CorrespondenceSet, Frustum, OrthographicCamera, Pt2, Pt3, Real, ReprojectionStats, Vec2,
        Vec3, Viewport,
    };
    pub use crate::optim::{
        estimate_orthographic_camera, fit_orthographic_camera, FitError, LmBackend,
        OrthographicFit, OrthographicFitProblem, SolveOptions, SolveReport,
    };
}

//! Non-linear least-squares estimation of orthographic camera parameters.
//!
//! This crate provides a narrow solver interface ([`NllsProblem`],
//! [`NllsSolverBackend`]), a Levenberg-Marquardt backend built on the
//! `levenberg-marquardt` crate, and the 2D-3D correspondence fitting problem
//! with its high-level driver [`estimate_orthographic_camera`].

pub mod backend_lm;
pub mod camera_fit;
pub mod traits;

pub use backend_lm::LmBackend;
pub use camera_fit::{
    estimate_orthographic_camera, fit_orthographic_camera, initial_params, FitError,
    OrthographicFit, OrthographicFitProblem, INITIAL_FRUSTUM_SCALE, JACOBIAN_STEP,
    MIN_CORRESPONDENCES, NUM_PARAMS,
};
pub use traits::{NllsProblem, NllsSolverBackend, SolveOptions, SolveReport};

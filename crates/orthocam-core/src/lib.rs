//! Core math and camera-model primitives for `orthocam-rs`.
//!
//! This crate contains:
//! - linear algebra type aliases (`Real`, `Vec2`, `Pt3`, ...),
//! - the six-parameter orthographic camera model ([`OrthographicCamera`],
//!   [`Frustum`], [`Viewport`]),
//! - 2D-3D correspondence containers ([`CorrespondenceSet`]),
//! - deterministic synthetic-data helpers for tests and examples.
//!
//! The camera maps a model-space point to pixels as:
//! `pixel = viewport ∘ ortho(frustum) ∘ translate(t_x, t_y) ∘ R·P·Y`

/// Orthographic camera model and frustum geometry.
pub mod camera;
/// 2D-3D correspondence containers and reprojection statistics.
pub mod correspondences;
/// Linear algebra type aliases.
pub mod math;
/// Deterministic synthetic targets, projections and noise.
pub mod synthetic;

pub use camera::*;
pub use correspondences::*;
pub use math::*;

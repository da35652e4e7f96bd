//! 3D Mathematics Library
//!
//! Thin helpers over [`glam`] for the orbit_scene demo.
//!
//! ## Core Types
//!
//! - [`Vec3`], [`Vec4`], [`Mat4`] - re-exported from glam
//!
//! ## Helpers
//!
//! - [`mat4::model_matrix`] - translate, then scale, then rotate about +Y
//! - [`mat4::perspective`] - right-handed projection with 0..1 depth
//! - [`orbit::orbit_position`] - point on a circle around a tilted axis
//! - [`scalar::clamp_between`] - clamp that tolerates swapped bounds

pub mod mat4;
pub mod orbit;
pub mod scalar;

pub use glam::{Mat3, Mat4, Quat, Vec2, Vec3, Vec4};
pub use mat4::{model_matrix, normal_matrix, perspective, to_gpu, GpuMat4, IDENTITY};
pub use orbit::{orbit_position, DEFAULT_ORBIT_AXIS};
pub use scalar::clamp_between;

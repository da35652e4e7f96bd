//! Core types for the orbit_scene demo
//!
//! This crate provides the CPU-side state that drives each frame:
//!
//! - [`Transform`] - Position, uniform scale, and spin about +Y
//! - [`AnimationState`] - Orbit/spin angles and their speeds
//! - [`AnimationLimits`] - Clamp ranges and rates for user adjustments
//! - [`Lighting`] - Camera spotlight plus fixed point light
//! - [`Scene`] - Per-frame update and the list of transforms to draw
//! - [`AssetError`] - Errors from model and texture loading

mod animation;
mod asset_error;
mod lighting;
mod scene;
mod transform;

pub use animation::{AnimationLimits, AnimationState};
pub use asset_error::AssetError;
pub use lighting::{Attenuation, Lighting, PointLight, SpotLight};
pub use scene::{OrbitSettings, Scene};
pub use transform::Transform;

// Re-export commonly used types from orbit_math for convenience
pub use orbit_math::{Mat4, Vec3};

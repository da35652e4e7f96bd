//! Rendering Library
//!
//! This crate provides the wgpu-based rendering for the orbit scene: a
//! textured model lit by a camera spotlight and a point light, plus a small
//! cube marking the point light.
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::Camera`] - First-person camera with yaw/pitch and zoom
//! - [`model::ModelData`] / [`model::Model`] - OBJ loading and GPU upload
//! - [`pipeline::LitPipeline`] - Textured Phong lighting with depth test
//! - [`pipeline::LightCubePipeline`] - Unlit light marker

pub mod camera;
pub mod context;
pub mod cube;
pub mod model;
pub mod pipeline;
pub mod texture;

// Re-export core types for convenience
pub use orbit_core::{AssetError, Lighting, Scene, Transform};
pub use orbit_math::{Mat4, Vec3};

pub use camera::Camera;
pub use context::{ContextError, RenderContext};
pub use model::{MaterialData, MeshData, Model, ModelData};

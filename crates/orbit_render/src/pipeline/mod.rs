//! Rendering pipeline components
//!
//! This module contains the lit model pipeline and the light marker
//! pipeline, plus the GPU data types they share.

pub mod types;
pub mod lit_pipeline;
pub mod light_cube_pipeline;

// Re-export types
pub use types::{
    CubeVertex, FrameUniforms, GpuPointLight, GpuSpotLight, MarkerUniforms, ModelVertex,
    ObjectUniforms, DEFAULT_SHININESS, MAX_OBJECTS,
};

// Re-export pipelines
pub use lit_pipeline::{aligned_stride, LitPipeline};
pub use light_cube_pipeline::LightCubePipeline;

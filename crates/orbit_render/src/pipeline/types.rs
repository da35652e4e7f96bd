//! GPU-compatible data types for the lit and light-cube pipelines
//!
//! These types are designed to match the shader layouts exactly.
//! All types derive Pod and Zeroable for safe GPU buffer operations.
//! A `vec3<f32>` in WGSL occupies 16 bytes in a uniform struct, so every
//! three-float field is followed by a scalar or explicit padding.

use bytemuck::{Pod, Zeroable};
use orbit_core::{Lighting, PointLight, SpotLight};
use orbit_math::{normal_matrix, to_gpu, GpuMat4, Mat4, Vec3, IDENTITY};

/// A vertex of a loaded model
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct ModelVertex {
    /// Position in model space
    pub position: [f32; 3],
    /// Surface normal
    pub normal: [f32; 3],
    /// Texture coordinate
    pub tex_coords: [f32; 2],
}

impl ModelVertex {
    /// Create a new model vertex
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coords: [f32; 2]) -> Self {
        Self { position, normal, tex_coords }
    }
}

/// A vertex of the light cube (position only)
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct CubeVertex {
    pub position: [f32; 3],
}

/// Spotlight as laid out in lit.wgsl
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GpuSpotLight {
    pub position: [f32; 3],
    pub cut_off: f32,
    pub direction: [f32; 3],
    pub outer_cut_off: f32,
    pub ambient: [f32; 3],
    pub constant: f32,
    pub diffuse: [f32; 3],
    pub linear: f32,
    pub specular: [f32; 3],
    pub quadratic: f32,
}

impl From<&SpotLight> for GpuSpotLight {
    fn from(light: &SpotLight) -> Self {
        Self {
            position: light.position.to_array(),
            cut_off: light.cut_off(),
            direction: light.direction.to_array(),
            outer_cut_off: light.outer_cut_off(),
            ambient: light.ambient.to_array(),
            constant: light.attenuation.constant,
            diffuse: light.diffuse.to_array(),
            linear: light.attenuation.linear,
            specular: light.specular.to_array(),
            quadratic: light.attenuation.quadratic,
        }
    }
}

/// Point light as laid out in lit.wgsl
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct GpuPointLight {
    pub position: [f32; 3],
    pub constant: f32,
    pub ambient: [f32; 3],
    pub linear: f32,
    pub diffuse: [f32; 3],
    pub quadratic: f32,
    pub specular: [f32; 3],
    pub _padding: f32,
}

impl From<&PointLight> for GpuPointLight {
    fn from(light: &PointLight) -> Self {
        Self {
            position: light.position.to_array(),
            constant: light.attenuation.constant,
            ambient: light.ambient.to_array(),
            linear: light.attenuation.linear,
            diffuse: light.diffuse.to_array(),
            quadratic: light.attenuation.quadratic,
            specular: light.specular.to_array(),
            _padding: 0.0,
        }
    }
}

/// Per-frame uniforms shared by every lit draw
/// Layout: 288 bytes total (must match lit.wgsl FrameUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct FrameUniforms {
    /// View matrix (64 bytes)
    pub view: GpuMat4,
    /// Projection matrix (64 bytes)
    pub projection: GpuMat4,
    /// Camera position + padding (16 bytes)
    pub view_position: [f32; 3],
    pub _padding: f32,
    /// Camera spotlight (80 bytes)
    pub spot: GpuSpotLight,
    /// Fixed point light (64 bytes)
    pub point: GpuPointLight,
}

impl FrameUniforms {
    /// Build frame uniforms from camera matrices and scene lights
    pub fn new(view: Mat4, projection: Mat4, view_position: Vec3, lighting: &Lighting) -> Self {
        Self {
            view: to_gpu(view),
            projection: to_gpu(projection),
            view_position: view_position.to_array(),
            _padding: 0.0,
            spot: GpuSpotLight::from(&lighting.spot),
            point: GpuPointLight::from(&lighting.point),
        }
    }
}

impl Default for FrameUniforms {
    fn default() -> Self {
        Self::new(Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO, &Lighting::default())
    }
}

/// Per-object uniforms for one lit draw
/// Layout: 144 bytes total (must match lit.wgsl ObjectUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ObjectUniforms {
    /// Model matrix (64 bytes)
    pub model: GpuMat4,
    /// Inverse-transpose of the model matrix (64 bytes)
    pub normal_matrix: GpuMat4,
    /// Specular exponent + padding (16 bytes)
    pub shininess: f32,
    pub _padding: [f32; 3],
}

impl ObjectUniforms {
    /// Uniforms for drawing with `model`, deriving the normal matrix
    pub fn new(model: Mat4, shininess: f32) -> Self {
        Self {
            model: to_gpu(model),
            normal_matrix: to_gpu(normal_matrix(model)),
            shininess,
            _padding: [0.0; 3],
        }
    }
}

impl Default for ObjectUniforms {
    fn default() -> Self {
        Self {
            model: IDENTITY,
            normal_matrix: IDENTITY,
            shininess: DEFAULT_SHININESS,
            _padding: [0.0; 3],
        }
    }
}

/// Uniforms for the light cube
/// Layout: 144 bytes total (must match light_cube.wgsl MarkerUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MarkerUniforms {
    /// Projection * view (64 bytes)
    pub view_projection: GpuMat4,
    /// Model matrix (64 bytes)
    pub model: GpuMat4,
    /// Flat color (16 bytes)
    pub color: [f32; 4],
}

impl MarkerUniforms {
    pub fn new(view_projection: Mat4, model: Mat4, color: [f32; 4]) -> Self {
        Self {
            view_projection: to_gpu(view_projection),
            model: to_gpu(model),
            color,
        }
    }
}

impl Default for MarkerUniforms {
    fn default() -> Self {
        Self {
            view_projection: IDENTITY,
            model: IDENTITY,
            color: [1.0; 4],
        }
    }
}

/// Specular exponent used when a material does not set one
pub const DEFAULT_SHININESS: f32 = 32.0;

/// Maximum number of lit draws per frame (slots in the object uniform buffer)
pub const MAX_OBJECTS: usize = 16;

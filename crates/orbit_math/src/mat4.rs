//! 4x4 matrix utilities for model and projection transforms
//!
//! Matrices are glam `Mat4` (column-major). [`to_gpu`] flattens them into the
//! nested array layout expected by uniform buffers.

use glam::{Mat4, Vec3};

/// Column-major 4x4 matrix as laid out in GPU uniform buffers
pub type GpuMat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: GpuMat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Compose a model matrix: translate, then scale, then rotate about +Y.
///
/// The product is `T * S * R`, so a vertex is rotated first, scaled second
/// and translated last.
///
/// # Example
/// ```
/// use orbit_math::{model_matrix, Vec3};
/// let m = model_matrix(Vec3::new(1.0, 2.0, 3.0), 0.5, 0.0);
/// assert_eq!(m.w_axis.truncate(), Vec3::new(1.0, 2.0, 3.0));
/// ```
pub fn model_matrix(position: Vec3, scale: f32, angle: f32) -> Mat4 {
    Mat4::from_translation(position)
        * Mat4::from_scale(Vec3::splat(scale))
        * Mat4::from_rotation_y(angle)
}

/// Inverse-transpose of a model matrix, for transforming normals
///
/// Falls back to the identity when the matrix is singular (zero scale).
pub fn normal_matrix(model: Mat4) -> Mat4 {
    if model.determinant().abs() < f32::EPSILON {
        return Mat4::IDENTITY;
    }
    model.inverse().transpose()
}

/// Right-handed perspective projection with a 0..1 depth range
///
/// `fov_y_degrees` is the vertical field of view in degrees.
pub fn perspective(fov_y_degrees: f32, aspect: f32, near: f32, far: f32) -> Mat4 {
    Mat4::perspective_rh(fov_y_degrees.to_radians(), aspect, near, far)
}

/// Flatten a glam matrix into the uniform buffer layout
#[inline]
pub fn to_gpu(m: Mat4) -> GpuMat4 {
    m.to_cols_array_2d()
}

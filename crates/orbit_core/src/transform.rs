//! 3D Transform (position, uniform scale, rotation about +Y)
//!
//! A Transform places one drawable in the scene. Its matrix is composed as
//! translate, then scale, then rotate.

use orbit_math::{model_matrix, Mat4, Vec3};
use serde::{Deserialize, Serialize};

/// A transform with position, uniform scale and a spin angle about +Y
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    /// Position in world space
    pub position: Vec3,
    /// Uniform scale factor
    pub scale: f32,
    /// Rotation about +Y in radians
    pub angle: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            position: Vec3::ZERO,
            scale: 1.0,
            angle: 0.0,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::identity()
        }
    }

    /// Builder: set uniform scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    /// Builder: set rotation about +Y
    pub fn with_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Model matrix for this transform
    #[inline]
    pub fn to_matrix(&self) -> Mat4 {
        model_matrix(self.position, self.scale, self.angle)
    }

    /// Transform a point from local space to world space
    ///
    /// Applies rotation, then scale, then translation.
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.to_matrix().transform_point3(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_identity_transform() {
        let t = Transform::identity();
        let p = Vec3::new(1.0, 2.0, 3.0);
        assert!(vec_approx_eq(t.transform_point(p), p));
    }

    #[test]
    fn test_translation() {
        let t = Transform::from_position(Vec3::new(1.0, 2.0, 3.0));
        assert!(vec_approx_eq(t.transform_point(Vec3::ZERO), Vec3::new(1.0, 2.0, 3.0)));
    }

    #[test]
    fn test_scale() {
        let t = Transform::identity().with_scale(2.0);
        let p = Vec3::new(1.0, 1.0, 1.0);
        assert!(vec_approx_eq(t.transform_point(p), Vec3::new(2.0, 2.0, 2.0)));
    }

    #[test]
    fn test_rotation() {
        // +Z rotated 90 degrees about +Y lands on +X
        let t = Transform::identity().with_angle(FRAC_PI_2);
        let transformed = t.transform_point(Vec3::Z);
        assert!(vec_approx_eq(transformed, Vec3::X), "Expected X, got {:?}", transformed);
    }

    #[test]
    fn test_transform_order() {
        let t = Transform::from_position(Vec3::new(10.0, 0.0, 0.0))
            .with_scale(2.0)
            .with_angle(FRAC_PI_2);

        // Z rotated = (1, 0, 0), scaled = (2, 0, 0), translated = (12, 0, 0)
        let transformed = t.transform_point(Vec3::Z);
        assert!(vec_approx_eq(transformed, Vec3::new(12.0, 0.0, 0.0)),
            "Expected (12, 0, 0), got {:?}", transformed);
    }

    #[test]
    fn test_default() {
        let t = Transform::default();
        assert!(vec_approx_eq(t.position, Vec3::ZERO));
        assert_eq!(t.scale, 1.0);
        assert_eq!(t.angle, 0.0);
    }
}

//! Light parameters fed to the lit shader each frame
//!
//! The scene has two lights: a spotlight attached to the camera and a fixed
//! point light. Both use constant/linear/quadratic distance attenuation.

use orbit_math::Vec3;
use serde::{Deserialize, Serialize};

/// Distance attenuation terms: `1 / (constant + linear * d + quadratic * d^2)`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Attenuation {
    pub constant: f32,
    pub linear: f32,
    pub quadratic: f32,
}

/// Camera-attached spotlight
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpotLight {
    pub position: Vec3,
    pub direction: Vec3,
    /// Inner cone half-angle in degrees
    pub inner_angle: f32,
    /// Outer cone half-angle in degrees (edge fades between inner and outer)
    pub outer_angle: f32,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
}

impl Default for SpotLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            direction: Vec3::NEG_Z,
            inner_angle: 12.5,
            outer_angle: 17.5,
            ambient: Vec3::splat(0.1),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(0.5),
            attenuation: Attenuation {
                constant: 1.0,
                linear: 0.09,
                quadratic: 0.032,
            },
        }
    }
}

impl SpotLight {
    /// Cosine of the inner cone angle
    pub fn cut_off(&self) -> f32 {
        self.inner_angle.to_radians().cos()
    }

    /// Cosine of the outer cone angle
    pub fn outer_cut_off(&self) -> f32 {
        self.outer_angle.to_radians().cos()
    }
}

/// Fixed point light (also marked by the light cube)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: Vec3,
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
    pub attenuation: Attenuation,
}

impl Default for PointLight {
    fn default() -> Self {
        Self {
            position: Vec3::new(-5.0, 5.0, 0.0),
            ambient: Vec3::splat(0.05),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::splat(1.0),
            attenuation: Attenuation {
                constant: 1.0,
                linear: 0.045,
                quadratic: 0.0075,
            },
        }
    }
}

/// All lights in the scene
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Lighting {
    pub spot: SpotLight,
    pub point: PointLight,
}

impl Lighting {
    /// Move the spotlight to the camera, pointing where the camera looks
    pub fn follow_camera(&mut self, position: Vec3, front: Vec3) {
        self.spot.position = position;
        self.spot.direction = front;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_spot_cutoffs() {
        let spot = SpotLight::default();
        assert!((spot.cut_off() - 12.5f32.to_radians().cos()).abs() < EPSILON);
        assert!((spot.outer_cut_off() - 17.5f32.to_radians().cos()).abs() < EPSILON);
        assert!(spot.cut_off() > spot.outer_cut_off());
    }

    #[test]
    fn test_follow_camera() {
        let mut lighting = Lighting::default();
        lighting.follow_camera(Vec3::new(1.0, 2.0, 3.0), Vec3::X);
        assert_eq!(lighting.spot.position, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(lighting.spot.direction, Vec3::X);
        // Point light is unaffected
        assert_eq!(lighting.point.position, Vec3::new(-5.0, 5.0, 0.0));
    }
}

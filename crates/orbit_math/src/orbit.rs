//! Circular orbits around a tilted axis

use glam::{Mat4, Vec3};

/// Axis the satellite orbits around: `normalize(-1, 1, 0)`
pub const DEFAULT_ORBIT_AXIS: Vec3 = Vec3::new(
    -std::f32::consts::FRAC_1_SQRT_2,
    std::f32::consts::FRAC_1_SQRT_2,
    0.0,
);

/// Position on an orbit after rotating by `angle` radians
///
/// Rotates the point (0, 0, 1) about `axis` and scales the result by `radius`.
/// `axis` is normalized here, so callers may pass any non-zero vector.
pub fn orbit_position(angle: f32, axis: Vec3, radius: f32) -> Vec3 {
    let axis = axis.try_normalize().unwrap_or(Vec3::Y);
    let rotation = Mat4::from_axis_angle(axis, angle);
    rotation.transform_point3(Vec3::Z) * radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{PI, TAU};

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_default_axis_is_unit() {
        assert!((DEFAULT_ORBIT_AXIS.length() - 1.0).abs() < EPSILON);
        let expected = Vec3::new(-1.0, 1.0, 0.0).normalize();
        assert!((DEFAULT_ORBIT_AXIS - expected).length() < EPSILON);
    }

    #[test]
    fn test_start_of_orbit() {
        let p = orbit_position(0.0, DEFAULT_ORBIT_AXIS, 3.0);
        assert!((p - Vec3::new(0.0, 0.0, 3.0)).length() < EPSILON);
    }

    #[test]
    fn test_radius_is_constant() {
        for i in 0..16 {
            let angle = i as f32 * TAU / 16.0;
            let p = orbit_position(angle, DEFAULT_ORBIT_AXIS, 3.0);
            assert!((p.length() - 3.0).abs() < EPSILON, "angle {} gave radius {}", angle, p.length());
        }
    }

    #[test]
    fn test_orbit_plane_is_perpendicular_to_axis() {
        // (0, 0, 1) is already perpendicular to (-1, 1, 0), so the whole orbit is too
        for i in 0..8 {
            let p = orbit_position(i as f32 * 0.7, DEFAULT_ORBIT_AXIS, 3.0);
            assert!(p.dot(DEFAULT_ORBIT_AXIS).abs() < EPSILON);
        }
    }

    #[test]
    fn test_half_turn_is_opposite() {
        let p = orbit_position(PI, DEFAULT_ORBIT_AXIS, 3.0);
        assert!((p - Vec3::new(0.0, 0.0, -3.0)).length() < EPSILON);
    }

    #[test]
    fn test_unnormalized_axis() {
        let a = orbit_position(1.0, Vec3::new(-2.0, 2.0, 0.0), 1.0);
        let b = orbit_position(1.0, DEFAULT_ORBIT_AXIS, 1.0);
        assert!((a - b).length() < EPSILON);
    }
}

//! Animation state for the orbiting models
//!
//! Two angles advance every frame:
//! - the orbit angle (theta) that moves the satellite around the orbit axis
//! - the spin angle (phi) that rotates both models about +Y
//!
//! The scale and both angular speeds can be nudged by held keys; each is
//! clamped to the range in [`AnimationLimits`].

use orbit_math::clamp_between;
use serde::{Deserialize, Serialize};

/// Bounds and rates for user adjustments
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationLimits {
    /// Smallest allowed model scale
    pub min_scale: f32,
    /// Largest allowed model scale
    pub max_scale: f32,
    /// Scale change per second while a key is held
    pub scale_rate: f32,
    /// Angular speeds are clamped to `[-max_speed, max_speed]` (rad/s)
    pub max_speed: f32,
    /// Angular speed change per second while a key is held (rad/s^2)
    pub speed_rate: f32,
}

impl Default for AnimationLimits {
    fn default() -> Self {
        Self {
            min_scale: 0.3,
            max_scale: 2.0,
            scale_rate: 1.0,
            max_speed: 4.0,
            speed_rate: 2.0,
        }
    }
}

/// Mutable animation parameters, advanced once per frame
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationState {
    /// Scale of the primary model
    pub scale: f32,
    /// Orbit angular speed (rad/s)
    pub orbit_speed: f32,
    /// Current orbit angle (rad)
    pub orbit_angle: f32,
    /// Spin angular speed (rad/s)
    pub spin_speed: f32,
    /// Current spin angle (rad)
    pub spin_angle: f32,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self {
            scale: 1.0,
            orbit_speed: 50f32.to_radians(),
            orbit_angle: 0.0,
            spin_speed: 30f32.to_radians(),
            spin_angle: 0.0,
        }
    }
}

impl AnimationState {
    /// Create a state with explicit starting scale and speeds (angles start at zero)
    pub fn new(scale: f32, orbit_speed: f32, spin_speed: f32) -> Self {
        Self {
            scale,
            orbit_speed,
            orbit_angle: 0.0,
            spin_speed,
            spin_angle: 0.0,
        }
    }

    /// Advance both angles by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.orbit_angle += self.orbit_speed * dt;
        self.spin_angle += self.spin_speed * dt;
    }

    /// Grow (`direction > 0`) or shrink (`direction < 0`) the primary model
    pub fn adjust_scale(&mut self, direction: f32, dt: f32, limits: &AnimationLimits) {
        if direction == 0.0 {
            return;
        }
        self.scale = clamp_between(
            self.scale + direction * limits.scale_rate * dt,
            limits.min_scale,
            limits.max_scale,
        );
    }

    /// Speed up or slow down the orbit
    pub fn adjust_orbit_speed(&mut self, direction: f32, dt: f32, limits: &AnimationLimits) {
        self.orbit_speed = adjust_speed(self.orbit_speed, direction, dt, limits);
    }

    /// Speed up or slow down the spin
    pub fn adjust_spin_speed(&mut self, direction: f32, dt: f32, limits: &AnimationLimits) {
        self.spin_speed = adjust_speed(self.spin_speed, direction, dt, limits);
    }
}

fn adjust_speed(speed: f32, direction: f32, dt: f32, limits: &AnimationLimits) -> f32 {
    if direction == 0.0 {
        return speed;
    }
    clamp_between(
        speed + direction * limits.speed_rate * dt,
        -limits.max_speed,
        limits.max_speed,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_defaults() {
        let state = AnimationState::default();
        assert_eq!(state.scale, 1.0);
        assert!((state.orbit_speed - 50f32.to_radians()).abs() < EPSILON);
        assert!((state.spin_speed - 30f32.to_radians()).abs() < EPSILON);
        assert_eq!(state.orbit_angle, 0.0);
        assert_eq!(state.spin_angle, 0.0);
    }

    #[test]
    fn test_advance_is_linear_in_time() {
        let mut a = AnimationState::default();
        let mut b = AnimationState::default();

        for _ in 0..100 {
            a.advance(0.01);
        }
        b.advance(1.0);

        assert!((a.orbit_angle - b.orbit_angle).abs() < EPSILON);
        assert!((a.spin_angle - b.spin_angle).abs() < EPSILON);
        assert!((b.orbit_angle - 50f32.to_radians()).abs() < EPSILON);
    }

    #[test]
    fn test_advance_is_monotonic_for_positive_speed() {
        let mut state = AnimationState::default();
        let mut last = state.orbit_angle;
        for _ in 0..50 {
            state.advance(0.016);
            assert!(state.orbit_angle > last);
            last = state.orbit_angle;
        }
    }

    #[test]
    fn test_scale_upper_clamp() {
        let limits = AnimationLimits::default();
        let mut state = AnimationState::default();
        for _ in 0..1000 {
            state.adjust_scale(1.0, 0.1, &limits);
        }
        assert_eq!(state.scale, 2.0);
    }

    #[test]
    fn test_scale_lower_clamp() {
        let limits = AnimationLimits::default();
        let mut state = AnimationState::default();
        for _ in 0..1000 {
            state.adjust_scale(-1.0, 0.1, &limits);
        }
        assert_eq!(state.scale, 0.3);
    }

    #[test]
    fn test_scale_rate() {
        let limits = AnimationLimits::default();
        let mut state = AnimationState::default();
        state.adjust_scale(1.0, 0.25, &limits);
        assert!((state.scale - 1.25).abs() < EPSILON);
    }

    #[test]
    fn test_no_direction_no_change() {
        let limits = AnimationLimits::default();
        let mut state = AnimationState::default();
        let before = state;
        state.adjust_scale(0.0, 1.0, &limits);
        state.adjust_orbit_speed(0.0, 1.0, &limits);
        state.adjust_spin_speed(0.0, 1.0, &limits);
        assert_eq!(state, before);
    }

    #[test]
    fn test_speed_clamps_both_ways() {
        let limits = AnimationLimits::default();
        let mut state = AnimationState::default();

        for _ in 0..100 {
            state.adjust_orbit_speed(1.0, 0.5, &limits);
            state.adjust_spin_speed(-1.0, 0.5, &limits);
        }
        assert_eq!(state.orbit_speed, 4.0);
        assert_eq!(state.spin_speed, -4.0);
    }

    #[test]
    fn test_swapped_limits_do_not_panic() {
        let limits = AnimationLimits {
            min_scale: 3.0,
            max_scale: 0.5,
            max_speed: -1.0,
            ..AnimationLimits::default()
        };
        let mut state = AnimationState::default();

        state.adjust_scale(1.0, 1.0, &limits);
        state.adjust_orbit_speed(1.0, 1.0, &limits);
        state.adjust_spin_speed(-1.0, 1.0, &limits);

        assert!(state.scale >= 0.5 && state.scale <= 3.0);
        assert_eq!(state.orbit_speed, 1.0);
        assert_eq!(state.spin_speed, -1.0);
    }

    #[test]
    fn test_negative_speed_reverses() {
        let mut state = AnimationState::new(1.0, -1.0, 0.0);
        state.advance(2.0);
        assert!((state.orbit_angle + 2.0).abs() < EPSILON);
        assert_eq!(state.spin_angle, 0.0);
    }
}

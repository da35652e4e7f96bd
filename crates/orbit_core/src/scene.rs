//! The demo scene
//!
//! A Scene holds everything that changes from frame to frame: animation
//! angles, the user-adjustable scale and speeds, and the lights. Each frame the
//! app calls [`Scene::update`] and then asks for the transforms to draw.

use orbit_math::{orbit_position, Vec3, DEFAULT_ORBIT_AXIS};
use serde::{Deserialize, Serialize};

use crate::animation::{AnimationLimits, AnimationState};
use crate::lighting::Lighting;
use crate::transform::Transform;

/// Geometry of the satellite orbit
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrbitSettings {
    /// Axis the satellite orbits around (normalized on use)
    pub axis: Vec3,
    /// Distance from the origin
    pub radius: f32,
    /// Fixed scale of the satellite copy
    pub satellite_scale: f32,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            axis: DEFAULT_ORBIT_AXIS,
            radius: 3.0,
            satellite_scale: 0.5,
        }
    }
}

/// Scene state for one run of the demo
#[derive(Clone, Debug)]
pub struct Scene {
    /// Scene name (for display/debugging)
    pub name: String,
    pub animation: AnimationState,
    pub limits: AnimationLimits,
    pub orbit: OrbitSettings,
    pub lighting: Lighting,
    /// Scale of the cube drawn at the point light
    pub marker_scale: f32,
    paused: bool,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("orbit")
    }
}

impl Scene {
    /// Create a scene with default animation, orbit and lights
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            animation: AnimationState::default(),
            limits: AnimationLimits::default(),
            orbit: OrbitSettings::default(),
            lighting: Lighting::default(),
            marker_scale: 0.2,
            paused: false,
        }
    }

    /// Builder: set the starting animation state
    pub fn with_animation(mut self, animation: AnimationState) -> Self {
        self.animation = animation;
        self
    }

    /// Builder: set adjustment limits
    pub fn with_limits(mut self, limits: AnimationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Builder: set orbit geometry
    pub fn with_orbit(mut self, orbit: OrbitSettings) -> Self {
        self.orbit = orbit;
        self
    }

    /// Builder: set lights
    pub fn with_lighting(mut self, lighting: Lighting) -> Self {
        self.lighting = lighting;
        self
    }

    /// Builder: set light marker scale
    pub fn with_marker_scale(mut self, scale: f32) -> Self {
        self.marker_scale = scale;
        self
    }

    /// Advance the animation by `dt` seconds (no-op while paused)
    pub fn update(&mut self, dt: f32) {
        if !self.paused {
            self.animation.advance(dt);
        }
    }

    /// Apply held-key adjustments. Each direction is -1, 0 or +1.
    pub fn apply_input(&mut self, scale: f32, orbit_speed: f32, spin_speed: f32, dt: f32) {
        let limits = self.limits;
        self.animation.adjust_scale(scale, dt, &limits);
        self.animation.adjust_orbit_speed(orbit_speed, dt, &limits);
        self.animation.adjust_spin_speed(spin_speed, dt, &limits);
    }

    /// Pause or resume the animation, returning the new paused state
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    /// Check if the animation is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Transforms for the two model draws: primary first, satellite second
    pub fn model_instances(&self) -> [Transform; 2] {
        let spin = self.animation.spin_angle;

        let primary = Transform::from_position(Vec3::ZERO)
            .with_scale(self.animation.scale)
            .with_angle(spin);

        let satellite_position =
            orbit_position(self.animation.orbit_angle, self.orbit.axis, self.orbit.radius);
        let satellite = Transform::from_position(satellite_position)
            .with_scale(self.orbit.satellite_scale)
            .with_angle(spin);

        [primary, satellite]
    }

    /// Transform for the cube marking the point light
    pub fn light_marker(&self) -> Transform {
        Transform::from_position(self.lighting.point.position).with_scale(self.marker_scale)
    }
}

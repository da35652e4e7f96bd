//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for setting up the orbit scene, plus helpers that
//! turn the camera and input sections of [`AppConfig`] into a ready camera
//! and controller.

use orbit_core::{AnimationLimits, AnimationState, Lighting, OrbitSettings, Scene, Vec3};
use orbit_math::clamp_between;
use orbit_input::CameraController;
use orbit_render::Camera;

use crate::config::{AppConfig, CameraConfig, InputConfig};

/// Builder for the orbit scene
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new("orbit")
///     .with_orbit(OrbitSettings::default())
///     .with_point_light(Vec3::new(-5.0, 5.0, 0.0))
///     .build();
/// ```
pub struct SceneBuilder {
    scene: Scene,
}

impl SceneBuilder {
    /// Create a new scene builder with default animation and lights
    pub fn new(name: &str) -> Self {
        Self {
            scene: Scene::new(name),
        }
    }

    /// Create a builder with every section taken from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new("orbit")
            .with_animation(config.animation.to_state())
            .with_limits(config.animation.to_limits())
            .with_orbit(config.animation.to_orbit())
            .with_lighting(config.lighting.to_lighting())
            .with_marker_scale(config.lighting.marker_scale)
    }

    /// Set the starting scale and speeds
    pub fn with_animation(mut self, animation: AnimationState) -> Self {
        self.scene = self.scene.with_animation(animation);
        self
    }

    /// Set the clamp ranges and rates for key adjustments
    pub fn with_limits(mut self, limits: AnimationLimits) -> Self {
        self.scene = self.scene.with_limits(limits);
        self
    }

    /// Set the satellite orbit
    pub fn with_orbit(mut self, orbit: OrbitSettings) -> Self {
        self.scene = self.scene.with_orbit(orbit);
        self
    }

    /// Set both lights
    pub fn with_lighting(mut self, lighting: Lighting) -> Self {
        self.scene = self.scene.with_lighting(lighting);
        self
    }

    /// Move the point light (and its marker)
    pub fn with_point_light(mut self, position: Vec3) -> Self {
        self.scene.lighting.point.position = position;
        self
    }

    /// Set the light marker scale
    pub fn with_marker_scale(mut self, scale: f32) -> Self {
        self.scene = self.scene.with_marker_scale(scale);
        self
    }

    /// Build the scene, clamping starting values into the configured limits
    pub fn build(mut self) -> Scene {
        let limits = self.scene.limits;
        let animation = &mut self.scene.animation;
        animation.scale = clamp_between(animation.scale, limits.min_scale, limits.max_scale);
        animation.orbit_speed = clamp_between(animation.orbit_speed, -limits.max_speed, limits.max_speed);
        animation.spin_speed = clamp_between(animation.spin_speed, -limits.max_speed, limits.max_speed);
        self.scene
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new("orbit")
    }
}

/// Build the camera described by configuration
pub fn build_camera(config: &CameraConfig) -> Camera {
    Camera::with_angles(config.start_position(), config.yaw, config.pitch)
        .with_pitch_limit(config.pitch_limit)
        .with_zoom_range(config.min_fov, config.fov)
}

/// Build the input controller described by configuration
pub fn build_controller(config: &InputConfig) -> CameraController {
    CameraController::new()
        .with_move_speed(config.move_speed)
        .with_mouse_sensitivity(config.mouse_sensitivity)
        .with_smoothing_half_life(config.smoothing_half_life)
        .with_smoothing(config.smoothing_enabled)
}

//! Per-frame simulation system
//!
//! Manages the frame update including:
//! - Delta time calculation
//! - Animation advance
//! - Input → camera and animation adjustments
//! - Spotlight following the camera

use std::time::Instant;
use orbit_core::{Scene, Vec3};
use orbit_input::CameraController;
use orbit_render::Camera;

/// Largest frame time fed to the update (seconds)
pub const MAX_FRAME_TIME: f32 = 0.25;

/// Result of a simulation update
pub struct SimulationResult {
    /// Frame time used for this update (already capped)
    pub dt: f32,
    /// Camera position after input was applied
    pub camera_position: Vec3,
}

/// Manages the per-frame update
pub struct SimulationSystem {
    last_frame: Instant,
}

impl SimulationSystem {
    /// Create a new simulation system
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
        }
    }

    /// Run one frame using wall-clock time since the previous call
    pub fn update(
        &mut self,
        scene: &mut Scene,
        camera: &mut Camera,
        controller: &mut CameraController,
        cursor_captured: bool,
    ) -> SimulationResult {
        let now = Instant::now();
        let raw_dt = (now - self.last_frame).as_secs_f32();
        self.last_frame = now;

        Self::step(scene, camera, controller, raw_dt, cursor_captured)
    }

    /// Run one frame with an explicit frame time
    ///
    /// # Arguments
    /// * `scene` - Animation state and lights
    /// * `camera` - Camera moved by the controller
    /// * `controller` - Held keys and pending mouse input
    /// * `raw_dt` - Seconds since the previous frame (capped at [`MAX_FRAME_TIME`])
    /// * `cursor_captured` - Whether cursor is captured (enables mouse look)
    pub fn step(
        scene: &mut Scene,
        camera: &mut Camera,
        controller: &mut CameraController,
        raw_dt: f32,
        cursor_captured: bool,
    ) -> SimulationResult {
        // Cap dt so a stall (first frame, window drag) does not jump the animation
        let dt = raw_dt.clamp(0.0, MAX_FRAME_TIME);

        // 1. Advance orbit and spin
        scene.update(dt);

        // 2. Camera movement, look and zoom
        let camera_position = controller.update(camera, dt, cursor_captured);

        // 3. Scale and speed keys
        let input = controller.animation_input();
        scene.apply_input(input.scale, input.orbit_speed, input.spin_speed, dt);

        // 4. Flashlight follows the camera
        scene.lighting.follow_camera(camera.position, camera.front());

        SimulationResult { dt, camera_position }
    }

    /// Forget the time spent so far (after a pause in rendering)
    pub fn reset_clock(&mut self) {
        self.last_frame = Instant::now();
    }
}

impl Default for SimulationSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    fn setup() -> (Scene, Camera, CameraController) {
        (Scene::default(), Camera::default(), CameraController::new())
    }

    #[test]
    fn test_delta_time_capped() {
        let (mut scene, mut camera, mut controller) = setup();
        let result = SimulationSystem::step(&mut scene, &mut camera, &mut controller, 5.0, true);
        assert_eq!(result.dt, MAX_FRAME_TIME);
        assert!((scene.animation.spin_angle - 30f32.to_radians() * MAX_FRAME_TIME).abs() < 1e-5);
    }

    #[test]
    fn test_negative_delta_time_ignored() {
        let (mut scene, mut camera, mut controller) = setup();
        let result = SimulationSystem::step(&mut scene, &mut camera, &mut controller, -1.0, true);
        assert_eq!(result.dt, 0.0);
        assert_eq!(scene.animation.orbit_angle, 0.0);
    }

    #[test]
    fn test_spotlight_follows_camera() {
        let (mut scene, mut camera, mut controller) = setup();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);

        let result = SimulationSystem::step(&mut scene, &mut camera, &mut controller, 0.1, true);

        assert_eq!(result.camera_position, camera.position);
        assert!(camera.position.z < 3.0);
        assert_eq!(scene.lighting.spot.position, camera.position);
        assert_eq!(scene.lighting.spot.direction, camera.front());
    }

    #[test]
    fn test_animation_keys_adjust_scene() {
        let (mut scene, mut camera, mut controller) = setup();
        controller.process_keyboard(KeyCode::KeyU, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyK, ElementState::Pressed);

        SimulationSystem::step(&mut scene, &mut camera, &mut controller, 0.2, true);

        assert!((scene.animation.scale - 1.2).abs() < 1e-5);
        assert!(scene.animation.orbit_speed < 50f32.to_radians());
    }

    #[test]
    fn test_default_construction() {
        let sim = SimulationSystem::default();
        assert!(sim.last_frame.elapsed().as_millis() < 100);
    }
}

//! Camera controller for first-person input handling
//!
//! Controls:
//! - W/S: Forward/backward along the view direction
//! - A/D: Strafe left/right
//! - Mouse: Look around (free look while the cursor is captured, or drag)
//! - Scroll: Zoom (narrows/widens the field of view)
//! - U/J: Grow/shrink the primary model
//! - H/K: Speed up/slow down the orbit
//! - M/N: Speed up/slow down the spin

use orbit_math::Vec3;
use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// Net direction of the animation keys, each in {-1, 0, 1}
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationInput {
    pub scale: f32,
    pub orbit_speed: f32,
    pub spin_speed: f32,
}

/// Camera controller for handling input
pub struct CameraController {
    // Movement state
    forward: bool,
    backward: bool,
    left: bool,
    right: bool,

    // Animation keys
    scale_up: bool,
    scale_down: bool,
    orbit_faster: bool,
    orbit_slower: bool,
    spin_faster: bool,
    spin_slower: bool,

    // Mouse state
    mouse_pressed: bool,
    pending_yaw: f32,
    pending_pitch: f32,
    pending_zoom: f32,

    // Input smoothing state
    smooth_yaw: f32,
    smooth_pitch: f32,

    // Configuration
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub smoothing_half_life: f32,  // Exponential smoothing half-life in seconds
    pub smoothing_enabled: bool,
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraController {
    pub fn new() -> Self {
        Self {
            forward: false,
            backward: false,
            left: false,
            right: false,

            scale_up: false,
            scale_down: false,
            orbit_faster: false,
            orbit_slower: false,
            spin_faster: false,
            spin_slower: false,

            mouse_pressed: false,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,

            smooth_yaw: 0.0,
            smooth_pitch: 0.0,

            move_speed: 2.5,
            mouse_sensitivity: 0.1,  // Degrees per pixel
            smoothing_half_life: 0.05,
            smoothing_enabled: false,
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key is one the controller tracks.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;

        match key {
            KeyCode::KeyW => { self.forward = pressed; true }
            KeyCode::KeyS => { self.backward = pressed; true }
            KeyCode::KeyA => { self.left = pressed; true }
            KeyCode::KeyD => { self.right = pressed; true }
            KeyCode::KeyU => { self.scale_up = pressed; true }
            KeyCode::KeyJ => { self.scale_down = pressed; true }
            KeyCode::KeyH => { self.orbit_faster = pressed; true }
            KeyCode::KeyK => { self.orbit_slower = pressed; true }
            KeyCode::KeyM => { self.spin_faster = pressed; true }
            KeyCode::KeyN => { self.spin_slower = pressed; true }
            _ => false,
        }
    }

    /// Process mouse button input
    pub fn process_mouse_button(&mut self, button: MouseButton, state: ElementState) {
        if button == MouseButton::Left {
            self.mouse_pressed = state == ElementState::Pressed;
        }
    }

    /// Process raw mouse movement (pixels; +y is down)
    pub fn process_mouse_motion(&mut self, delta_x: f64, delta_y: f64) {
        self.pending_yaw += delta_x as f32;
        self.pending_pitch += delta_y as f32;
    }

    /// Process scroll wheel movement (+y scrolls up and zooms in)
    pub fn process_scroll(&mut self, delta_y: f32) {
        self.pending_zoom += delta_y;
    }

    /// Update the camera based on accumulated input
    ///
    /// When `cursor_captured` is true, free look is enabled (no click required).
    /// Returns the camera position for debug display.
    pub fn update<C: CameraControl>(&mut self, camera: &mut C, dt: f32, cursor_captured: bool) -> Vec3 {
        let (fwd, rgt) = self.get_movement_input();
        camera.move_local(fwd * self.move_speed * dt, rgt * self.move_speed * dt);

        // Exponential smoothing: new = old * factor + input * (1 - factor)
        let (yaw_input, pitch_input) = if self.smoothing_enabled && dt > 0.0 {
            let smooth_factor = 2.0f32.powf(-dt / self.smoothing_half_life);
            self.smooth_yaw = self.smooth_yaw * smooth_factor + self.pending_yaw * (1.0 - smooth_factor);
            self.smooth_pitch = self.smooth_pitch * smooth_factor + self.pending_pitch * (1.0 - smooth_factor);
            (self.smooth_yaw, self.smooth_pitch)
        } else {
            (self.pending_yaw, self.pending_pitch)
        };

        if cursor_captured || self.mouse_pressed {
            // Mouse right turns right; mouse up (negative delta_y) looks up
            camera.rotate(
                yaw_input * self.mouse_sensitivity,
                -pitch_input * self.mouse_sensitivity,
            );
        }

        if self.pending_zoom != 0.0 {
            camera.zoom(self.pending_zoom);
        }

        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_zoom = 0.0;

        camera.position()
    }

    /// Check if any movement keys are pressed
    pub fn is_moving(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Toggle input smoothing on/off
    pub fn toggle_smoothing(&mut self) -> bool {
        self.smoothing_enabled = !self.smoothing_enabled;
        self.smooth_yaw = 0.0;
        self.smooth_pitch = 0.0;
        self.smoothing_enabled
    }

    /// Check if smoothing is enabled
    pub fn is_smoothing_enabled(&self) -> bool {
        self.smoothing_enabled
    }

    /// Get raw movement input
    ///
    /// Returns (forward, right) input values in range -1.0 to 1.0.
    pub fn get_movement_input(&self) -> (f32, f32) {
        let forward = (self.forward as i32 - self.backward as i32) as f32;
        let right = (self.right as i32 - self.left as i32) as f32;
        (forward, right)
    }

    /// Get the net direction of the scale and speed keys
    pub fn animation_input(&self) -> AnimationInput {
        AnimationInput {
            scale: (self.scale_up as i32 - self.scale_down as i32) as f32,
            orbit_speed: (self.orbit_faster as i32 - self.orbit_slower as i32) as f32,
            spin_speed: (self.spin_faster as i32 - self.spin_slower as i32) as f32,
        }
    }

    /// Builder: set movement speed
    pub fn with_move_speed(mut self, speed: f32) -> Self {
        self.move_speed = speed;
        self
    }

    /// Builder: set mouse sensitivity (degrees per pixel)
    pub fn with_mouse_sensitivity(mut self, sensitivity: f32) -> Self {
        self.mouse_sensitivity = sensitivity;
        self
    }

    /// Builder: set smoothing half-life (lower = more responsive)
    pub fn with_smoothing_half_life(mut self, half_life: f32) -> Self {
        self.smoothing_half_life = half_life;
        self
    }

    /// Builder: enable or disable smoothing
    pub fn with_smoothing(mut self, enabled: bool) -> Self {
        self.smoothing_enabled = enabled;
        self
    }
}

/// Trait for camera control
/// Allows the controller to work with different camera implementations
pub trait CameraControl {
    /// Move along the camera's front and right vectors
    fn move_local(&mut self, forward: f32, right: f32);
    /// Turn by the given yaw and pitch (degrees)
    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32);
    /// Zoom by a scroll offset
    fn zoom(&mut self, delta: f32);
    fn position(&self) -> Vec3;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct MockCamera {
        position: Vec3,
        yaw: f32,
        pitch: f32,
        zoom: f32,
    }

    impl CameraControl for MockCamera {
        fn move_local(&mut self, forward: f32, right: f32) {
            self.position.z -= forward;
            self.position.x += right;
        }

        fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
            self.yaw += delta_yaw;
            self.pitch += delta_pitch;
        }

        fn zoom(&mut self, delta: f32) {
            self.zoom += delta;
        }

        fn position(&self) -> Vec3 {
            self.position
        }
    }

    #[test]
    fn test_movement_keys() {
        let mut controller = CameraController::new();
        assert!(controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed));
        assert!(controller.process_keyboard(KeyCode::KeyD, ElementState::Pressed));
        assert_eq!(controller.get_movement_input(), (1.0, 1.0));
        assert!(controller.is_moving());

        controller.process_keyboard(KeyCode::KeyW, ElementState::Released);
        controller.process_keyboard(KeyCode::KeyD, ElementState::Released);
        assert_eq!(controller.get_movement_input(), (0.0, 0.0));
        assert!(!controller.is_moving());
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyS, ElementState::Pressed);
        assert_eq!(controller.get_movement_input().0, 0.0);
    }

    #[test]
    fn test_animation_keys() {
        let mut controller = CameraController::new();
        controller.process_keyboard(KeyCode::KeyU, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyK, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyM, ElementState::Pressed);

        assert_eq!(
            controller.animation_input(),
            AnimationInput { scale: 1.0, orbit_speed: -1.0, spin_speed: 1.0 }
        );

        controller.process_keyboard(KeyCode::KeyU, ElementState::Released);
        controller.process_keyboard(KeyCode::KeyJ, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyN, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyM, ElementState::Released);
        assert_eq!(controller.animation_input().scale, -1.0);
        assert_eq!(controller.animation_input().spin_speed, -1.0);
    }

    #[test]
    fn test_untracked_key() {
        let mut controller = CameraController::new();
        assert!(!controller.process_keyboard(KeyCode::KeyZ, ElementState::Pressed));
    }

    #[test]
    fn test_update_moves_camera() {
        let mut controller = CameraController::new().with_move_speed(2.0);
        let mut camera = MockCamera::default();

        controller.process_keyboard(KeyCode::KeyW, ElementState::Pressed);
        let pos = controller.update(&mut camera, 0.5, false);

        assert_eq!(pos, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_mouse_look_requires_capture_or_drag() {
        let mut controller = CameraController::new().with_mouse_sensitivity(0.1);
        let mut camera = MockCamera::default();

        controller.process_mouse_motion(10.0, 0.0);
        controller.update(&mut camera, 0.016, false);
        assert_eq!(camera.yaw, 0.0);

        // Pending input was discarded, so this only applies the new motion
        controller.process_mouse_motion(10.0, 0.0);
        controller.update(&mut camera, 0.016, true);
        assert!((camera.yaw - 1.0).abs() < 1e-5);

        controller.process_mouse_button(MouseButton::Left, ElementState::Pressed);
        controller.process_mouse_motion(10.0, 0.0);
        controller.update(&mut camera, 0.016, false);
        assert!((camera.yaw - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_mouse_up_looks_up() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();

        controller.process_mouse_motion(0.0, -20.0);
        controller.update(&mut camera, 0.016, true);
        assert!(camera.pitch > 0.0);
    }

    #[test]
    fn test_scroll_forwards_zoom() {
        let mut controller = CameraController::new();
        let mut camera = MockCamera::default();

        controller.process_scroll(1.0);
        controller.process_scroll(2.0);
        controller.update(&mut camera, 0.016, false);
        assert_eq!(camera.zoom, 3.0);

        controller.update(&mut camera, 0.016, false);
        assert_eq!(camera.zoom, 3.0);
    }

    #[test]
    fn test_smoothing_damps_input() {
        let mut controller = CameraController::new().with_smoothing(true);
        let mut camera = MockCamera::default();

        controller.process_mouse_motion(100.0, 0.0);
        controller.update(&mut camera, 0.016, true);
        let smoothed = camera.yaw;
        assert!(smoothed > 0.0 && smoothed < 10.0);

        assert!(!controller.toggle_smoothing());
        assert!(!controller.is_smoothing_enabled());
    }
}

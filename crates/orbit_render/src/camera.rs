//! First-person camera driven by Euler angles
//!
//! The camera keeps a yaw/pitch pair in degrees and derives an orthonormal
//! front/right/up basis from them. The view matrix looks from `position`
//! along `front`; the field of view doubles as the zoom level.

use orbit_input::CameraControl;
use orbit_math::{clamp_between, perspective, Mat4, Vec3};

/// Default yaw: looking down -Z
pub const DEFAULT_YAW: f32 = -90.0;
/// Default pitch: level
pub const DEFAULT_PITCH: f32 = 0.0;
/// Default (and widest) field of view in degrees
pub const DEFAULT_ZOOM: f32 = 45.0;

/// Camera for viewing the scene
pub struct Camera {
    /// World-space position
    pub position: Vec3,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,

    /// Horizontal angle in degrees
    yaw: f32,
    /// Vertical angle in degrees, clamped to `[-pitch_limit, pitch_limit]`
    pitch: f32,
    /// Field of view in degrees
    zoom: f32,

    pub pitch_limit: f32,
    pub min_zoom: f32,
    pub max_zoom: f32,

    start_position: Vec3,
    start_yaw: f32,
    start_pitch: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0))
    }
}

impl Camera {
    /// Create a camera at `position` looking down -Z
    pub fn new(position: Vec3) -> Self {
        Self::with_angles(position, DEFAULT_YAW, DEFAULT_PITCH)
    }

    /// Create a camera with explicit yaw and pitch (degrees)
    pub fn with_angles(position: Vec3, yaw: f32, pitch: f32) -> Self {
        let mut camera = Self {
            position,
            front: Vec3::NEG_Z,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: Vec3::Y,
            yaw,
            pitch,
            zoom: DEFAULT_ZOOM,
            pitch_limit: 89.0,
            min_zoom: 1.0,
            max_zoom: DEFAULT_ZOOM,
            start_position: position,
            start_yaw: yaw,
            start_pitch: pitch,
        };
        camera.pitch = clamp_between(camera.pitch, -camera.pitch_limit, camera.pitch_limit);
        camera.update_vectors();
        camera
    }

    /// Builder: set the pitch clamp (degrees)
    pub fn with_pitch_limit(mut self, limit: f32) -> Self {
        self.pitch_limit = limit;
        self.pitch = clamp_between(self.pitch, -limit, limit);
        self.update_vectors();
        self
    }

    /// Builder: set the zoom range and start at the widest setting
    pub fn with_zoom_range(mut self, min_zoom: f32, max_zoom: f32) -> Self {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = max_zoom;
        self
    }

    /// Move along the current front/right vectors
    pub fn process_movement(&mut self, forward: f32, right: f32) {
        self.position += self.front * forward + self.right * right;
    }

    /// Turn by mouse offsets already scaled to degrees
    pub fn process_mouse(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch = clamp_between(self.pitch + delta_pitch, -self.pitch_limit, self.pitch_limit);
        self.update_vectors();
    }

    /// Scroll up to zoom in (narrower field of view)
    pub fn process_scroll(&mut self, offset: f32) {
        self.zoom = clamp_between(self.zoom - offset, self.min_zoom, self.max_zoom);
    }

    /// Return to the starting position and orientation
    pub fn reset(&mut self) {
        self.position = self.start_position;
        self.yaw = self.start_yaw;
        self.pitch = clamp_between(self.start_pitch, -self.pitch_limit, self.pitch_limit);
        self.zoom = self.max_zoom;
        self.update_vectors();
    }

    /// View matrix looking from `position` along `front`
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Projection matrix using the current zoom as vertical field of view
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> Mat4 {
        perspective(self.zoom, aspect, near, far)
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Current field of view in degrees
    pub fn fov(&self) -> f32 {
        self.zoom
    }

    /// Recompute front/right/up from yaw and pitch
    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

impl CameraControl for Camera {
    fn move_local(&mut self, forward: f32, right: f32) {
        Camera::process_movement(self, forward, right);
    }

    fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        Camera::process_mouse(self, delta_yaw, delta_pitch);
    }

    fn zoom(&mut self, delta: f32) {
        Camera::process_scroll(self, delta);
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-5;

    fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < EPSILON
    }

    #[test]
    fn test_camera_default_looks_down_neg_z() {
        let cam = Camera::default();
        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 3.0));
        assert!(vec_approx_eq(cam.front(), Vec3::NEG_Z));
        assert!(vec_approx_eq(cam.right(), Vec3::X));
        assert!(vec_approx_eq(cam.up(), Vec3::Y));
        assert_eq!(cam.fov(), 45.0);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut cam = Camera::default();
        cam.process_mouse(0.0, 500.0);
        assert_eq!(cam.pitch(), 89.0);
        cam.process_mouse(0.0, -1000.0);
        assert_eq!(cam.pitch(), -89.0);
    }

    #[test]
    fn test_basis_orthonormal() {
        let mut cam = Camera::default();
        cam.process_mouse(37.0, 61.0);

        assert!((cam.front().length() - 1.0).abs() < EPSILON);
        assert!((cam.right().length() - 1.0).abs() < EPSILON);
        assert!((cam.up().length() - 1.0).abs() < EPSILON);
        assert!(cam.front().dot(cam.right()).abs() < EPSILON);
        assert!(cam.front().dot(cam.up()).abs() < EPSILON);
        assert!(cam.right().dot(cam.up()).abs() < EPSILON);
        // Right stays horizontal
        assert!(cam.right().y.abs() < EPSILON);
    }

    #[test]
    fn test_yaw_turns_right() {
        let mut cam = Camera::default();
        cam.process_mouse(90.0, 0.0);
        assert!(vec_approx_eq(cam.front(), Vec3::X));
    }

    #[test]
    fn test_zoom_clamped() {
        let mut cam = Camera::default();
        cam.process_scroll(10.0);
        assert_eq!(cam.fov(), 35.0);
        cam.process_scroll(100.0);
        assert_eq!(cam.fov(), 1.0);
        cam.process_scroll(-100.0);
        assert_eq!(cam.fov(), 45.0);
    }

    #[test]
    fn test_inverted_limits_do_not_panic() {
        let mut cam = Camera::default()
            .with_pitch_limit(-30.0)
            .with_zoom_range(60.0, 45.0);

        cam.process_mouse(0.0, 80.0);
        assert!((cam.pitch() - 30.0).abs() < EPSILON);

        cam.process_scroll(1.0);
        assert_eq!(cam.fov(), 45.0);
        cam.process_scroll(-30.0);
        assert_eq!(cam.fov(), 60.0);

        cam.reset();
        assert_eq!(cam.pitch(), 0.0);
    }

    #[test]
    fn test_movement_follows_front() {
        let mut cam = Camera::default();
        cam.process_movement(1.0, 0.0);
        assert!(vec_approx_eq(cam.position, Vec3::new(0.0, 0.0, 2.0)));
        cam.process_movement(0.0, 2.0);
        assert!(vec_approx_eq(cam.position, Vec3::new(2.0, 0.0, 2.0)));
    }

    #[test]
    fn test_view_matrix_moves_world_opposite_camera() {
        let cam = Camera::default();
        let p = cam.view_matrix().transform_point3(Vec3::ZERO);
        // Origin is 3 units in front of the camera, i.e. at -Z in view space
        assert!(vec_approx_eq(p, Vec3::new(0.0, 0.0, -3.0)));
    }

    #[test]
    fn test_reset() {
        let mut cam = Camera::default();
        cam.process_movement(5.0, 1.0);
        cam.process_mouse(30.0, 20.0);
        cam.process_scroll(20.0);
        cam.reset();

        assert_eq!(cam.position, Vec3::new(0.0, 0.0, 3.0));
        assert!(vec_approx_eq(cam.front(), Vec3::NEG_Z));
        assert_eq!(cam.fov(), 45.0);
    }

    #[test]
    fn test_camera_control_trait() {
        let mut cam = Camera::default();
        CameraControl::rotate(&mut cam, 0.0, 10.0);
        CameraControl::zoom(&mut cam, 5.0);
        assert_eq!(cam.pitch(), 10.0);
        assert_eq!(cam.fov(), 40.0);
        assert_eq!(CameraControl::position(&cam), cam.position);
    }
}

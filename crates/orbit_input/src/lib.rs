//! Input Handling
//!
//! This crate provides first-person camera control plus the held keys that
//! adjust the scene's animation.

mod camera_controller;

pub use camera_controller::{AnimationInput, CameraController, CameraControl};

//! Scene construction utilities
//!
//! This module builds the orbit scene, camera and controller from configuration.

mod scene_builder;

pub use scene_builder::{build_camera, build_controller, SceneBuilder};

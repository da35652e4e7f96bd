//! Orbit Scene
//!
//! Library half of the demo binary: configuration, input mapping, scene
//! construction and the window/render/simulation systems used by `main`.

pub mod config;
pub mod input;
pub mod scene;
pub mod systems;

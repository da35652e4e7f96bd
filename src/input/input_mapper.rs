//! Special-key mapping for the orbit scene
//!
//! Turns one-shot presses (Escape, R, F, G, P, left click) into
//! [`InputAction`]s. Keys that act while held, camera movement on WASD and
//! the scale/speed keys U/J, H/K, M/N, bypass this and go to
//! `CameraController`.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::KeyCode;

/// One-shot actions for the application loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Capture or release the cursor (Escape when captured, click when released)
    ToggleCursor,
    /// Quit (Escape while the cursor is free)
    Exit,
    /// Put the camera back at its starting pose (R)
    ResetCamera,
    /// Borderless fullscreen on/off (F)
    ToggleFullscreen,
    /// Mouse-look smoothing on/off (G)
    ToggleSmoothing,
    /// Freeze or resume the orbit and spin (P)
    TogglePause,
}

/// Key bindings shown in the log at startup
pub const CONTROLS: &[(&str, &str)] = &[
    ("W/A/S/D", "move camera"),
    ("Mouse", "look around"),
    ("Scroll", "zoom"),
    ("U/J", "grow/shrink model"),
    ("H/K", "orbit faster/slower"),
    ("M/N", "spin faster/slower"),
    ("P", "pause animation"),
    ("R", "reset camera"),
    ("F", "toggle fullscreen"),
    ("G", "toggle mouse smoothing"),
    ("Esc", "release cursor, then quit"),
];

/// Maps raw winit input to [`InputAction`]s
pub struct InputMapper;

impl InputMapper {
    /// Map a key event to an action
    ///
    /// Only fresh presses count: releases and OS auto-repeat return `None`,
    /// so holding P does not flicker the pause state.
    pub fn map_keyboard(
        key: KeyCode,
        state: ElementState,
        repeat: bool,
        cursor_captured: bool,
    ) -> Option<InputAction> {
        if state != ElementState::Pressed || repeat {
            return None;
        }

        let action = match key {
            KeyCode::Escape if cursor_captured => InputAction::ToggleCursor,
            KeyCode::Escape => InputAction::Exit,
            KeyCode::KeyR => InputAction::ResetCamera,
            KeyCode::KeyF => InputAction::ToggleFullscreen,
            KeyCode::KeyG => InputAction::ToggleSmoothing,
            KeyCode::KeyP => InputAction::TogglePause,
            _ => return None,
        };
        Some(action)
    }

    /// Map a mouse button event to an action
    ///
    /// A left click grabs the cursor when it is free.
    pub fn map_mouse_button(
        button: MouseButton,
        state: ElementState,
        cursor_captured: bool,
    ) -> Option<InputAction> {
        let click = button == MouseButton::Left && state == ElementState::Pressed;
        (click && !cursor_captured).then_some(InputAction::ToggleCursor)
    }

    /// Controls summary, one binding per line
    pub fn controls_help() -> String {
        CONTROLS
            .iter()
            .map(|(keys, what)| format!("  {:<8} {}", keys, what))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

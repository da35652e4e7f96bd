//! Window management system
//!
//! Handles window creation, cursor capture/release, fullscreen toggle, and title updates.

use std::sync::Arc;
use orbit_core::Vec3;
use winit::{
    event_loop::ActiveEventLoop,
    window::{CursorGrabMode, Fullscreen, Window},
};
use crate::config::WindowConfig;

/// Manages the application window and cursor state
pub struct WindowSystem {
    window: Arc<Window>,
    cursor_captured: bool,
    base_title: String,
}

impl WindowSystem {
    /// Create window from config
    pub fn create(
        event_loop: &ActiveEventLoop,
        config: &WindowConfig,
    ) -> Result<Self, WindowError> {
        let mut attrs = Window::default_attributes()
            .with_title(&config.title)
            .with_inner_size(winit::dpi::LogicalSize::new(
                config.width,
                config.height,
            ));

        if config.fullscreen {
            attrs = attrs.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }

        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .map_err(|e| WindowError::CreationFailed(e.to_string()))?,
        );

        Ok(Self {
            window,
            cursor_captured: false,
            base_title: config.title.clone(),
        })
    }

    /// Get window reference (for RenderContext creation)
    pub fn window(&self) -> &Arc<Window> {
        &self.window
    }

    /// Check if cursor is captured
    pub fn is_cursor_captured(&self) -> bool {
        self.cursor_captured
    }

    /// Capture cursor for FPS-style controls
    pub fn capture_cursor(&mut self) -> bool {
        let grab_result = self.window
            .set_cursor_grab(CursorGrabMode::Locked)
            .or_else(|_| self.window.set_cursor_grab(CursorGrabMode::Confined));

        if grab_result.is_ok() {
            self.window.set_cursor_visible(false);
            self.cursor_captured = true;
            log::info!("Cursor captured - Escape to release");
            true
        } else {
            log::warn!("Failed to capture cursor");
            false
        }
    }

    /// Release cursor
    pub fn release_cursor(&mut self) {
        let _ = self.window.set_cursor_grab(CursorGrabMode::None);
        self.window.set_cursor_visible(true);
        self.cursor_captured = false;
        log::info!("Cursor released - click to capture");
    }

    /// Toggle fullscreen mode
    pub fn toggle_fullscreen(&self) {
        let new_fullscreen = if self.window.fullscreen().is_some() {
            None
        } else {
            Some(Fullscreen::Borderless(None))
        };
        self.window.set_fullscreen(new_fullscreen);
    }

    /// Update window title with position and animation info
    pub fn update_title(&self, stats: &TitleStats) {
        self.window
            .set_title(&format_title(&self.base_title, stats, self.cursor_captured));
    }

    /// Request a redraw
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Values shown in the window title
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleStats {
    pub position: Vec3,
    pub scale: f32,
    /// Orbit speed in degrees per second
    pub orbit_speed: f32,
    /// Spin speed in degrees per second
    pub spin_speed: f32,
    pub paused: bool,
}

/// Build the title text for the given state
pub fn format_title(base_title: &str, stats: &TitleStats, cursor_captured: bool) -> String {
    let hint = if cursor_captured {
        "[Esc to release]"
    } else {
        "[Click to capture]"
    };
    let paused = if stats.paused { " PAUSED" } else { "" };
    format!(
        "{} - ({:.1}, {:.1}, {:.1}) S:{:.2} Orbit:{:.0}deg/s Spin:{:.0}deg/s{} {}",
        base_title,
        stats.position.x,
        stats.position.y,
        stats.position.z,
        stats.scale,
        stats.orbit_speed,
        stats.spin_speed,
        paused,
        hint
    )
}

#[derive(Debug)]
pub enum WindowError {
    CreationFailed(String),
}

impl std::fmt::Display for WindowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WindowError::CreationFailed(msg) => write!(f, "Window creation failed: {}", msg),
        }
    }
}

impl std::error::Error for WindowError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats() -> TitleStats {
        TitleStats {
            position: Vec3::new(1.0, 2.0, 3.0),
            scale: 1.25,
            orbit_speed: 50.0,
            spin_speed: -30.0,
            paused: false,
        }
    }

    #[test]
    fn test_title_formatting_captured() {
        let title = format_title("Test", &stats(), true);
        assert!(title.starts_with("Test - (1.0, 2.0, 3.0)"));
        assert!(title.contains("S:1.25"));
        assert!(title.contains("Orbit:50deg/s"));
        assert!(title.contains("Spin:-30deg/s"));
        assert!(title.contains("Esc to release"));
    }

    #[test]
    fn test_title_formatting_released() {
        let title = format_title("Test", &stats(), false);
        assert!(title.contains("Click to capture"));
        assert!(!title.contains("PAUSED"));
    }

    #[test]
    fn test_title_shows_pause() {
        let paused = TitleStats { paused: true, ..stats() };
        assert!(format_title("Test", &paused, true).contains("PAUSED"));
    }

    #[test]
    fn test_window_error_display() {
        let err = WindowError::CreationFailed("no display".to_string());
        assert_eq!(format!("{}", err), "Window creation failed: no display");
    }
}

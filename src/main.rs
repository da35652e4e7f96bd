//! Orbit Scene
//!
//! Draws a textured model spinning at the origin, a half-size copy orbiting it
//! on a tilted circle, and a small cube marking the point light. The scene is
//! lit by that point light and a flashlight attached to the camera.

use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::WindowId,
};

use orbit_core::Scene;
use orbit_input::CameraController;
use orbit_render::{Camera, ModelData};
use orbit_scene::{
    config::AppConfig,
    input::{InputAction, InputMapper},
    scene::{build_camera, build_controller, SceneBuilder},
    systems::{RenderError, RenderSystem, SimulationSystem, TitleStats, WindowSystem},
};

/// Main application state
struct App {
    /// Application configuration
    config: AppConfig,
    window: Option<WindowSystem>,
    renderer: Option<RenderSystem>,
    scene: Scene,
    camera: Camera,
    controller: CameraController,
    simulation: SimulationSystem,
    /// Process exit code once the event loop stops
    exit_code: i32,
}

impl App {
    fn new(config: AppConfig) -> Self {
        let scene = SceneBuilder::from_config(&config).build();
        let camera = build_camera(&config.camera);
        let controller = build_controller(&config.input);

        Self {
            config,
            window: None,
            renderer: None,
            scene,
            camera,
            controller,
            simulation: SimulationSystem::new(),
            exit_code: 0,
        }
    }

    /// Log a fatal error and stop the event loop with a failing exit code
    fn fail(&mut self, event_loop: &ActiveEventLoop, message: &str) {
        log::error!("{}", message);
        self.exit_code = 1;
        event_loop.exit();
    }

    fn handle_action(&mut self, action: InputAction, event_loop: &ActiveEventLoop) {
        match action {
            InputAction::ToggleCursor => {
                if let Some(window) = &mut self.window {
                    if window.is_cursor_captured() {
                        window.release_cursor();
                    } else {
                        window.capture_cursor();
                    }
                }
            }
            InputAction::Exit => event_loop.exit(),
            InputAction::ResetCamera => {
                self.camera.reset();
                log::info!("Camera reset to starting position");
            }
            InputAction::ToggleFullscreen => {
                if let Some(window) = &self.window {
                    window.toggle_fullscreen();
                }
            }
            InputAction::ToggleSmoothing => {
                let enabled = self.controller.toggle_smoothing();
                log::info!("Input smoothing: {}", if enabled { "ON" } else { "OFF" });
            }
            InputAction::TogglePause => {
                let paused = self.scene.toggle_pause();
                log::info!("Animation {}", if paused { "paused" } else { "resumed" });
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) else {
            return;
        };

        let result = self.simulation.update(
            &mut self.scene,
            &mut self.camera,
            &mut self.controller,
            window.is_cursor_captured(),
        );

        if self.config.debug.title_stats {
            let animation = &self.scene.animation;
            window.update_title(&TitleStats {
                position: result.camera_position,
                scale: animation.scale,
                orbit_speed: animation.orbit_speed.to_degrees(),
                spin_speed: animation.spin_speed.to_degrees(),
                paused: self.scene.is_paused(),
            });
        }

        match renderer.render_frame(&self.camera, &self.scene) {
            Ok(()) => {}
            Err(RenderError::SurfaceLost) => log::debug!("Surface reconfigured"),
            Err(RenderError::OutOfMemory) => {
                self.fail(event_loop, "GPU out of memory");
                return;
            }
            Err(e) => log::warn!("{}", e),
        }

        window.request_redraw();
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let mut window = match WindowSystem::create(event_loop, &self.config.window) {
            Ok(window) => window,
            Err(e) => return self.fail(event_loop, &e.to_string()),
        };

        let mut renderer = match RenderSystem::new(
            window.window().clone(),
            self.config.rendering.clone(),
            self.config.camera.clone(),
            &self.config.lighting,
            self.config.window.vsync,
        ) {
            Ok(renderer) => renderer,
            Err(e) => return self.fail(event_loop, &e.to_string()),
        };

        let model_path = &self.config.assets.model_path;
        match ModelData::load(model_path) {
            Ok(data) => renderer.upload_model(&data),
            Err(e) => {
                let message = format!("Failed to load model '{}': {}", model_path.display(), e);
                return self.fail(event_loop, &message);
            }
        }

        let (width, height) = renderer.size();
        log::info!("Surface ready at {}x{}", width, height);

        if self.config.window.capture_cursor {
            window.capture_cursor();
        }

        // Don't count setup time as the first frame
        self.simulation.reset_clock();
        window.request_redraw();

        self.window = Some(window);
        self.renderer = Some(renderer);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }

            WindowEvent::Resized(physical_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(physical_size.width, physical_size.height);
                }
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if let PhysicalKey::Code(key) = event.physical_key {
                    let captured = self
                        .window
                        .as_ref()
                        .is_some_and(|w| w.is_cursor_captured());

                    if let Some(action) =
                        InputMapper::map_keyboard(key, event.state, event.repeat, captured)
                    {
                        self.handle_action(action, event_loop);
                        if action == InputAction::Exit {
                            return;
                        }
                    }

                    // Pass to controller for movement and animation keys
                    self.controller.process_keyboard(key, event.state);
                }
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let captured = self
                    .window
                    .as_ref()
                    .is_some_and(|w| w.is_cursor_captured());
                if let Some(action) = InputMapper::map_mouse_button(button, state, captured) {
                    self.handle_action(action, event_loop);
                }
                self.controller.process_mouse_button(button, state);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let scroll = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 100.0,
                };
                self.controller.process_scroll(scroll);
            }

            WindowEvent::RedrawRequested => self.redraw(event_loop),

            _ => {}
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta } = event {
            self.controller.process_mouse_motion(delta.0, delta.1);
        }
    }
}

fn main() {
    // Configuration comes first so it can pick the default log level
    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.debug.log_level.as_str()),
    )
    .init();

    if let Some(e) = config_error {
        log::warn!("Failed to load config: {}. Using defaults.", e);
    }
    log::info!("Starting Orbit Scene");
    log::info!("Controls:\n{}", InputMapper::controls_help());

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            log::error!("Failed to create event loop: {}", e);
            std::process::exit(1);
        }
    };
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    if let Err(e) = event_loop.run_app(&mut app) {
        log::error!("Event loop error: {}", e);
        std::process::exit(1);
    }

    if app.exit_code != 0 {
        std::process::exit(app.exit_code);
    }
}

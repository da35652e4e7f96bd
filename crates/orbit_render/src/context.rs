//! WGPU device, queue and surface management

use std::sync::Arc;
use winit::dpi::PhysicalSize;
use winit::window::Window;

/// Errors raised while bringing up the GPU
#[derive(Debug)]
pub enum ContextError {
    /// The window could not back a surface
    Surface(String),
    /// No adapter can present to the surface
    NoAdapter,
    /// The adapter refused to hand out a device
    Device(String),
    /// The surface reports no usable texture format
    NoSurfaceFormat,
}

impl std::fmt::Display for ContextError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContextError::Surface(msg) => write!(f, "Failed to create surface: {}", msg),
            ContextError::NoAdapter => write!(f, "No suitable GPU adapter found"),
            ContextError::Device(msg) => write!(f, "Failed to create device: {}", msg),
            ContextError::NoSurfaceFormat => write!(f, "Surface has no supported formats"),
        }
    }
}

impl std::error::Error for ContextError {}

/// Owns the surface and the device/queue pair used for every draw
pub struct RenderContext {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: PhysicalSize<u32>,
}

impl RenderContext {
    /// Create a context presenting to `window`
    ///
    /// With `vsync` off the surface uses `AutoNoVsync`, otherwise `AutoVsync`.
    pub async fn new(window: Arc<Window>, vsync: bool) -> Result<Self, ContextError> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        let surface = instance
            .create_surface(window)
            .map_err(|e| ContextError::Surface(e.to_string()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or(ContextError::NoAdapter)?;

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: Some("Orbit Device"),
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: Default::default(),
                },
                None,
            )
            .await
            .map_err(|e| ContextError::Device(e.to_string()))?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .find(|f| f.is_srgb())
            .copied()
            .or_else(|| caps.formats.first().copied())
            .ok_or(ContextError::NoSurfaceFormat)?;

        let present_mode = if vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
        })
    }

    /// Reconfigure the surface for a new window size
    ///
    /// Zero-sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, new_size: PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.size = new_size;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    /// Reconfigure with the current size (after a lost or outdated surface)
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Width over height of the surface
    pub fn aspect_ratio(&self) -> f32 {
        aspect_ratio(self.config.width, self.config.height)
    }
}

/// Aspect ratio that stays finite for a zero height
pub fn aspect_ratio(width: u32, height: u32) -> f32 {
    width as f32 / height.max(1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_ratio() {
        assert!((aspect_ratio(800, 600) - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(aspect_ratio(100, 0), 100.0);
    }

    #[test]
    fn test_context_error_display() {
        assert_eq!(
            format!("{}", ContextError::NoAdapter),
            "No suitable GPU adapter found"
        );
        assert_eq!(
            format!("{}", ContextError::Device("lost".to_string())),
            "Failed to create device: lost"
        );
    }
}

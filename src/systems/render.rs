//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Lit model and light cube pipelines
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use orbit_core::Scene;
use orbit_render::{
    camera::Camera,
    context::{ContextError, RenderContext},
    model::{Model, ModelData},
    pipeline::{FrameUniforms, LightCubePipeline, LitPipeline, MarkerUniforms, ObjectUniforms},
};
use crate::config::{CameraConfig, LightingConfig, RenderingConfig};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// GPU setup failed
    Context(ContextError),
    /// Surface was lost or outdated and has been reconfigured
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::Context(err) => write!(f, "GPU initialization failed: {}", err),
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Context(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ContextError> for RenderError {
    fn from(err: ContextError) -> Self {
        RenderError::Context(err)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    lit_pipeline: LitPipeline,
    light_cube_pipeline: LightCubePipeline,
    model: Option<Model>,
    render_config: RenderingConfig,
    camera_config: CameraConfig,
    marker_color: [f32; 4],
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        render_config: RenderingConfig,
        camera_config: CameraConfig,
        lighting_config: &LightingConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::new(window, vsync))?;

        let mut lit_pipeline = LitPipeline::new(&context.device, context.config.format);
        let light_cube_pipeline = LightCubePipeline::new(&context.device, context.config.format);

        // Ensure depth texture exists
        lit_pipeline.ensure_depth_texture(
            &context.device,
            context.config.width,
            context.config.height,
        );

        Ok(Self {
            context,
            lit_pipeline,
            light_cube_pipeline,
            model: None,
            render_config,
            camera_config,
            marker_color: lighting_config.marker_color,
        })
    }

    /// Handle window resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.lit_pipeline.ensure_depth_texture(
            &self.context.device,
            self.context.config.width,
            self.context.config.height,
        );
    }

    /// Upload the model drawn at the origin and as the satellite
    pub fn upload_model(&mut self, data: &ModelData) {
        let model = Model::upload(
            &self.context.device,
            &self.context.queue,
            data,
            self.lit_pipeline.material_layout(),
        );
        log::info!(
            "Uploaded {} vertices and {} triangles",
            data.vertex_count(),
            data.triangle_count()
        );
        self.model = Some(model);
    }

    /// Render a single frame
    pub fn render_frame(&mut self, camera: &Camera, scene: &Scene) -> Result<(), RenderError> {
        let aspect = self.context.aspect_ratio();
        let view_matrix = camera.view_matrix();
        let proj_matrix =
            camera.projection_matrix(aspect, self.camera_config.near, self.camera_config.far);

        let frame = FrameUniforms::new(view_matrix, proj_matrix, camera.position, &scene.lighting);
        self.lit_pipeline.update_frame(&self.context.queue, &frame);

        let instances = scene.model_instances();
        for (slot, transform) in instances.iter().enumerate() {
            let object = ObjectUniforms::new(transform.to_matrix(), self.render_config.shininess);
            self.lit_pipeline.update_object(&self.context.queue, slot, &object);
        }

        let marker = MarkerUniforms::new(
            proj_matrix * view_matrix,
            scene.light_marker().to_matrix(),
            self.marker_color,
        );
        self.light_cube_pipeline
            .update_uniforms(&self.context.queue, &marker);

        // Get surface texture
        let output = match self.context.surface.get_current_texture() {
            Ok(output) => output,
            Err(wgpu::SurfaceError::Lost) | Err(wgpu::SurfaceError::Outdated) => {
                self.context.reconfigure();
                return Err(RenderError::SurfaceLost);
            }
            Err(wgpu::SurfaceError::OutOfMemory) => return Err(RenderError::OutOfMemory),
            Err(e) => return Err(RenderError::Other(format!("{:?}", e))),
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .context
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Render Encoder"),
            });

        {
            let Some(mut pass) = self.lit_pipeline.begin_pass(
                &mut encoder,
                &view,
                self.render_config.clear_color(),
            ) else {
                return Err(RenderError::Other("depth texture not created".to_string()));
            };

            if let Some(model) = &self.model {
                for slot in 0..instances.len() {
                    self.lit_pipeline.draw_model(&mut pass, model, slot);
                }
            }
            self.light_cube_pipeline.draw(&mut pass);
        }

        // Submit
        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.config.width, self.context.config.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_error_display() {
        assert_eq!(format!("{}", RenderError::SurfaceLost), "Surface lost");
        assert_eq!(format!("{}", RenderError::OutOfMemory), "Out of memory");
        assert_eq!(
            format!("{}", RenderError::Other("test".to_string())),
            "Render error: test"
        );
        assert_eq!(
            format!("{}", RenderError::from(ContextError::NoAdapter)),
            "GPU initialization failed: No suitable GPU adapter found"
        );
    }

    #[test]
    fn test_render_error_source() {
        use std::error::Error;
        assert!(RenderError::from(ContextError::NoAdapter).source().is_some());
        assert!(RenderError::SurfaceLost.source().is_none());
    }
}

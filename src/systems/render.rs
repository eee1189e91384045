//! GPU rendering system
//!
//! Manages GPU rendering including:
//! - Render context and surface
//! - Flat (board) and lit (lighting scene) pipelines
//! - Frame rendering

use std::sync::Arc;
use winit::window::Window;
use skyguard_math::mat4;
use skyguard_render::{
    board_view_projection,
    context::{ContextError, RenderContext},
    pipeline::{FlatPipeline, FlatUniforms, LitPipeline, LitUniforms},
    renderable::BOARD_CLEAR_COLOR,
    AirDefenseGeometry, LightingGeometry,
};
use crate::config::CameraConfig;
use super::demo::{ActiveDemo, LightingRun};

/// Render error types
#[derive(Debug)]
pub enum RenderError {
    /// Surface was lost (window resized, minimized, etc.)
    SurfaceLost,
    /// GPU out of memory
    OutOfMemory,
    /// Other surface error
    Other(String),
    /// GPU setup failed
    Context(ContextError),
}

impl std::fmt::Display for RenderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderError::SurfaceLost => write!(f, "Surface lost"),
            RenderError::OutOfMemory => write!(f, "Out of memory"),
            RenderError::Other(msg) => write!(f, "Render error: {}", msg),
            RenderError::Context(e) => write!(f, "GPU initialization failed: {}", e),
        }
    }
}

impl std::error::Error for RenderError {}

impl From<ContextError> for RenderError {
    fn from(e: ContextError) -> Self {
        RenderError::Context(e)
    }
}

/// Manages GPU rendering
pub struct RenderSystem {
    context: RenderContext,
    flat_pipeline: FlatPipeline,
    lit_pipeline: LitPipeline,
    camera_config: CameraConfig,
}

impl RenderSystem {
    /// Create render system from window and config
    pub fn new(
        window: Arc<Window>,
        camera_config: CameraConfig,
        vsync: bool,
    ) -> Result<Self, RenderError> {
        let context = pollster::block_on(RenderContext::with_vsync(window, vsync))?;

        let flat_pipeline = FlatPipeline::new(&context.device, context.config.format);
        let mut lit_pipeline = LitPipeline::new(&context.device, context.config.format);

        // Ensure depth texture exists
        lit_pipeline.ensure_depth_texture(
            &context.device,
            context.size.width,
            context.size.height,
        );

        Ok(Self {
            context,
            flat_pipeline,
            lit_pipeline,
            camera_config,
        })
    }

    /// Handle window resize
    ///
    /// The depth buffer follows the surface, which keeps its size while minimized.
    pub fn resize(&mut self, width: u32, height: u32) {
        let size = self
            .context
            .resize(winit::dpi::PhysicalSize::new(width, height));
        self.lit_pipeline
            .ensure_depth_texture(&self.context.device, size.width, size.height);
    }

    /// Render a single frame of whichever demo is running
    pub fn render_frame(&mut self, demo: &ActiveDemo) -> Result<(), RenderError> {
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

        match demo {
            ActiveDemo::AirDefense(run) => {
                let geometry = AirDefenseGeometry::build(&run.game);
                self.flat_pipeline
                    .upload(&self.context.device, &self.context.queue, &geometry.vertices);

                let uniforms = FlatUniforms {
                    mvp: board_view_projection(self.context.aspect_ratio()),
                };
                self.flat_pipeline
                    .update_uniforms(&self.context.queue, &uniforms);

                self.flat_pipeline
                    .render(&mut encoder, &view, to_wgpu_color(BOARD_CLEAR_COLOR));
            }
            ActiveDemo::Lighting(run) => {
                let geometry = LightingGeometry::build(&run.demo);
                self.lit_pipeline
                    .upload(&self.context.device, &self.context.queue, &geometry.vertices);

                let uniforms = self.lit_uniforms(run);
                self.lit_pipeline
                    .update_uniforms(&self.context.queue, &uniforms);

                let clear = to_wgpu_color(run.demo.scene().clear_color);
                self.lit_pipeline.render(&mut encoder, &view, clear);
            }
        }

        self.context.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        Ok(())
    }

    fn lit_uniforms(&self, run: &LightingRun) -> LitUniforms {
        let projection = mat4::perspective_rh(
            self.camera_config.fov.to_radians(),
            self.context.aspect_ratio(),
            self.camera_config.near,
            self.camera_config.far,
        );
        let view_proj = mat4::mul(projection, run.camera.view_matrix());

        let scene = run.demo.scene();
        LitUniforms::new(
            view_proj,
            run.camera.position,
            &scene.directional,
            &run.demo.point_light(),
            &scene.spot,
            &scene.material,
            run.demo.model(),
        )
    }

    /// Get current surface size
    pub fn size(&self) -> (u32, u32) {
        (self.context.size.width, self.context.size.height)
    }
}

fn to_wgpu_color(c: [f32; 4]) -> wgpu::Color {
    wgpu::Color {
        r: c[0] as f64,
        g: c[1] as f64,
        b: c[2] as f64,
        a: c[3] as f64,
    }
}

use crate::constants::CLEAR_COLOR;
use starfield_core::{FrameRenderer, FrameUniforms, LayerUniforms, StarfieldEngine};
use web_sys as web;

mod helpers;
mod particles;

use particles::{create_particle_resources, ParticleResources};

// ===================== WebGPU state =====================

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    particles: ParticleResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        engine: &StarfieldEngine,
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::LowPower,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        if caps.formats.is_empty() {
            anyhow::bail!("surface reports no supported formats");
        }
        let format = helpers::pick_surface_format(&caps);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let particles = create_particle_resources(&device, format, engine.layers().layers());
        log::info!(
            "[gpu] surface {}x{} format={:?} layers={}",
            width,
            height,
            format,
            particles.layers.len()
        );

        let [r, g, b, a] = CLEAR_COLOR;
        Ok(Self {
            surface,
            device,
            queue,
            config,
            particles,
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
        }
    }

    fn write_uniforms(&self, engine: &StarfieldEngine) {
        let frame = FrameUniforms::new(
            engine.camera().view_projection(),
            [self.width as f32, self.height as f32],
            &engine.config().glow,
        );
        self.queue
            .write_buffer(&self.particles.frame_buffer, 0, bytemuck::bytes_of(&frame));
        for (layer, res) in engine
            .layers()
            .layers()
            .iter()
            .zip(self.particles.layers.iter())
        {
            let u = LayerUniforms::new(layer.model_matrix(), layer.point_size, layer.alpha);
            self.queue
                .write_buffer(&res.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
    }
}

impl FrameRenderer for GpuState {
    type Error = wgpu::SurfaceError;

    /// Lost and outdated surfaces are reconfigured in `render`; only
    /// out-of-memory and unknown errors end the loop.
    fn is_transient(error: &wgpu::SurfaceError) -> bool {
        matches!(
            error,
            wgpu::SurfaceError::Timeout
                | wgpu::SurfaceError::Outdated
                | wgpu::SurfaceError::Lost
        )
    }

    fn render(&mut self, engine: &StarfieldEngine) -> Result<(), wgpu::SurfaceError> {
        self.write_uniforms(engine);
        let frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(e @ (wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated)) => {
                self.surface.configure(&self.device, &self.config);
                return Err(e);
            }
            Err(e) => return Err(e),
        };
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("starfield_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.particles.pipeline);
            rpass.set_bind_group(0, &self.particles.frame_bind_group, &[]);
            rpass.set_vertex_buffer(0, self.particles.quad_vb.slice(..));
            for layer in &self.particles.layers {
                rpass.set_bind_group(1, &layer.bind_group, &[]);
                rpass.set_vertex_buffer(1, layer.instance_vb.slice(..));
                rpass.draw(0..6, 0..layer.instance_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

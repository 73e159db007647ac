use crate::render::{
    create_color_buffer, create_render_bind_group, create_render_bind_group_layout,
    create_render_pipeline, RenderParams,
};
use anyhow::Context as _;
use std::sync::Arc;
use std::time::Instant;
use ticklife::palette::paint_rgba;
use ticklife::{ControlEvent, EngineError, Simulation, TickOutcome};
use wgpu::util::DeviceExt;
use winit::window::Window;

// GUI Imports
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiWgpuRenderer;
use egui_winit::State as EguiWinitState;

pub struct State {
    pub surface: wgpu::Surface<'static>,
    pub device: wgpu::Device,
    pub queue: wgpu::Queue,
    pub config: wgpu::SurfaceConfiguration,
    pub size: winit::dpi::PhysicalSize<u32>,
    pub window: Arc<Window>,

    // Simulation, owned here and only mutated between frames
    pub sim: Simulation,
    pub pending_events: Vec<ControlEvent>,
    pixels: Vec<u32>,
    colors_dirty: bool,

    pub color_buffer: wgpu::Buffer,
    pub render_param_buffer: wgpu::Buffer,
    pub render_pipeline: wgpu::RenderPipeline,
    pub render_bind_group: wgpu::BindGroup,

    // GUI state
    pub egui_ctx: EguiContext,
    pub egui_winit_state: EguiWinitState,
    pub egui_renderer: EguiWgpuRenderer,
    pub menu_open: bool,
}

impl State {
    pub async fn new(window: Arc<Window>, sim: Simulation) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let grid = sim.dimensions();

        log::info!("Initializing wgpu...");

        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window.clone())
            .context("Failed to create surface")?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                force_fallback_adapter: false,
                compatible_surface: Some(&surface),
            })
            .await
            .context("Failed to find an appropriate adapter")?;

        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    label: None,
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                },
                None,
            )
            .await
            .context("Failed to create device")?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Palette values are written as-is, so prefer a non-sRGB target
        let surface_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format: surface_format,
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let color_buffer = create_color_buffer(&device, grid);
        let render_param_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Render Parameters"),
            contents: bytemuck::bytes_of(&RenderParams::new(grid, size)),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });

        let render_bind_group_layout = create_render_bind_group_layout(&device);
        let render_pipeline = create_render_pipeline(&device, &render_bind_group_layout, config.format);
        let render_bind_group = create_render_bind_group(
            &device, &render_bind_group_layout, &render_param_buffer, &color_buffer,
        );

        log::info!("Initializing egui...");
        let egui_ctx = EguiContext::default();
        let egui_winit_state = EguiWinitState::new(egui_ctx.clone(), egui_ctx.viewport_id(), &window, None, None);
        let egui_renderer = EguiWgpuRenderer::new(&device, config.format, None, 1);
        log::info!("egui initialized.");

        log::info!("wgpu initialized successfully.");

        Ok(Self {
            surface,
            device,
            queue,
            config,
            size,
            window,
            sim,
            pending_events: Vec::new(),
            pixels: Vec::with_capacity(grid.0 * grid.1),
            colors_dirty: true,
            color_buffer,
            render_param_buffer,
            render_pipeline,
            render_bind_group,
            egui_ctx,
            egui_winit_state,
            egui_renderer,
            menu_open: false,
        })
    }

    /// The grid keeps its size; only the surface and the cell-to-pixel scale change.
    pub fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width > 0 && new_size.height > 0 {
            self.size = new_size;
            self.config.width = new_size.width;
            self.config.height = new_size.height;
            self.surface.configure(&self.device, &self.config);
            self.queue.write_buffer(
                &self.render_param_buffer,
                0,
                bytemuck::bytes_of(&RenderParams::new(self.sim.dimensions(), new_size)),
            );
            log::info!("Reconfigured surface to: {}x{}", new_size.width, new_size.height);
        } else {
            log::warn!("Ignoring resize to zero dimensions: {}x{}", new_size.width, new_size.height);
        }
    }

    /// Queue a control event; it takes effect at the next tick boundary.
    pub fn queue_event(&mut self, event: ControlEvent) {
        self.pending_events.push(event);
    }

    /// Runs one tick if the pace controller says a boundary has been reached.
    pub fn advance(&mut self, now: Instant) -> Result<Option<TickOutcome>, EngineError> {
        if !self.sim.pace_mut().due(now) {
            return Ok(None);
        }
        let outcome = self.sim.tick(self.pending_events.drain(..))?;
        if outcome != TickOutcome::Paused {
            self.colors_dirty = true;
        }
        Ok(Some(outcome))
    }

    /// Upload cell colors if the grid changed & draw them. Returns the surface texture for egui to draw on.
    pub fn update_and_render(&mut self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        if self.colors_dirty {
            paint_rgba(self.sim.grid(), &mut self.pixels);
            self.queue.write_buffer(&self.color_buffer, 0, bytemuck::cast_slice(&self.pixels));
            self.colors_dirty = false;
        }

        // --- Get Surface Texture (early exit on error) ---
        let output_frame = match self.surface.get_current_texture() {
            Ok(frame) => frame,
            Err(wgpu::SurfaceError::Lost) => {
                log::warn!("Surface lost, recreating...");
                self.resize(self.size);
                return Err(wgpu::SurfaceError::Lost);
            }
            Err(e) => {
                log::error!("Failed to acquire next swap chain texture: {:?}", e);
                return Err(e);
            }
        };

        // --- Render Pass ---
        let output_view = output_frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut render_encoder = self.device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: Some("Render Encoder") });
        {
            let mut render_pass = render_encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &output_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.render_bind_group, &[]);
            render_pass.draw(0..3, 0..1); // Draw full-screen triangle
        }
        self.queue.submit(Some(render_encoder.finish()));
        // output_frame.present(); // DON'T present here, egui will do it later

        Ok(output_frame)
    }
}

// Windowing, drawing and input adapters around the ticklife engine
pub mod input;
pub mod render;
pub mod state;

use crate::state::State;

use clap::Parser;
use std::sync::Arc;
use std::time::Instant;
use ticklife::{ControlEvent, SimConfig, Simulation};
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    keyboard::{Key, NamedKey},
    window::Window,
};

async fn run(event_loop: EventLoop<()>, window: Arc<Window>, sim: Simulation) -> anyhow::Result<()> {
    let mut state = State::new(window, sim).await?;
    let mut fatal: Option<anyhow::Error> = None;

    event_loop.run(|event, window_target| {
        match event {
            Event::WindowEvent { window_id, ref event }
                if window_id == state.window.id() =>
            {
                // Pass window-specific events to egui_winit FIRST
                let response = state.egui_winit_state.on_window_event(&state.window, event);

                if response.repaint {
                    state.window.request_redraw();
                }

                // Resizes always reach the surface, even when egui wants them
                let consumed_by_egui = response.consumed && !matches!(event, WindowEvent::Resized(_));

                if consumed_by_egui {
                    return;
                }

                match event {
                    WindowEvent::CloseRequested => {
                        window_target.exit();
                    }
                    WindowEvent::KeyboardInput { event: key_event, .. } => {
                        if key_event.logical_key == Key::Named(NamedKey::Escape) {
                            window_target.exit();
                        } else {
                            input::handle_keyboard_input(&mut state, key_event);
                        }
                    }
                    WindowEvent::Resized(new_size) => {
                        state.resize(*new_size);
                        state.window.request_redraw();
                    }
                    WindowEvent::RedrawRequested => {
                        // Tick (if due) strictly before reading the grid for drawing
                        if let Err(err) = state.advance(Instant::now()) {
                            log::error!("Simulation halted: {err}");
                            fatal = Some(err.into());
                            window_target.exit();
                            return;
                        }

                        let output_frame = match state.update_and_render() {
                            Ok(frame) => frame,
                            Err(wgpu::SurfaceError::OutOfMemory) => {
                                log::error!("Out of GPU memory, exiting.");
                                fatal = Some(anyhow::anyhow!("surface out of memory"));
                                window_target.exit();
                                return;
                            }
                            Err(err) => {
                                // Lost was already handled by a reconfigure; Timeout/Outdated are transient.
                                log::warn!("Skipping frame due to surface {:?}", err);
                                state.window.request_redraw();
                                return;
                            }
                        };

                        draw_overlay(&mut state, output_frame);
                    }
                    _ => (),
                }
            }
            Event::AboutToWait => {
                // Sleep until the next tick boundary; input and egui repaints wake us earlier
                let now = Instant::now();
                let wait = state.sim.pace().until_next(now);
                if wait.is_zero() {
                    state.window.request_redraw();
                }
                window_target.set_control_flow(ControlFlow::WaitUntil(now + wait));
            }
            _ => (),
        }
    })?;

    match fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// egui overlay: a menu button and, when open, a panel with the simulation status.
fn draw_overlay(state: &mut State, output_frame: wgpu::SurfaceTexture) {
    let output_view = output_frame.texture.create_view(&wgpu::TextureViewDescriptor::default());

    let raw_input = state.egui_winit_state.take_egui_input(&state.window);
    state.egui_ctx.begin_frame(raw_input);

    egui::Area::new(egui::Id::new("menu_button_area"))
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(5.0, 5.0))
        .show(&state.egui_ctx, |ui| {
            if ui.button("☰").clicked() {
                state.menu_open = !state.menu_open;
            }
        });

    if state.menu_open {
        let panel_frame = egui::Frame {
            fill: egui::Color32::from_rgba_unmultiplied(25, 25, 25, 100),
            ..egui::Frame::side_top_panel(&state.egui_ctx.style())
        };

        let mut clicked = Vec::new();
        egui::SidePanel::left("side_panel")
            .frame(panel_frame)
            .resizable(true)
            .default_width(200.0)
            .show(&state.egui_ctx, |ui| {
                let sim = &state.sim;
                ui.heading("Simulation");
                ui.separator();
                let (width, height) = sim.dimensions();
                ui.label(format!("Grid: {}x{}", width, height));
                ui.label(format!("Speed: {} ticks/s", sim.pace().speed()));
                ui.label(format!("Next phase: {}", sim.phase()));
                ui.label(format!("Paused: {}", sim.is_paused()));
                ui.label(format!("Generation: {}", sim.generation()));
                ui.label(match sim.last_census() {
                    Some(c) => format!("Alive: {}  Empty: {}", c.alive, c.empty),
                    None => "Alive: N/A".to_string(),
                });
                ui.separator();
                ui.horizontal(|ui| {
                    let pause_label = if sim.is_paused() { "▶ Resume" } else { "⏸ Pause" };
                    if ui.button(pause_label).clicked() {
                        clicked.push(ControlEvent::TogglePause);
                    }
                    if ui.button("Slower").clicked() {
                        clicked.push(ControlEvent::SpeedDown);
                    }
                    if ui.button("Faster").clicked() {
                        clicked.push(ControlEvent::SpeedUp);
                    }
                });
                ui.label("Space: pause   ←/→: speed   Esc: quit");
            });
        for event in clicked {
            state.queue_event(event);
        }
    }

    let full_output = state.egui_ctx.end_frame();
    let paint_jobs = state.egui_ctx.tessellate(full_output.shapes, state.window.scale_factor() as f32);
    let screen_descriptor = egui_wgpu::ScreenDescriptor {
        size_in_pixels: [state.config.width, state.config.height],
        pixels_per_point: state.window.scale_factor() as f32,
    };

    let mut encoder = state.device.create_command_encoder(&wgpu::CommandEncoderDescriptor {
        label: Some("egui Encoder"),
    });
    for (id, image_delta) in &full_output.textures_delta.set {
        state.egui_renderer.update_texture(&state.device, &state.queue, *id, image_delta);
    }
    state.egui_renderer.update_buffers(
        &state.device,
        &state.queue,
        &mut encoder,
        &paint_jobs,
        &screen_descriptor,
    );
    state.egui_winit_state.handle_platform_output(&state.window, full_output.platform_output);

    {
        let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("egui Render Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &output_view, // Render egui ON TOP of the cell field
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });

        state.egui_renderer.render(&mut render_pass, &paint_jobs, &screen_descriptor);
    }

    for id in &full_output.textures_delta.free {
        state.egui_renderer.free_texture(id);
    }

    state.queue.submit(Some(encoder.finish()));
    output_frame.present();
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let config = SimConfig::parse();
    let sim = config.build()?;

    let (width, height) = sim.dimensions();
    log::info!(
        "Starting {}x{} grid at {} ticks/s{}",
        width,
        height,
        sim.pace().speed(),
        if sim.is_paused() { " (paused)" } else { "" }
    );

    let event_loop = EventLoop::new()?;

    // One physical pixel per cell
    let window = Arc::new(
        winit::window::WindowBuilder::new()
            .with_title("conway's life")
            .with_inner_size(winit::dpi::PhysicalSize::new(width as u32, height as u32))
            .build(&event_loop)?,
    );

    pollster::block_on(run(event_loop, window, sim))
}

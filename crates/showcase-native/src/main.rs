use std::sync::Arc;

use showcase_core::{
    particle_positions, InputEvent, InstantClock, Showcase, ShowcaseConfig, ViewportSize,
    VirtualScroll, WHEEL_LINE_PIXELS,
};
use showcase_render::{GpuState, RenderSetup};
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

fn logical_viewport(window: &winit::window::Window) -> ViewportSize {
    let logical = window
        .inner_size()
        .to_logical::<f32>(window.scale_factor());
    ViewportSize::new(logical.width, logical.height)
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("Scroll Showcase (native)")
            .build(&event_loop)?,
    );

    let mut showcase = Showcase::new(
        ShowcaseConfig::default(),
        InstantClock::new(),
        logical_viewport(&window),
    )?;
    let mailbox = showcase.mailbox();
    let section_count = showcase.layout().len();

    let size = window.inner_size();
    let mut gpu = {
        let cfg = showcase.config();
        let particles = particle_positions(
            &cfg.particles,
            cfg.motion.object_spacing,
            section_count,
        );
        pollster::block_on(GpuState::new(
            Arc::clone(&window),
            size.width,
            size.height,
            RenderSetup {
                layout: showcase.layout(),
                particles: &particles,
                particle_color: cfg.particle_rgb(),
                particle_size: cfg.particles.size,
                clear_color: wgpu::Color {
                    r: 0.02,
                    g: 0.02,
                    b: 0.04,
                    a: 1.0,
                },
            },
        ))?
    };

    let mut scroll = VirtualScroll::new();
    showcase.start_clock();
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                gpu.resize(size.width, size.height);
                let viewport = logical_viewport(&window);
                mailbox.post(InputEvent::Resize {
                    width: viewport.width,
                    height: viewport.height,
                });
                let y = scroll.reclamp(viewport.height, section_count);
                mailbox.post(InputEvent::Scroll { y });
            }
            WindowEvent::CursorMoved { position, .. } => {
                let logical = position.to_logical::<f32>(window.scale_factor());
                mailbox.post(InputEvent::PointerMove {
                    client_x: logical.x,
                    client_y: logical.y,
                });
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let pixels = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => -lines * WHEEL_LINE_PIXELS,
                    MouseScrollDelta::PixelDelta(pos) => {
                        -pos.to_logical::<f32>(window.scale_factor()).y
                    }
                };
                let height = logical_viewport(&window).height;
                let y = scroll.scroll_by(pixels, height, section_count);
                mailbox.post(InputEvent::Scroll { y });
            }
            WindowEvent::RedrawRequested => {
                let snapshot = showcase.tick();
                match gpu.render(&snapshot) {
                    Ok(()) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        let size = window.inner_size();
                        gpu.resize(size.width, size.height);
                        gpu.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("[gpu] out of memory; exiting");
                        elwt.exit();
                    }
                    Err(e) => log::warn!("[gpu] frame skipped: {:?}", e),
                }
            }
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}

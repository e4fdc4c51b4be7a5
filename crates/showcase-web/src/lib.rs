#![cfg(target_arch = "wasm32")]
use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::{particle_positions, rgb_to_hex, InstantClock, Showcase, ShowcaseConfig};
use showcase_render::{GpuState, RenderSetup};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;

use constants::{CANVAS_SELECTOR, CLEAR_COLOR};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("showcase-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .query_selector(CANVAS_SELECTOR)
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?
        .ok_or_else(|| anyhow::anyhow!("missing {CANVAS_SELECTOR}"))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let mut config = ShowcaseConfig::default();
    dom::apply_query_overrides(&window, &mut config);

    let viewport = dom::viewport_css_size(&window);
    let (backing_w, backing_h) = dom::sync_canvas_backing_size(&canvas);

    let mut showcase = Showcase::new(config, InstantClock::new(), viewport)?;
    showcase.set_initial_scroll(window.scroll_y().unwrap_or(0.0) as f32);
    let headings = dom::query_headings(&document);
    showcase.set_heading_count(headings.len());
    log::info!(
        "[init] viewport {}x{} backing {}x{} headings={}",
        viewport.width,
        viewport.height,
        backing_w,
        backing_h,
        headings.len()
    );

    let cfg = showcase.config();
    let particles = particle_positions(
        &cfg.particles,
        cfg.motion.object_spacing,
        showcase.layout().len(),
    );
    let gpu = GpuState::new(
        wgpu::SurfaceTarget::Canvas(canvas.clone()),
        backing_w,
        backing_h,
        RenderSetup {
            layout: showcase.layout(),
            particles: &particles,
            particle_color: cfg.particle_rgb(),
            particle_size: cfg.particles.size,
            clear_color: wgpu::Color {
                r: CLEAR_COLOR[0],
                g: CLEAR_COLOR[1],
                b: CLEAR_COLOR[2],
                a: CLEAR_COLOR[3],
            },
        },
    )
    .await?;

    let particle_hex = rgb_to_hex(showcase.config().particle_rgb());
    let queued_particle_color = Rc::new(RefCell::new(None));
    events::wire_input_handlers(events::InputWiring {
        window: window.clone(),
        document: document.clone(),
        canvas: canvas.clone(),
        mailbox: showcase.mailbox(),
        queued_particle_color: queued_particle_color.clone(),
        particle_hex,
    });

    showcase.start_clock();

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        showcase,
        gpu,
        canvas,
        headings,
        queued_particle_color,
    }));
    frame::start_loop(frame_ctx, window);
    Ok(())
}

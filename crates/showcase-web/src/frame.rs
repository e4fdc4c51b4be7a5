use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::{FrameScheduler, InstantClock, LoopControl, Showcase};
use showcase_render::GpuState;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

pub struct FrameContext {
    pub showcase: Showcase<InstantClock>,
    pub gpu: GpuState<'static>,
    pub canvas: web::HtmlCanvasElement,
    pub headings: Vec<web::HtmlElement>,
    pub queued_particle_color: Rc<RefCell<Option<[f32; 3]>>>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let snapshot = self.showcase.tick();

        for (index, style) in &snapshot.headings {
            if let Some(el) = self.headings.get(*index) {
                dom::apply_heading_style(el, style);
            }
        }

        if let Some(rgb) = self.queued_particle_color.borrow_mut().take() {
            self.gpu.set_particle_color(rgb);
        }

        self.gpu.resize(self.canvas.width(), self.canvas.height());
        match self.gpu.render(&snapshot) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost; reconfiguring");
                self.gpu.reconfigure();
            }
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

/// Drives a tick from `requestAnimationFrame`, re-arming itself each frame.
pub struct RafScheduler {
    window: web::Window,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

fn request_frame(window: &web::Window, cb: &Closure<dyn FnMut()>) {
    if let Err(e) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::error!("requestAnimationFrame failed: {:?}", e);
    }
}

impl FrameScheduler for RafScheduler {
    fn run<F>(self, mut tick: F)
    where
        F: FnMut() -> LoopControl + 'static,
    {
        let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
        let slot_inner = slot.clone();
        let window = self.window.clone();
        *slot.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // Not re-arming ends the loop; the closure must not drop itself mid-call.
            if tick() == LoopControl::Stop {
                return;
            }
            if let Some(cb) = slot_inner.borrow().as_ref() {
                request_frame(&window, cb);
            }
        }) as Box<dyn FnMut()>));
        if let Some(cb) = slot.borrow().as_ref() {
            request_frame(&self.window, cb);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>, window: web::Window) {
    RafScheduler::new(window).run(move || {
        frame_ctx.borrow_mut().frame();
        LoopControl::Continue
    });
}

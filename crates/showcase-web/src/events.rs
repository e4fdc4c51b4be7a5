use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::{parse_hex_color, InputEvent, InputMailbox};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::COLOR_INPUT_ID;
use crate::dom;

/// Everything the DOM listeners write into. Listeners never touch the
/// showcase directly; they post messages consumed on the next frame.
#[derive(Clone)]
pub struct InputWiring {
    pub window: web::Window,
    pub document: web::Document,
    pub canvas: web::HtmlCanvasElement,
    pub mailbox: InputMailbox,
    pub queued_particle_color: Rc<RefCell<Option<[f32; 3]>>>,
    /// Current particle color, shown by the color input on load.
    pub particle_hex: String,
}

pub fn wire_input_handlers(w: InputWiring) {
    wire_scroll(&w);
    wire_mousemove(&w);
    wire_resize(&w);
    wire_color_panel(&w);
}

fn listen<E>(target: &web::EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: wasm_bindgen::convert::FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("[events] failed to add {event} listener: {:?}", e);
    }
    closure.forget();
}

fn wire_scroll(w: &InputWiring) {
    let window = w.window.clone();
    let mailbox = w.mailbox.clone();
    listen(&w.window, "scroll", move |_ev: web::Event| {
        let y = window.scroll_y().unwrap_or(0.0);
        mailbox.post(InputEvent::Scroll { y: y as f32 });
    });
}

fn wire_mousemove(w: &InputWiring) {
    let mailbox = w.mailbox.clone();
    listen(&w.window, "mousemove", move |ev: web::MouseEvent| {
        mailbox.post(InputEvent::PointerMove {
            client_x: ev.client_x() as f32,
            client_y: ev.client_y() as f32,
        });
    });
}

fn wire_resize(w: &InputWiring) {
    let window = w.window.clone();
    let canvas = w.canvas.clone();
    let mailbox = w.mailbox.clone();
    listen(&w.window, "resize", move |_ev: web::Event| {
        let size = dom::viewport_css_size(&window);
        mailbox.post(InputEvent::Resize {
            width: size.width,
            height: size.height,
        });
        // Backing store follows immediately; the renderer picks it up next frame.
        dom::sync_canvas_backing_size(&canvas);
    });
}

fn wire_color_panel(w: &InputWiring) {
    let Some(el) = w.document.get_element_by_id(COLOR_INPUT_ID) else {
        log::info!("[panel] no #{COLOR_INPUT_ID} element; color control disabled");
        return;
    };
    let Ok(input) = el.dyn_into::<web::HtmlInputElement>() else {
        log::warn!("[panel] #{COLOR_INPUT_ID} is not an <input>");
        return;
    };
    input.set_value(&w.particle_hex);
    let queued = w.queued_particle_color.clone();
    let input_for_handler = input.clone();
    listen(&input, "input", move |_ev: web::Event| {
        match parse_hex_color(&input_for_handler.value()) {
            Ok(rgb) => *queued.borrow_mut() = Some(rgb),
            Err(e) => log::warn!("[panel] {e}"),
        }
    });
}

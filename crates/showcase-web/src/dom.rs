use showcase_core::{HeadingStyle, ShowcaseConfig, ViewportSize, MAX_PIXEL_RATIO};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::{HEADING_SELECTOR, QUERY_PARTICLES, QUERY_SEED};

/// Viewport size in CSS pixels (`innerWidth` x `innerHeight`).
pub fn viewport_css_size(window: &web::Window) -> ViewportSize {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(1.0);
    ViewportSize::new(w as f32, h as f32)
}

/// Match the canvas backing store to its CSS size times the pixel ratio,
/// capped at 2. Returns the new backing size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(MAX_PIXEL_RATIO);
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}

/// Section headings in document order.
pub fn query_headings(document: &web::Document) -> Vec<web::HtmlElement> {
    let Ok(list) = document.query_selector_all(HEADING_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn apply_heading_style(el: &web::HtmlElement, style: &HeadingStyle) {
    if *style == HeadingStyle::NEUTRAL {
        let _ = el.remove_attribute("style");
    } else {
        let _ = el.set_attribute("style", &style.to_css());
    }
}

/// Apply `?particles=N&seed=S` from the page URL. Unparseable values are
/// ignored with a warning.
pub fn apply_query_overrides(window: &web::Window, config: &mut ShowcaseConfig) {
    let Ok(search) = window.location().search() else {
        return;
    };
    let Ok(params) = web::UrlSearchParams::new_with_str(&search) else {
        return;
    };
    if let Some(raw) = params.get(QUERY_PARTICLES) {
        match raw.parse::<usize>() {
            Ok(n) => config.particles.count = n,
            Err(e) => log::warn!("[config] ignoring {QUERY_PARTICLES}={raw}: {e}"),
        }
    }
    if let Some(raw) = params.get(QUERY_SEED) {
        match raw.parse::<u64>() {
            Ok(s) => config.particles.seed = s,
            Err(e) => log::warn!("[config] ignoring {QUERY_SEED}={raw}: {e}"),
        }
    }
}

//! Input state written by event handlers and read once per frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Viewport size in CSS pixels. Both sides are kept at or above 1.0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: sanitize_extent(width),
            height: sanitize_extent(height),
        }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

impl Default for ViewportSize {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[inline]
fn sanitize_extent(v: f32) -> f32 {
    if v.is_finite() {
        v.max(1.0)
    } else {
        1.0
    }
}

/// Cursor position normalized to roughly `[-0.5, 0.5]` on both axes.
/// `y` grows downward like client coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorState {
    pub x: f32,
    pub y: f32,
}

impl CursorState {
    pub fn from_client(client_x: f32, client_y: f32, viewport: ViewportSize) -> Self {
        Self {
            x: normalize_axis(client_x, viewport.width),
            y: normalize_axis(client_y, viewport.height),
        }
    }
}

/// `client / extent - 0.5`. Non-finite client positions map to the center.
#[inline]
pub fn normalize_axis(client: f32, extent: f32) -> f32 {
    if !client.is_finite() {
        return 0.0;
    }
    client / sanitize_extent(extent) - 0.5
}

/// Messages posted by the resize/scroll/pointer notifiers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Resize { width: f32, height: f32 },
    Scroll { y: f32 },
    PointerMove { client_x: f32, client_y: f32 },
}

/// Single-threaded queue shared between event handlers and the frame loop.
///
/// Handlers hold clones and `post`; the frame loop drains it once per tick, so
/// every field still has exactly one writer at a time.
#[derive(Clone, Debug, Default)]
pub struct InputMailbox {
    queue: Rc<RefCell<VecDeque<InputEvent>>>,
}

impl InputMailbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn post(&self, event: InputEvent) {
        self.queue.borrow_mut().push_back(event);
    }

    pub fn len(&self) -> usize {
        self.queue.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Take every pending event in posting order.
    pub fn drain(&self) -> VecDeque<InputEvent> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }
}

/// Scroll offset for hosts without a scrolling document (the desktop build).
/// Clamped so the last section can be reached but not scrolled past.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VirtualScroll {
    y: f32,
}

impl VirtualScroll {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn max_for(viewport_height: f32, section_count: usize) -> f32 {
        viewport_height * section_count.saturating_sub(1) as f32
    }

    /// Move by `pixels` (positive scrolls down the page) and return the new
    /// offset.
    pub fn scroll_by(&mut self, pixels: f32, viewport_height: f32, section_count: usize) -> f32 {
        if pixels.is_finite() {
            let max = Self::max_for(viewport_height, section_count).max(0.0);
            self.y = (self.y + pixels).clamp(0.0, max);
        }
        self.y
    }

    /// Re-clamp after the viewport changed size.
    pub fn reclamp(&mut self, viewport_height: f32, section_count: usize) -> f32 {
        self.scroll_by(0.0, viewport_height, section_count)
    }
}

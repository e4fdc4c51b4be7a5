/// A one-shot section boundary crossing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionChange {
    pub from: i32,
    pub to: i32,
}

/// Tracks which full-viewport section the page is scrolled to.
///
/// Starts at section 0 and has no terminal state.
#[derive(Clone, Debug, Default)]
pub struct SectionTracker {
    current: i32,
}

impl SectionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn current(&self) -> i32 {
        self.current
    }

    /// Feed one scroll event. Returns the change when the rounded section
    /// index differs from the current one; jumps skip intermediate sections.
    pub fn observe(&mut self, scroll_y: f32, viewport_height: f32) -> Option<SectionChange> {
        let next = section_index(scroll_y, viewport_height)?;
        if next == self.current {
            return None;
        }
        let change = SectionChange {
            from: self.current,
            to: next,
        };
        self.current = next;
        Some(change)
    }
}

/// `round(scroll_y / viewport_height)` with halves rounded toward +infinity,
/// so `-0.5` maps to 0 rather than -1. `None` for non-finite input.
pub fn section_index(scroll_y: f32, viewport_height: f32) -> Option<i32> {
    if !scroll_y.is_finite() || !viewport_height.is_finite() || viewport_height <= 0.0 {
        return None;
    }
    let ratio = (scroll_y / viewport_height) as f64;
    let rounded = (ratio + 0.5).floor();
    if rounded > i32::MAX as f64 || rounded < i32::MIN as f64 {
        return None;
    }
    Some(rounded as i32)
}

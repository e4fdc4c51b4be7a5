use smallvec::SmallVec;

use crate::clock::Clock;
use crate::config::ShowcaseConfig;
use crate::controller::{MotionController, MotionInputs};
use crate::error::ConfigError;
use crate::input::{CursorState, InputEvent, InputMailbox, ViewportSize};
use crate::scene::SceneLayout;
use crate::section::{SectionChange, SectionTracker};
use crate::state::{Camera, FrameSnapshot, ObjectTransform};
use crate::tween::{HeadingStyle, HeadingTween, SpinTween};

/// Owns all per-page state and advances it once per frame.
///
/// Event handlers post into [`Showcase::mailbox`]; [`Showcase::tick`] drains
/// the queue, runs the motion controller and advances section transitions.
pub struct Showcase<C: Clock> {
    config: ShowcaseConfig,
    clock: C,
    clock_origin: f64,
    mailbox: InputMailbox,
    layout: SceneLayout,
    viewport: ViewportSize,
    scroll_y: f32,
    cursor: CursorState,
    sections: SectionTracker,
    controller: MotionController,
    spins: SmallVec<[SpinTween; 4]>,
    headings: SmallVec<[HeadingTween; 4]>,
    // Started since the last tick; they join the active lists after it
    // advances, so their first frame starts at zero.
    pending_spins: SmallVec<[SpinTween; 2]>,
    pending_headings: SmallVec<[HeadingTween; 2]>,
    heading_count: usize,
}

impl<C: Clock> Showcase<C> {
    pub fn new(config: ShowcaseConfig, clock: C, viewport: ViewportSize) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = SceneLayout::new(&config.motion);
        if layout.is_empty() {
            return Err(ConfigError::NoObjects);
        }
        let controller = MotionController::new(config.motion.clone(), layout.len());
        let heading_count = layout.len();
        Ok(Self {
            config,
            clock_origin: clock.elapsed_secs(),
            clock,
            mailbox: InputMailbox::new(),
            layout,
            viewport,
            scroll_y: 0.0,
            cursor: CursorState::default(),
            sections: SectionTracker::new(),
            controller,
            spins: SmallVec::new(),
            headings: SmallVec::new(),
            pending_spins: SmallVec::new(),
            pending_headings: SmallVec::new(),
            heading_count,
        })
    }

    /// Handle for event handlers to post into.
    pub fn mailbox(&self) -> InputMailbox {
        self.mailbox.clone()
    }

    /// Number of heading elements on the page; transitions for sections past
    /// this count only spin their object.
    pub fn set_heading_count(&mut self, count: usize) {
        self.heading_count = count;
    }

    /// Restart time at zero. Call right before the first frame so start-up
    /// work does not show up as one long delta.
    pub fn start_clock(&mut self) {
        self.clock_origin = self.clock.elapsed_secs();
    }

    /// Scroll offset present at load. Does not trigger a transition.
    pub fn set_initial_scroll(&mut self, scroll_y: f32) {
        if scroll_y.is_finite() {
            self.scroll_y = scroll_y;
        }
    }

    pub fn config(&self) -> &ShowcaseConfig {
        &self.config
    }

    pub fn layout(&self) -> &SceneLayout {
        &self.layout
    }

    pub fn cursor(&self) -> CursorState {
        self.cursor
    }

    pub fn current_section(&self) -> i32 {
        self.sections.current()
    }

    pub fn controller(&self) -> &MotionController {
        &self.controller
    }

    /// Apply one input event right away.
    pub fn apply(&mut self, event: InputEvent) -> Option<SectionChange> {
        match event {
            InputEvent::Resize { width, height } => {
                self.viewport = ViewportSize::new(width, height);
                None
            }
            InputEvent::Scroll { y } => {
                if !y.is_finite() {
                    return None;
                }
                self.scroll_y = y;
                let change = self.sections.observe(y, self.viewport.height)?;
                self.begin_transition(change);
                Some(change)
            }
            InputEvent::PointerMove { client_x, client_y } => {
                self.cursor = CursorState::from_client(client_x, client_y, self.viewport);
                None
            }
        }
    }

    fn begin_transition(&mut self, change: SectionChange) {
        log::info!("[section] {} -> {}", change.from, change.to);
        let Ok(index) = usize::try_from(change.to) else {
            log::debug!("[section] no object for section {}", change.to);
            return;
        };
        let t = &self.config.transitions;
        if index < self.layout.len() {
            self.pending_spins
                .push(SpinTween::new(index, t.spin_radians, t.spin_duration_sec));
        } else {
            log::debug!("[section] no object for section {index}");
        }
        if index < self.heading_count {
            self.pending_headings.retain(|h| h.heading != index);
            self.pending_headings
                .push(HeadingTween::new(index, t.heading_duration_sec));
        }
    }

    /// Run one frame: drain input, update motion, advance transitions.
    pub fn tick(&mut self) -> FrameSnapshot {
        let mut section_changes = SmallVec::new();
        for event in self.mailbox.drain() {
            if let Some(change) = self.apply(event) {
                section_changes.push(change);
            }
        }

        let inputs = MotionInputs {
            scroll_y: self.scroll_y,
            cursor: self.cursor,
            viewport_height: self.viewport.height,
        };
        let elapsed = self.clock.elapsed_secs() - self.clock_origin;
        let delta = self.controller.update(elapsed, &inputs);

        let step = delta.unwrap_or(0.0);
        for spin in self.spins.iter_mut() {
            let extra = spin.advance(step);
            self.controller.add_rotation(spin.object, extra);
        }
        self.spins.retain(|s| !s.is_finished());
        self.spins.extend(self.pending_spins.drain(..));

        let mut headings: SmallVec<[(usize, HeadingStyle); 4]> = SmallVec::new();
        for heading in self.headings.iter_mut() {
            heading.advance(step);
            headings.push((heading.heading, heading.style()));
        }
        self.headings.retain(|h| !h.is_finished());
        // A restarted heading replaces both its running tween and the style
        // that tween produced this frame.
        for fresh in self.pending_headings.drain(..) {
            self.headings.retain(|h| h.heading != fresh.heading);
            headings.retain(|(index, _)| *index != fresh.heading);
            headings.push((fresh.heading, fresh.style()));
            self.headings.push(fresh);
        }

        FrameSnapshot {
            camera: self.camera(),
            objects: self.object_transforms(),
            headings,
            section_changes,
            delta,
        }
    }

    pub fn camera(&self) -> Camera {
        let state = self.controller.state();
        Camera::from_rig(
            &self.config.camera,
            state.rig,
            state.camera_y,
            self.viewport.aspect(),
        )
    }

    pub fn object_transforms(&self) -> SmallVec<[ObjectTransform; 4]> {
        let rotations = &self.controller.state().rotations;
        self.layout
            .objects
            .iter()
            .zip(rotations.iter())
            .map(|(obj, rot)| ObjectTransform {
                position: obj.position,
                rotation_y: *rot,
                scale: obj.scale,
            })
            .collect()
    }
}

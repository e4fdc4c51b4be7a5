//! Per-frame camera motion.
//!
//! The camera rig gets a parallax offset that eases toward a cursor-derived
//! target; the camera inside the rig follows scroll position directly; every
//! tracked object spins at a constant rate. [`step`] is pure so it can be
//! driven with any delta sequence in tests.

use glam::Vec2;
use smallvec::SmallVec;

use crate::config::MotionParams;
use crate::input::CursorState;

/// Inline capacity for per-object state; the showcase tracks three objects.
pub type ObjectRotations = SmallVec<[f32; 4]>;

/// Frame inputs as last written by the event handlers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MotionInputs {
    pub scroll_y: f32,
    pub cursor: CursorState,
    pub viewport_height: f32,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct MotionState {
    /// Camera Y inside the rig, derived from scroll.
    pub camera_y: f32,
    /// Rig parallax offset (x, y).
    pub rig: Vec2,
    /// Accumulated Y rotation of each tracked object, in radians.
    pub rotations: ObjectRotations,
}

impl MotionState {
    pub fn with_objects(count: usize) -> Self {
        Self {
            camera_y: 0.0,
            rig: Vec2::ZERO,
            rotations: SmallVec::from_elem(0.0, count),
        }
    }
}

#[inline]
pub fn camera_y(scroll_y: f32, viewport_height: f32, object_spacing: f32) -> f32 {
    (-scroll_y / viewport_height) * object_spacing
}

#[inline]
pub fn parallax_target(cursor: CursorState, amplitude: f32) -> Vec2 {
    Vec2::new(cursor.x * amplitude, -cursor.y * amplitude)
}

/// One explicit-Euler step of first-order smoothing. The blend factor is
/// capped at 1 so a long frame lands on the target instead of overshooting.
#[inline]
pub fn smooth_toward(current: Vec2, target: Vec2, rate: f32, delta: f32) -> Vec2 {
    let alpha = (rate * delta).clamp(0.0, 1.0);
    current + (target - current) * alpha
}

/// A delta the controller will integrate: finite and not negative.
#[inline]
pub fn is_usable_delta(delta: f32) -> bool {
    delta.is_finite() && delta >= 0.0
}

/// Advance the motion state by `delta` seconds.
///
/// `camera_y` is always recomputed. The rig and rotations are left untouched
/// when `delta` is not usable.
pub fn step(
    state: &MotionState,
    inputs: &MotionInputs,
    params: &MotionParams,
    delta: f32,
) -> MotionState {
    let mut next = state.clone();
    let cam_y = camera_y(inputs.scroll_y, inputs.viewport_height, params.object_spacing);
    if cam_y.is_finite() {
        next.camera_y = cam_y;
    }
    if !is_usable_delta(delta) {
        return next;
    }

    let target = parallax_target(inputs.cursor, params.parallax_amplitude);
    let rig = smooth_toward(state.rig, target, params.smoothing_rate, delta);
    if rig.is_finite() {
        next.rig = rig;
    }

    let spin = delta * params.spin_rate;
    for r in next.rotations.iter_mut() {
        *r += spin;
    }
    next
}

/// Owns the previous elapsed time and turns clock readings into deltas.
#[derive(Clone, Debug)]
pub struct MotionController {
    params: MotionParams,
    state: MotionState,
    previous_elapsed: f64,
}

impl MotionController {
    pub fn new(params: MotionParams, object_count: usize) -> Self {
        Self {
            params,
            state: MotionState::with_objects(object_count),
            previous_elapsed: 0.0,
        }
    }

    #[inline]
    pub fn state(&self) -> &MotionState {
        &self.state
    }

    /// Run one frame at `elapsed` seconds since start. Returns the delta that
    /// was applied, or `None` when the frame was skipped.
    pub fn update(&mut self, elapsed: f64, inputs: &MotionInputs) -> Option<f32> {
        let delta = (elapsed - self.previous_elapsed) as f32;
        // A non-finite reading must not poison the next delta.
        if elapsed.is_finite() {
            self.previous_elapsed = elapsed;
        }
        self.state = step(&self.state, inputs, &self.params, delta);
        if is_usable_delta(delta) {
            Some(delta)
        } else {
            log::debug!("[motion] skipped frame with delta {delta}");
            None
        }
    }

    /// Add an extra rotation to one object (section transition spin).
    pub fn add_rotation(&mut self, index: usize, radians: f32) {
        if !radians.is_finite() {
            return;
        }
        if let Some(r) = self.state.rotations.get_mut(index) {
            *r += radians;
        }
    }
}

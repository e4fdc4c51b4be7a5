// Host-side tests for the per-frame motion controller.

use glam::Vec2;
use showcase_core::*;

fn inputs(scroll_y: f32, cursor: CursorState, viewport_height: f32) -> MotionInputs {
    MotionInputs {
        scroll_y,
        cursor,
        viewport_height,
    }
}

#[test]
fn camera_y_follows_scroll_in_section_units() {
    assert_eq!(camera_y(0.0, 800.0, 4.0), 0.0);
    assert!((camera_y(800.0, 800.0, 4.0) + 4.0).abs() < 1e-6);
    assert!((camera_y(1600.0, 800.0, 4.0) + 8.0).abs() < 1e-6);
    assert!((camera_y(400.0, 800.0, 4.0) + 2.0).abs() < 1e-6);
}

#[test]
fn parallax_target_flips_vertical_axis() {
    let t = parallax_target(CursorState { x: 0.5, y: 0.5 }, 0.5);
    assert!((t.x - 0.25).abs() < 1e-6);
    assert!((t.y + 0.25).abs() < 1e-6);
}

#[test]
fn smoothing_converges_to_target() {
    let params = MotionParams::default();
    let cursor = CursorState { x: 0.5, y: -0.5 };
    let target = parallax_target(cursor, params.parallax_amplitude);
    let mut state = MotionState::with_objects(3);
    for _ in 0..600 {
        state = step(&state, &inputs(0.0, cursor, 800.0), &params, 1.0 / 60.0);
    }
    assert!((state.rig - target).length() < 1e-3);
}

#[test]
fn smoothing_never_overshoots_on_long_frames() {
    let target = Vec2::new(0.25, -0.25);
    let next = smooth_toward(Vec2::ZERO, target, 5.0, 10.0);
    assert_eq!(next, target);
}

#[test]
fn single_step_moves_rate_times_delta_of_the_gap() {
    let next = smooth_toward(Vec2::ZERO, Vec2::new(1.0, 0.0), 5.0, 0.1);
    assert!((next.x - 0.5).abs() < 1e-6);
    assert_eq!(next.y, 0.0);
}

#[test]
fn rotation_is_split_independent() {
    let params = MotionParams::default();
    let i = inputs(0.0, CursorState::default(), 800.0);
    let mut one = MotionState::with_objects(3);
    one = step(&one, &i, &params, 1.0);
    let mut many = MotionState::with_objects(3);
    for _ in 0..10 {
        many = step(&many, &i, &params, 0.1);
    }
    for (a, b) in one.rotations.iter().zip(many.rotations.iter()) {
        assert!((a - params.spin_rate).abs() < 1e-6);
        assert!((a - b).abs() < 1e-5);
    }
}

#[test]
fn unusable_delta_only_updates_camera_y() {
    let params = MotionParams::default();
    let start = MotionState::with_objects(3);
    let i = inputs(800.0, CursorState { x: 0.5, y: 0.5 }, 800.0);
    for delta in [f32::NAN, f32::INFINITY, -0.5] {
        let next = step(&start, &i, &params, delta);
        assert!((next.camera_y + 4.0).abs() < 1e-6);
        assert_eq!(next.rig, Vec2::ZERO);
        assert!(next.rotations.iter().all(|r| *r == 0.0));
    }
}

#[test]
fn zero_delta_is_a_no_op_for_rig_and_rotations() {
    let params = MotionParams::default();
    let start = MotionState::with_objects(2);
    let next = step(
        &start,
        &inputs(0.0, CursorState { x: 0.4, y: 0.1 }, 800.0),
        &params,
        0.0,
    );
    assert_eq!(next.rig, Vec2::ZERO);
    assert!(next.rotations.iter().all(|r| *r == 0.0));
}

#[test]
fn controller_derives_delta_from_elapsed() {
    let mut c = MotionController::new(MotionParams::default(), 3);
    let i = inputs(0.0, CursorState::default(), 800.0);
    let d = c.update(0.5, &i);
    assert_eq!(d, Some(0.5));
    let d = c.update(0.75, &i);
    assert_eq!(d, Some(0.25));
    let expected = 0.75 * OBJECT_SPIN_RATE;
    assert!((c.state().rotations[0] - expected).abs() < 1e-6);
}

#[test]
fn controller_skips_backwards_and_non_finite_time() {
    let mut c = MotionController::new(MotionParams::default(), 3);
    let i = inputs(0.0, CursorState::default(), 800.0);
    assert!(c.update(1.0, &i).is_some());
    assert_eq!(c.update(f64::NAN, &i), None);
    // NaN did not replace the previous reading.
    assert_eq!(c.update(1.5, &i), Some(0.5));
    assert_eq!(c.update(1.0, &i), None);
}

#[test]
fn add_rotation_targets_one_object() {
    let mut c = MotionController::new(MotionParams::default(), 3);
    c.add_rotation(1, 2.0);
    c.add_rotation(7, 2.0);
    c.add_rotation(0, f32::NAN);
    assert_eq!(c.state().rotations.as_slice(), &[0.0, 2.0, 0.0]);
}

#[test]
fn every_positive_step_shrinks_the_gap() {
    let target = Vec2::new(0.25, -0.1);
    let mut rig = Vec2::new(-0.3, 0.4);
    for delta in [0.001, 0.016, 0.05, 0.1] {
        let next = smooth_toward(rig, target, 5.0, delta);
        assert!((next - target).length() < (rig - target).length());
        rig = next;
    }
}

// Host-side tests for the frame loop driven by a hand-set clock.

use std::cell::RefCell;
use std::rc::Rc;

use showcase_core::*;

fn showcase() -> (Showcase<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let s = Showcase::new(
        ShowcaseConfig::default(),
        clock.clone(),
        ViewportSize::new(800.0, 800.0),
    )
    .expect("default config is valid");
    (s, clock)
}

#[test]
fn invalid_config_is_rejected() {
    let mut cfg = ShowcaseConfig::default();
    cfg.transitions.spin_duration_sec = 0.0;
    let result = Showcase::new(cfg, ManualClock::new(), ViewportSize::default());
    assert!(result.is_err());
}

#[test]
fn idle_frames_only_spin() {
    let (mut s, clock) = showcase();
    clock.set(0.5);
    let frame = s.tick();
    assert_eq!(frame.delta, Some(0.5));
    assert!(frame.section_changes.is_empty());
    assert!(frame.headings.is_empty());
    assert_eq!(frame.objects.len(), 3);
    for obj in &frame.objects {
        assert!((obj.rotation_y - 0.5 * OBJECT_SPIN_RATE).abs() < 1e-6);
    }
    assert_eq!(frame.camera.eye.y, 0.0);
}

#[test]
fn scrolling_a_section_starts_both_transitions() {
    let (mut s, clock) = showcase();
    s.mailbox().post(InputEvent::Scroll { y: 800.0 });
    clock.set(0.25);
    let frame = s.tick();
    assert_eq!(
        frame.section_changes.as_slice(),
        &[SectionChange { from: 0, to: 1 }]
    );
    assert_eq!(s.current_section(), 1);
    assert!((frame.camera.eye.y + 4.0).abs() < 1e-6);
    assert_eq!(
        frame.headings.as_slice(),
        &[(1, HeadingStyle::entrance_for_section(1))]
    );

    clock.set(0.5);
    let frame = s.tick();
    assert!(frame.headings[0].1.scale < HEADING_FROM_SCALE);
    assert!(frame.objects[1].rotation_y > frame.objects[0].rotation_y);
}

#[test]
fn new_spin_starts_from_zero_on_a_long_frame() {
    let (mut s, clock) = showcase();
    s.mailbox().post(InputEvent::Scroll { y: 800.0 });
    clock.set(1.0);
    let frame = s.tick();
    assert_eq!(frame.delta, Some(1.0));
    assert_eq!(frame.objects[1].rotation_y, frame.objects[0].rotation_y);

    clock.set(1.75);
    s.tick();
    let rotations = &s.controller().state().rotations;
    let extra = rotations[1] - rotations[0];
    // Halfway through a 1.5 s in-out spin.
    assert!((extra - SECTION_SPIN_RADIANS / 2.0).abs() < 1e-4);
}

#[test]
fn retrigger_within_a_frame_keeps_one_heading() {
    let (mut s, clock) = showcase();
    let mailbox = s.mailbox();
    mailbox.post(InputEvent::Scroll { y: 800.0 });
    clock.set(0.25);
    s.tick();
    mailbox.post(InputEvent::Scroll { y: 0.0 });
    mailbox.post(InputEvent::Scroll { y: 800.0 });
    clock.set(0.5);
    let frame = s.tick();
    let for_one: Vec<_> = frame.headings.iter().filter(|(i, _)| *i == 1).collect();
    assert_eq!(for_one.len(), 1);
    assert_eq!(for_one[0].1, HeadingStyle::entrance_for_section(1));
}

#[test]
fn transitions_run_to_completion() {
    let (mut s, clock) = showcase();
    s.mailbox().post(InputEvent::Scroll { y: 800.0 });
    let mut heading_frames = Vec::new();
    for frame_index in 1..=9 {
        clock.set(0.25 * frame_index as f64);
        let frame = s.tick();
        heading_frames.push(frame.headings.clone());
    }
    // Entrance pose first, then 1s of easing: the fifth frame is neutral.
    assert!(heading_frames[..5].iter().all(|h| h.len() == 1));
    assert_eq!(heading_frames[4][0].1, HeadingStyle::NEUTRAL);
    assert!(heading_frames[5..].iter().all(|h| h.is_empty()));

    let rotations = &s.controller().state().rotations;
    assert!((rotations[1] - rotations[0] - SECTION_SPIN_RADIANS).abs() < 1e-4);
    assert!((rotations[2] - rotations[0]).abs() < 1e-6);
}

#[test]
fn sections_past_the_headings_only_spin() {
    let (mut s, clock) = showcase();
    s.set_heading_count(1);
    s.mailbox().post(InputEvent::Scroll { y: 800.0 });
    clock.set(0.25);
    let frame = s.tick();
    assert_eq!(frame.section_changes.len(), 1);
    assert!(frame.headings.is_empty());
    clock.set(0.5);
    let frame = s.tick();
    assert!(frame.headings.is_empty());
    assert!(frame.objects[1].rotation_y > frame.objects[0].rotation_y);
}

#[test]
fn sections_without_objects_are_tolerated() {
    let (mut s, clock) = showcase();
    s.mailbox().post(InputEvent::Scroll { y: 8000.0 });
    clock.set(0.25);
    let frame = s.tick();
    assert_eq!(
        frame.section_changes.as_slice(),
        &[SectionChange { from: 0, to: 10 }]
    );
    assert!(frame.headings.is_empty());
    let first = frame.objects[0].rotation_y;
    assert!(frame.objects.iter().all(|o| o.rotation_y == first));
}

#[test]
fn initial_scroll_moves_camera_without_transition() {
    let (mut s, clock) = showcase();
    s.set_initial_scroll(1600.0);
    clock.set(0.1);
    let frame = s.tick();
    assert!(frame.section_changes.is_empty());
    assert!((frame.camera.eye.y + 8.0).abs() < 1e-5);
}

#[test]
fn start_clock_discards_setup_time() {
    let (mut s, clock) = showcase();
    clock.set(5.0);
    s.start_clock();
    clock.set(5.25);
    let frame = s.tick();
    assert_eq!(frame.delta, Some(0.25));
    for obj in &frame.objects {
        assert!((obj.rotation_y - 0.25 * OBJECT_SPIN_RATE).abs() < 1e-6);
    }
}

#[test]
fn pointer_moves_pull_the_rig() {
    let (mut s, clock) = showcase();
    s.mailbox().post(InputEvent::PointerMove {
        client_x: 800.0,
        client_y: 0.0,
    });
    for i in 1..=120 {
        clock.set(i as f64 / 60.0);
        s.tick();
    }
    let eye = s.camera().eye;
    assert!((eye.x - 0.25).abs() < 1e-3);
    assert!((eye.y - 0.25).abs() < 1e-3);
}

#[test]
fn resize_changes_aspect_and_cursor_scale() {
    let (mut s, clock) = showcase();
    let mailbox = s.mailbox();
    mailbox.post(InputEvent::Resize {
        width: 1600.0,
        height: 800.0,
    });
    mailbox.post(InputEvent::PointerMove {
        client_x: 1600.0,
        client_y: 400.0,
    });
    clock.set(0.1);
    let frame = s.tick();
    assert_eq!(frame.camera.aspect, 2.0);
    assert_eq!(s.cursor(), CursorState { x: 0.5, y: 0.0 });
}

#[test]
fn clock_going_backwards_skips_the_frame() {
    let (mut s, clock) = showcase();
    clock.set(1.0);
    s.tick();
    let before = s.controller().state().rotations.clone();
    clock.set(0.5);
    let frame = s.tick();
    assert_eq!(frame.delta, None);
    assert_eq!(s.controller().state().rotations, before);
}

#[test]
fn scheduler_drives_ticks_until_stopped() {
    let (s, clock) = showcase();
    let shared = Rc::new(RefCell::new(s));
    let frames = Rc::new(RefCell::new(0usize));
    let (tick_showcase, tick_frames) = (shared.clone(), frames.clone());
    SyncScheduler::new(10).run(move || {
        clock.advance(1.0 / 60.0);
        tick_showcase.borrow_mut().tick();
        *tick_frames.borrow_mut() += 1;
        if *tick_frames.borrow() == 3 {
            LoopControl::Stop
        } else {
            LoopControl::Continue
        }
    });
    assert_eq!(*frames.borrow(), 3);
    let expected = 3.0 / 60.0 * OBJECT_SPIN_RATE;
    let rotation = shared.borrow().controller().state().rotations[0];
    assert!((rotation - expected).abs() < 1e-5);
}

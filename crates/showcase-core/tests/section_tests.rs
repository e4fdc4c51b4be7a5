// Host-side tests for section boundary detection.

use showcase_core::*;

#[test]
fn starts_at_section_zero() {
    let t = SectionTracker::new();
    assert_eq!(t.current(), 0);
}

#[test]
fn small_scrolls_do_not_change_section() {
    let mut t = SectionTracker::new();
    assert_eq!(t.observe(100.0, 800.0), None);
    assert_eq!(t.observe(399.0, 800.0), None);
}

#[test]
fn crossing_half_viewport_changes_section() {
    let mut t = SectionTracker::new();
    assert_eq!(
        t.observe(400.0, 800.0),
        Some(SectionChange { from: 0, to: 1 })
    );
    assert_eq!(t.current(), 1);
    assert_eq!(t.observe(500.0, 800.0), None);
}

#[test]
fn jumps_skip_intermediate_sections() {
    let mut t = SectionTracker::new();
    assert_eq!(
        t.observe(1600.0, 800.0),
        Some(SectionChange { from: 0, to: 2 })
    );
}

#[test]
fn recrossing_fires_again() {
    let mut t = SectionTracker::new();
    assert!(t.observe(800.0, 800.0).is_some());
    assert_eq!(
        t.observe(0.0, 800.0),
        Some(SectionChange { from: 1, to: 0 })
    );
    assert_eq!(
        t.observe(800.0, 800.0),
        Some(SectionChange { from: 0, to: 1 })
    );
}

#[test]
fn halves_round_up() {
    assert_eq!(section_index(400.0, 800.0), Some(1));
    assert_eq!(section_index(1200.0, 800.0), Some(2));
    assert_eq!(section_index(-400.0, 800.0), Some(0));
    assert_eq!(section_index(-401.0, 800.0), Some(-1));
}

#[test]
fn non_finite_input_is_ignored() {
    assert_eq!(section_index(f32::NAN, 800.0), None);
    assert_eq!(section_index(100.0, f32::INFINITY), None);
    assert_eq!(section_index(100.0, 0.0), None);
    let mut t = SectionTracker::new();
    assert_eq!(t.observe(f32::NAN, 800.0), None);
    assert_eq!(t.current(), 0);
}

#[test]
fn one_and_a_half_viewports_lands_on_section_two() {
    let mut t = SectionTracker::new();
    assert_eq!(
        t.observe(1200.0, 800.0),
        Some(SectionChange { from: 0, to: 2 })
    );
}

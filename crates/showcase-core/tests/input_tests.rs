// Host-side tests for pure input functions.

use showcase_core::*;

#[test]
fn cursor_is_centered_on_viewport() {
    let vp = ViewportSize::new(800.0, 600.0);
    let c = CursorState::from_client(400.0, 300.0, vp);
    assert_eq!(c, CursorState { x: 0.0, y: 0.0 });
    let c = CursorState::from_client(0.0, 600.0, vp);
    assert!((c.x + 0.5).abs() < 1e-6);
    assert!((c.y - 0.5).abs() < 1e-6);
}

#[test]
fn non_finite_client_maps_to_center() {
    assert_eq!(normalize_axis(f32::NAN, 800.0), 0.0);
    assert_eq!(normalize_axis(f32::INFINITY, 800.0), 0.0);
}

#[test]
fn viewport_sides_are_at_least_one() {
    let vp = ViewportSize::new(0.0, f32::NAN);
    assert_eq!(vp.width, 1.0);
    assert_eq!(vp.height, 1.0);
    assert!(vp.aspect().is_finite());
    assert!(normalize_axis(10.0, 0.0).is_finite());
}

#[test]
fn mailbox_preserves_posting_order() {
    let mailbox = InputMailbox::new();
    let handle = mailbox.clone();
    handle.post(InputEvent::Scroll { y: 1.0 });
    handle.post(InputEvent::PointerMove {
        client_x: 2.0,
        client_y: 3.0,
    });
    handle.post(InputEvent::Resize {
        width: 4.0,
        height: 5.0,
    });
    assert_eq!(mailbox.len(), 3);
    let drained: Vec<_> = mailbox.drain().into_iter().collect();
    assert_eq!(
        drained,
        vec![
            InputEvent::Scroll { y: 1.0 },
            InputEvent::PointerMove {
                client_x: 2.0,
                client_y: 3.0
            },
            InputEvent::Resize {
                width: 4.0,
                height: 5.0
            },
        ]
    );
    assert!(mailbox.is_empty());
}

#[test]
fn virtual_scroll_clamps_to_last_section() {
    let mut s = VirtualScroll::new();
    assert_eq!(s.scroll_by(-100.0, 800.0, 3), 0.0);
    assert_eq!(s.scroll_by(1000.0, 800.0, 3), 1000.0);
    assert_eq!(s.scroll_by(5000.0, 800.0, 3), 1600.0);
    assert_eq!(s.scroll_by(f32::NAN, 800.0, 3), 1600.0);
    assert_eq!(s.y(), 1600.0);
}

#[test]
fn virtual_scroll_reclamps_after_shrink() {
    let mut s = VirtualScroll::new();
    s.scroll_by(1600.0, 800.0, 3);
    assert_eq!(s.reclamp(400.0, 3), 800.0);
    assert_eq!(VirtualScroll::max_for(400.0, 0), 0.0);
}

// Cursor tracker: last write wins, leave clears both flags.

use folio_core::*;
use glam::Vec2;

#[test]
fn move_overwrites_position_and_activates() {
    let mut c = CursorTracker::new();
    assert_eq!(c.phase(), TrackingPhase::Idle);

    c.pointer_moved(Vec2::new(10.0, 20.0));
    c.pointer_moved(Vec2::new(300.5, 42.0));

    let s = c.state();
    assert_eq!(s.position, Vec2::new(300.5, 42.0));
    assert!(s.active);
    assert!(c.phase().is_tracking());
}

#[test]
fn leave_deactivates_regardless_of_prior_moves() {
    let mut c = CursorTracker::new();
    for i in 0..50 {
        c.pointer_moved(Vec2::new(i as f32, (i * 2) as f32));
    }
    c.hover_entered();
    c.pointer_left();

    let s = c.state();
    assert!(!s.active);
    assert!(!s.emphasized);
    // Position is kept so the cursor fades out where it was
    assert_eq!(s.position, Vec2::new(49.0, 98.0));
    assert_eq!(c.phase(), TrackingPhase::Idle);
}

#[test]
fn hover_toggles_emphasis_independently_of_active() {
    let mut c = CursorTracker::new();

    // Emphasis can be set before the first move
    c.hover_entered();
    assert!(c.state().emphasized);
    assert!(!c.state().active);

    c.pointer_moved(Vec2::new(5.0, 5.0));
    c.hover_exited();
    assert!(!c.state().emphasized);
    assert!(c.state().active);
}

#[test]
fn move_after_leave_reactivates_without_emphasis() {
    let mut c = CursorTracker::new();
    c.pointer_moved(Vec2::new(1.0, 1.0));
    c.hover_entered();
    c.pointer_left();
    c.pointer_moved(Vec2::new(2.0, 3.0));

    let s = c.state();
    assert!(s.active);
    assert!(!s.emphasized);
}

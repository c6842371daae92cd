// Presentation layer driven by synthetic events, as the web front-end does.

use folio_core::*;
use glam::Vec2;

const VIEWPORT: Viewport = Viewport {
    width: 1920.0,
    height: 1080.0,
};

fn hero() -> Bounds {
    Bounds::new(0.0, 0.0, 320.0, 569.0)
}

fn layer_with(source: &dyn MotionSource) -> PresentationLayer {
    let mut layer = PresentationLayer::new(&InteractionConfig::default(), source);
    layer.mount(ScrollMetrics::new(0.0, 2000.0, 1000.0));
    layer.apply(InputEvent::HeroBound);
    layer
}

fn move_to(layer: &mut PresentationLayer, x: f32, y: f32) {
    let position = Vec2::new(x, y);
    layer.apply(InputEvent::PointerMoved {
        position,
        viewport: VIEWPORT,
    });
    layer.apply(InputEvent::HeroMoved {
        position,
        bounds: hero(),
    });
}

#[test]
fn initial_snapshot() {
    let layer = layer_with(&NoMotionPreference);
    let s = layer.snapshot();
    assert!(!s.pointer.active);
    assert_eq!(s.scroll_progress, 0.0);
    assert_eq!(s.spotlight, SpotlightPosition::new(50.0, 25.0));
    assert!(s.tilt.is_neutral());
    assert!(!s.reduced_motion);
}

#[test]
fn mount_reads_current_scroll() {
    let mut layer = PresentationLayer::new(&InteractionConfig::default(), &NoMotionPreference);
    layer.mount(ScrollMetrics::new(500.0, 2000.0, 1000.0));
    assert!((layer.snapshot().scroll_progress - 0.5).abs() < 1e-6);
}

#[test]
fn pointer_drives_cursor_spotlight_and_tilt() {
    let mut layer = layer_with(&NoMotionPreference);
    move_to(&mut layer, 320.0, 0.0);

    let s = layer.snapshot();
    assert_eq!(s.pointer.position, Vec2::new(320.0, 0.0));
    assert!(s.pointer.active);
    assert!((s.spotlight.x - 320.0 / 1920.0 * 100.0).abs() < 1e-4);
    assert_eq!(s.spotlight.y, 0.0);
    assert!((s.tilt.rx - 5.0).abs() < 1e-6);
    assert!((s.tilt.ry - 5.0).abs() < 1e-6);
}

#[test]
fn reduced_motion_gates_only_spotlight_and_tilt() {
    let source = ManualMotion::new(false);
    let mut layer = layer_with(&source);
    move_to(&mut layer, 960.0, 270.0);
    let before = layer.snapshot();

    source.set(true);
    assert!(layer.reduced_motion());
    move_to(&mut layer, 100.0, 500.0);
    layer.apply(InputEvent::Scrolled(ScrollMetrics::new(1000.0, 2000.0, 1000.0)));

    let after = layer.snapshot();
    assert!(after.reduced_motion);
    assert_eq!(after.spotlight, before.spotlight);
    assert_eq!(after.tilt, before.tilt);
    // Cursor and scroll keep updating
    assert_eq!(after.pointer.position, Vec2::new(100.0, 500.0));
    assert_eq!(after.scroll_progress, 1.0);
}

#[test]
fn re_enabling_motion_resumes_from_frozen_spotlight() {
    let source = ManualMotion::new(true);
    let mut layer = layer_with(&source);
    move_to(&mut layer, 0.0, 0.0);
    assert_eq!(layer.snapshot().spotlight, SpotlightPosition::new(50.0, 25.0));

    source.set(false);
    move_to(&mut layer, 1920.0, 1080.0);
    assert_eq!(layer.snapshot().spotlight, SpotlightPosition::new(100.0, 100.0));
}

#[test]
fn hero_leave_resets_within_one_dispatch() {
    let mut layer = layer_with(&NoMotionPreference);
    move_to(&mut layer, 12.0, 400.0);
    assert!(!layer.snapshot().tilt.is_neutral());

    layer.apply(InputEvent::HeroLeft);
    assert!(layer.snapshot().tilt.is_neutral());
    assert_eq!(layer.tilt().phase(), TrackingPhase::Idle);
}

#[test]
fn viewport_leave_keeps_spotlight_and_clears_cursor() {
    let mut layer = layer_with(&NoMotionPreference);
    move_to(&mut layer, 480.0, 540.0);
    layer.apply(InputEvent::HoverEntered);
    layer.apply(InputEvent::PointerLeft);

    let s = layer.snapshot();
    assert!(!s.pointer.active);
    assert!(!s.pointer.emphasized);
    assert_eq!(s.spotlight, SpotlightPosition::new(25.0, 50.0));
    assert_eq!(layer.spotlight().phase(), TrackingPhase::Idle);
}

#[test]
fn hover_hooks_toggle_emphasis() {
    let mut layer = layer_with(&NoMotionPreference);
    layer.apply(InputEvent::HoverEntered);
    assert!(layer.snapshot().pointer.emphasized);
    layer.apply(InputEvent::HoverExited);
    assert!(!layer.snapshot().pointer.emphasized);
}

#[test]
fn page_without_hero_is_inert() {
    let mut layer = PresentationLayer::new(&InteractionConfig::default(), &NoMotionPreference);
    move_to(&mut layer, 0.0, 0.0);
    assert!(layer.snapshot().tilt.is_neutral());
    assert!(!layer.tilt().is_bound());
}

#[test]
fn configured_tilt_params_reach_the_tracker() {
    let config = InteractionConfig {
        tilt: TiltParams {
            gain_deg: 20.0,
            limit_deg: 10.0,
        },
        ..InteractionConfig::default()
    };
    let mut layer = PresentationLayer::new(&config, &NoMotionPreference);
    layer.apply(InputEvent::HeroBound);
    move_to(&mut layer, 320.0, 0.0);
    assert_eq!(layer.snapshot().tilt, TiltAngles { rx: 10.0, ry: 10.0 });
}

#[test]
fn unmount_releases_motion_and_idles_trackers() {
    let source = ManualMotion::new(false);
    let mut layer = layer_with(&source);
    move_to(&mut layer, 300.0, 300.0);
    assert_eq!(source.subscriber_count(), 1);

    layer.unmount();
    assert!(layer.snapshot().tilt.is_neutral());
    assert!(!layer.snapshot().pointer.active);
    assert_eq!(layer.scroll().phase(), TrackingPhase::Idle);

    drop(layer);
    assert_eq!(source.subscriber_count(), 0);
}

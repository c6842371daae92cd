// Host-side tests for the CSS values written by the render step.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod style {
    include!("../src/style.rs");
}

use folio_core::*;
use glam::Vec2;
use style::*;

#[test]
fn cursor_ring_grows_when_emphasized() {
    let mut pointer = PointerState {
        position: Vec2::new(10.0, 10.0),
        active: true,
        emphasized: false,
    };
    assert_eq!(cursor_ring_diameter(&pointer), 34.0);
    pointer.emphasized = true;
    assert_eq!(cursor_ring_diameter(&pointer), 56.0);
    assert_eq!(px(cursor_ring_diameter(&pointer)), "56px");
}

#[test]
fn cursor_layer_visible_only_while_active() {
    assert_eq!(opacity(true), "1");
    assert_eq!(opacity(false), "0");
}

#[test]
fn fractional_pixels_are_kept() {
    assert_eq!(px(12.5), "12.5px");
    assert_eq!(px(0.0), "0px");
}

#[test]
fn ring_transition_covers_size_and_opacity() {
    assert_eq!(
        cursor_ring_transition(),
        "width 180ms ease, height 180ms ease, opacity 180ms ease"
    );
}

#[test]
fn progress_width_is_one_decimal_percent() {
    assert_eq!(progress_width(0.0), "0%");
    assert_eq!(progress_width(0.5), "50%");
    assert_eq!(progress_width(1.0), "100%");
    assert_eq!(progress_width(0.1234), "12.3%");
}

#[test]
fn spotlight_gradient_centres_on_position() {
    assert_eq!(
        spotlight_background(SpotlightPosition::new(50.0, 25.0)),
        "radial-gradient(circle at 50% 25%, rgba(255,255,255,0.12), transparent 55%)"
    );
}

#[test]
fn spotlight_transition_disabled_under_reduced_motion() {
    assert_eq!(spotlight_transition(false), "background 120ms ease");
    assert_eq!(spotlight_transition(true), "none");
}

#[test]
fn hero_transform_uses_perspective_and_both_axes() {
    let t = TiltAngles { rx: 5.0, ry: -2.5 };
    assert_eq!(
        hero_transform(t, false),
        "perspective(900px) rotateX(5deg) rotateY(-2.5deg)"
    );
    assert_eq!(hero_transition(), "transform 120ms ease");
}

#[test]
fn hero_transform_is_none_under_reduced_motion() {
    // Even a non-neutral pose renders flat
    let t = TiltAngles { rx: 5.0, ry: 5.0 };
    assert_eq!(hero_transform(t, true), "none");
}

#[test]
fn reduced_motion_flag_values() {
    assert_eq!(reduced_motion_flag(true), "1");
    assert_eq!(reduced_motion_flag(false), "0");
}

#[test]
fn snapshot_renders_end_to_end() {
    let mut layer = PresentationLayer::new(&InteractionConfig::default(), &NoMotionPreference);
    layer.mount(ScrollMetrics::new(500.0, 2000.0, 1000.0));
    layer.apply(InputEvent::HeroBound);
    layer.apply(InputEvent::PointerMoved {
        position: Vec2::new(960.0, 270.0),
        viewport: Viewport::new(1920.0, 1080.0),
    });
    layer.apply(InputEvent::HeroMoved {
        position: Vec2::new(320.0, 0.0),
        bounds: Bounds::new(0.0, 0.0, 320.0, 569.0),
    });

    let s = layer.snapshot();
    assert_eq!(progress_width(s.scroll_progress), "50%");
    assert!(spotlight_background(s.spotlight).contains("circle at 50% 25%"));
    assert_eq!(
        hero_transform(s.tilt, s.reduced_motion),
        "perspective(900px) rotateX(5deg) rotateY(5deg)"
    );
}

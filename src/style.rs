// CSS values derived from a presentation snapshot.
// Kept free of web-sys so the host tests can include it directly.

use folio_core::{
    progress_percent, PointerState, SpotlightPosition, TiltAngles, CURSOR_RING_EMPHASIZED_PX,
    CURSOR_RING_PX, CURSOR_TRANSITION_MS, SPOTLIGHT_TRANSITION_MS, TILT_PERSPECTIVE_PX,
    TILT_TRANSITION_MS,
};

#[inline]
pub fn opacity(visible: bool) -> &'static str {
    if visible {
        "1"
    } else {
        "0"
    }
}

#[inline]
pub fn px(value: f32) -> String {
    format!("{value}px")
}

pub fn cursor_ring_diameter(pointer: &PointerState) -> f32 {
    if pointer.emphasized {
        CURSOR_RING_EMPHASIZED_PX
    } else {
        CURSOR_RING_PX
    }
}

pub fn cursor_ring_transition() -> String {
    let ms = CURSOR_TRANSITION_MS;
    format!("width {ms}ms ease, height {ms}ms ease, opacity {ms}ms ease")
}

/// Width of the scroll indicator bar, one decimal of percent.
pub fn progress_width(progress: f32) -> String {
    format!("{}%", progress_percent(progress))
}

pub fn spotlight_background(spot: SpotlightPosition) -> String {
    format!(
        "radial-gradient(circle at {}% {}%, rgba(255,255,255,0.12), transparent 55%)",
        spot.x, spot.y
    )
}

pub fn spotlight_transition(reduced_motion: bool) -> String {
    if reduced_motion {
        "none".to_string()
    } else {
        format!("background {SPOTLIGHT_TRANSITION_MS}ms ease")
    }
}

/// Reduced motion renders no transform at all, whatever pose the tracker holds.
pub fn hero_transform(tilt: TiltAngles, reduced_motion: bool) -> String {
    if reduced_motion {
        return "none".to_string();
    }
    format!(
        "perspective({TILT_PERSPECTIVE_PX}px) rotateX({}deg) rotateY({}deg)",
        tilt.rx, tilt.ry
    )
}

pub fn hero_transition() -> String {
    format!("transform {TILT_TRANSITION_MS}ms ease")
}

#[inline]
pub fn reduced_motion_flag(reduced_motion: bool) -> &'static str {
    if reduced_motion {
        "1"
    } else {
        "0"
    }
}

// Shared interaction and render tuning constants used by the web frontend.

// Hero tilt
pub const TILT_GAIN_DEG: f32 = 10.0; // degrees per unit of offset from the box centre
pub const TILT_LIMIT_DEG: f32 = 10.0; // symmetric clamp for rx and ry
pub const TILT_PERSPECTIVE_PX: u32 = 900;

// Spotlight, in percent of the viewport
pub const SPOTLIGHT_ORIGIN_PCT: [f32; 2] = [50.0, 25.0];
pub const PERCENT_MAX: f32 = 100.0;

// Cursor
pub const CURSOR_RING_PX: f32 = 34.0;
pub const CURSOR_RING_EMPHASIZED_PX: f32 = 56.0;
pub const CURSOR_DOT_PX: f32 = 6.0;
pub const CURSOR_DOT_OPACITY: f32 = 0.9;

// CSS transition durations
pub const CURSOR_TRANSITION_MS: u32 = 180;
pub const SPOTLIGHT_TRANSITION_MS: u32 = 120;
pub const TILT_TRANSITION_MS: u32 = 120;

pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// DOM hooks provided by the page markup. A missing element is skipped, not an error.

pub const CURSOR_LAYER_ID: &str = "cursor-layer";
pub const CURSOR_RING_ID: &str = "cursor-ring";
pub const CURSOR_DOT_ID: &str = "cursor-dot";
pub const PROGRESS_BAR_ID: &str = "scroll-progress";
pub const SPOTLIGHT_ID: &str = "spotlight";

// Set on <html> so CSS can pause the marquee and other keyframe animations.
pub const REDUCED_MOTION_ATTR: &str = "data-reduced-motion";

// Config overrides are read from <body data-folio-KEY="...">
pub const CONFIG_ATTR_PREFIX: &str = "data-folio-";

#[inline]
pub fn config_attribute(key: &str) -> String {
    format!("{CONFIG_ATTR_PREFIX}{key}")
}

//! Plain geometry read from the host on each notification.
//!
//! All values are CSS pixels. Guards against zero or non-finite sizes live
//! here so that the trackers never produce NaN.

use glam::Vec2;

/// Visible rendering area of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Pointer position as a percentage of the viewport, clamped to \[0, 100\]
    /// on both axes. `None` when the viewport has no area.
    pub fn percent_of(&self, point: Vec2) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        let pct = point / Vec2::new(self.width, self.height) * crate::PERCENT_MAX;
        if !pct.is_finite() {
            return None;
        }
        Some(pct.clamp(Vec2::ZERO, Vec2::splat(crate::PERCENT_MAX)))
    }
}

/// On-screen rectangle of an element, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Position relative to the box: (0,0) top-left, (1,1) bottom-right.
    /// Points outside the box map outside 0..1; callers clamp the result.
    pub fn normalize(&self, point: Vec2) -> Option<Vec2> {
        if self.is_empty() {
            return None;
        }
        let local = (point - Vec2::new(self.left, self.top)) / Vec2::new(self.width, self.height);
        local.is_finite().then_some(local)
    }
}

/// Scroll geometry of the document element.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        Self {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Scrollable range; zero or negative when the content fits the viewport.
    #[inline]
    pub fn max_scroll(&self) -> f32 {
        self.scroll_height - self.client_height
    }
}

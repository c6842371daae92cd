use crate::{ScrollMetrics, TrackingPhase};

/// Fraction of the page scrolled, always within \[0, 1\].
///
/// A non-positive scrollable range (content shorter than the viewport) yields 0.
/// Elastic overscroll is clamped rather than reported.
pub fn scroll_progress(metrics: ScrollMetrics) -> f32 {
    let max = metrics.max_scroll();
    if max.is_nan() || max <= 0.0 {
        return 0.0;
    }
    let progress = metrics.scroll_top / max;
    if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Progress as a percentage rounded to one decimal, the width of the indicator bar.
#[inline]
pub fn progress_percent(progress: f32) -> f32 {
    (progress * 1000.0).round() / 10.0
}

#[derive(Clone, Debug, Default)]
pub struct ScrollProgressTracker {
    progress: f32,
    mounted: bool,
}

impl ScrollProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Initial read so a page restored mid-scroll does not flash 0%.
    pub fn mount(&mut self, metrics: ScrollMetrics) {
        self.mounted = true;
        self.progress = scroll_progress(metrics);
    }

    pub fn scrolled(&mut self, metrics: ScrollMetrics) {
        self.progress = scroll_progress(metrics);
    }

    pub fn unmount(&mut self) {
        self.mounted = false;
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn display_percent(&self) -> f32 {
        progress_percent(self.progress)
    }

    pub fn phase(&self) -> TrackingPhase {
        if self.mounted {
            TrackingPhase::Tracking
        } else {
            TrackingPhase::Idle
        }
    }
}

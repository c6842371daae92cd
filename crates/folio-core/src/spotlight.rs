use crate::{TrackingPhase, Viewport, SPOTLIGHT_ORIGIN_PCT};
use glam::Vec2;

/// Centre of the background radial gradient, in percent of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpotlightPosition {
    pub x: f32,
    pub y: f32,
}

impl SpotlightPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl Default for SpotlightPosition {
    fn default() -> Self {
        Self::new(SPOTLIGHT_ORIGIN_PCT[0], SPOTLIGHT_ORIGIN_PCT[1])
    }
}

/// Moves the background spotlight with the pointer.
///
/// While reduced motion is requested the position is frozen at its last value,
/// so re-enabling motion does not animate from a reset origin.
#[derive(Clone, Debug, Default)]
pub struct SpotlightTracker {
    position: SpotlightPosition,
    phase: TrackingPhase,
}

impl SpotlightTracker {
    pub fn new(origin: SpotlightPosition) -> Self {
        Self {
            position: origin,
            phase: TrackingPhase::Idle,
        }
    }

    pub fn pointer_moved(&mut self, pointer: Vec2, viewport: Viewport, reduced_motion: bool) {
        if reduced_motion {
            return;
        }
        let Some(pct) = viewport.percent_of(pointer) else {
            return;
        };
        self.position = SpotlightPosition::new(pct.x, pct.y);
        self.phase = TrackingPhase::Tracking;
    }

    /// Pointer left the viewport; the spotlight stays where it was.
    pub fn pointer_left(&mut self) {
        self.phase = TrackingPhase::Idle;
    }

    #[inline]
    pub fn position(&self) -> SpotlightPosition {
        self.position
    }

    #[inline]
    pub fn phase(&self) -> TrackingPhase {
        self.phase
    }
}

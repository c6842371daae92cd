use crate::TrackingPhase;
use glam::Vec2;

/// Where the custom cursor is drawn and how.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    pub active: bool,
    /// Set while the pointer is over a hoverable element; drives the larger ring.
    pub emphasized: bool,
}

/// Follows the pointer across the whole viewport.
///
/// Every event overwrites the state; there is no debouncing and the last write
/// wins. Cursor tracking is never gated by the motion preference.
#[derive(Clone, Debug, Default)]
pub struct CursorTracker {
    state: PointerState,
}

impl CursorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_moved(&mut self, position: Vec2) {
        self.state.position = position;
        self.state.active = true;
    }

    /// Pointer left the viewport. Position is kept so the cursor fades out in place.
    pub fn pointer_left(&mut self) {
        self.state.active = false;
        self.state.emphasized = false;
    }

    pub fn hover_entered(&mut self) {
        self.state.emphasized = true;
    }

    pub fn hover_exited(&mut self) {
        self.state.emphasized = false;
    }

    #[inline]
    pub fn state(&self) -> PointerState {
        self.state
    }

    pub fn phase(&self) -> TrackingPhase {
        if self.state.active {
            TrackingPhase::Tracking
        } else {
            TrackingPhase::Idle
        }
    }
}

/// Lifecycle shared by the pointer-driven trackers.
///
/// `Idle -> Tracking` on the first move, back to `Idle` on leave or unmount.
/// There is no error or terminal state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrackingPhase {
    #[default]
    Idle,
    Tracking,
}

impl TrackingPhase {
    #[inline]
    pub fn is_tracking(self) -> bool {
        matches!(self, TrackingPhase::Tracking)
    }
}

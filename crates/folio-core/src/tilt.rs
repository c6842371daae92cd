use crate::{Bounds, TrackingPhase, TILT_GAIN_DEG, TILT_LIMIT_DEG};
use glam::Vec2;

/// 3D pose of the hero card in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltAngles {
    pub rx: f32,
    pub ry: f32,
}

impl TiltAngles {
    pub const NEUTRAL: TiltAngles = TiltAngles { rx: 0.0, ry: 0.0 };

    #[inline]
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltParams {
    pub gain_deg: f32,
    pub limit_deg: f32,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self {
            gain_deg: TILT_GAIN_DEG,
            limit_deg: TILT_LIMIT_DEG,
        }
    }
}

/// Angles for a pointer at `normalized` (0..1 on each axis) inside the box.
///
/// Right of centre turns the card about Y, above centre about X.
pub fn tilt_for(normalized: Vec2, params: TiltParams) -> TiltAngles {
    let ry = (normalized.x - 0.5) * params.gain_deg;
    let rx = (0.5 - normalized.y) * params.gain_deg;
    let limit = params.limit_deg;
    TiltAngles {
        rx: rx.clamp(-limit, limit),
        ry: ry.clamp(-limit, limit),
    }
}

/// Tilts exactly one container toward the pointer.
///
/// The tracker is inert until [`bind`](Self::bind) is called with the container
/// present; a page without the container simply never binds it.
#[derive(Clone, Debug, Default)]
pub struct TiltTracker {
    params: TiltParams,
    angles: TiltAngles,
    bound: bool,
    phase: TrackingPhase,
}

impl TiltTracker {
    pub fn new(params: TiltParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn bind(&mut self) {
        self.bound = true;
    }

    /// Container went away; the pose returns to neutral.
    pub fn unbind(&mut self) {
        self.bound = false;
        self.pointer_left();
    }

    pub fn pointer_moved(&mut self, pointer: Vec2, bounds: Bounds, reduced_motion: bool) {
        if !self.bound || reduced_motion {
            return;
        }
        let Some(normalized) = bounds.normalize(pointer) else {
            return;
        };
        self.angles = tilt_for(normalized, self.params);
        self.phase = TrackingPhase::Tracking;
    }

    /// Unlike the spotlight, the pose resets: it must come back to neutral.
    pub fn pointer_left(&mut self) {
        self.angles = TiltAngles::NEUTRAL;
        self.phase = TrackingPhase::Idle;
    }

    #[inline]
    pub fn angles(&self) -> TiltAngles {
        self.angles
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    #[inline]
    pub fn phase(&self) -> TrackingPhase {
        self.phase
    }

    pub fn params(&self) -> TiltParams {
        self.params
    }
}

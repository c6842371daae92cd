use crate::{
    Bounds, CursorTracker, InteractionConfig, MotionGate, MotionSource, PointerState,
    ScrollMetrics, ScrollProgressTracker, SpotlightPosition, SpotlightTracker, TiltAngles,
    TiltTracker, Viewport,
};
use glam::Vec2;

/// One host notification, already reduced to plain numbers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved anywhere in the viewport.
    PointerMoved { position: Vec2, viewport: Viewport },
    /// Pointer left the viewport.
    PointerLeft,
    HoverEntered,
    HoverExited,
    Scrolled(ScrollMetrics),
    /// Pointer moved inside the hero container.
    HeroMoved { position: Vec2, bounds: Bounds },
    HeroLeft,
    HeroBound,
    HeroUnbound,
}

/// Everything the render step reads, by value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PresentationSnapshot {
    pub pointer: PointerState,
    pub scroll_progress: f32,
    pub spotlight: SpotlightPosition,
    pub tilt: TiltAngles,
    pub reduced_motion: bool,
}

/// The five trackers plus the motion gate.
///
/// Each tracker has exactly one writer: the arm of [`apply`](Self::apply) for
/// its event. Spotlight and tilt consult the gate at event time; cursor and
/// scroll ignore it.
#[derive(Debug)]
pub struct PresentationLayer {
    cursor: CursorTracker,
    scroll: ScrollProgressTracker,
    spotlight: SpotlightTracker,
    tilt: TiltTracker,
    motion: MotionGate,
}

impl PresentationLayer {
    pub fn new(config: &InteractionConfig, motion: &dyn MotionSource) -> Self {
        Self {
            cursor: CursorTracker::new(),
            scroll: ScrollProgressTracker::new(),
            spotlight: SpotlightTracker::new(config.spotlight_origin),
            tilt: TiltTracker::new(config.tilt),
            motion: MotionGate::new(motion),
        }
    }

    pub fn mount(&mut self, scroll: ScrollMetrics) {
        self.scroll.mount(scroll);
    }

    pub fn apply(&mut self, event: InputEvent) {
        let reduced = self.motion.reduced_motion();
        match event {
            InputEvent::PointerMoved { position, viewport } => {
                self.cursor.pointer_moved(position);
                self.spotlight.pointer_moved(position, viewport, reduced);
            }
            InputEvent::PointerLeft => {
                self.cursor.pointer_left();
                self.spotlight.pointer_left();
            }
            InputEvent::HoverEntered => self.cursor.hover_entered(),
            InputEvent::HoverExited => self.cursor.hover_exited(),
            InputEvent::Scrolled(metrics) => self.scroll.scrolled(metrics),
            InputEvent::HeroMoved { position, bounds } => {
                self.tilt.pointer_moved(position, bounds, reduced);
            }
            InputEvent::HeroLeft => self.tilt.pointer_left(),
            InputEvent::HeroBound => self.tilt.bind(),
            InputEvent::HeroUnbound => self.tilt.unbind(),
        }
    }

    pub fn snapshot(&self) -> PresentationSnapshot {
        PresentationSnapshot {
            pointer: self.cursor.state(),
            scroll_progress: self.scroll.progress(),
            spotlight: self.spotlight.position(),
            tilt: self.tilt.angles(),
            reduced_motion: self.motion.reduced_motion(),
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.motion.reduced_motion()
    }

    pub fn cursor(&self) -> &CursorTracker {
        &self.cursor
    }

    pub fn scroll(&self) -> &ScrollProgressTracker {
        &self.scroll
    }

    pub fn spotlight(&self) -> &SpotlightTracker {
        &self.spotlight
    }

    pub fn tilt(&self) -> &TiltTracker {
        &self.tilt
    }

    /// Return every tracker to idle; the hero pose goes back to neutral.
    pub fn unmount(&mut self) {
        self.cursor.pointer_left();
        self.spotlight.pointer_left();
        self.tilt.unbind();
        self.scroll.unmount();
    }
}

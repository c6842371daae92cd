//! Reduced-motion preference as an injected port.
//!
//! The host's accessibility setting is read through [`MotionSource`] instead of
//! ambient globals so that tests can drive it with [`ManualMotion`]. Every
//! subscription is an RAII [`Subscription`]: dropping it releases the listener.

use fnv::FnvHashMap;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

/// Invoked with `true` when reduced motion becomes requested, `false` when lifted.
pub type MotionCallback = Box<dyn FnMut(bool)>;

pub trait MotionSource {
    /// Current setting, read synchronously.
    fn prefers_reduced_motion(&self) -> bool;

    /// Register for change notifications until the returned guard is dropped.
    fn subscribe(&self, callback: MotionCallback) -> Subscription;
}

/// Releases a listener exactly once, when dropped.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A subscription with nothing to release, for sources that never change.
    pub fn detached() -> Self {
        Self { release: None }
    }

    pub fn is_detached(&self) -> bool {
        self.release.is_none()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("detached", &self.is_detached())
            .finish()
    }
}

/// Used when the host cannot report the setting: motion is allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoMotionPreference;

impl MotionSource for NoMotionPreference {
    fn prefers_reduced_motion(&self) -> bool {
        false
    }

    fn subscribe(&self, _callback: MotionCallback) -> Subscription {
        Subscription::detached()
    }
}

type SharedCallback = Rc<RefCell<MotionCallback>>;

#[derive(Default)]
struct ManualInner {
    reduced: Cell<bool>,
    next_id: Cell<u64>,
    subscribers: RefCell<FnvHashMap<u64, SharedCallback>>,
}

/// Settable source that notifies its subscribers on every change.
#[derive(Clone, Default)]
pub struct ManualMotion {
    inner: Rc<ManualInner>,
}

impl ManualMotion {
    pub fn new(reduced: bool) -> Self {
        let motion = Self::default();
        motion.inner.reduced.set(reduced);
        motion
    }

    /// Update the setting. Subscribers are only called when the value changes.
    pub fn set(&self, reduced: bool) {
        if self.inner.reduced.replace(reduced) == reduced {
            return;
        }
        // Callbacks may drop subscriptions, so iterate over a detached copy and
        // skip anything released mid-notification.
        let targets: Vec<(u64, SharedCallback)> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(id, cb)| (*id, cb.clone()))
            .collect();
        for (id, callback) in targets {
            if !self.inner.subscribers.borrow().contains_key(&id) {
                continue;
            }
            let mut callback = callback.borrow_mut();
            (*callback)(reduced);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }
}

impl MotionSource for ManualMotion {
    fn prefers_reduced_motion(&self) -> bool {
        self.inner.reduced.get()
    }

    fn subscribe(&self, callback: MotionCallback) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .insert(id, Rc::new(RefCell::new(callback)));

        let weak: Weak<ManualInner> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.subscribers.borrow_mut().remove(&id);
            }
        })
    }
}

impl fmt::Debug for ManualMotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualMotion")
            .field("reduced", &self.inner.reduced.get())
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

/// Live view of the motion preference for the lifetime of the presentation layer.
///
/// Initialised synchronously from the source, then kept current by a
/// subscription that is released when the gate is dropped.
#[derive(Debug)]
pub struct MotionGate {
    reduced: Rc<Cell<bool>>,
    _subscription: Subscription,
}

impl MotionGate {
    pub fn new(source: &dyn MotionSource) -> Self {
        let reduced = Rc::new(Cell::new(source.prefers_reduced_motion()));
        let sink = reduced.clone();
        let subscription = source.subscribe(Box::new(move |now_reduced| {
            log::debug!("[motion] reduced motion = {}", now_reduced);
            sink.set(now_reduced);
        }));
        Self {
            reduced,
            _subscription: subscription,
        }
    }

    #[inline]
    pub fn reduced_motion(&self) -> bool {
        self.reduced.get()
    }
}

use folio_core::{
    MotionCallback, MotionSource, NoMotionPreference, Subscription, REDUCED_MOTION_QUERY,
};
use gloo_events::EventListener;
use web_sys as web;

/// `prefers-reduced-motion` through `window.matchMedia`.
pub struct MediaQueryMotion {
    query: web::MediaQueryList,
}

impl MediaQueryMotion {
    pub fn new(window: &web::Window) -> Option<Self> {
        window
            .match_media(REDUCED_MOTION_QUERY)
            .ok()
            .flatten()
            .map(|query| Self { query })
    }
}

impl MotionSource for MediaQueryMotion {
    fn prefers_reduced_motion(&self) -> bool {
        self.query.matches()
    }

    fn subscribe(&self, mut callback: MotionCallback) -> Subscription {
        let query = self.query.clone();
        // The listener keeps its own handle on the MediaQueryList, so the
        // query stays alive for as long as the subscription does.
        let listener = EventListener::new(&self.query, "change", move |_| {
            callback(query.matches());
        });
        Subscription::new(move || drop(listener))
    }
}

/// Best available source; browsers without `matchMedia` allow motion.
pub fn detect(window: &web::Window) -> Box<dyn MotionSource> {
    match MediaQueryMotion::new(window) {
        Some(mq) => {
            log::info!("[motion] reduced motion = {}", mq.prefers_reduced_motion());
            Box::new(mq)
        }
        None => {
            log::info!("[motion] matchMedia unavailable; motion allowed");
            Box::new(NoMotionPreference)
        }
    }
}

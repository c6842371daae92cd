use super::SharedLayer;
use crate::dom;
use folio_core::InputEvent;
use gloo_events::EventListener;
use web_sys as web;

/// Scroll progress, recomputed on scroll and on resize (page height can change).
pub fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    layer: &SharedLayer,
) -> Vec<EventListener> {
    ["scroll", "resize"]
        .into_iter()
        .map(|event_type| {
            let layer = layer.clone();
            let doc = document.clone();
            EventListener::new(window, event_type, move |_| {
                layer
                    .borrow_mut()
                    .apply(InputEvent::Scrolled(dom::scroll_metrics(&doc)));
            })
        })
        .collect()
}

use super::SharedLayer;
use folio_core::InputEvent;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Enlarge the cursor ring over every element matching `selector`.
pub fn wire_hoverables(
    document: &web::Document,
    selector: &str,
    layer: &SharedLayer,
) -> Vec<EventListener> {
    let nodes = match document.query_selector_all(selector) {
        Ok(nodes) => nodes,
        Err(e) => {
            log::warn!("[hover] bad selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };

    let mut listeners = Vec::with_capacity(nodes.length() as usize * 2);
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) else {
            continue;
        };
        let enter_layer = layer.clone();
        listeners.push(EventListener::new(&el, "mouseenter", move |_| {
            enter_layer.borrow_mut().apply(InputEvent::HoverEntered);
        }));
        let exit_layer = layer.clone();
        listeners.push(EventListener::new(&el, "mouseleave", move |_| {
            exit_layer.borrow_mut().apply(InputEvent::HoverExited);
        }));
    }
    log::debug!("[hover] {} hoverable elements", listeners.len() / 2);
    listeners
}

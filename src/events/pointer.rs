use super::SharedLayer;
use crate::dom;
use folio_core::InputEvent;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Viewport-wide pointer tracking: cursor and spotlight.
pub fn wire_pointer(
    window: &web::Window,
    document: &web::Document,
    layer: &SharedLayer,
) -> Vec<EventListener> {
    let mut listeners = Vec::with_capacity(2);

    let move_layer = layer.clone();
    let win = window.clone();
    listeners.push(EventListener::new(window, "mousemove", move |event| {
        let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        move_layer.borrow_mut().apply(InputEvent::PointerMoved {
            position: dom::client_point(ev),
            viewport: dom::viewport(&win),
        });
    }));

    // `mouseleave` on <html> fires when the pointer exits the window
    if let Some(root) = document.document_element() {
        let leave_layer = layer.clone();
        listeners.push(EventListener::new(&root, "mouseleave", move |_| {
            leave_layer.borrow_mut().apply(InputEvent::PointerLeft);
        }));
    }

    listeners
}

/// Tilt tracking bound to the hero container. Binds the tracker; the caller
/// unbinds it by dropping the listeners and unmounting the layer.
pub fn wire_hero(hero: &web::HtmlElement, layer: &SharedLayer) -> Vec<EventListener> {
    layer.borrow_mut().apply(InputEvent::HeroBound);

    let move_layer = layer.clone();
    let el = hero.clone();
    let on_move = EventListener::new(hero, "mousemove", move |event| {
        let Some(ev) = event.dyn_ref::<web::MouseEvent>() else {
            return;
        };
        move_layer.borrow_mut().apply(InputEvent::HeroMoved {
            position: dom::client_point(ev),
            bounds: dom::bounds_of(&el),
        });
    });

    let leave_layer = layer.clone();
    let on_leave = EventListener::new(hero, "mouseleave", move |_| {
        leave_layer.borrow_mut().apply(InputEvent::HeroLeft);
    });

    vec![on_move, on_leave]
}

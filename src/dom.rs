use crate::constants::config_attribute;
use folio_core::{Bounds, InteractionConfig, ScrollMetrics, Viewport};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn html_element_by_id(document: &web::Document, id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn client_point(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

pub fn viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

pub fn bounds_of(el: &web::Element) -> Bounds {
    let rect = el.get_bounding_client_rect();
    Bounds::new(
        rect.left() as f32,
        rect.top() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Scroll geometry of `<html>`; all zero when there is no document element.
pub fn scroll_metrics(document: &web::Document) -> ScrollMetrics {
    match document.document_element() {
        Some(h) => ScrollMetrics::new(
            h.scroll_top() as f32,
            h.scroll_height() as f32,
            h.client_height() as f32,
        ),
        None => ScrollMetrics::default(),
    }
}

/// Defaults overridden by `data-folio-*` attributes on `<body>`.
///
/// A bad override is logged and the whole page falls back to the defaults.
pub fn read_config(document: &web::Document) -> InteractionConfig {
    let Some(body) = document.body() else {
        return InteractionConfig::default();
    };
    match InteractionConfig::default().with_overrides(|key| body.get_attribute(&config_attribute(key))) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            InteractionConfig::default()
        }
    }
}

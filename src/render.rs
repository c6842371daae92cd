use crate::constants::{
    CURSOR_DOT_ID, CURSOR_LAYER_ID, CURSOR_RING_ID, PROGRESS_BAR_ID, REDUCED_MOTION_ATTR,
    SPOTLIGHT_ID,
};
use crate::dom::{self, set_style};
use crate::style;
use folio_core::{InteractionConfig, PresentationSnapshot, CURSOR_DOT_OPACITY, CURSOR_DOT_PX};
use web_sys as web;

/// Elements the snapshot is written into. Any of them may be absent.
pub struct Surfaces {
    root: Option<web::Element>,
    cursor_layer: Option<web::HtmlElement>,
    cursor_ring: Option<web::HtmlElement>,
    cursor_dot: Option<web::HtmlElement>,
    progress_bar: Option<web::HtmlElement>,
    spotlight: Option<web::HtmlElement>,
    hero: Option<web::HtmlElement>,
}

impl Surfaces {
    pub fn locate(document: &web::Document, config: &InteractionConfig) -> Self {
        let surfaces = Self {
            root: document.document_element(),
            cursor_layer: dom::html_element_by_id(document, CURSOR_LAYER_ID),
            cursor_ring: dom::html_element_by_id(document, CURSOR_RING_ID),
            cursor_dot: dom::html_element_by_id(document, CURSOR_DOT_ID),
            progress_bar: dom::html_element_by_id(document, PROGRESS_BAR_ID),
            spotlight: dom::html_element_by_id(document, SPOTLIGHT_ID),
            hero: dom::html_element_by_id(document, &config.hero_element_id),
        };
        surfaces.prime();
        surfaces
    }

    // Styles that never change after mount
    fn prime(&self) {
        if let Some(ring) = &self.cursor_ring {
            set_style(ring, "transition", &style::cursor_ring_transition());
        }
        if let Some(dot) = &self.cursor_dot {
            let size = style::px(CURSOR_DOT_PX);
            set_style(dot, "width", &size);
            set_style(dot, "height", &size);
            set_style(dot, "opacity", &CURSOR_DOT_OPACITY.to_string());
        }
        if let Some(hero) = &self.hero {
            set_style(hero, "transition", &style::hero_transition());
        }
    }

    pub fn apply(&self, snap: &PresentationSnapshot) {
        let pointer = &snap.pointer;
        if let Some(layer) = &self.cursor_layer {
            set_style(layer, "opacity", style::opacity(pointer.active));
        }
        let left = style::px(pointer.position.x);
        let top = style::px(pointer.position.y);
        if let Some(ring) = &self.cursor_ring {
            let d = style::px(style::cursor_ring_diameter(pointer));
            set_style(ring, "left", &left);
            set_style(ring, "top", &top);
            set_style(ring, "width", &d);
            set_style(ring, "height", &d);
        }
        if let Some(dot) = &self.cursor_dot {
            set_style(dot, "left", &left);
            set_style(dot, "top", &top);
        }

        if let Some(bar) = &self.progress_bar {
            set_style(bar, "width", &style::progress_width(snap.scroll_progress));
        }

        if let Some(spot) = &self.spotlight {
            set_style(spot, "background", &style::spotlight_background(snap.spotlight));
            set_style(spot, "transition", &style::spotlight_transition(snap.reduced_motion));
        }

        if let Some(hero) = &self.hero {
            set_style(hero, "transform", &style::hero_transform(snap.tilt, snap.reduced_motion));
        }

        if let Some(root) = &self.root {
            _ = root.set_attribute(REDUCED_MOTION_ATTR, style::reduced_motion_flag(snap.reduced_motion));
        }
    }

    /// Put every surface back to its resting look.
    pub fn reset(&self) {
        if let Some(layer) = &self.cursor_layer {
            set_style(layer, "opacity", style::opacity(false));
        }
        if let Some(hero) = &self.hero {
            _ = hero.style().remove_property("transform");
        }
    }
}

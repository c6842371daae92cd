#![cfg(target_arch = "wasm32")]
use folio_core::PresentationLayer;
use gloo_events::EventListener;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod motion;
mod render;
mod style;

/// Everything acquired at mount. Dropping it releases every listener, stops
/// the frame loop and returns the trackers to idle.
struct Mount {
    layer: events::SharedLayer,
    _listeners: Vec<EventListener>,
    _frames: frame::FrameLoop,
}

impl Drop for Mount {
    fn drop(&mut self) {
        self.layer.borrow_mut().unmount();
        log::info!("[mount] released");
    }
}

thread_local! {
    static MOUNT: RefCell<Option<Mount>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");
    mount();
    Ok(())
}

/// Attach the interaction layer to the current document. No-op when mounted.
#[wasm_bindgen]
pub fn mount() {
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
}

/// Tear the interaction layer down, e.g. before a client-side navigation.
#[wasm_bindgen]
pub fn unmount() {
    let mount = MOUNT.with(|m| m.borrow_mut().take());
    drop(mount);
}

async fn dom_ready(document: &web::Document) -> anyhow::Result<()> {
    if document.ready_state() != "loading" {
        return Ok(());
    }
    let target = document.clone();
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        EventListener::once(&target, "DOMContentLoaded", move |_| {
            _ = resolve.call0(&JsValue::NULL);
        })
        .forget();
    });
    JsFuture::from(ready)
        .await
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    dom_ready(&document).await?;

    if MOUNT.with(|m| m.borrow().is_some()) {
        log::debug!("[mount] already mounted");
        return Ok(());
    }

    let config = dom::read_config(&document);
    let motion = motion::detect(&window);
    let layer: events::SharedLayer =
        Rc::new(RefCell::new(PresentationLayer::new(&config, motion.as_ref())));
    layer.borrow_mut().mount(dom::scroll_metrics(&document));

    let mut listeners = Vec::new();
    listeners.extend(events::wire_pointer(&window, &document, &layer));
    listeners.extend(events::wire_scroll(&window, &document, &layer));
    listeners.extend(events::wire_hoverables(
        &document,
        &config.hoverable_selector,
        &layer,
    ));
    match dom::html_element_by_id(&document, &config.hero_element_id) {
        Some(hero) => {
            listeners.extend(events::wire_hero(&hero, &layer));
            log::info!("[hero] tilt bound to #{}", config.hero_element_id);
        }
        None => log::info!("[hero] #{} not found; tilt inactive", config.hero_element_id),
    }

    let surfaces = render::Surfaces::locate(&document, &config);
    let frames = frame::FrameLoop::start(&window, frame::FrameContext::new(layer.clone(), surfaces));

    log::info!("[mount] {} listeners", listeners.len());
    MOUNT.with(|m| {
        *m.borrow_mut() = Some(Mount {
            layer,
            _listeners: listeners,
            _frames: frames,
        })
    });
    Ok(())
}

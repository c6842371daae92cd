use crate::events::SharedLayer;
use crate::render::Surfaces;
use folio_core::PresentationSnapshot;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub layer: SharedLayer,
    pub surfaces: Surfaces,
    last: Option<PresentationSnapshot>,
}

impl FrameContext {
    pub fn new(layer: SharedLayer, surfaces: Surfaces) -> Self {
        Self {
            layer,
            surfaces,
            last: None,
        }
    }

    /// Write the snapshot into the DOM when it differs from the last one written.
    pub fn frame(&mut self) {
        let snap = self.layer.borrow().snapshot();
        if self.last.as_ref() == Some(&snap) {
            return;
        }
        self.surfaces.apply(&snap);
        self.last = Some(snap);
    }
}

type Tick = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` loop that stops when dropped.
pub struct FrameLoop {
    tick: Tick,
    handle: Rc<Cell<Option<i32>>>,
    ctx: Rc<RefCell<FrameContext>>,
}

impl FrameLoop {
    pub fn start(window: &web::Window, ctx: FrameContext) -> Self {
        let ctx = Rc::new(RefCell::new(ctx));
        let tick: Tick = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(None));

        let tick_clone = tick.clone();
        let handle_tick = handle.clone();
        let ctx_tick = ctx.clone();
        let win = window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            ctx_tick.borrow_mut().frame();
            request(&win, &tick_clone, &handle_tick);
        }) as Box<dyn FnMut()>));

        request(window, &tick, &handle);
        Self { tick, handle, ctx }
    }
}

fn request(window: &web::Window, tick: &Tick, handle: &Rc<Cell<Option<i32>>>) {
    if let Some(cb) = tick.borrow().as_ref() {
        handle.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        if let (Some(id), Some(w)) = (self.handle.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        // Breaks the closure's reference to itself
        self.tick.borrow_mut().take();
        self.ctx.borrow().surfaces.reset();
    }
}

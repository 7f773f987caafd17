use crate::constants::{AMBIENT_X_PROP, AMBIENT_Y_PROP};
use crate::core::parallax::px;
use crate::core::AmbientPhase;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn request_frame(callback: &js_sys::Function) -> Option<i32> {
    web::window().and_then(|w| w.request_animation_frame(callback).ok())
}

pub fn cancel_frame(handle: i32) {
    if let Some(w) = web::window() {
        _ = w.cancel_animation_frame(handle);
    }
}

/// Self-rescheduling per-frame task that publishes the ambient drift offset
/// as CSS custom properties on its target element.
///
/// Started once per hero and normally left running for the page lifetime;
/// `stop` and `resume` exist so the loop can be torn down if the hero ever
/// goes away dynamically.
pub struct AmbientLoop {
    raf: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl AmbientLoop {
    /// Build the loop around `target` and schedule its first tick.
    pub fn start(target: web::HtmlElement) -> Self {
        let phase = Rc::new(Cell::new(AmbientPhase::default()));
        let raf: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let raf_tick = raf.clone();
        let tick_self = tick.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            raf_tick.set(None);
            let mut p = phase.get();
            let offset = p.advance();
            phase.set(p);
            let style = target.style();
            _ = style.set_property(AMBIENT_X_PROP, &px(offset.x));
            _ = style.set_property(AMBIENT_Y_PROP, &px(offset.y));
            if let Some(cb) = tick_self.borrow().as_ref() {
                raf_tick.set(request_frame(cb.as_ref().unchecked_ref()));
            }
        }) as Box<dyn FnMut()>));

        let looper = AmbientLoop { raf, tick };
        looper.resume();
        looper
    }

    /// Schedule the next tick unless the loop is already running.
    pub fn resume(&self) {
        if self.raf.get().is_some() {
            return;
        }
        if let Some(cb) = self.tick.borrow().as_ref() {
            self.raf.set(request_frame(cb.as_ref().unchecked_ref()));
        }
    }

    /// Cancel the pending tick; the loop stays resumable.
    pub fn stop(&self) {
        if let Some(handle) = self.raf.take() {
            cancel_frame(handle);
        }
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        self.raf.get().is_some()
    }
}

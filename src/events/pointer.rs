use crate::constants::{
    HERO_CONTENT_SELECTOR, HERO_ID, REDUCED_MOTION_QUERY, RING_CLASS, RING_LEAD_SHADOW,
    RING_TRAIL_SHADOW,
};
use crate::core::constants::RING_REST_SCALE;
use crate::core::parallax;
use crate::core::{ring_frames, HeroRect, PointerTracker, RingFrame};
use crate::dom;
use crate::frame::{self, AmbientLoop};
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Shared pieces captured by the hero event handlers and the frame callback.
#[derive(Clone)]
struct HeroParts {
    hero: web::HtmlElement,
    content: Option<web::HtmlElement>,
    ring_lead: web::HtmlElement,
    ring_trail: web::HtmlElement,
    tracker: Rc<RefCell<PointerTracker>>,
    raf: Rc<Cell<Option<i32>>>,
    apply: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

/// Cursor-following glow rings plus content and background parallax on the
/// hero banner.
pub struct HeroEffect {
    ambient: AmbientLoop,
}

impl HeroEffect {
    /// Inject the rings and wire the pointer handlers. Pages without a hero,
    /// or sessions where the user asked for reduced motion, get nothing.
    pub fn mount(document: &web::Document) -> Option<HeroEffect> {
        let Some(hero) = dom::html_element_by_id(document, HERO_ID) else {
            log::info!("[hero] #{} missing; pointer effect skipped", HERO_ID);
            return None;
        };
        if dom::prefers_reduced_motion(REDUCED_MOTION_QUERY) {
            log::info!("[hero] reduced motion requested; pointer effect skipped");
            return None;
        }

        let content = dom::query_html_element(&hero, HERO_CONTENT_SELECTOR);
        let ring_lead = create_ring(document, &hero, RING_LEAD_SHADOW)?;
        let ring_trail = create_ring(document, &hero, RING_TRAIL_SHADOW)?;

        let parts = HeroParts {
            hero,
            content,
            ring_lead,
            ring_trail,
            tracker: Rc::new(RefCell::new(PointerTracker::default())),
            raf: Rc::new(Cell::new(None)),
            apply: Rc::new(RefCell::new(None)),
        };
        install_frame_callback(&parts);
        wire_move_handlers(&parts);
        wire_leave_handlers(&parts);
        let ambient = AmbientLoop::start(parts.hero.clone());
        log::info!("[hero] pointer effect armed");
        Some(HeroEffect { ambient })
    }

    /// Control handle for the ambient drift loop.
    #[inline]
    pub fn ambient(&self) -> &AmbientLoop {
        &self.ambient
    }
}

fn create_ring(
    document: &web::Document,
    hero: &web::HtmlElement,
    shadow: &str,
) -> Option<web::HtmlElement> {
    let ring = document
        .create_element("div")
        .ok()?
        .dyn_into::<web::HtmlElement>()
        .ok()?;
    ring.set_class_name(RING_CLASS);
    _ = ring.style().set_property("box-shadow", shadow);
    _ = hero.append_child(&ring);
    Some(ring)
}

/// One persistent callback serves every scheduled frame; it drains the
/// freshest sample and paints from it.
fn install_frame_callback(parts: &HeroParts) {
    let state = parts.clone();
    *parts.apply.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        state.raf.set(None);
        let sample = state.tracker.borrow_mut().take();
        if let Some(sample) = sample {
            apply_pointer_frame(&state, sample);
        }
    }) as Box<dyn FnMut()>));
}

/// Store the sample; schedule a frame callback only when none is armed yet.
fn record_sample(parts: &HeroParts, sample: Vec2) {
    if !parts.tracker.borrow_mut().record(sample) {
        return;
    }
    let handle = parts
        .apply
        .borrow()
        .as_ref()
        .and_then(|cb| frame::request_frame(cb.as_ref().unchecked_ref()));
    parts.raf.set(handle);
    if handle.is_none() {
        // Armed implies a frame is pending; back out when scheduling fails.
        parts.tracker.borrow_mut().reset();
    }
}

fn apply_pointer_frame(parts: &HeroParts, sample: Vec2) {
    let [lead, trail] = ring_frames(sample);
    paint_ring(&parts.ring_lead, &lead);
    paint_ring(&parts.ring_trail, &trail);

    let rect = parts.hero.get_bounding_client_rect();
    let hero_rect = HeroRect {
        left: rect.left() as f32,
        top: rect.top() as f32,
        width: rect.width() as f32,
        height: rect.height() as f32,
    };
    let rel = hero_rect.relative_offset(sample);
    if let Some(content) = &parts.content {
        _ = content
            .style()
            .set_property("transform", &parallax::content_transform(rel));
    }
    _ = parts
        .hero
        .style()
        .set_property("background-position", &parallax::background_position(rel));
}

fn paint_ring(ring: &web::HtmlElement, frame: &RingFrame) {
    let style = ring.style();
    _ = style.set_property("left", &parallax::px(frame.position.x));
    _ = style.set_property("top", &parallax::px(frame.position.y));
    _ = style.set_property("opacity", &frame.opacity.to_string());
    _ = style.set_property("transform", &parallax::ring_transform(frame.scale));
}

/// Hide the rings, recenter content and background, and drop any pending
/// frame so a stale update cannot re-show them.
fn reset_hero(parts: &HeroParts) {
    fade_ring(&parts.ring_lead);
    fade_ring(&parts.ring_trail);
    if let Some(content) = &parts.content {
        _ = content
            .style()
            .set_property("transform", &parallax::content_transform(Vec2::ZERO));
    }
    _ = parts
        .hero
        .style()
        .set_property("background-position", &parallax::background_position(Vec2::ZERO));
    parts.tracker.borrow_mut().reset();
    if let Some(handle) = parts.raf.take() {
        frame::cancel_frame(handle);
    }
}

fn fade_ring(ring: &web::HtmlElement) {
    let style = ring.style();
    _ = style.set_property("opacity", "0");
    _ = style.set_property("transform", &parallax::ring_transform(RING_REST_SCALE));
}

fn wire_move_handlers(parts: &HeroParts) {
    let mouse_parts = parts.clone();
    let mouse = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
        record_sample(
            &mouse_parts,
            Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        );
    }) as Box<dyn FnMut(_)>);
    dom::add_passive_listener(&parts.hero, "mousemove", mouse.as_ref().unchecked_ref());
    mouse.forget();

    let touch_parts = parts.clone();
    let touch = Closure::wrap(Box::new(move |ev: web::TouchEvent| {
        // Only the first touch point drives the effect.
        if let Some(t) = ev.touches().get(0) {
            record_sample(
                &touch_parts,
                Vec2::new(t.client_x() as f32, t.client_y() as f32),
            );
        }
    }) as Box<dyn FnMut(_)>);
    dom::add_passive_listener(&parts.hero, "touchmove", touch.as_ref().unchecked_ref());
    touch.forget();
}

fn wire_leave_handlers(parts: &HeroParts) {
    for kind in ["mouseleave", "touchend"] {
        let leave_parts = parts.clone();
        let closure = Closure::wrap(Box::new(move || {
            reset_hero(&leave_parts);
        }) as Box<dyn FnMut()>);
        dom::add_passive_listener(&parts.hero, kind, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

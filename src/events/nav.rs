use crate::constants::{
    ARIA_EXPANDED_ATTR, NAV_LINK_SELECTOR, NAV_OPEN_CLASS, NAV_PANEL_ID, NAV_TOGGLE_ACTIVE_CLASS,
    NAV_TOGGLE_ID,
};
use crate::core::NavState;
use crate::dom;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

/// Collapsible navigation menu: a toggle control plus a panel of links.
///
/// The open/closed state lives in a [`NavState`] owned here; classes and
/// `aria-expanded` on the page are rewritten from it after every transition.
pub struct NavMenu {
    state: Rc<Cell<NavState>>,
}

impl NavMenu {
    /// Resolve the toggle and panel and wire the click handlers. Pages
    /// without a navigation menu get no listeners and no instance.
    pub fn mount(document: &web::Document) -> Option<NavMenu> {
        let Some(toggle) = dom::html_element_by_id(document, NAV_TOGGLE_ID) else {
            log::info!("[nav] #{} missing; menu left static", NAV_TOGGLE_ID);
            return None;
        };
        let Some(panel) = dom::html_element_by_id(document, NAV_PANEL_ID) else {
            log::info!("[nav] #{} missing; menu left static", NAV_PANEL_ID);
            return None;
        };

        let state = Rc::new(Cell::new(NavState::Closed));
        wire_toggle(&toggle, &panel, &state);
        let links = wire_links(&toggle, &panel, &state);
        log::info!("[nav] menu wired ({} links)", links);
        Some(NavMenu { state })
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.state.get().is_open()
    }
}

/// Rewrite the panel class, toggle class, and `aria-expanded` from `state`.
fn project(toggle: &web::HtmlElement, panel: &web::HtmlElement, state: NavState) {
    let open = state.is_open();
    _ = panel.class_list().toggle_with_force(NAV_OPEN_CLASS, open);
    _ = toggle
        .class_list()
        .toggle_with_force(NAV_TOGGLE_ACTIVE_CLASS, open);
    _ = toggle.set_attribute(ARIA_EXPANDED_ATTR, state.aria_expanded());
}

fn wire_toggle(toggle: &web::HtmlElement, panel: &web::HtmlElement, state: &Rc<Cell<NavState>>) {
    let state = state.clone();
    let toggle_ref = toggle.clone();
    let panel_ref = panel.clone();
    dom::on_click(toggle, move || {
        let next = state.get().toggled();
        state.set(next);
        project(&toggle_ref, &panel_ref, next);
        log::info!(
            "[nav] panel {}",
            if next.is_open() { "opened" } else { "closed" }
        );
    });
}

fn wire_links(
    toggle: &web::HtmlElement,
    panel: &web::HtmlElement,
    state: &Rc<Cell<NavState>>,
) -> u32 {
    let links = match panel.query_selector_all(NAV_LINK_SELECTOR) {
        Ok(list) => list,
        Err(_) => return 0,
    };
    for i in 0..links.length() {
        let Some(link) = links.get(i) else { continue };
        let state = state.clone();
        let toggle_ref = toggle.clone();
        let panel_ref = panel.clone();
        dom::on_click(&link, move || {
            if !state.get().is_open() {
                return;
            }
            let next = state.get().dismissed();
            state.set(next);
            project(&toggle_ref, &panel_ref, next);
            log::info!("[nav] panel closed via link");
        });
    }
    links.length()
}

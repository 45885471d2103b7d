//! Navigation drawer wiring.
//!
//! The pure [`MenuState`] is mirrored onto the `active` classes of the
//! trigger and panel plus the body scroll lock, so the state and the DOM
//! cannot drift apart.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Window};

use super::dom;
use crate::device::{PageKind, MOBILE_BREAKPOINT};
use crate::menu::MenuState;

/// Delay before closing after an orientation change settles.
const ORIENTATION_CLOSE_DELAY_MS: i32 = 100;

struct DrawerHooks {
    toggle: &'static str,
    panel: &'static str,
    links: &'static str,
    /// Mobile only closes for in-page `#` links.
    in_page_links_only: bool,
}

fn hooks_for(kind: PageKind) -> DrawerHooks {
    match kind {
        PageKind::Desktop => DrawerHooks {
            toggle: ".mobile-menu-btn",
            panel: ".nav-links",
            links: ".nav-links a",
            in_page_links_only: false,
        },
        PageKind::Mobile => DrawerHooks {
            toggle: ".mobile-menu-toggle",
            panel: ".mobile-nav-menu",
            links: ".nav-link",
            in_page_links_only: true,
        },
    }
}

pub fn install(window: &Window, document: &Document, kind: PageKind) -> Result<(), JsValue> {
    let hooks = hooks_for(kind);
    let (Some(toggle), Some(panel)) = (
        dom::select(document, hooks.toggle),
        dom::select(document, hooks.panel),
    ) else {
        log::debug!("menu: drawer hooks missing, skipping");
        return Ok(());
    };

    let state = Rc::new(Cell::new(MenuState::Closed));

    let apply = {
        let toggle = toggle.clone();
        let panel = panel.clone();
        let doc = document.clone();
        move |next: MenuState| {
            if next.is_open() {
                toggle.class_list().add_1("active").ok();
                panel.class_list().add_1("active").ok();
            } else {
                toggle.class_list().remove_1("active").ok();
                panel.class_list().remove_1("active").ok();
            }
            if let Some(body) = doc.body() {
                if next.scroll_locked() {
                    body.style().set_property("overflow", "hidden").ok();
                } else {
                    body.style().remove_property("overflow").ok();
                }
            }
        }
    };

    let close: Rc<dyn Fn()> = {
        let state = state.clone();
        let apply = apply.clone();
        Rc::new(move || {
            state.set(MenuState::Closed);
            apply(MenuState::Closed);
        })
    };

    {
        let state = state.clone();
        let apply = apply.clone();
        dom::listen(&toggle, "click", move |event| {
            event.prevent_default();
            let next = state.get().toggled();
            state.set(next);
            apply(next);
        })?;
    }

    for link in dom::selected(document, hooks.links) {
        let close = close.clone();
        let anchor = link.clone();
        let in_page_only = hooks.in_page_links_only;
        dom::listen(&link, "click", move |_| {
            let in_page = anchor
                .get_attribute("href")
                .is_some_and(|href| href.starts_with('#'));
            if !in_page_only || in_page {
                close();
            }
        })?;
    }

    // Click on the panel backdrop, not its content.
    {
        let close = close.clone();
        let panel_el = panel.clone();
        dom::listen(&panel, "click", move |event| {
            let on_backdrop = event
                .target()
                .is_some_and(|target| js_sys::Object::is(target.as_ref(), panel_el.as_ref()));
            if on_backdrop {
                close();
            }
        })?;
    }

    {
        let close = close.clone();
        let state = state.clone();
        dom::listen(document, "keydown", move |event| {
            let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if key_event.key() == "Escape" && state.get().is_open() {
                close();
            }
        })?;
    }

    match kind {
        PageKind::Desktop => {
            let close = close.clone();
            let win = window.clone();
            dom::listen(window, "resize", move |_| {
                let width = win
                    .inner_width()
                    .ok()
                    .and_then(|value| value.as_f64())
                    .unwrap_or(0.0);
                if width > MOBILE_BREAKPOINT {
                    close();
                }
            })?;
        }
        PageKind::Mobile => {
            let win = window.clone();
            dom::listen(window, "orientationchange", move |_| {
                let close = close.clone();
                dom::set_timeout(&win, ORIENTATION_CLOSE_DELAY_MS, move || close()).ok();
            })?;
        }
    }
    Ok(())
}

//! Touch ergonomics for the mobile page: no double-tap zoom, no accidental
//! text selection, and visual feedback on tappable controls.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, Window};

use super::dom;

const DOUBLE_TAP_WINDOW_MS: f64 = 300.0;
const FEEDBACK_RESTORE_MS: i32 = 150;

const FEEDBACK_SELECTOR: &str =
    ".nav-link, .footer-link, .mobile-menu-toggle, .mobile-link-button";

pub fn install(window: &Window, document: &Document) -> Result<(), JsValue> {
    suppress_double_tap(document)?;
    suppress_text_selection(document)?;
    touch_feedback(window, document)
}

fn suppress_double_tap(document: &Document) -> Result<(), JsValue> {
    let last_touch_end = Rc::new(Cell::new(0.0f64));
    dom::listen(document, "touchend", move |event| {
        let now = js_sys::Date::now();
        if now - last_touch_end.get() <= DOUBLE_TAP_WINDOW_MS {
            event.prevent_default();
        }
        last_touch_end.set(now);
    })
}

/// Long-press selection is suppressed everywhere except editable regions.
fn suppress_text_selection(document: &Document) -> Result<(), JsValue> {
    dom::listen(document, "selectstart", move |event| {
        let editable = event
            .target()
            .and_then(|target| target.dyn_into::<Element>().ok())
            .and_then(|el| el.closest("input, textarea, [contenteditable]").ok())
            .flatten()
            .is_some();
        if !editable {
            event.prevent_default();
        }
    })
}

fn touch_feedback(window: &Window, document: &Document) -> Result<(), JsValue> {
    for element in dom::selected(document, FEEDBACK_SELECTOR) {
        let Ok(control) = element.dyn_into::<HtmlElement>() else {
            continue;
        };

        {
            let control = control.clone();
            dom::listen(&control.clone(), "touchstart", move |_| {
                control.style().set_property("opacity", "0.7").ok();
            })?;
        }
        {
            let win = window.clone();
            let control_end = control.clone();
            dom::listen(&control.clone(), "touchend", move |_| {
                let control = control_end.clone();
                dom::set_timeout(&win, FEEDBACK_RESTORE_MS, move || {
                    control.style().remove_property("opacity").ok();
                })
                .ok();
            })?;
        }
        {
            let control_cancel = control.clone();
            dom::listen(&control, "touchcancel", move |_| {
                control_cancel.style().remove_property("opacity").ok();
            })?;
        }
    }
    Ok(())
}

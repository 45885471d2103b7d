//! Scroll-driven behaviour: smooth in-page anchors, the progress bar, the
//! auto-hiding navbar, and keyboard navigation shortcuts.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
    ScrollToOptions, Window,
};

use super::dom;
use crate::device::PageKind;

/// Fixed mobile header height compensated when scrolling to anchors.
const MOBILE_HEADER_PX: f64 = 60.0;

/// Navbar reappears after this much scroll quiet time.
const NAVBAR_IDLE_MS: i32 = 1000;

pub fn smooth_anchors(window: &Window, document: &Document, kind: PageKind) -> Result<(), JsValue> {
    for anchor in dom::selected(document, r##"a[href^="#"]"##) {
        let win = window.clone();
        let doc = document.clone();
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Ok(Some(target)) = doc.query_selector(&href) else {
                return;
            };
            match kind {
                PageKind::Desktop => {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
                PageKind::Mobile => {
                    let top = target
                        .dyn_ref::<HtmlElement>()
                        .map(|el| el.offset_top() as f64 - MOBILE_HEADER_PX)
                        .unwrap_or(0.0);
                    let options = ScrollToOptions::new();
                    options.set_top(top);
                    options.set_behavior(ScrollBehavior::Smooth);
                    win.scroll_to_with_scroll_to_options(&options);
                }
            }
        })?;
    }
    Ok(())
}

pub fn progress_bar(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(element) = document.get_element_by_id("scrollProgress") else {
        return Ok(());
    };
    let bar: HtmlElement = element.dyn_into()?;

    let win = window.clone();
    let doc = document.clone();
    dom::listen(window, "scroll", move |_| {
        let scroll_top = win.page_y_offset().unwrap_or(0.0);
        let viewport = win
            .inner_height()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0);
        let doc_height = doc
            .document_element()
            .map(|root| root.scroll_height() as f64)
            .unwrap_or(0.0)
            - viewport;
        if doc_height <= 0.0 {
            return;
        }
        let percent = (scroll_top / doc_height * 100.0).clamp(0.0, 100.0);
        bar.style().set_property("width", &format!("{percent}%")).ok();
    })
}

/// `.nav` picks up `scrolled` past 100 px and hides itself while scrolling
/// down, reappearing on scroll-up, idle, or hover.
pub fn navbar_autohide(window: &Window, document: &Document) -> Result<(), JsValue> {
    let Some(nav) = dom::select(document, ".nav") else {
        return Ok(());
    };

    let last_top: Rc<Cell<f64>> = Rc::new(Cell::new(0.0));
    let idle_timer: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    {
        let nav = nav.clone();
        let win = window.clone();
        dom::listen(window, "scroll", move |_| {
            let scroll_top = win.page_y_offset().unwrap_or(0.0);

            if scroll_top > 100.0 {
                nav.class_list().add_1("scrolled").ok();
            } else {
                nav.class_list().remove_1("scrolled").ok();
            }

            if scroll_top > last_top.get() && scroll_top > 200.0 {
                nav.class_list().add_1("hidden").ok();
            } else {
                nav.class_list().remove_1("hidden").ok();
            }
            last_top.set(scroll_top);

            if let Some(handle) = idle_timer.take() {
                win.clear_timeout_with_handle(handle);
            }
            let nav_idle = nav.clone();
            if let Ok(handle) = dom::set_timeout(&win, NAVBAR_IDLE_MS, move || {
                nav_idle.class_list().remove_1("hidden").ok();
            }) {
                idle_timer.set(Some(handle));
            }
        })?;
    }

    {
        let nav_hover = nav.clone();
        dom::listen(&nav, "mouseenter", move |_| {
            nav_hover.class_list().remove_1("hidden").ok();
        })?;
    }
    Ok(())
}

/// Ctrl/Cmd+1..5 jump between sections; Escape returns to the top.
pub fn shortcuts(window: &Window, document: &Document) -> Result<(), JsValue> {
    const SECTIONS: [&str; 6] = ["#home", "#topic", "#teams", "#rules", "#survey", "#results"];

    let win = window.clone();
    let doc = document.clone();
    dom::listen(document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        let key = key_event.key();

        if (key_event.ctrl_key() || key_event.meta_key())
            && matches!(key.as_str(), "1" | "2" | "3" | "4" | "5")
        {
            key_event.prevent_default();
            let index = key.parse::<usize>().unwrap_or(1) - 1;
            if let Some(selector) = SECTIONS.get(index) {
                if let Ok(Some(target)) = doc.query_selector(selector) {
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                }
            }
        }

        if key == "Escape" {
            let options = ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(ScrollBehavior::Smooth);
            win.scroll_to_with_scroll_to_options(&options);
        }
    })
}
